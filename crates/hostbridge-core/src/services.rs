use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use hostbridge_audio_api::{AudioServiceRef, AUDIO_SERVICE};

/// Named registry of optional system services.
///
/// Notes:
/// - Values are stored as `Arc<dyn Any + Send + Sync>` keyed by service name.
/// - For trait objects (e.g. `AudioServiceRef`), store the `Arc<dyn ...>` itself:
///   `registry.insert::<AudioServiceRef>(AUDIO_SERVICE, Arc::new(audio_ref));`
/// - Lookups are cheap; callers resolve per use instead of caching, so a host can
///   register or withdraw a service at any time.
#[derive(Default)]
pub struct ServiceRegistry {
    map: HashMap<&'static str, Arc<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    #[inline]
    pub fn insert<T: Any + Send + Sync>(&mut self, name: &'static str, value: Arc<T>) {
        self.map.insert(name, value);
    }

    /// Returns `None` when `name` is absent or registered with another type.
    #[inline]
    pub fn get<T: Any + Send + Sync>(&self, name: &str) -> Option<Arc<T>> {
        self.map.get(name).and_then(|v| {
            let v = v.clone();
            v.downcast::<T>().ok()
        })
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.map.remove(name).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn insert_audio(&mut self, audio: AudioServiceRef) {
        self.insert::<AudioServiceRef>(AUDIO_SERVICE, Arc::new(audio));
    }

    #[inline]
    pub fn audio(&self) -> Option<AudioServiceRef> {
        self.get::<AudioServiceRef>(AUDIO_SERVICE).map(|a| Arc::clone(&*a))
    }
}
