use std::collections::HashMap;

use parking_lot::Mutex;

use crate::{AudioService, StreamType, VolumeDirection, VolumeFlags};

/// Step-based volume table for hosts without a system mixer.
///
/// Each stream holds an index in `0..=max_steps`; adjustments clamp at both ends.
pub struct SoftwareVolume {
    max_steps: u32,
    steps: Mutex<HashMap<StreamType, u32>>,
}

impl SoftwareVolume {
    pub fn new(max_steps: u32, initial_step: u32) -> Self {
        let max_steps = max_steps.max(1);
        let initial = initial_step.min(max_steps);
        let steps = StreamType::ALL.iter().map(|s| (*s, initial)).collect();

        Self {
            max_steps,
            steps: Mutex::new(steps),
        }
    }

    #[inline]
    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }

    pub fn step(&self, stream: StreamType) -> u32 {
        self.steps.lock().get(&stream).copied().unwrap_or(0)
    }

}

impl AudioService for SoftwareVolume {
    fn adjust_stream_volume(&self, stream: StreamType, direction: VolumeDirection, flags: VolumeFlags) {
        let mut steps = self.steps.lock();
        let cur = steps.entry(stream).or_insert(0);

        let next = match direction {
            VolumeDirection::Raise => cur.saturating_add(1).min(self.max_steps),
            VolumeDirection::Lower => cur.saturating_sub(1),
        };
        *cur = next;

        if flags.contains(VolumeFlags::SHOW_UI) {
            log::info!("volume {}: {}/{}", stream.as_str(), next, self.max_steps);
        } else {
            log::debug!("volume {}: {}/{}", stream.as_str(), next, self.max_steps);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_and_lower_move_one_step() {
        let vol = SoftwareVolume::new(15, 8);
        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Raise, VolumeFlags::SHOW_UI);
        assert_eq!(vol.step(StreamType::Music), 9);

        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Lower, VolumeFlags::NONE);
        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Lower, VolumeFlags::NONE);
        assert_eq!(vol.step(StreamType::Music), 7);

        // other streams untouched
        assert_eq!(vol.step(StreamType::Ring), 8);
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let vol = SoftwareVolume::new(2, 1);
        for _ in 0..5 {
            vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Raise, VolumeFlags::NONE);
        }
        assert_eq!(vol.step(StreamType::Music), 2);

        for _ in 0..5 {
            vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Lower, VolumeFlags::NONE);
        }
        assert_eq!(vol.step(StreamType::Music), 0);
    }

    #[test]
    fn initial_step_is_clamped_to_max() {
        let vol = SoftwareVolume::new(4, 10);
        assert_eq!(vol.step(StreamType::Alarm), 4);
        assert_eq!(SoftwareVolume::new(0, 0).max_steps(), 1);
    }

    #[test]
    fn raise_at_widest_range_stays_at_top() {
        let vol = SoftwareVolume::new(u32::MAX, u32::MAX);
        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Raise, VolumeFlags::SHOW_UI);
        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Raise, VolumeFlags::NONE);
        assert_eq!(vol.step(StreamType::Music), u32::MAX);

        vol.adjust_stream_volume(StreamType::Music, VolumeDirection::Lower, VolumeFlags::NONE);
        assert_eq!(vol.step(StreamType::Music), u32::MAX - 1);
    }
}
