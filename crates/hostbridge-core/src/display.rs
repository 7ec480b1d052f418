//! Screen-size classification.
//!
//! The host reports the default display in physical pixels together with its
//! density scale; the classifier normalizes the width to device-independent
//! units and buckets it. The result is computed once at startup and held by
//! the bridge until the native layer is ready to receive it.

/// Device-independent width from which a display counts as large (10" tablet class).
pub const LARGE_SCREEN_MIN_DP: f64 = 960.0;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayClass {
    Small,
    Large,
}

impl DisplayClass {
    #[inline]
    pub fn is_large(self) -> bool {
        self == DisplayClass::Large
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayClass::Small => "small",
            DisplayClass::Large => "large",
        }
    }
}

/// Raw default-display metrics as delivered by the platform.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
    /// Pixels per device-independent unit (1.0 = baseline density).
    pub density: f64,
}

impl DisplayMetrics {
    #[inline]
    pub fn new(width_px: u32, height_px: u32, density: f64) -> Self {
        Self {
            width_px,
            height_px,
            density,
        }
    }

    /// Density used for normalization. Non-positive or non-finite values count as 1.0.
    #[inline]
    pub fn effective_density(&self) -> f64 {
        if self.density.is_finite() && self.density > 0.0 {
            self.density
        } else {
            1.0
        }
    }

    #[inline]
    pub fn width_dp(&self) -> f64 {
        f64::from(self.width_px) / self.effective_density()
    }

    #[inline]
    pub fn height_dp(&self) -> f64 {
        f64::from(self.height_px) / self.effective_density()
    }
}

/// Classifies a device-independent width against the default threshold.
#[inline]
pub fn classify_width(width_dp: f64) -> DisplayClass {
    DisplayClassifier::default().classify_width(width_dp)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DisplayClassifier {
    large_min_dp: f64,
}

impl Default for DisplayClassifier {
    fn default() -> Self {
        Self {
            large_min_dp: LARGE_SCREEN_MIN_DP,
        }
    }
}

impl DisplayClassifier {
    #[inline]
    pub fn new(large_min_dp: f64) -> Self {
        Self { large_min_dp }
    }

    #[inline]
    pub fn threshold_dp(&self) -> f64 {
        self.large_min_dp
    }

    /// Threshold is inclusive on the high side.
    #[inline]
    pub fn classify_width(&self, width_dp: f64) -> DisplayClass {
        if width_dp >= self.large_min_dp {
            DisplayClass::Large
        } else {
            DisplayClass::Small
        }
    }

    #[inline]
    pub fn classify(&self, metrics: &DisplayMetrics) -> DisplayClass {
        self.classify_width(metrics.width_dp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(classify_width(960.0), DisplayClass::Large);
        assert_eq!(classify_width(959.999), DisplayClass::Small);
        assert_eq!(classify_width(0.0), DisplayClass::Small);
        assert_eq!(classify_width(2560.0), DisplayClass::Large);
    }

    #[test]
    fn phone_and_tablet_metrics() {
        let c = DisplayClassifier::default();

        let tablet = DisplayMetrics::new(1920, 1200, 2.0);
        assert_eq!(tablet.width_dp(), 960.0);
        assert_eq!(c.classify(&tablet), DisplayClass::Large);

        let phone = DisplayMetrics::new(1280, 720, 2.0);
        assert_eq!(phone.width_dp(), 640.0);
        assert_eq!(c.classify(&phone), DisplayClass::Small);
    }

    #[test]
    fn classification_is_pure() {
        let c = DisplayClassifier::default();
        let m = DisplayMetrics::new(2048, 1536, 2.0);
        assert_eq!(c.classify(&m), c.classify(&m));

        let m = DisplayMetrics::new(1919, 1080, 2.0);
        assert_eq!(c.classify(&m), DisplayClass::Small);
        assert_eq!(c.classify(&m), DisplayClass::Small);
    }

    #[test]
    fn bad_density_counts_as_baseline() {
        assert_eq!(DisplayMetrics::new(1000, 600, 0.0).width_dp(), 1000.0);
        assert_eq!(DisplayMetrics::new(1000, 600, -2.0).width_dp(), 1000.0);
        assert_eq!(DisplayMetrics::new(1000, 600, f64::NAN).width_dp(), 1000.0);
        assert_eq!(DisplayMetrics::new(1000, 600, 4.0).height_dp(), 150.0);
    }

    #[test]
    fn custom_threshold() {
        let c = DisplayClassifier::new(600.0);
        assert_eq!(c.threshold_dp(), 600.0);
        assert!(c.classify(&DisplayMetrics::new(1280, 720, 2.0)).is_large());
    }
}
