use serde::{Deserialize, Serialize};

use crate::error::SetupError;

pub const DRAG_SENSITIVITY_DEFAULT: f64 = 1.6;
pub const SWIPE_THRESHOLD_DEFAULT: f64 = 120.0;
pub const SETTLE_DELAY_MS_DEFAULT: u32 = 1000;
pub const INITIAL_INDEX_DEFAULT: usize = 2;
pub const ACTIVE_CLASS_DEFAULT: &str = "active";
pub const TRANSITION_DEFAULT: &str = "transform 0.3s";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Multiplier from raw pointer travel to movement.
    pub sensitivity: f64,
    /// Movement needed before a release changes slide.
    pub swipe_threshold: f64,
    pub settle_delay_ms: u32,
    pub initial_index: usize,
    pub active_class: String,
    pub transition: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            sensitivity: DRAG_SENSITIVITY_DEFAULT,
            swipe_threshold: SWIPE_THRESHOLD_DEFAULT,
            settle_delay_ms: SETTLE_DELAY_MS_DEFAULT,
            initial_index: INITIAL_INDEX_DEFAULT,
            active_class: ACTIVE_CLASS_DEFAULT.to_string(),
            transition: TRANSITION_DEFAULT.to_string(),
        }
    }
}

impl CarouselConfig {
    pub fn validate(&self) -> Result<(), SetupError> {
        if !self.sensitivity.is_finite() || self.sensitivity <= 0.0 {
            return Err(SetupError::InvalidSensitivity(self.sensitivity));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(SetupError::InvalidThreshold(self.swipe_threshold));
        }
        if self.active_class.trim().is_empty() {
            return Err(SetupError::EmptyActiveClass);
        }
        Ok(())
    }
}
