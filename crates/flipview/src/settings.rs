//! Flip view configuration.

use flipview_animation::Easing;
use flipview_core::FlipError;
use flipview_foundation::gesture_constants::{
    MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, PAGING_TOUCH_SLOP,
};
use flipview_foundation::DEFAULT_PAGE_UNIT;
use serde::{Deserialize, Serialize};

/// Base flip duration for one page, in milliseconds.
pub const FLIP_BASE_DURATION_MS: u64 = 300;

/// Peak alpha of the shade and shine drawn over the rotating half.
pub const FLIP_SHADE_MAX_ALPHA: u8 = 130;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipSettings {
    /// Page a row starts on, and the page "close" returns to.
    pub default_page: usize,
    pub page_unit: f32,
    pub flip_base_duration_ms: u64,
    pub shade_max_alpha: u8,
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
    /// Page of a row that shows both items side by side.
    pub merge_page: usize,
    pub flip_easing: Easing,
}

impl Default for FlipSettings {
    fn default() -> Self {
        Self {
            default_page: 1,
            page_unit: DEFAULT_PAGE_UNIT,
            flip_base_duration_ms: FLIP_BASE_DURATION_MS,
            shade_max_alpha: FLIP_SHADE_MAX_ALPHA,
            touch_slop: PAGING_TOUCH_SLOP,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
            merge_page: 1,
            flip_easing: Easing::LinearEasing,
        }
    }
}

impl FlipSettings {
    pub fn builder() -> FlipSettingsBuilder {
        FlipSettingsBuilder::default()
    }

    /// Checks values that would make the position model or fling
    /// resolution meaningless.
    pub fn validate(&self) -> Result<(), FlipError> {
        if !(self.page_unit.is_finite() && self.page_unit > 0.0) {
            return Err(FlipError::InvalidPageUnit(self.page_unit));
        }
        if !(self.touch_slop.is_finite() && self.touch_slop >= 0.0) {
            return Err(FlipError::InvalidTouchSlop(self.touch_slop));
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && max >= min) {
            return Err(FlipError::InvalidFlingVelocity { min, max });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct FlipSettingsBuilder {
    settings: FlipSettings,
}

impl FlipSettingsBuilder {
    pub fn default_page(mut self, page: usize) -> Self {
        self.settings.default_page = page;
        self
    }

    pub fn page_unit(mut self, page_unit: f32) -> Self {
        self.settings.page_unit = page_unit;
        self
    }

    pub fn flip_base_duration_ms(mut self, millis: u64) -> Self {
        self.settings.flip_base_duration_ms = millis;
        self
    }

    pub fn shade_max_alpha(mut self, alpha: u8) -> Self {
        self.settings.shade_max_alpha = alpha;
        self
    }

    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.settings.touch_slop = slop;
        self
    }

    pub fn fling_velocity(mut self, min: f32, max: f32) -> Self {
        self.settings.min_fling_velocity = min;
        self.settings.max_fling_velocity = max;
        self
    }

    pub fn merge_page(mut self, page: usize) -> Self {
        self.settings.merge_page = page;
        self
    }

    pub fn flip_easing(mut self, easing: Easing) -> Self {
        self.settings.flip_easing = easing;
        self
    }

    pub fn build(self) -> Result<FlipSettings, FlipError> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}
