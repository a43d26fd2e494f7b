//! Default Configuration
//!
//! Interpolation markers recognised inside text nodes.

/// Interpolation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpolationConfig {
    pub start: String,
    pub end: String,
}

impl InterpolationConfig {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        InterpolationConfig {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both markers are non-empty. Text is never split on unusable markers.
    pub fn is_usable(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }
}

impl Default for InterpolationConfig {
    fn default() -> Self {
        default_interpolation_config()
    }
}

/// Default interpolation config {{ }}
pub fn default_interpolation_config() -> InterpolationConfig {
    InterpolationConfig::new("{{", "}}")
}
