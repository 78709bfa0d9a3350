//! `[classifier]` section configuration.
//!
//! Tuning of the background classifier. Every field defaults to the built-in
//! constant, so an absent section behaves exactly like no config at all.
//!
//! # Example
//!
//! ```toml
//! [classifier]
//! sample_window = 20   # Side of the top-left exemplar square, in pixels
//! radius_scale = 0.95  # Icon radius = radius_scale * min(cx, cy)
//! gate_scale = 0.7     # Pixels within gate_scale * radius are never touched
//! threshold = 30       # Per-channel RGB distance must be below this
//! ```

use serde::Deserialize;

use crate::config::ConfigError;
use crate::image::background::{
    BackgroundParams, DEFAULT_GATE_SCALE, DEFAULT_RADIUS_SCALE, DEFAULT_SAMPLE_WINDOW,
    DEFAULT_THRESHOLD,
};

/// Background classifier settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Side of the top-left square whose colors become background exemplars.
    pub sample_window: u32,

    /// Icon radius as a fraction of the shorter half-axis.
    pub radius_scale: f64,

    /// Protected zone around the center, as a fraction of the icon radius.
    pub gate_scale: f64,

    /// Exclusive upper bound on the per-channel RGB distance for a match.
    pub threshold: u8,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sample_window: DEFAULT_SAMPLE_WINDOW,
            radius_scale: DEFAULT_RADIUS_SCALE,
            gate_scale: DEFAULT_GATE_SCALE,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ClassifierConfig {
    /// Classifier parameters for this configuration.
    pub fn params(&self) -> BackgroundParams {
        BackgroundParams {
            sample_window: self.sample_window,
            radius_scale: self.radius_scale,
            gate_scale: self.gate_scale,
            threshold: self.threshold,
        }
    }

    /// Reject scales that cannot describe a distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        for (field, value) in [
            ("radius_scale", self.radius_scale),
            ("gate_scale", self.gate_scale),
        ] {
            if !value.is_finite() || value < 0.0 {
                problems.push(format!(
                    "classifier.{field} must be a finite, non-negative number (got {value})"
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClassifierConfig;
    use crate::config::test_parse_config;
    use crate::image::background::BackgroundParams;

    #[test]
    fn test_classifier_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.classifier, ClassifierConfig::default());
        assert_eq!(config.classifier.params(), BackgroundParams::default());
        assert_eq!(config.classifier.sample_window, 20);
        assert_eq!(config.classifier.threshold, 30);
    }

    #[test]
    fn test_classifier_partial_override() {
        let config = test_parse_config("[classifier]\nthreshold = 12\ngate_scale = 0.5");
        let params = config.classifier.params();

        assert_eq!(params.threshold, 12);
        assert_eq!(params.gate_scale, 0.5);
        assert_eq!(params.sample_window, 20);
        assert_eq!(params.radius_scale, 0.95);
    }

    #[test]
    fn test_classifier_threshold_out_of_range() {
        let result: Result<ClassifierConfig, _> = toml::from_str("threshold = 300");
        assert!(result.is_err());
    }

    #[test]
    fn test_classifier_validate() {
        assert!(ClassifierConfig::default().validate().is_ok());

        let config = ClassifierConfig {
            radius_scale: -1.0,
            gate_scale: f64::NAN,
            ..ClassifierConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("classifier.radius_scale"));
        assert!(err.contains("classifier.gate_scale"));
    }
}
