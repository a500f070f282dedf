//! Config loading, validation, and the production profile.

use super::model::ValidationConfig;
use crate::error::{Result, VettedError};
use std::path::Path;

impl ValidationConfig {
    /// The default configuration with production mode switched on.
    pub fn production() -> Self {
        Self::default().into_production()
    }

    /// Switch this configuration to the production profile.
    ///
    /// Production mode is the same pipeline with stricter gating: the
    /// security, cost, and placeholder checks become mandatory and cost
    /// findings escalate to warnings. Every other setting is kept.
    pub fn into_production(mut self) -> Self {
        self.production_mode = true;
        self
    }

    /// Whether the placeholder check runs.
    pub fn placeholders_enabled(&self) -> bool {
        self.check_for_placeholders || self.production_mode
    }

    /// Whether the credential scan runs.
    pub fn security_enabled(&self) -> bool {
        self.scan_for_credentials || self.production_mode
    }

    /// Whether the cost-awareness check runs.
    pub fn cost_enabled(&self) -> bool {
        self.check_cost_awareness || self.production_mode
    }

    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(ValidationConfig)` - Successfully loaded and validated config
    /// * `Err(VettedError::Config)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            VettedError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ValidationConfig = serde_yaml::from_str(yaml)
            .map_err(|e| VettedError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| VettedError::Config(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `pass_threshold` must be a finite number in `[0, 100]`
    /// - penalties must be finite and non-negative
    /// - `critical_penalty` must be at least `warning_penalty`
    /// - `vague_density_threshold` must be finite and positive
    /// - `min_depth_indicators` must be positive
    ///
    /// User regexes are checked when the engine compiles them.
    pub fn validate(&self) -> Result<()> {
        if !self.pass_threshold.is_finite() || !(0.0..=100.0).contains(&self.pass_threshold) {
            return Err(VettedError::Config(format!(
                "config validation failed: pass_threshold must be between 0 and 100 (found {})",
                self.pass_threshold
            )));
        }

        for (name, value) in [
            ("critical_penalty", self.critical_penalty),
            ("warning_penalty", self.warning_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(VettedError::Config(format!(
                    "config validation failed: {} must be a non-negative number (found {})",
                    name, value
                )));
            }
        }

        if self.critical_penalty < self.warning_penalty {
            return Err(VettedError::Config(format!(
                "config validation failed: critical_penalty ({}) must not be lower than warning_penalty ({})",
                self.critical_penalty, self.warning_penalty
            )));
        }

        if !self.vague_density_threshold.is_finite() || self.vague_density_threshold <= 0.0 {
            return Err(VettedError::Config(format!(
                "config validation failed: vague_density_threshold must be greater than 0 (found {})",
                self.vague_density_threshold
            )));
        }

        if self.min_depth_indicators == 0 {
            return Err(VettedError::Config(
                "config validation failed: min_depth_indicators must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
