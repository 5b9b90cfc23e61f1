//! Precision configuration for approximate comparison and rounding
//!
//! Node results are plain `f64`s, so comparing an eagerly evaluated angle
//! against a reference value needs a tolerance. The profiles below bundle the
//! rounding precision and absolute tolerance used by the `approximates` and
//! `round_to` helpers.

use crate::animation::ops;
use crate::constants::{DEFAULT_DECIMALS, MAX_DECIMALS};
use crate::{AnimationError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum PrecisionProfile {
    /// Whole pixels, suitable for layout output
    Display,
    /// Four decimals, the precision angles are compared at
    Standard,
    /// Bit-exact comparison
    Exact,
    Custom(EvaluationConfig),
}

impl PrecisionProfile {
    pub fn resolve(&self) -> EvaluationConfig {
        match self {
            Self::Display => EvaluationConfig {
                decimals: 0,
                epsilon: 0.5,
            },
            Self::Standard => EvaluationConfig {
                decimals: DEFAULT_DECIMALS,
                epsilon: 1e-4,
            },
            Self::Exact => EvaluationConfig {
                decimals: MAX_DECIMALS,
                epsilon: 0.0,
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for PrecisionProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Decimal places kept by `round_to`
    pub decimals: u32,
    /// Absolute tolerance used by `approximates`
    pub epsilon: f64,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        PrecisionProfile::Standard.resolve()
    }
}

impl EvaluationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.decimals > MAX_DECIMALS {
            return Err(AnimationError::InvalidPrecision(self.decimals));
        }
        if self.epsilon.is_nan() || self.epsilon < 0.0 || self.epsilon.is_infinite() {
            return Err(AnimationError::InvalidTolerance(self.epsilon));
        }
        Ok(())
    }

    /// Parses and validates a config; missing fields fall back to `Standard`
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EvaluationConfig = serde_json::from_str(json)?;
        config.validate()?;

        #[cfg(feature = "debug")]
        log::debug!(
            "loaded evaluation config: {} decimals, epsilon {}",
            config.decimals,
            config.epsilon
        );

        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rounds `value` to the configured number of decimals, half toward
    /// positive infinity like the `round` node
    pub fn round(&self, value: f64) -> f64 {
        let factor = 10_f64.powi(self.decimals as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        ops::round(scaled).value() / factor
    }

    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        a == b || (a - b).abs() <= self.epsilon
    }
}
