use super::traits::ConfigSection;
use crate::error::GaError;
use serde::{Deserialize, Serialize};

/// Search interval and genotype width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub lower: f64,
    pub upper: f64,
    pub bits: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lower: -10.0,
            upper: 10.0,
            bits: 16,
        }
    }
}

impl SearchConfig {
    /// Largest integer a genotype of this width can hold (`2^bits - 1`).
    pub fn max_value(&self) -> u64 {
        if self.bits >= 64 {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Distance between two adjacent phenotypes.
    pub fn resolution(&self) -> f64 {
        (self.upper - self.lower) / self.max_value() as f64
    }
}

impl ConfigSection for SearchConfig {
    fn section_name() -> &'static str {
        "search"
    }

    fn validate(&self) -> Result<(), GaError> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(GaError::Configuration(
                "Search bounds must be finite".to_string()
            ));
        }
        if self.lower >= self.upper {
            return Err(GaError::Configuration(format!(
                "Lower bound ({}) must be less than upper bound ({})",
                self.lower, self.upper
            )));
        }
        if !(self.upper - self.lower).is_finite() {
            return Err(GaError::Configuration(format!(
                "Search interval [{}, {}] is too wide: its span overflows",
                self.lower, self.upper
            )));
        }
        if self.bits < 2 || self.bits > 64 {
            return Err(GaError::Configuration(
                "Bit width must be between 2 and 64".to_string()
            ));
        }
        Ok(())
    }
}
