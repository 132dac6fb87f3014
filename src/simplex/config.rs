//! Configuration options for the downhill-simplex minimizer.
//!
//! This module defines the step budget, shape-transformation factors,
//! progress cadence and size tolerance used by
//! [`SimplexMinimizer`](super::SimplexMinimizer), together with JSON
//! persistence so a fitting pipeline can keep its minimizer settings in a file.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SimplexError};

/// Configuration options for the downhill-simplex minimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplexConfig {
    /// Maximum number of simplex steps. Default: 1000
    pub max_steps: usize,

    /// Factor used when the reflected point is the new best. Must be > 1. Default: 1.2
    pub expansion_factor: f64,

    /// Factor used for both contractions. Must lie in (0, 1). Default: 0.8
    pub contraction_factor: f64,

    /// Number of steps between progress notifications, 0 disables them. Default: 0
    pub progress_frequency: usize,

    /// Relative tolerance handed to the vertex size-convergence test. Default: 1e-8
    pub size_tolerance: f64,
}

impl Default for SimplexConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            expansion_factor: 1.2,
            contraction_factor: 0.8,
            progress_frequency: 0,
            size_tolerance: 1e-8,
        }
    }
}

impl SimplexConfig {
    /// Check that the factors and tolerance describe a usable minimizer.
    ///
    /// The minimizer itself runs with whatever it is given; this is meant for
    /// configurations that come from outside the program.
    pub fn validate(&self) -> Result<()> {
        if !self.expansion_factor.is_finite() || self.expansion_factor <= 1.0 {
            return Err(SimplexError::InvalidParameter(format!(
                "expansion_factor must be finite and greater than 1, got {}",
                self.expansion_factor
            )));
        }

        if !(self.contraction_factor > 0.0 && self.contraction_factor < 1.0) {
            return Err(SimplexError::InvalidParameter(format!(
                "contraction_factor must lie strictly between 0 and 1, got {}",
                self.contraction_factor
            )));
        }

        if !self.size_tolerance.is_finite() || self.size_tolerance < 0.0 {
            return Err(SimplexError::InvalidParameter(format!(
                "size_tolerance must be finite and non-negative, got {}",
                self.size_tolerance
            )));
        }

        Ok(())
    }

    /// Serialize the configuration to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Parse and validate a configuration from a JSON string.
    ///
    /// Fields missing from the document keep their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimplexConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }
}
