//! Model parameters, loadable from TOML.
//!
//! Every field has a default, so a config file only needs to list what it
//! changes:
//!
//! ```toml
//! num_demolition = 30
//! recycling_tendency_percentage = 60.0
//!
//! [sim]
//! seed = 7
//! ```

use std::fs;
use std::path::Path;

use rh_core::SimConfig;
use rh_flow::LifespanPolicy;
use serde::{Deserialize, Serialize};

use crate::{SimError, SimResult};

/// Parameters of one model run.  Fixed for the lifetime of a [`Sim`][crate::Sim].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Number of demolition projects (sources).
    pub num_demolition:   usize,
    /// Number of construction projects (sinks).
    pub num_construction: usize,
    /// Number of recycling hubs; 0 disables hubs entirely.
    pub num_hubs:         usize,
    /// Capacity of every hub.
    pub hub_capacity:     f64,

    pub event_rate_demolition:   f64,
    pub event_rate_construction: f64,

    /// Chance in percent that a demolition project recycles.
    pub recycling_tendency_percentage: f64,

    /// Target amount of every project.
    pub total_amount: f64,
    /// Shift of every project's flow curve, in ticks.
    pub loc:          f64,

    pub width:  u32,
    pub height: u32,

    pub lifespan: LifespanPolicy,
    pub sim:      SimConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            num_demolition:                20,
            num_construction:              20,
            num_hubs:                      1,
            hub_capacity:                  1000.0,
            event_rate_demolition:         3.0,
            event_rate_construction:       5.0,
            recycling_tendency_percentage: 100.0,
            total_amount:                  100.0,
            loc:                           0.0,
            width:                         20,
            height:                        20,
            lifespan:                      LifespanPolicy::default(),
            sim:                           SimConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> SimResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// `recycling_tendency_percentage` as a probability.
    #[inline]
    pub fn recycling_probability(&self) -> f64 {
        self.recycling_tendency_percentage / 100.0
    }

    /// Reject parameter combinations the model cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::Config(format!(
                "grid must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=100.0).contains(&self.recycling_tendency_percentage) {
            return Err(SimError::Config(format!(
                "recycling_tendency_percentage must be in [0, 100], got {}",
                self.recycling_tendency_percentage
            )));
        }
        if !self.hub_capacity.is_finite() || self.hub_capacity < 0.0 {
            return Err(SimError::Config(format!(
                "hub_capacity must be finite and non-negative, got {}",
                self.hub_capacity
            )));
        }
        if !self.total_amount.is_finite() || self.total_amount < 0.0 {
            return Err(SimError::Config(format!(
                "total_amount must be finite and non-negative, got {}",
                self.total_amount
            )));
        }
        if !(0.0..1.0).contains(&self.lifespan.quantile) {
            return Err(SimError::Config(format!(
                "lifespan.quantile must be in [0, 1), got {}",
                self.lifespan.quantile
            )));
        }
        self.sim.validate()?;
        self.lifespan.lifespan(self.event_rate_demolition, self.loc)?;
        self.lifespan.lifespan(self.event_rate_construction, self.loc)?;
        Ok(())
    }
}
