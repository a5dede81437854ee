//! Per-tick material increments.

use crate::{FlowError, FlowResult, Poisson};

/// Material released (or demanded) exactly at tick `t`.
pub fn calculate_flow(total_amount: f64, t: u64, event_rate: f64, loc: f64) -> FlowResult<f64> {
    Ok(FlowProfile::new(total_amount, event_rate, loc)?.flow_at(t))
}

/// A validated flow curve for one project.
///
/// Built once at agent construction; `flow_at` is then evaluated every tick
/// with the agent's own running time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlowProfile {
    total_amount: f64,
    dist:         Poisson,
}

impl FlowProfile {
    pub fn new(total_amount: f64, event_rate: f64, loc: f64) -> FlowResult<Self> {
        if !total_amount.is_finite() || total_amount < 0.0 {
            return Err(FlowError::InvalidAmount(total_amount));
        }
        Ok(Self {
            total_amount,
            dist: Poisson::new(event_rate, loc)?,
        })
    }

    #[inline]
    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    #[inline]
    pub fn event_rate(&self) -> f64 {
        self.dist.mu()
    }

    #[inline]
    pub fn loc(&self) -> f64 {
        self.dist.loc()
    }

    /// Increment at running time `t`.
    #[inline]
    pub fn flow_at(&self, t: u64) -> f64 {
        self.dist.pmf(t as f64) * self.total_amount
    }

    /// Sum of all increments over `0..ticks`.
    pub fn cumulative(&self, ticks: u64) -> f64 {
        (0..ticks).map(|t| self.flow_at(t)).sum()
    }
}
