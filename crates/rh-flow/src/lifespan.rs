//! Agent lifespan derived from the tail of the flow distribution.

use crate::{FlowError, FlowResult, Poisson};

/// The single lifespan formula used for every agent:
///
/// ```text
/// lifespan = round(ppf(quantile; event_rate, loc)) * multiplier + padding
/// ```
///
/// The default (`0.9999`, `×2`, `+5`) gives every project enough ticks to
/// emit or consume its whole target along the Poisson curve, with the tail
/// covered twice over.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LifespanPolicy {
    /// Cut-off percentile of the Poisson distribution.
    pub quantile:   f64,
    /// Safety factor applied to the percentile tick.
    pub multiplier: u64,
    /// Constant number of ticks added at the end.
    pub padding:    u64,
}

impl Default for LifespanPolicy {
    fn default() -> Self {
        Self {
            quantile:   0.9999,
            multiplier: 2,
            padding:    5,
        }
    }
}

impl LifespanPolicy {
    /// Lifespan in ticks for a project with the given flow parameters.
    pub fn lifespan(&self, event_rate: f64, loc: f64) -> FlowResult<u64> {
        let cutoff = Poisson::new(event_rate, loc)?.ppf(self.quantile)?;
        let cutoff = cutoff.round().max(0.0) as u64;
        cutoff
            .checked_mul(self.multiplier)
            .and_then(|ticks| ticks.checked_add(self.padding))
            .ok_or(FlowError::LifespanOverflow {
                cutoff,
                multiplier: self.multiplier,
                padding: self.padding,
            })
    }
}

/// Lifespan under the default [`LifespanPolicy`].
pub fn calculate_lifespan(event_rate: f64, loc: f64) -> FlowResult<u64> {
    LifespanPolicy::default().lifespan(event_rate, loc)
}
