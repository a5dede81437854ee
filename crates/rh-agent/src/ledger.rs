//! Per-agent material accounting.

use rh_core::EPS;

/// The counters every project keeps about its target amount.
///
/// The three settlement counters only ever grow.  `current_amount` is the
/// material generated (demolition) or needed (construction) that has not been
/// settled yet; a construction project that received a direct delivery ahead
/// of its own demand curve can hold a negative value for a while.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Ledger {
    pub total_amount:        f64,
    /// Settled by direct project-to-project transfer.
    pub amount_recycled:     f64,
    /// Settled through a recycling hub.
    pub amount_hub:          f64,
    /// Settled through conventional disposal or raw-material purchase.
    pub amount_non_circular: f64,
    pub current_amount:      f64,
}

impl Ledger {
    pub fn new(total_amount: f64) -> Self {
        Self { total_amount, ..Self::default() }
    }

    /// Sum of the three settlement counters.
    #[inline]
    pub fn accounted(&self) -> f64 {
        self.amount_recycled + self.amount_hub + self.amount_non_circular
    }

    /// Outstanding part of the target.
    #[inline]
    pub fn balance(&self) -> f64 {
        self.total_amount - self.accounted()
    }

    /// `true` once the balance is below [`EPS`].
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.balance() < EPS
    }
}
