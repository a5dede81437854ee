//! The capacity-bounded buffer.

use rh_core::{Cell, HubId};

use crate::{HubError, HubResult};

/// Absolute slack for the capacity/stock comparisons.
///
/// `min(requested, available)` computed by a caller can land one ulp above
/// the true headroom after `max_capacity - stock_level`.  The slack absorbs
/// that, and a level within the slack of either bound snaps onto the bound.
const ROUNDOFF_SLACK: f64 = 1e-9;

/// A recycling hub: a shared stockpile with a hard upper bound.
///
/// Invariant: `0 <= stock_level <= max_capacity` after every call.
#[derive(Clone, Debug, PartialEq)]
pub struct Hub {
    pub id:           HubId,
    /// Where the hub sits on the grid.  Purely informational for the core.
    pub cell:         Cell,
    stock_level:      f64,
    max_capacity:     f64,
}

impl Hub {
    /// An empty hub.  Negative capacities are treated as zero.
    pub fn new(id: HubId, cell: Cell, max_capacity: f64) -> Self {
        Self {
            id,
            cell,
            stock_level:  0.0,
            max_capacity: max_capacity.max(0.0),
        }
    }

    #[inline]
    pub fn stock_level(&self) -> f64 {
        self.stock_level
    }

    #[inline]
    pub fn max_capacity(&self) -> f64 {
        self.max_capacity
    }

    /// Free space left in the hub.
    #[inline]
    pub fn available_capacity(&self) -> f64 {
        self.max_capacity - self.stock_level
    }

    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.available_capacity() > 0.0
    }

    /// Add `amount` to the stock.
    ///
    /// # Errors
    ///
    /// [`HubError::CapacityExceeded`] if the load would overflow the hub; the
    /// stock level is left untouched.
    pub fn load(&mut self, amount: f64) -> HubResult<()> {
        self.check_amount(amount)?;
        if self.stock_level + amount > self.max_capacity + ROUNDOFF_SLACK {
            return Err(HubError::CapacityExceeded {
                hub:       self.id,
                requested: amount,
                available: self.available_capacity(),
            });
        }
        let next = self.stock_level + amount;
        self.stock_level = if next >= self.max_capacity - ROUNDOFF_SLACK {
            self.max_capacity
        } else {
            next
        };
        Ok(())
    }

    /// Take `amount` out of the stock.
    ///
    /// # Errors
    ///
    /// [`HubError::InsufficientStock`] if `amount` exceeds the stock level;
    /// the stock level is left untouched.
    pub fn remove(&mut self, amount: f64) -> HubResult<()> {
        self.check_amount(amount)?;
        if amount > self.stock_level + ROUNDOFF_SLACK {
            return Err(HubError::InsufficientStock {
                hub:       self.id,
                requested: amount,
                stock:     self.stock_level,
            });
        }
        let next = self.stock_level - amount;
        self.stock_level = if next <= ROUNDOFF_SLACK { 0.0 } else { next };
        Ok(())
    }

    fn check_amount(&self, amount: f64) -> HubResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(HubError::InvalidAmount { hub: self.id, amount });
        }
        Ok(())
    }
}
