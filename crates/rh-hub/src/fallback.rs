//! Unbounded non-circular fallbacks.
//!
//! Material that cannot be routed through a hub or a partner ends up here:
//! demolition waste goes to conventional disposal, missing construction
//! material is bought from raw supply.  Both are append-only counters.

/// Conventional (landfill / down-cycling) disposal used by demolition projects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConventionalDisposal {
    amount_transferred: f64,
}

impl ConventionalDisposal {
    pub fn dump(&mut self, amount: f64) {
        self.amount_transferred += amount;
    }

    #[inline]
    pub fn amount_transferred(&self) -> f64 {
        self.amount_transferred
    }
}

/// Raw-material supplier used by construction projects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawMaterialSupply {
    amount_transferred: f64,
}

impl RawMaterialSupply {
    pub fn buy(&mut self, amount: f64) {
        self.amount_transferred += amount;
    }

    #[inline]
    pub fn amount_transferred(&self) -> f64 {
        self.amount_transferred
    }
}
