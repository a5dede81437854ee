//! Dense hub storage.

use rh_core::{Cell, HubId};
use tracing::warn;

use crate::{Hub, HubError, HubResult};

/// All hubs of a run, indexed by `HubId`.
///
/// Hubs are created once at simulation start and never removed, so the
/// `HubId` value is always the position in `hubs`.
#[derive(Clone, Debug, Default)]
pub struct HubStore {
    hubs: Vec<Hub>,
}

impl HubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hub, assigning it the next `HubId`.
    pub fn push(&mut self, cell: Cell, max_capacity: f64) -> HubId {
        let id = HubId(self.hubs.len() as u32);
        self.hubs.push(Hub::new(id, cell, max_capacity));
        id
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = HubId> + '_ {
        (0..self.hubs.len() as u32).map(HubId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter()
    }

    pub fn get(&self, id: HubId) -> HubResult<&Hub> {
        self.hubs.get(id.index()).ok_or(HubError::NotFound(id))
    }

    pub fn get_mut(&mut self, id: HubId) -> HubResult<&mut Hub> {
        self.hubs.get_mut(id.index()).ok_or(HubError::NotFound(id))
    }

    /// Material currently stored across all hubs.
    pub fn total_stock(&self) -> f64 {
        self.hubs.iter().map(Hub::stock_level).sum()
    }

    /// Warn about any hub whose stock left `[0, max_capacity]`.
    ///
    /// Returns the number of offending hubs.  `load` / `remove` keep the
    /// bounds, so a non-zero result points at direct field corruption.
    pub fn audit(&self) -> usize {
        let mut bad = 0;
        for hub in &self.hubs {
            if hub.stock_level() < 0.0 || hub.stock_level() > hub.max_capacity() {
                warn!(
                    hub = %hub.id,
                    stock = hub.stock_level(),
                    capacity = hub.max_capacity(),
                    "hub stock outside capacity bounds"
                );
                bad += 1;
            }
        }
        bad
    }
}
