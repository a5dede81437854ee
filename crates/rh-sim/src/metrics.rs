//! Per-tick aggregate series.

use rh_agent::{Participant, RoleKind, Status};
use rh_core::Tick;
use rh_hub::HubStore;
use serde::Serialize;

/// Model-level sums over all participants and hubs after a tick.
///
/// `tick` counts completed ticks: the baseline collected at build time has
/// `tick == 0`, the snapshot taken after the first tick has `tick == 1`.
///
/// Transfers between a demolition and a construction project appear on both
/// ledgers; the recycled series use the construction side only, so each
/// unit is counted once.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub tick:                  u64,
    pub direct_recycled:       f64,
    pub hub_recycled:          f64,
    pub not_recycled:          f64,
    pub raw_material_consumed: f64,
    pub hub_stock:             f64,
    /// Generated demolition material not settled yet.
    pub demolition_supply:     f64,
    /// Construction demand not settled yet.
    pub construction_demand:   f64,
    pub finished_agents:       usize,
    pub incomplete_agents:     usize,
    /// Sum of `|current_amount|` clamped away at wrap-up.
    pub wrap_up_drift:         f64,
}

impl MetricsSnapshot {
    /// Display labels of the material series, in [`series`][Self::series] order.
    pub const LABELS: [&'static str; 7] = [
        "Amount direct recycled",
        "Amount recycled via hub",
        "Amount not recycled",
        "Amount raw material consumed",
        "Stock level materials in hubs",
        "Supply demolition materials",
        "Demand construction materials",
    ];

    pub fn collect(tick: Tick, agents: &[Participant], hubs: &HubStore) -> Self {
        let mut m = MetricsSnapshot {
            tick:      tick.0,
            hub_stock: hubs.total_stock(),
            ..Self::default()
        };
        for p in agents {
            let l = p.ledger();
            match p.kind() {
                RoleKind::Source => {
                    m.not_recycled += l.amount_non_circular;
                    m.demolition_supply += l.current_amount;
                }
                RoleKind::Sink => {
                    m.direct_recycled += l.amount_recycled;
                    m.hub_recycled += l.amount_hub;
                    m.raw_material_consumed += l.amount_non_circular;
                    m.construction_demand += l.current_amount;
                }
            }
            match p.status() {
                Status::Finished   => m.finished_agents += 1,
                Status::Incomplete => m.incomplete_agents += 1,
                _ => {}
            }
            if let Some(d) = p.wrap_up_drift() {
                m.wrap_up_drift += d.abs();
            }
        }
        m
    }

    /// The seven material series paired with their display labels.
    pub fn series(&self) -> [(&'static str, f64); 7] {
        let [direct, hub, not, raw, stock, supply, demand] = Self::LABELS;
        [
            (direct, self.direct_recycled),
            (hub,    self.hub_recycled),
            (not,    self.not_recycled),
            (raw,    self.raw_material_consumed),
            (stock,  self.hub_stock),
            (supply, self.demolition_supply),
            (demand, self.construction_demand),
        ]
    }
}
