//! Plain data row types written by output backends.

use rh_agent::Participant;
use rh_core::{Cell, Tick};
use rh_sim::MetricsSnapshot;

/// One row of the model-level metric table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsRow {
    pub tick:                  u64,
    pub direct_recycled:       f64,
    pub hub_recycled:          f64,
    pub not_recycled:          f64,
    pub raw_material_consumed: f64,
    pub hub_stock:             f64,
    pub demolition_supply:     f64,
    pub construction_demand:   f64,
    pub finished_agents:       u64,
    pub incomplete_agents:     u64,
    pub wrap_up_drift:         f64,
}

impl From<&MetricsSnapshot> for MetricsRow {
    fn from(m: &MetricsSnapshot) -> Self {
        Self {
            tick:                  m.tick,
            direct_recycled:       m.direct_recycled,
            hub_recycled:          m.hub_recycled,
            not_recycled:          m.not_recycled,
            raw_material_consumed: m.raw_material_consumed,
            hub_stock:             m.hub_stock,
            demolition_supply:     m.demolition_supply,
            construction_demand:   m.construction_demand,
            finished_agents:       m.finished_agents as u64,
            incomplete_agents:     m.incomplete_agents as u64,
            wrap_up_drift:         m.wrap_up_drift,
        }
    }
}

/// State of one participant at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentStateRow {
    pub agent_id:            u32,
    pub tick:                u64,
    /// `"demolition"` or `"construction"`.
    pub kind:                &'static str,
    pub status:              &'static str,
    /// Only set for demolition projects.
    pub is_recycling:        Option<bool>,
    pub hub_id:              Option<u32>,
    /// `None` if the agent is not on the grid.
    pub cell:                Option<Cell>,
    pub running_time:        u64,
    pub amount_recycled:     f64,
    pub amount_hub:          f64,
    pub amount_non_circular: f64,
    pub current_amount:      f64,
}

impl AgentStateRow {
    pub fn new(tick: Tick, p: &Participant, cell: Option<Cell>) -> Self {
        let l = p.ledger();
        Self {
            agent_id:            p.id().0,
            tick:                tick.0,
            kind:                p.kind().as_str(),
            status:              p.status().as_str(),
            is_recycling:        p.is_recycling(),
            hub_id:              p.hub().map(|h| h.0),
            cell,
            running_time:        p.running_time(),
            amount_recycled:     l.amount_recycled,
            amount_hub:          l.amount_hub,
            amount_non_circular: l.amount_non_circular,
            current_amount:      l.current_amount,
        }
    }
}
