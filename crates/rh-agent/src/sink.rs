//! Construction project behaviour.

use rh_grid::SpatialIndex;
use rh_hub::RawMaterialSupply;
use tracing::debug;

use crate::{AgentResult, BusinessContext, Ledger, ParticipantRole, RoleKind};

/// A construction site that needs material.
///
/// It never moves and never looks for partners itself: demolition sites
/// deliver to it directly, and on its own turn it only draws from its hub.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SinkRole {
    raw_supply: RawMaterialSupply,
}

impl SinkRole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything this site has bought from raw supply.
    pub fn raw_supply(&self) -> &RawMaterialSupply {
        &self.raw_supply
    }
}

impl ParticipantRole for SinkRole {
    fn kind(&self) -> RoleKind {
        RoleKind::Sink
    }

    fn do_business<G: SpatialIndex>(
        &mut self,
        ledger: &mut Ledger,
        ctx:    &mut BusinessContext<'_, G>,
    ) -> AgentResult<f64> {
        if let Some(hub_id) = ctx.hub {
            let hub = ctx.hubs.get_mut(hub_id)?;
            let amount = ledger.current_amount.min(hub.stock_level());
            if amount > 0.0 {
                hub.remove(amount)?;
                ledger.amount_hub += amount;
                ledger.current_amount -= amount;
                debug!(sink = %ctx.agent, hub = %hub_id, amount, "drew from hub");
            }
        }
        Ok(ledger.current_amount)
    }

    fn do_wrap_up(&mut self, ledger: &mut Ledger) -> f64 {
        let balance = ledger.balance().max(0.0);
        self.raw_supply.buy(balance);
        ledger.amount_non_circular += balance;
        ledger.current_amount -= balance;
        balance
    }
}
