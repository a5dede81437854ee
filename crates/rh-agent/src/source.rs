//! Demolition project behaviour.

use rh_core::{AgentId, SimRng};
use rh_grid::{GridError, Neighborhood, SpatialIndex};
use rh_hub::ConventionalDisposal;
use tracing::debug;

use crate::{
    AgentError, AgentResult, BusinessContext, Ledger, ParticipantRole, RoleKind, Status,
};

/// A demolition site that has to get rid of its waste.
///
/// Each tick it wanders to a random neighbouring cell and then, if it is a
/// recycler, offers its waste to its hub or to an active construction site
/// next to it.  Non-recyclers send everything to conventional disposal.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRole {
    is_recycling: bool,
    disposal:     ConventionalDisposal,
}

impl SourceRole {
    pub fn new(is_recycling: bool) -> Self {
        Self { is_recycling, disposal: ConventionalDisposal::default() }
    }

    /// Fix the recycling choice once with a Bernoulli(`tendency`) draw.
    pub fn with_tendency(tendency: f64, rng: &mut SimRng) -> Self {
        Self::new(rng.gen_bool(tendency))
    }

    #[inline]
    pub fn is_recycling(&self) -> bool {
        self.is_recycling
    }

    /// Everything this site has sent to conventional disposal.
    pub fn disposal(&self) -> &ConventionalDisposal {
        &self.disposal
    }

    /// Step to a uniformly random cell of the 8-neighbourhood.
    fn relocate<G: SpatialIndex>(ctx: &mut BusinessContext<'_, G>) -> AgentResult<()> {
        let here = ctx.grid.position(ctx.agent).ok_or(GridError::NotPlaced(ctx.agent))?;
        let cells = ctx.grid.neighborhood(here, Neighborhood::Moore, false);
        if let Some(&to) = ctx.rng.choose(&cells) {
            ctx.grid.move_agent(ctx.agent, to)?;
        }
        Ok(())
    }

    /// Active construction sites in the current cell or its 4-neighbourhood.
    pub(crate) fn partners<G: SpatialIndex>(ctx: &BusinessContext<'_, G>) -> AgentResult<Vec<AgentId>> {
        let here = ctx.grid.position(ctx.agent).ok_or(GridError::NotPlaced(ctx.agent))?;
        Ok(ctx
            .grid
            .neighbors(here, Neighborhood::VonNeumann, true)
            .into_iter()
            .filter(|&id| {
                ctx.peers
                    .get(id)
                    .is_some_and(|p| p.kind() == RoleKind::Sink && p.status() == Status::Active)
            })
            .collect())
    }

    pub(crate) fn deliver_direct<G: SpatialIndex>(
        ledger: &mut Ledger,
        ctx:    &mut BusinessContext<'_, G>,
    ) -> AgentResult<()> {
        let candidates = Self::partners(ctx)?;
        let Some(&partner_id) = ctx.rng.choose(&candidates) else {
            return Ok(());
        };
        let partner = ctx
            .peers
            .get_mut(partner_id)
            .ok_or(AgentError::UnknownAgent(partner_id))?;

        let amount = ledger.current_amount.min(partner.ledger().balance().max(0.0));
        if amount <= 0.0 {
            return Ok(());
        }
        ledger.amount_recycled += amount;
        ledger.current_amount -= amount;
        partner.receive_direct(amount);

        debug!(source = %ctx.agent, sink = %partner_id, amount, "direct transfer");
        Ok(())
    }
}

impl ParticipantRole for SourceRole {
    fn kind(&self) -> RoleKind {
        RoleKind::Source
    }

    fn do_business<G: SpatialIndex>(
        &mut self,
        ledger: &mut Ledger,
        ctx:    &mut BusinessContext<'_, G>,
    ) -> AgentResult<f64> {
        Self::relocate(ctx)?;

        if ledger.current_amount <= 0.0 {
            return Ok(ledger.current_amount);
        }

        if !self.is_recycling {
            let amount = ledger.current_amount;
            self.disposal.dump(amount);
            ledger.amount_non_circular += amount;
            ledger.current_amount = 0.0;
            return Ok(0.0);
        }

        if let Some(hub_id) = ctx.hub {
            let hub = ctx.hubs.get_mut(hub_id)?;
            if hub.has_capacity() {
                let amount = ledger.current_amount.min(hub.available_capacity());
                hub.load(amount)?;
                ledger.amount_hub += amount;
                ledger.current_amount -= amount;
                debug!(source = %ctx.agent, hub = %hub_id, amount, "loaded hub");
                return Ok(ledger.current_amount);
            }
        }

        Self::deliver_direct(ledger, ctx)?;
        Ok(ledger.current_amount)
    }

    fn do_wrap_up(&mut self, ledger: &mut Ledger) -> f64 {
        let balance = ledger.balance().max(0.0);
        self.disposal.dump(balance);
        ledger.amount_non_circular += balance;
        ledger.current_amount -= balance;
        balance
    }
}
