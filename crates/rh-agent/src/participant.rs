//! `Participant` — the shared lifecycle every project runs through.

use rh_core::{AgentId, EPS, HubId};
use rh_flow::FlowProfile;
use rh_grid::SpatialIndex;
use tracing::{debug, warn};

use crate::{AgentResult, BusinessContext, Ledger, ParticipantRole, Role, RoleKind, Status};

/// One demolition or construction project.
///
/// Created by [`ParticipantBuilder`][crate::ParticipantBuilder]; stepped once
/// per tick by the simulation driver through [`step`][Self::step].  Once the
/// status is terminal nothing but `running_time` changes again.
#[derive(Clone, Debug)]
pub struct Participant {
    pub(crate) id:            AgentId,
    pub(crate) role:          Role,
    pub(crate) ledger:        Ledger,
    pub(crate) profile:       FlowProfile,
    pub(crate) max_lifespan:  u64,
    pub(crate) status:        Status,
    pub(crate) running_time:  u64,
    pub(crate) hub:           Option<HubId>,
    pub(crate) wrap_up_drift: Option<f64>,
}

impl Participant {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn profile(&self) -> &FlowProfile {
        &self.profile
    }

    #[inline]
    pub fn running_time(&self) -> u64 {
        self.running_time
    }

    #[inline]
    pub fn max_lifespan(&self) -> u64 {
        self.max_lifespan
    }

    #[inline]
    pub fn hub(&self) -> Option<HubId> {
        self.hub
    }

    /// `current_amount` as it stood right before the wrap-up clamp, if the
    /// agent went through wrap-up.
    #[inline]
    pub fn wrap_up_drift(&self) -> Option<f64> {
        self.wrap_up_drift
    }

    /// `Some(is_recycling)` for demolition projects, `None` otherwise.
    pub fn is_recycling(&self) -> Option<bool> {
        self.role.is_recycling()
    }

    // ── Peer-side transfer ────────────────────────────────────────────────

    /// Book a direct delivery from a demolition project into this one.
    pub(crate) fn receive_direct(&mut self, amount: f64) {
        self.ledger.amount_recycled += amount;
        self.ledger.current_amount -= amount;
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Advance this participant by one tick.
    ///
    /// `ctx.agent` must be this participant's id and `ctx.hub` its hub.
    pub fn step<G: SpatialIndex>(&mut self, ctx: &mut BusinessContext<'_, G>) -> AgentResult<()> {
        if self.status.is_terminal() {
            self.running_time += 1;
            return Ok(());
        }

        self.ledger.current_amount += self.role.generate_or_consume(&self.profile, self.running_time);

        match self.status {
            Status::Passive => {
                if self.ledger.current_amount > EPS {
                    self.transition(Status::Active);
                }
            }
            Status::Active => {
                if self.ledger.is_settled() {
                    self.transition(Status::Finished);
                } else {
                    self.role.do_business(&mut self.ledger, ctx)?;
                    if self.ledger.is_settled() {
                        self.transition(Status::Finished);
                    }
                }
            }
            Status::LifespanAlert => {
                self.role.do_business(&mut self.ledger, ctx)?;
                if self.ledger.balance() > EPS {
                    self.wrap_up();
                    self.transition(Status::Incomplete);
                } else {
                    self.transition(Status::Finished);
                }
            }
            Status::Finished | Status::Incomplete => {}
        }

        if matches!(self.status, Status::Passive | Status::Active)
            && self.running_time + 2 >= self.max_lifespan
        {
            self.transition(Status::LifespanAlert);
        }

        self.running_time += 1;
        Ok(())
    }

    fn wrap_up(&mut self) {
        let disposed = self.role.do_wrap_up(&mut self.ledger);
        let drift = self.ledger.current_amount;
        if drift.abs() > EPS {
            warn!(
                agent = %self.id,
                kind = %self.kind(),
                drift,
                "current amount out of step with ledger at wrap-up"
            );
        }
        self.wrap_up_drift = Some(drift);
        self.ledger.current_amount = 0.0;
        debug!(agent = %self.id, kind = %self.kind(), disposed, "wrap-up");
    }

    fn transition(&mut self, to: Status) {
        debug!(
            agent = %self.id,
            kind = %self.kind(),
            from = %self.status,
            to = %to,
            t = self.running_time,
            "status change"
        );
        self.status = to;
    }
}
