//! Role polymorphism: demolition (source) vs. construction (sink).

use std::fmt;

use rh_flow::FlowProfile;
use rh_grid::SpatialIndex;

use crate::{AgentResult, BusinessContext, Ledger, SinkRole, SourceRole};

/// Which side of the material market a participant is on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoleKind {
    /// Demolition project: generates material.
    Source,
    /// Construction project: consumes material.
    Sink,
}

impl RoleKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleKind::Source => "demolition",
            RoleKind::Sink   => "construction",
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The behaviour that differs between the two project kinds.
///
/// The shared lifecycle in [`Participant`][crate::Participant] calls these
/// hooks; it never inspects the concrete role.
pub trait ParticipantRole {
    fn kind(&self) -> RoleKind;

    /// Material produced (source) or newly demanded (sink) at `running_time`.
    fn generate_or_consume(&self, profile: &FlowProfile, running_time: u64) -> f64 {
        profile.flow_at(running_time)
    }

    /// Try to settle `ledger.current_amount`.  Returns what is left of it.
    fn do_business<G: SpatialIndex>(
        &mut self,
        ledger: &mut Ledger,
        ctx:    &mut BusinessContext<'_, G>,
    ) -> AgentResult<f64>;

    /// Settle the whole outstanding balance through the non-circular
    /// fallback.  Returns the amount disposed of / bought.
    fn do_wrap_up(&mut self, ledger: &mut Ledger) -> f64;
}

/// Role-tagged variant held by every participant.
#[derive(Clone, Debug, PartialEq)]
pub enum Role {
    Source(SourceRole),
    Sink(SinkRole),
}

impl Role {
    /// `Some(is_recycling)` for a source, `None` for a sink.
    pub fn is_recycling(&self) -> Option<bool> {
        match self {
            Role::Source(s) => Some(s.is_recycling()),
            Role::Sink(_)   => None,
        }
    }
}

impl ParticipantRole for Role {
    fn kind(&self) -> RoleKind {
        match self {
            Role::Source(r) => r.kind(),
            Role::Sink(r)   => r.kind(),
        }
    }

    fn generate_or_consume(&self, profile: &FlowProfile, running_time: u64) -> f64 {
        match self {
            Role::Source(r) => r.generate_or_consume(profile, running_time),
            Role::Sink(r)   => r.generate_or_consume(profile, running_time),
        }
    }

    fn do_business<G: SpatialIndex>(
        &mut self,
        ledger: &mut Ledger,
        ctx:    &mut BusinessContext<'_, G>,
    ) -> AgentResult<f64> {
        match self {
            Role::Source(r) => r.do_business(ledger, ctx),
            Role::Sink(r)   => r.do_business(ledger, ctx),
        }
    }

    fn do_wrap_up(&mut self, ledger: &mut Ledger) -> f64 {
        match self {
            Role::Source(r) => r.do_wrap_up(ledger),
            Role::Sink(r)   => r.do_wrap_up(ledger),
        }
    }
}
