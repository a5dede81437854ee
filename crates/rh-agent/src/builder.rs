//! `ParticipantBuilder` — validated construction of a `Participant`.

use rh_core::{AgentId, HubId, SimRng};
use rh_flow::{FlowProfile, LifespanPolicy};

use crate::{AgentResult, Ledger, Participant, Role, RoleKind, SinkRole, SourceRole, Status};

/// How a demolition project decides whether it recycles.
#[derive(Copy, Clone, Debug)]
enum Recycling {
    /// Bernoulli draw with this probability at build time.
    Tendency(f64),
    Fixed(bool),
}

/// Fluent builder for one project.
///
/// ```text
/// let p = ParticipantBuilder::source(AgentId(0), 100.0, 3.0)
///     .hub(Some(HubId(0)))
///     .recycling_tendency(0.8)
///     .build(&mut rng)?;
/// ```
#[derive(Clone, Debug)]
pub struct ParticipantBuilder {
    id:           AgentId,
    kind:         RoleKind,
    total_amount: f64,
    event_rate:   f64,
    loc:          f64,
    hub:          Option<HubId>,
    policy:       LifespanPolicy,
    recycling:    Recycling,
}

impl ParticipantBuilder {
    fn new(id: AgentId, kind: RoleKind, total_amount: f64, event_rate: f64) -> Self {
        Self {
            id,
            kind,
            total_amount,
            event_rate,
            loc:       0.0,
            hub:       None,
            policy:    LifespanPolicy::default(),
            recycling: Recycling::Tendency(1.0),
        }
    }

    /// A demolition project.
    pub fn source(id: AgentId, total_amount: f64, event_rate: f64) -> Self {
        Self::new(id, RoleKind::Source, total_amount, event_rate)
    }

    /// A construction project.
    pub fn sink(id: AgentId, total_amount: f64, event_rate: f64) -> Self {
        Self::new(id, RoleKind::Sink, total_amount, event_rate)
    }

    pub fn loc(mut self, loc: f64) -> Self {
        self.loc = loc;
        self
    }

    pub fn hub(mut self, hub: Option<HubId>) -> Self {
        self.hub = hub;
        self
    }

    pub fn lifespan_policy(mut self, policy: LifespanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Probability in `[0, 1]` that a demolition project recycles.
    /// Ignored for construction projects.
    pub fn recycling_tendency(mut self, p: f64) -> Self {
        self.recycling = Recycling::Tendency(p);
        self
    }

    /// Fix the recycling choice instead of drawing it.
    pub fn recycling(mut self, is_recycling: bool) -> Self {
        self.recycling = Recycling::Fixed(is_recycling);
        self
    }

    /// Validate the flow parameters and build the participant.
    ///
    /// Draws from `rng` only for a demolition project with a tendency.
    pub fn build(self, rng: &mut SimRng) -> AgentResult<Participant> {
        let profile = FlowProfile::new(self.total_amount, self.event_rate, self.loc)?;
        let max_lifespan = self.policy.lifespan(self.event_rate, self.loc)?;

        let role = match self.kind {
            RoleKind::Source => Role::Source(match self.recycling {
                Recycling::Tendency(p) => SourceRole::with_tendency(p, rng),
                Recycling::Fixed(b)    => SourceRole::new(b),
            }),
            RoleKind::Sink => Role::Sink(SinkRole::new()),
        };

        Ok(Participant {
            id: self.id,
            role,
            ledger: Ledger::new(self.total_amount),
            profile,
            max_lifespan,
            status: Status::Passive,
            running_time: 0,
            hub: self.hub,
            wrap_up_drift: None,
        })
    }
}
