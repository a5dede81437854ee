//! Fluent builder for constructing a [`Sim`].

use rh_agent::{Participant, ParticipantBuilder};
use rh_core::{AgentId, Cell, HubId, SimRng, Tick};
use rh_grid::{MultiGrid, SpatialIndex};
use rh_hub::HubStore;
use tracing::debug;

use crate::{MetricsSnapshot, ModelConfig, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<G>`].
///
/// By default the whole population is generated from the [`ModelConfig`],
/// in this order, all from the single simulation `SimRng`:
///
/// 1. `num_hubs` hubs on random cells, each with `hub_capacity`;
/// 2. `num_demolition` sources, then `num_construction` sinks, each assigned
///    a uniformly chosen hub (if any) and placed on a random cell.
///
/// # Optional inputs (override generation)
///
/// | Method                | Default                                    |
/// |-----------------------|--------------------------------------------|
/// | `.hubs(store)`        | `num_hubs` generated hubs                  |
/// | `.participants(v)`    | generated sources then sinks               |
/// | `.positions(v)`       | a random cell per participant              |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(ModelConfig::default())?.build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<G: SpatialIndex> {
    config:       ModelConfig,
    grid:         G,
    hubs:         Option<HubStore>,
    participants: Option<Vec<Participant>>,
    positions:    Option<Vec<Cell>>,
}

impl SimBuilder<MultiGrid> {
    /// A builder over a `width × height` torus [`MultiGrid`].
    pub fn new(config: ModelConfig) -> SimResult<Self> {
        let grid = MultiGrid::new(config.width, config.height)?;
        Ok(Self::with_grid(config, grid))
    }
}

impl<G: SpatialIndex> SimBuilder<G> {
    /// A builder over a caller-supplied, empty spatial index.
    pub fn with_grid(config: ModelConfig, grid: G) -> Self {
        Self {
            config,
            grid,
            hubs:         None,
            participants: None,
            positions:    None,
        }
    }

    pub fn hubs(mut self, hubs: HubStore) -> Self {
        self.hubs = Some(hubs);
        self
    }

    /// Supply the participants directly.  `v[i]` must have `AgentId(i)`.
    pub fn participants(mut self, participants: Vec<Participant>) -> Self {
        self.participants = Some(participants);
        self
    }

    /// Supply the starting cell of each participant.
    pub fn positions(mut self, positions: Vec<Cell>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, create and place everything, collect the baseline
    /// metrics and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<G>> {
        self.config.validate()?;
        let config = self.config;
        let mut grid = self.grid;
        let mut rng = SimRng::new(config.sim.seed);

        // ── Hubs ──────────────────────────────────────────────────────────
        let hubs = match self.hubs {
            Some(h) => h,
            None => {
                let mut store = HubStore::new();
                for _ in 0..config.num_hubs {
                    let cell = grid.random_cell(&mut rng);
                    store.push(cell, config.hub_capacity);
                }
                store
            }
        };
        let hub_ids: Vec<HubId> = hubs.ids().collect();

        // ── Participants ──────────────────────────────────────────────────
        let agents = match self.participants {
            Some(v) => v,
            None => generate(&config, &hub_ids, &mut rng)?,
        };
        for (i, p) in agents.iter().enumerate() {
            if p.id().index() != i {
                return Err(SimError::Config(format!(
                    "participant at index {i} has id {}",
                    p.id()
                )));
            }
            if let Some(h) = p.hub() {
                if h.index() >= hubs.len() {
                    return Err(SimError::Config(format!("{} refers to unknown {h}", p.id())));
                }
            }
        }

        // ── Placement ─────────────────────────────────────────────────────
        let positions = match self.positions {
            Some(p) => {
                if p.len() != agents.len() {
                    return Err(SimError::AgentCountMismatch {
                        expected: agents.len(),
                        got:      p.len(),
                        what:     "initial positions",
                    });
                }
                p
            }
            None => (0..agents.len()).map(|_| grid.random_cell(&mut rng)).collect(),
        };
        for (i, &cell) in positions.iter().enumerate() {
            grid.place(agent_id(i)?, cell)?;
        }

        debug!(
            agents = agents.len(),
            hubs = hubs.len(),
            width = grid.width(),
            height = grid.height(),
            "model built"
        );

        let baseline = MetricsSnapshot::collect(Tick::ZERO, &agents, &hubs);
        let order = (0..agents.len()).map(agent_id).collect::<SimResult<_>>()?;

        Ok(Sim {
            config,
            tick: Tick::ZERO,
            agents,
            hubs,
            grid,
            metrics: vec![baseline],
            rng,
            order,
        })
    }
}

fn agent_id(i: usize) -> SimResult<AgentId> {
    AgentId::try_from(i)
        .map_err(|_| SimError::Config(format!("agent index {i} does not fit an AgentId")))
}

/// Sources first, then sinks, ids dense from 0.
fn generate(config: &ModelConfig, hubs: &[HubId], rng: &mut SimRng) -> SimResult<Vec<Participant>> {
    let total = config.num_demolition + config.num_construction;
    let mut agents = Vec::with_capacity(total);
    for i in 0..total {
        let id = agent_id(i)?;
        let hub = rng.choose(hubs).copied();
        let builder = if i < config.num_demolition {
            ParticipantBuilder::source(id, config.total_amount, config.event_rate_demolition)
                .recycling_tendency(config.recycling_probability())
        } else {
            ParticipantBuilder::sink(id, config.total_amount, config.event_rate_construction)
        };
        let p = builder
            .loc(config.loc)
            .hub(hub)
            .lifespan_policy(config.lifespan)
            .build(rng)?;
        agents.push(p);
    }
    Ok(agents)
}
