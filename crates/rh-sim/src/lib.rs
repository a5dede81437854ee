//! `rh-sim` — tick loop orchestrator for the recycling-hub simulation.
//!
//! # Tick loop
//!
//! ```text
//! metrics[0] = collect()                      ← baseline at build time
//! for tick in 0..config.sim.total_ticks:
//!   ① Shuffle: permute the activation order with the simulation SimRng.
//!   ② Step:    for each agent in that order: Participant::step with a
//!                BusinessContext over the grid, the hubs and every peer.
//!                Transfers are visible to agents stepped later in the tick.
//!   ③ Audit:   warn about hubs outside their capacity bounds.
//!   ④ Collect: append a MetricsSnapshot to Sim::metrics.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                       |
//! |--------------|------------------------------------------------|
//! | [`config`]   | `ModelConfig`, TOML-loadable model parameters  |
//! | [`builder`]  | `SimBuilder`, hub/agent creation and placement |
//! | [`sim`]      | `Sim`, the tick loop                           |
//! | [`metrics`]  | `MetricsSnapshot`, per-tick aggregate series   |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`            |
//! | [`error`]    | `SimError`, `SimResult<T>`                     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rh_sim::{ModelConfig, NoopObserver, SimBuilder};
//!
//! let config = ModelConfig::from_file("concrete.toml")?;
//! let mut sim = SimBuilder::new(config)?.build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{:?}", sim.final_metrics());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::ModelConfig;
pub use error::{SimError, SimResult};
pub use metrics::MetricsSnapshot;
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
