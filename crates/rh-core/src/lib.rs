//! `rh-core` — foundational types for the recycling-hub simulation.
//!
//! This crate is a dependency of every other `rh-*` crate.  It intentionally
//! has no `rh-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`ids`]   | `AgentId`, `HubId`                                  |
//! | [`cell`]  | `Cell` grid coordinate                              |
//! | [`time`]  | `Tick`, `SimConfig`                                 |
//! | [`rng`]   | `SimRng` (the single simulation-wide random source) |
//! | [`error`] | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, HubId};
pub use rng::SimRng;
pub use time::{SimConfig, Tick};

/// Tolerance below which a material balance counts as settled.
///
/// Every balance comparison in the agent state machine and every accounting
/// invariant check uses this value.
pub const EPS: f64 = 0.09;
