//! `rh-flow` — lifespan and material-flow model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`poisson`]  | `Poisson` distribution: `pmf`, `cdf`, `ppf` (with `loc`) |
//! | [`lifespan`] | `LifespanPolicy`, `calculate_lifespan`                   |
//! | [`flow`]     | `calculate_flow`, `FlowProfile`                          |
//! | [`error`]    | `FlowError`, `FlowResult<T>`                             |
//!
//! # Model
//!
//! Every project releases (demolition) or demands (construction) its total
//! amount along a Poisson probability-mass curve over its own running time:
//!
//! ```text
//! flow(t) = PoissonPMF(t; event_rate, loc) * total_amount
//! ```
//!
//! Summed over `t = 0..lifespan` this approaches `total_amount`, because the
//! lifespan is derived from a high percentile of the same distribution.

pub mod error;
pub mod flow;
pub mod lifespan;
pub mod poisson;


pub use error::{FlowError, FlowResult};
pub use flow::{FlowProfile, calculate_flow};
pub use lifespan::{LifespanPolicy, calculate_lifespan};
pub use poisson::{MAX_EVENT_RATE, Poisson};
