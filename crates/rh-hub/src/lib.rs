//! `rh-hub` — shared material buffers and fallback accumulators.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`hub`]      | `Hub`, bounded stock with strict `load` / `remove`            |
//! | [`store`]    | `HubStore`, dense `Vec<Hub>` indexed by `HubId`               |
//! | [`fallback`] | `ConventionalDisposal`, `RawMaterialSupply` (unbounded sinks) |
//! | [`error`]    | `HubError`, `HubResult<T>`                                    |
//!
//! # Contract
//!
//! Callers size every transfer as `min(requested, available)` before calling
//! `load` / `remove`.  A rejected call therefore means a caller bug, and the
//! error is propagated up to the tick loop rather than retried.

pub mod error;
pub mod fallback;
pub mod hub;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{HubError, HubResult};
pub use fallback::{ConventionalDisposal, RawMaterialSupply};
pub use hub::Hub;
pub use store::HubStore;
