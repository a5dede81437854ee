//! `rh-grid` — spatial index for the recycling-hub simulation.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`index`] | `SpatialIndex` trait, `Neighborhood` enum                 |
//! | [`multi`] | `MultiGrid`, dense multi-occupancy grid, torus by default |
//! | [`error`] | `GridError`, `GridResult<T>`                              |
//!
//! The core only ever needs two things from space: "move to a random
//! neighbouring cell" and "who is in or next to this cell".  Everything else
//! about the grid is an implementation detail of [`MultiGrid`].

pub mod error;
pub mod index;
pub mod multi;


pub use error::{GridError, GridResult};
pub use index::{Neighborhood, SpatialIndex};
pub use multi::MultiGrid;
