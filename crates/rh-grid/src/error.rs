//! Spatial-subsystem error type.

use thiserror::Error;

use rh_core::{AgentId, Cell};

/// Errors produced by `rh-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell} outside {width}x{height} grid")]
    OutOfBounds { cell: Cell, width: u32, height: u32 },

    #[error("agent {0} is not placed on the grid")]
    NotPlaced(AgentId),

    #[error("agent {0} is already placed on the grid")]
    AlreadyPlaced(AgentId),

    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
}

pub type GridResult<T> = Result<T, GridError>;
