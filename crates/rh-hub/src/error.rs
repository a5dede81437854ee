//! Hub error type.

use thiserror::Error;

use rh_core::HubId;

/// Errors produced by `rh-hub`.
#[derive(Debug, Error, PartialEq)]
pub enum HubError {
    #[error("{hub}: loading {requested} exceeds available capacity {available}")]
    CapacityExceeded { hub: HubId, requested: f64, available: f64 },

    #[error("{hub}: removing {requested} exceeds stock level {stock}")]
    InsufficientStock { hub: HubId, requested: f64, stock: f64 },

    #[error("{hub}: transfer amount must be finite and >= 0, got {amount}")]
    InvalidAmount { hub: HubId, amount: f64 },

    #[error("hub {0} not found")]
    NotFound(HubId),
}

pub type HubResult<T> = Result<T, HubError>;
