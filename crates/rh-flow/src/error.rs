use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FlowError {
    #[error("event rate must be finite and > 0, got {0}")]
    InvalidRate(f64),

    #[error("event rate {rate} exceeds the supported maximum {max}")]
    RateTooLarge { rate: f64, max: f64 },

    #[error("lifespan overflows u64: cutoff {cutoff} * {multiplier} + {padding}")]
    LifespanOverflow { cutoff: u64, multiplier: u64, padding: u64 },

    #[error("loc offset must be finite, got {0}")]
    InvalidLoc(f64),

    #[error("quantile must be in [0, 1), got {0}")]
    InvalidQuantile(f64),

    #[error("total amount must be finite and >= 0, got {0}")]
    InvalidAmount(f64),
}

pub type FlowResult<T> = Result<T, FlowError>;
