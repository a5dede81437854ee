use rh_agent::AgentError;
use rh_core::CoreError;
use rh_flow::FlowError;
use rh_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("agent error: {0}")]
    Agent(#[from] AgentError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("invalid flow parameters: {0}")]
    Flow(#[from] FlowError),

    #[error("failed to parse model config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
