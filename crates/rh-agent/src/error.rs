use rh_core::AgentId;
use rh_flow::FlowError;
use rh_grid::GridError;
use rh_hub::HubError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("hub contract violated: {0}")]
    Hub(#[from] HubError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("invalid flow parameters: {0}")]
    Flow(#[from] FlowError),

    #[error("agent {0} not found")]
    UnknownAgent(AgentId),
}

pub type AgentResult<T> = Result<T, AgentError>;
