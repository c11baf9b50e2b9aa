//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The actor replied with an action result the client did not ask for.
    #[error("Unexpected action result: {0}")]
    UnexpectedResult(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}
