//! Error taxonomy shared by every service operation.
//!
//! Handlers map each variant to an HTTP status; storage internals stay on
//! `anyhow` and surface here through the `Storage` variant.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Bad input caught before any persistence attempt.
    #[error("{0}")]
    Validation(String),

    /// A referenced record could not be resolved; the message names the id.
    #[error("{0}")]
    Reference(String),

    /// A record addressed directly by id does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// The actor is not allowed to touch this record. Kept distinct from
    /// `NotFound` so callers can tell a missing request from a forbidden one.
    #[error("{0}")]
    Forbidden(String),

    /// Datastore failure. The chain is logged; callers see a generic message.
    #[error("storage failure")]
    Storage(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn reference(msg: impl Into<String>) -> Self {
        Self::Reference(msg.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
