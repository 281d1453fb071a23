//! Error taxonomy for the workspace. Each concern has its own enum; the
//! top-level [`LexiaError`] unifies them for callers that cross seams.
//!
//! A uniqueness conflict during insert is deliberately NOT an error — it is
//! modeled as [`crate::traits::InsertOutcome::Conflict`] so the registry's
//! dedup logic is a plain branch over an explicit variant.

mod gateway_error;
mod registry_error;
mod store_error;

pub use gateway_error::GatewayError;
pub use registry_error::RegistryError;
pub use store_error::StoreError;

/// Workspace-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum LexiaError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("configuration error: {reason}")]
    Config { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Workspace-wide result alias.
pub type LexiaResult<T> = Result<T, LexiaError>;
