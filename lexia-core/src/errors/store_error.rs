/// Store adapter errors. Uniqueness conflicts are NOT represented here —
/// they are a modeled insert outcome, not a failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {message}")]
    Backend { message: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}
