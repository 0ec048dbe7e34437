use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CounterError {
    /// Counter record (or its value field) does not exist in the store.
    /// The record is provisioned out of band, the handler never creates it.
    #[error("counter record not found")]
    NotFound,

    /// Store operation failed: connectivity, permissions, throttling or a response
    /// that could not be decoded.
    #[error("internal storage error: {reason}")]
    StoreInternalError { reason: String },

    /// Stored value is not a non-negative integer, or incrementing it would overflow.
    #[error("invalid counter value: {reason}")]
    InvalidValue { reason: String },

    #[error("configuration error: {reason}")]
    ConfigurationError { reason: String },
}
