//! Error types for profile resolution

use thiserror::Error;

/// Errors surfaced by profile resolution.
///
/// Any error aborts the whole batch call it occurred in; no cache entries are
/// written for that call's uncached keys.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// The simulated call failed, returned nothing, or the ledger could not be reached
    #[error("Remote call error: {0}")]
    RemoteCall(String),

    /// A BCS payload from the ledger could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] bcs::Error),

    /// A call argument could not be BCS-encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// The object was fetched without content or ownership, or lacks identity fields
    #[error("Malformed object {object_id}: {reason}")]
    MalformedObject { object_id: String, reason: String },

    /// The object is not a profile
    #[error("Wrong object type for {object_id}: expected a Profile but got '{found}'")]
    WrongType { object_id: String, found: String },

    /// The object is a profile but not address- or object-owned
    #[error("Expected an owned object for {object_id}, got {owner}")]
    UnexpectedOwnership { object_id: String, owner: String },

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProfileError {
    /// Wrap a transport failure, keeping its full context chain.
    pub fn remote(context: &str, err: anyhow::Error) -> Self {
        ProfileError::RemoteCall(format!("{}: {:#}", context, err))
    }
}

/// Result type alias for profile resolution
pub type Result<T> = std::result::Result<T, ProfileError>;
