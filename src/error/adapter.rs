use thiserror::Error;

/// Failure of a single external API call.
///
/// Every adapter call resolves to either a typed record or one of these variants;
/// adapters never panic. The `Display` output carries raw upstream detail and is
/// intended for operator logs only, never for the chat channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Network-level failure: DNS, refused connection, timeout, broken body.
    #[error("Request to {url} failed: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying transport error message
        message: String,
    },

    /// Remote answered with a non-2xx status other than the ones mapped below.
    #[error("Request to {url} returned HTTP {status}")]
    Remote {
        /// Requested URL
        url: String,
        /// HTTP status code returned by the remote
        status: u16,
    },

    /// Remote reported that the requested record does not exist (HTTP 404).
    #[error("No record named '{name}' exists upstream")]
    NotFound {
        /// The name that was looked up
        name: String,
    },

    /// Remote answered 2xx but the body is missing expected fields or is not JSON.
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse {
        /// Requested URL
        url: String,
        /// Decoder error describing what was missing
        reason: String,
    },

    /// User input cannot be turned into a request.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Commit history request succeeded but contained no commits.
    #[error("Commit history is empty")]
    EmptyHistory,
}

impl AdapterError {
    /// Short machine-friendly name of the failure kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::Remote { .. } => "remote",
            Self::NotFound { .. } => "not_found",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::EmptyHistory => "empty_history",
        }
    }
}
