use thiserror::Error;

/// Classified failure of a single fetch attempt.
///
/// The `Display` strings are the exact messages the view model surfaces to the
/// UI, so they are part of the public contract. Every error is terminal for its
/// fetch; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The endpoint answered HTTP 404.
    #[error("Network error")]
    Network,

    /// The endpoint answered HTTP 408.
    #[error("Network Timeout")]
    Timeout,

    /// The endpoint answered HTTP 500.
    #[error("Server error")]
    Server,

    /// Any other transport, status, or decoding failure, preserving the
    /// underlying layer ("transport", "http", "decode"), code, and description.
    #[error("{description}")]
    Other {
        domain: String,
        code: u16,
        description: String,
    },
}

impl NetworkError {
    pub fn other(domain: &str, code: u16, description: impl Into<String>) -> Self {
        NetworkError::Other {
            domain: domain.to_string(),
            code,
            description: description.into(),
        }
    }
}
