use crate::{IpInfo, NetworkError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod ipapi;

/// Capability of fetching one geolocation record.
///
/// The view model depends on this trait rather than on a concrete HTTP stack,
/// so tests substitute a scripted double. The returned future resolves exactly
/// once per call; there is no retry, caching, or cancellation behind it.
#[async_trait]
pub trait NetworkService: Send + Sync + Debug {
    async fn fetch_ip_info(&self) -> Result<IpInfo, NetworkError>;
}

/// Map a non-success HTTP status to its classified error.
pub(crate) fn classify_status(status: reqwest::StatusCode) -> NetworkError {
    match status.as_u16() {
        404 => NetworkError::Network,
        408 => NetworkError::Timeout,
        500 => NetworkError::Server,
        code => NetworkError::other("http", code, format!("Unexpected HTTP status {status}")),
    }
}
