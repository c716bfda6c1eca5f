//! Core library for the `findmyip` client.
//!
//! This crate defines:
//! - The geolocation record decoded from the IP-info endpoint
//! - A classified error taxonomy with display-ready messages
//! - Abstraction over the network fetch, plus the ipapi.co implementation
//! - The view model publishing either a record or an error message
//!
//! It is used by `findmyip-cli`, but can also be reused by other frontends.

pub mod error;
pub mod model;
pub mod service;
pub mod viewmodel;

pub use error::NetworkError;
pub use model::IpInfo;
pub use service::{NetworkService, ipapi::IpapiService};
pub use viewmodel::{DEPRECATED_IP_VERSION_MESSAGE, IpInfoViewModel};
