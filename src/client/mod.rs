//! Backend Client
//!
//! Fetch-and-normalize routine shared by every page:
//!
//! 1. GET the resolved resource URL
//! 2. non-success status or transport failure → [`FetchError::Status`] / [`FetchError::Network`]
//! 3. parse the body as JSON → [`FetchError::Parse`] on failure
//! 4. collapse `{"results": [...]}` or `[...]` into one record sequence

pub mod error;
pub mod normalize;

#[cfg(feature = "native")]
pub mod http;

pub use error::{ErrorKind, FetchError, FetchResult};
pub use normalize::{normalize, parse_body};

#[cfg(feature = "native")]
pub use http::{ApiClient, RecordSource};
