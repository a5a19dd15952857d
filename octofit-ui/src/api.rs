//! HTTP API Client
//!
//! Resolves the backend address and fetches normalized record lists.

use gloo_net::http::Request;
use octofit::client::{parse_body, FetchError, FetchResult};
use octofit::endpoint::EndpointResolver;
use serde_json::Value;

/// Local storage key holding an explicit backend base URL
pub const API_URL_KEY: &str = "octofit_api_url";

/// Resolver for this build.
///
/// `CODESPACE_NAME` is read at compile time; a base URL saved in local
/// storage is used when the build carried no workspace name.
pub fn resolver() -> EndpointResolver {
    EndpointResolver::new(
        option_env!("CODESPACE_NAME").map(String::from),
        stored_base_url(),
    )
}

fn stored_base_url() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(API_URL_KEY)
        .ok()?
}

/// GET a resource URL and collapse the body into its record list
pub async fn fetch_records(url: &str) -> FetchResult<Vec<Value>> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    parse_body(&body)
}
