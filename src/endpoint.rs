//! Endpoint Resolution
//!
//! Maps each backend resource to its URL. The base URL comes from the
//! Codespaces workspace name when one is present, otherwise from a configured
//! local base (default `http://localhost:8000`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Local backend used when no workspace name or override is configured
pub const DEFAULT_LOCAL_BASE: &str = "http://localhost:8000";

/// Environment variable carrying the Codespaces workspace name
pub const CODESPACE_ENV: &str = "CODESPACE_NAME";

/// Environment variable carrying an explicit base URL override
pub const API_URL_ENV: &str = "OCTOFIT_API_URL";

/// The five read-only resources exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Activities,
    Leaderboard,
    Teams,
    Users,
    Workouts,
}

impl Resource {
    /// All resources, in navigation order
    pub const ALL: [Resource; 5] = [
        Resource::Activities,
        Resource::Leaderboard,
        Resource::Teams,
        Resource::Users,
        Resource::Workouts,
    ];

    /// REST path appended to the base URL
    pub fn api_path(self) -> &'static str {
        match self {
            Resource::Activities => "/api/activities/",
            Resource::Leaderboard => "/api/leaderboard/",
            Resource::Teams => "/api/teams/",
            Resource::Users => "/api/users/",
            Resource::Workouts => "/api/workouts/",
        }
    }

    /// Client-side route of the page showing this resource
    pub fn route(self) -> &'static str {
        match self {
            Resource::Activities => "/activities",
            Resource::Leaderboard => "/leaderboard",
            Resource::Teams => "/teams",
            Resource::Users => "/users",
            Resource::Workouts => "/workouts",
        }
    }

    /// Human-readable title
    pub fn title(self) -> &'static str {
        match self {
            Resource::Activities => "Activities",
            Resource::Leaderboard => "Leaderboard",
            Resource::Teams => "Teams",
            Resource::Users => "Users",
            Resource::Workouts => "Workouts",
        }
    }

    /// Look up a resource by its client route
    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.route() == route)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Resolves resource URLs against the configured backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointResolver {
    codespace_name: Option<String>,
    local_base: Option<String>,
}

impl EndpointResolver {
    /// Create a resolver. Empty strings count as absent.
    pub fn new(codespace_name: Option<String>, local_base: Option<String>) -> Self {
        Self {
            codespace_name: codespace_name.filter(|s| !s.is_empty()),
            local_base: local_base.filter(|s| !s.is_empty()),
        }
    }

    /// Build a resolver from `CODESPACE_NAME` and `OCTOFIT_API_URL`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var(CODESPACE_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        )
    }

    pub fn codespace_name(&self) -> Option<&str> {
        self.codespace_name.as_deref()
    }

    /// Base URL without a trailing slash.
    ///
    /// The workspace name wins over any local override.
    pub fn base_url(&self) -> String {
        match &self.codespace_name {
            Some(name) => format!("https://{}-8000.app.github.dev", name),
            None => self
                .local_base
                .as_deref()
                .unwrap_or(DEFAULT_LOCAL_BASE)
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Full URL for a resource
    pub fn resolve(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url(), resource.api_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codespace_url() {
        let resolver = EndpointResolver::new(Some("abc123".to_string()), None);
        assert_eq!(
            resolver.resolve(Resource::Activities),
            "https://abc123-8000.app.github.dev/api/activities/"
        );
    }

    #[test]
    fn test_local_default() {
        let resolver = EndpointResolver::new(None, None);
        assert_eq!(
            resolver.resolve(Resource::Activities),
            "http://localhost:8000/api/activities/"
        );
    }

    #[test]
    fn test_override_and_trailing_slash() {
        let resolver = EndpointResolver::new(None, Some("http://10.0.0.5:9000/".to_string()));
        assert_eq!(
            resolver.resolve(Resource::Teams),
            "http://10.0.0.5:9000/api/teams/"
        );
    }

    #[test]
    fn test_codespace_wins_over_override() {
        let resolver = EndpointResolver::new(
            Some("ws-1".to_string()),
            Some("http://example.test".to_string()),
        );
        assert_eq!(
            resolver.resolve(Resource::Users),
            "https://ws-1-8000.app.github.dev/api/users/"
        );
    }

    #[test]
    fn test_empty_codespace_is_absent() {
        let resolver = EndpointResolver::new(Some(String::new()), None);
        assert_eq!(resolver.codespace_name(), None);
        assert_eq!(resolver.base_url(), DEFAULT_LOCAL_BASE);
    }

    #[test]
    fn test_routes_round_trip() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_route(resource.route()), Some(resource));
            assert!(resource.api_path().ends_with('/'));
        }
        assert_eq!(Resource::from_route("/settings"), None);
    }
}
