//! # OctoFit Tracker
//!
//! Client for the OctoFit fitness backend: resolves the backend address,
//! fetches the five read-only resources (activities, leaderboard, teams,
//! users, workouts), tolerates both paginated and bare list responses, and
//! renders each resource as a dashboard page.
//!
//! ## Modules
//!
//! - [`endpoint`]: Resource URLs from the Codespaces name or a local base
//! - [`client`]: Fetch-and-normalize routine and its error taxonomy
//! - [`models`]: Typed records with field fallbacks resolved once
//! - [`view`]: Per-page `Loading | Ready | Failed` state and its holder
//! - [`pages`]: Statistics and text rendering per resource
//! - [`app`]: Routing, navigation and the native shell
//! - [`server`]: Development backend serving seed data (native only)
//!
//! With the default `native` feature off, only the pure core is built so it
//! can be shared with the browser frontend.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use octofit::app::Shell;
//! use octofit::client::ApiClient;
//! use octofit::endpoint::EndpointResolver;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(EndpointResolver::from_env(), Duration::from_secs(30))?;
//!     let shell = Shell::new(client);
//!
//!     let page = shell.open("/leaderboard").await;
//!     println!("{}", page.full());
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod endpoint;
pub mod models;
pub mod pages;
pub mod view;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;

// Re-export top-level types for convenience
pub use app::Route;
pub use client::{ErrorKind, FetchError, FetchResult};
pub use endpoint::{EndpointResolver, Resource};
pub use models::{Activity, FromRecord, LeaderboardEntry, Team, User, Workout};
pub use pages::Page;
pub use view::ViewState;

#[cfg(feature = "native")]
pub use app::Shell;
#[cfg(feature = "native")]
pub use client::{ApiClient, RecordSource};
#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoadedConfig};
#[cfg(feature = "native")]
pub use server::{build_router, serve, AppState, SeedData, ServerError};
#[cfg(feature = "native")]
pub use view::ViewStateHolder;
