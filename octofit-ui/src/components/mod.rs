//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod stat_card;

pub use loading::{state_view, EmptyState, ErrorBanner, Loading};
pub use nav::Nav;
pub use stat_card::{PageHeader, StatCard};
