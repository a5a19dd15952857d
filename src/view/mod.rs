//! Page View State
//!
//! [`ViewState`] is the pure state machine shared by every frontend;
//! [`ViewStateHolder`] drives it from Tokio tasks for the native shell.

pub mod state;

#[cfg(feature = "native")]
pub mod holder;

pub use state::ViewState;

#[cfg(feature = "native")]
pub use holder::ViewStateHolder;
