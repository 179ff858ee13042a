//! Report API module
//!
//! Serves the assembled report document at the boundary to the
//! presentation layer: the full document, the leaderboard, and
//! per-model / per-task drill-downs.

mod handlers;
mod server;
mod state;

pub use server::start_server;
pub use state::AppState;
