//! Web layer for the bus route engine.
//!
//! Provides JSON endpoints for route views, opposite stops and transfer
//! search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
