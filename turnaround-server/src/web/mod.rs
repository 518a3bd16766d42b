//! HTTP adapter over the schedule pipeline.
//!
//! Accepts a raw SSIM file and answers with the connection report as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
