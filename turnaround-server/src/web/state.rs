//! Application state for the web layer.

use std::sync::Arc;

use crate::names::NameDirectory;
use crate::pipeline::Pipeline;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Configured schedule pipeline
    pub pipeline: Arc<Pipeline>,

    /// Display names for report rows
    pub names: Arc<NameDirectory>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(pipeline: Pipeline, names: NameDirectory) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            names: Arc::new(names),
        }
    }
}
