use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::{Catalog, SpicyLabels};
use crate::services::{RandomIndex, RngIndex};

/// Random-index provider shared between requests
pub type SharedPicker = Arc<Mutex<Box<dyn RandomIndex + Send>>>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards
    pub catalog: Arc<Catalog>,
    pub labels: Arc<SpicyLabels>,
    pub picker: SharedPicker,
}

impl AppState {
    /// Creates state with an entropy-seeded picker
    pub fn new(catalog: Catalog, labels: SpicyLabels) -> Self {
        Self::with_picker(catalog, labels, RngIndex::from_entropy())
    }

    /// Creates state with a caller-provided picker
    pub fn with_picker(
        catalog: Catalog,
        labels: SpicyLabels,
        picker: impl RandomIndex + Send + 'static,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            labels: Arc::new(labels),
            picker: Arc::new(Mutex::new(Box::new(picker))),
        }
    }
}
