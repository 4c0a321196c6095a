use std::sync::Arc;

use crate::domain::repositories::MappingRepository;

/// State shared by both listeners: one store handle for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MappingRepository>,
    pub root_url: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn MappingRepository>, root_url: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            root_url: root_url.into(),
        }
    }
}
