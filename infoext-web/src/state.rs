use std::sync::Arc;

use infoext_core::{MentionResolver, ModelCache};

/// Estado compartilhado entre os handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<ModelCache>,
    /// Presente apenas quando a ligação de triplas está configurada.
    pub resolver: Option<Arc<dyn MentionResolver>>,
}

impl AppState {
    pub fn new(cache: ModelCache) -> Self {
        Self { cache: Arc::new(cache), resolver: None }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn MentionResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}
