use std::sync::Arc;

use nutrilabel_core::application::NutrilabelService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutrilabelService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutrilabelService) -> Self {
        Self { args, service }
    }
}
