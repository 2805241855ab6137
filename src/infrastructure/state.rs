use std::sync::Arc;

use crate::infrastructure::{config::Config, store::RosterStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn RosterStore>,
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn RosterStore>) -> Self {
        Self { config, store }
    }
}
