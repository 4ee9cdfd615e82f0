use std::sync::Arc;
use crate::data_access::data_context::DataContext;

pub struct AppState {
    pub data_context: DataContext,
}

impl AppState {
    pub fn new(data_context: DataContext) -> SharedState {
        Arc::new(AppState { data_context })
    }
}

pub type SharedState = Arc<AppState>;
