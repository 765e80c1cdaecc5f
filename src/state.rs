use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, engine::QuizEngine};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuizEngine>,
    pub config: Config,
}

impl AppState {
    pub fn new(engine: QuizEngine, config: Config) -> Self {
        Self {
            engine: Arc::new(engine),
            config,
        }
    }
}

impl FromRef<AppState> for Arc<QuizEngine> {
    fn from_ref(state: &AppState) -> Self {
        state.engine.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
