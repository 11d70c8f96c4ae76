use crate::config::Config;
use crate::feedback::FeedbackStore;

#[derive(Clone)]
pub struct AppState {
    pub store: FeedbackStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            store: FeedbackStore::open(&config.feedback.feedback_file),
            config,
        }
    }
}
