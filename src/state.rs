use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    db::{MAX_REVIEWS, ReviewStore},
    forms::SubmissionTokens,
    models::listing::ListingSessions,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReviewStore>,
    pub listing_sessions: SharedListingSessions,
    pub submission_tokens: SubmissionTokens,
    pub reviews_limit: usize,
}

pub type SharedListingSessions = Arc<Mutex<ListingSessions>>;

impl AppState {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self {
            store,
            listing_sessions: Default::default(),
            submission_tokens: SubmissionTokens::new(),
            reviews_limit: MAX_REVIEWS,
        }
    }

    pub fn with_reviews_limit(mut self, limit: usize) -> Self {
        self.reviews_limit = limit.clamp(1, MAX_REVIEWS);
        self
    }
}
