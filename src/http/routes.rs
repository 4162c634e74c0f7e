use axum::{
    Router,
    routing::{get, post},
};

use crate::{
    http::handlers::{
        expand_handler, get_feedback_form_handler, get_review_form_handler, get_reviews_handler,
        health_handler, home_handler, submit_club_suggestion_handler, submit_feedback_handler,
        submit_review_handler, terms_handler, thank_you_club_handler, thank_you_feedback_handler,
        thank_you_review_handler, vote_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/terms", get(terms_handler))
        .route("/health", get(health_handler))
        .route(
            "/review_form",
            get(get_review_form_handler).post(submit_review_handler),
        )
        .route("/feedback_form", get(get_feedback_form_handler))
        .route("/feedback_form/club", post(submit_club_suggestion_handler))
        .route("/feedback_form/feedback", post(submit_feedback_handler))
        .route("/reviews", get(get_reviews_handler))
        .route("/reviews/session/{record_id}/vote", post(vote_handler))
        .route("/reviews/session/{record_id}/expand", post(expand_handler))
        .route("/thankyou_review", get(thank_you_review_handler))
        .route("/thankyou_clubsug", get(thank_you_club_handler))
        .route("/thankyou_feedback", get(thank_you_feedback_handler))
        .with_state(state)
}
