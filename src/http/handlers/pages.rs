use axum::{http::StatusCode, response::Html};

use crate::pages::static_pages::{self, ThankYou};

pub async fn home_handler() -> Html<String> {
    Html(static_pages::home())
}

pub async fn terms_handler() -> Html<String> {
    Html(static_pages::terms())
}

pub async fn thank_you_review_handler() -> Html<String> {
    Html(static_pages::thank_you(ThankYou::Review))
}

pub async fn thank_you_club_handler() -> Html<String> {
    Html(static_pages::thank_you(ThankYou::ClubSuggestion))
}

pub async fn thank_you_feedback_handler() -> Html<String> {
    Html(static_pages::thank_you(ThankYou::Feedback))
}

pub async fn health_handler() -> &'static str {
    "ok"
}

pub async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(static_pages::not_found()))
}
