use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::{
    forms::{ClubSuggestionForm, FeedbackForm, SubmissionFlow},
    http::handlers::failure_message,
    pages::feedback_form::{self, FeedbackPage},
    state::AppState,
};

pub async fn get_feedback_form_handler() -> Html<String> {
    Html(feedback_form::render(&FeedbackPage::fresh()))
}

pub async fn submit_club_suggestion_handler(
    State(state): State<AppState>,
    Form(form): Form<ClubSuggestionForm>,
) -> Response {
    let token = form.token();
    let mut flow = SubmissionFlow::new();

    match flow
        .submit(state.store.as_ref(), &state.submission_tokens, token, &form)
        .await
    {
        Ok(confirmation) => Redirect::to(confirmation).into_response(),
        Err(err) => {
            let page = FeedbackPage {
                club_error: Some(failure_message("your club suggestion", &err)),
                club_token: token.unwrap_or_else(Uuid::new_v4),
                club: form,
                ..FeedbackPage::fresh()
            };
            (err.status(), Html(feedback_form::render(&page))).into_response()
        }
    }
}

pub async fn submit_feedback_handler(
    State(state): State<AppState>,
    Form(form): Form<FeedbackForm>,
) -> Response {
    let token = form.token();
    let mut flow = SubmissionFlow::new();

    match flow
        .submit(state.store.as_ref(), &state.submission_tokens, token, &form)
        .await
    {
        Ok(confirmation) => Redirect::to(confirmation).into_response(),
        Err(err) => {
            let page = FeedbackPage {
                feedback_error: Some(failure_message("your feedback", &err)),
                feedback_token: token.unwrap_or_else(Uuid::new_v4),
                feedback: form,
                ..FeedbackPage::fresh()
            };
            (err.status(), Html(feedback_form::render(&page))).into_response()
        }
    }
}
