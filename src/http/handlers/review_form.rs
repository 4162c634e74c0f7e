use axum::{
    Form,
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use uuid::Uuid;

use crate::{
    forms::{ReviewForm, SubmissionFlow},
    http::handlers::failure_message,
    pages::review_form,
    state::AppState,
};

pub async fn get_review_form_handler() -> Html<String> {
    Html(review_form::render(&ReviewForm::default(), None, Uuid::new_v4()))
}

pub async fn submit_review_handler(
    State(state): State<AppState>,
    Form(form): Form<ReviewForm>,
) -> Response {
    let token = form.token();
    let mut flow = SubmissionFlow::new();

    match flow
        .submit(state.store.as_ref(), &state.submission_tokens, token, &form)
        .await
    {
        Ok(confirmation) => {
            tracing::info!("Review submitted for coach {}", form.coach_name.trim());
            Redirect::to(confirmation).into_response()
        }
        Err(err) => {
            let message = failure_message("your review", &err);
            let page = review_form::render(&form, Some(&message), token.unwrap_or_else(Uuid::new_v4));
            (err.status(), Html(page)).into_response()
        }
    }
}
