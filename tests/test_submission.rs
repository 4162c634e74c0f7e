use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
    response::Response,
};
use coach_reviews::{
    app,
    db::MemoryStore,
    errors::{GENERIC_FAILURE, StoreError},
    forms::{club::MISSING_CLUB_FIELDS, feedback::MISSING_FEEDBACK_FIELDS, review::MISSING_RATINGS},
    models::Table,
    state::AppState,
};
use serde_json::Value;
use tower::ServiceExt;
use url::form_urlencoded;
use uuid::Uuid;

fn setup() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let router = app(AppState::new(store.clone()));
    (router, store)
}

fn review_fields(token: &str) -> Vec<(&'static str, String)> {
    vec![
        ("submissionToken", token.to_string()),
        ("reviewerName", "Jordan Smith".into()),
        ("email", "".into()),
        ("phone", "555-0100".into()),
        ("coachTiming", "current".into()),
        ("timeAgo", "2-3-years".into()),
        ("clubName", "La Roca FC".into()),
        ("coachName", "Sam Lee".into()),
        ("teamGender", "girls".into()),
        ("ageGroup", "U12".into()),
        ("rating-technical", "5".into()),
        ("rating-communication", "4".into()),
        ("rating-development", "4".into()),
        ("rating-attitude", "3".into()),
        ("rating-organization", "5".into()),
        ("explanation-attitude", "Raises voice at times".into()),
        ("reviewText", "Great with the kids.".into()),
    ]
}

fn encode(fields: &[(&str, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter().map(|(k, v)| (*k, v.as_str())))
        .finish()
}

async fn post_form(router: &Router, path: &str, body: String) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_valid_review_is_inserted_once_and_redirects() {
    let (router, store) = setup();
    let token = Uuid::new_v4().to_string();

    let response = post_form(&router, "/review_form", encode(&review_fields(&token))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/thankyou_review");
    assert_eq!(store.insert_count(), 1);

    let rows = store.rows(Table::Reviews).await;
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["reviewer_full_name"], "Jordan Smith");
    assert_eq!(row["coach_timing"], "current");
    assert!(row["time_ago"].is_null());
    assert_eq!(row["state"], "Utah");
    assert_eq!(row["technical_rating"], 5);
    assert_eq!(row["professionalism_rating"], 5);
    assert!(row["email"].is_null());
    assert_eq!(row["phone_number"], "555-0100");
    assert_eq!(row["attitude_comment"], "Raises voice at times");
    assert!(row["technical_comment"].is_null());
}

#[tokio::test]
async fn test_reused_form_with_edited_answers_is_stored() {
    let (router, store) = setup();
    let token = Uuid::new_v4().to_string();

    let first = post_form(&router, "/review_form", encode(&review_fields(&token))).await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    // Going back restores the same page, token included.
    let mut edited = review_fields(&token);
    for (key, value) in edited.iter_mut() {
        if *key == "coachName" {
            *value = "Pat Kim".into();
        }
    }
    let second = post_form(&router, "/review_form", encode(&edited)).await;
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&second), "/thankyou_review");

    let coaches: Vec<Value> = store
        .rows(Table::Reviews)
        .await
        .iter()
        .map(|row| row["coach_name"].clone())
        .collect();
    assert_eq!(coaches, vec![Value::from("Sam Lee"), Value::from("Pat Kim")]);
    assert_eq!(store.insert_count(), 2);
}

#[tokio::test]
async fn test_form_in_flight_is_refused_without_store_call() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    let tokens = state.submission_tokens.clone();
    let router = app(state);

    let token = Uuid::new_v4();
    let held = tokens.claim(token).expect("token is free");

    let response = post_form(&router, "/review_form", encode(&review_fields(&token.to_string()))).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(store.insert_count(), 0);
    assert!(body_text(response).await.contains("This form is already being submitted."));

    drop(held);
    let retry = post_form(&router, "/review_form", encode(&review_fields(&token.to_string()))).await;
    assert_eq!(retry.status(), StatusCode::SEE_OTHER);
    assert_eq!(store.insert_count(), 1);
}

#[tokio::test]
async fn test_missing_rating_never_contacts_store() {
    let (router, store) = setup();
    let mut fields = review_fields(&Uuid::new_v4().to_string());
    fields.retain(|(k, _)| *k != "rating-development");

    let response = post_form(&router, "/review_form", encode(&fields)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.insert_count(), 0);
    let html = body_text(response).await;
    assert!(html.contains(MISSING_RATINGS));
    // The visitor's answers are still on the page.
    assert!(html.contains("value=\"Sam Lee\""));
}

#[tokio::test]
async fn test_past_coach_requires_time_bucket() {
    let (router, store) = setup();
    let mut fields = review_fields(&Uuid::new_v4().to_string());
    for (key, value) in fields.iter_mut() {
        match *key {
            "coachTiming" => *value = "past".into(),
            "timeAgo" => value.clear(),
            _ => {}
        }
    }

    let response = post_form(&router, "/review_form", encode(&fields)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn test_store_rejection_is_shown_and_form_retained() {
    let (router, store) = setup();
    store
        .fail_with(Some(StoreError::Rejected("new row violates check constraint".into())))
        .await;
    let token = Uuid::new_v4().to_string();

    let response = post_form(&router, "/review_form", encode(&review_fields(&token))).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(store.insert_count(), 1);
    let html = body_text(response).await;
    assert!(html.contains("There was a problem submitting your review:"));
    assert!(html.contains("new row violates check constraint"));
    assert!(html.contains("value=\"Sam Lee\""));
    assert!(html.contains(&format!("value=\"{token}\"")));

    // A failed attempt leaves the token free for a retry.
    store.fail_with(None).await;
    let retry = post_form(&router, "/review_form", encode(&review_fields(&token))).await;
    assert_eq!(retry.status(), StatusCode::SEE_OTHER);
    assert_eq!(store.rows(Table::Reviews).await.len(), 1);
}

#[tokio::test]
async fn test_transport_failure_shows_generic_message() {
    let (router, store) = setup();
    store
        .fail_with(Some(StoreError::Transport("connection refused".into())))
        .await;

    let response = post_form(
        &router,
        "/review_form",
        encode(&review_fields(&Uuid::new_v4().to_string())),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains(GENERIC_FAILURE));
    assert!(!html.contains("connection refused"));
}

#[tokio::test]
async fn test_club_suggestion_flow() {
    let (router, store) = setup();

    let missing = encode(&[("clubName", "Forza FC".to_string())]);
    let response = post_form(&router, "/feedback_form/club", missing).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains(MISSING_CLUB_FIELDS));
    assert_eq!(store.insert_count(), 0);

    let valid = encode(&[
        ("submissionToken", Uuid::new_v4().to_string()),
        ("clubName", "Forza FC".to_string()),
        ("clubLocation", "Utah".to_string()),
        ("clubCity", "".to_string()),
    ]);
    let response = post_form(&router, "/feedback_form/club", valid).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/thankyou_clubsug");

    let rows = store.rows(Table::ClubSuggestions).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["state"], "Utah");
    assert!(rows[0]["city"].is_null());
}

#[tokio::test]
async fn test_feedback_flow() {
    let (router, store) = setup();

    let missing = encode(&[("ratingCriteria", "Punctuality".to_string())]);
    let response = post_form(&router, "/feedback_form/feedback", missing).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_text(response).await.contains(MISSING_FEEDBACK_FIELDS));

    let valid = encode(&[
        ("submissionToken", Uuid::new_v4().to_string()),
        ("ratingCriteria", "Punctuality".to_string()),
        ("featureIdeas", "Coach replies".to_string()),
    ]);
    let response = post_form(&router, "/feedback_form/feedback", valid).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/thankyou_feedback");
    assert_eq!(store.rows(Table::Feedback).await.len(), 1);
}

#[tokio::test]
async fn test_flow_states() {
    use coach_reviews::{
        errors::SubmitError,
        forms::{FeedbackForm, SubmissionFlow, SubmissionState, SubmissionTokens},
    };

    let store = MemoryStore::new();
    let tokens = SubmissionTokens::new();
    let mut flow = SubmissionFlow::new();
    assert_eq!(flow.state(), &SubmissionState::Idle { error: None });

    let empty = FeedbackForm::default();
    let err = flow.submit(&store, &tokens, None, &empty).await.unwrap_err();
    assert_eq!(err, SubmitError::Invalid(MISSING_FEEDBACK_FIELDS.into()));
    assert_eq!(flow.state(), &SubmissionState::Idle { error: Some(err) });

    let form = FeedbackForm {
        rating_criteria: "Punctuality".into(),
        feature_ideas: "Coach replies".into(),
        ..Default::default()
    };
    let path = flow.submit(&store, &tokens, Some(Uuid::new_v4()), &form).await.unwrap();
    assert_eq!(path, "/thankyou_feedback");
    assert_eq!(flow.state(), &SubmissionState::Success);
    assert_eq!(store.insert_count(), 1);
}
