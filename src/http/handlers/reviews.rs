use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    db::review::get::get_recent_reviews,
    errors::{AppError, StoreError},
    models::{VoteChoice, VoteState, listing::ListingSession},
    pages::reviews::{self, ListingStatus},
    reviews::{ReviewCard, just_submitted, strip_submitted},
    state::AppState,
};

pub const LISTING_COOKIE: &str = "listing_session";
pub const LOAD_FAILURE: &str = "Failed to load reviews.";

const LISTING_PATH: &str = "/reviews";

#[derive(Deserialize)]
pub struct VotePayload {
    pub choice: VoteChoice,
}

#[derive(Serialize)]
pub struct ExpandResponse {
    pub expanded: bool,
}

/// Fetches the recent reviews and, when there are any, starts a fresh listing
/// session for this page view.
pub async fn get_reviews_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    jar: CookieJar,
) -> Response {
    let now = Utc::now();
    let fetched = get_recent_reviews(state.store.as_ref(), state.reviews_limit).await;

    let (status, cards, failure) = match fetched {
        Ok(records) => {
            let cards: Vec<ReviewCard> = records
                .iter()
                .map(|r| ReviewCard::from_record(r, now))
                .collect();
            (StatusCode::OK, cards, None)
        }
        Err(err) => {
            tracing::error!("Error loading reviews: {}", err);
            let message = match &err {
                AppError::Store(e @ StoreError::Rejected(_)) => e.user_message(),
                _ => LOAD_FAILURE.to_string(),
            };
            (StatusCode::BAD_GATEWAY, Vec::new(), Some(message))
        }
    };

    let session = ListingSession::new();
    let confirmation =
        just_submitted(query.as_deref()).then(|| strip_submitted(LISTING_PATH, query.as_deref()));
    let listing_status = match &failure {
        Some(msg) => ListingStatus::Failed(msg),
        None => ListingStatus::Loaded,
    };
    let page = reviews::render(&cards, &session, listing_status, confirmation.as_deref());

    // Nothing to vote on, so nothing to keep.
    if cards.is_empty() {
        return (status, Html(page)).into_response();
    }

    let session_id = state.listing_sessions.lock().await.insert(session);
    let cookie = Cookie::build((LISTING_COOKIE, session_id.to_string()))
        .path(LISTING_PATH)
        .http_only(true)
        .same_site(SameSite::Lax);

    (status, jar.add(cookie), Html(page)).into_response()
}

fn session_id(jar: &CookieJar) -> Result<Uuid, (StatusCode, String)> {
    jar.get(LISTING_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
        .ok_or_else(|| AppError::NotFound("Listing session not found".into()).to_response())
}

pub async fn vote_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    jar: CookieJar,
    Json(payload): Json<VotePayload>,
) -> Result<Json<VoteState>, (StatusCode, String)> {
    let id = session_id(&jar)?;
    let mut sessions = state.listing_sessions.lock().await;

    let votes = sessions
        .get_mut(&id)
        .and_then(|session| session.vote(&record_id, payload.choice))
        .ok_or_else(|| {
            tracing::warn!("Vote for unknown review {} in session {}", record_id, id);
            AppError::NotFound("Review not found in this listing".into()).to_response()
        })?;

    Ok(Json(votes))
}

pub async fn expand_handler(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    jar: CookieJar,
) -> Result<Json<ExpandResponse>, (StatusCode, String)> {
    let id = session_id(&jar)?;
    let mut sessions = state.listing_sessions.lock().await;

    let expanded = sessions
        .get_mut(&id)
        .and_then(|session| session.toggle_expanded(&record_id))
        .ok_or_else(|| {
            AppError::NotFound("Review not found in this listing".into()).to_response()
        })?;

    Ok(Json(ExpandResponse { expanded }))
}
