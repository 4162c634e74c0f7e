use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Not found")]
    NotFound(String),
}

impl AppError {
    pub fn to_response(&self) -> (StatusCode, String) {
        match self {
            AppError::Store(e) => (StatusCode::BAD_GATEWAY, e.user_message()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::ServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }
}

/// Failures talking to the hosted table store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store answered and refused the request.
    #[error("store rejected request: {0}")]
    Rejected(String),

    #[error("store transport failure: {0}")]
    Transport(String),

    #[error("could not decode store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Message shown to a visitor. Rejections are relayed verbatim.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Rejected(msg) => msg.clone(),
            StoreError::Transport(_) | StoreError::Decode(_) => GENERIC_FAILURE.to_string(),
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

pub const GENERIC_FAILURE: &str = "An unexpected error occurred. Please try again.";

/// Why a form submission did not reach the confirmation view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A local precondition failed; the store was never contacted.
    #[error("{0}")]
    Invalid(String),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("This form is already being submitted.")]
    AlreadySubmitting,
}

impl SubmitError {
    pub fn status(&self) -> StatusCode {
        match self {
            SubmitError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmitError::Rejected(_) | SubmitError::Unexpected(_) => StatusCode::BAD_GATEWAY,
            SubmitError::AlreadySubmitting => StatusCode::CONFLICT,
        }
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Rejected(msg) => SubmitError::Rejected(msg),
            other => SubmitError::Unexpected(other.user_message()),
        }
    }
}
