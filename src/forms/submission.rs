use std::{
    collections::HashSet,
    sync::{Arc, Mutex, MutexGuard},
};

use serde::Serialize;
use uuid::Uuid;

use crate::{
    db::{ReviewStore, review::post::insert_row},
    errors::SubmitError,
    models::Table,
};

/// A form that validates into exactly one row of one table.
pub trait FormSubmission {
    type Row: Serialize + Send + Sync;

    const TABLE: Table;
    /// Where the visitor lands after a successful insert.
    const CONFIRMATION_PATH: &'static str;

    /// Local, synchronous precondition checks plus normalization.
    fn validate(&self) -> Result<Self::Row, String>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle { error: Option<SubmitError> },
    Submitting,
    Success,
}

/// Idle -> Submitting -> Success, or back to Idle carrying the error.
#[derive(Debug)]
pub struct SubmissionFlow {
    state: SubmissionState,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFlow {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle { error: None },
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Validates `form` and, if it passes, issues one insert. Returns the
    /// confirmation path on success.
    ///
    /// `token` identifies the rendered form. The token set is what stops a
    /// double submit: a token that is still in flight is refused, and once the
    /// attempt finishes the token is free again.
    pub async fn submit<F>(
        &mut self,
        store: &dyn ReviewStore,
        tokens: &SubmissionTokens,
        token: Option<Uuid>,
        form: &F,
    ) -> Result<&'static str, SubmitError>
    where
        F: FormSubmission + Sync,
    {
        let row = match form.validate() {
            Ok(row) => row,
            Err(msg) => {
                tracing::warn!("Rejected {} submission: {}", F::TABLE.name(), msg);
                return Err(self.fail(SubmitError::Invalid(msg)));
            }
        };

        let Some(_guard) = tokens.claim(token.unwrap_or_else(Uuid::new_v4)) else {
            tracing::warn!("Refused {} submission already in flight", F::TABLE.name());
            return Err(SubmitError::AlreadySubmitting);
        };

        self.state = SubmissionState::Submitting;

        match insert_row(store, F::TABLE, &row).await {
            Ok(()) => {
                tracing::info!("Stored {} submission", F::TABLE.name());
                self.state = SubmissionState::Success;
                Ok(F::CONFIRMATION_PATH)
            }
            Err(e) => {
                tracing::error!("Failed to insert into {}: {}", F::TABLE.name(), e);
                Err(self.fail(SubmitError::from(e)))
            }
        }
    }

    fn fail(&mut self, error: SubmitError) -> SubmitError {
        self.state = SubmissionState::Idle {
            error: Some(error.clone()),
        };
        error
    }
}

/// Tokens of rendered forms whose submission is currently being stored.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTokens {
    in_flight: Arc<Mutex<HashSet<Uuid>>>,
}

impl SubmissionTokens {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<Uuid>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// `None` while another request holds `token`.
    pub fn claim(&self, token: Uuid) -> Option<TokenGuard> {
        self.lock().insert(token).then(|| TokenGuard {
            tokens: self.clone(),
            token,
        })
    }

    pub fn is_in_flight(&self, token: &Uuid) -> bool {
        self.lock().contains(token)
    }
}

/// Releases the in-flight claim when dropped.
#[derive(Debug)]
pub struct TokenGuard {
    tokens: SubmissionTokens,
    token: Uuid,
}

impl Drop for TokenGuard {
    fn drop(&mut self) {
        self.tokens.lock().remove(&self.token);
    }
}
