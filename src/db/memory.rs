use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    db::ReviewStore,
    errors::StoreError,
    models::{ReviewRecord, Table},
};

/// Store kept in process memory. Used by tests and for running the site
/// without a hosted project.
#[derive(Default)]
pub struct MemoryStore {
    pub reviews: Mutex<Vec<ReviewRecord>>,
    pub inserted: Mutex<Vec<(Table, serde_json::Value)>>,
    pub insert_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    failure: Mutex<Option<StoreError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reviews(reviews: Vec<ReviewRecord>) -> Self {
        Self {
            reviews: Mutex::new(reviews),
            ..Self::default()
        }
    }

    /// Every following call fails with `error` until cleared.
    pub async fn fail_with(&self, error: Option<StoreError>) {
        *self.failure.lock().await = error;
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub async fn rows(&self, table: Table) -> Vec<serde_json::Value> {
        self.inserted
            .lock()
            .await
            .iter()
            .filter(|(t, _)| *t == table)
            .map(|(_, row)| row.clone())
            .collect()
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn insert(&self, table: Table, row: serde_json::Value) -> Result<(), StoreError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failure.lock().await.clone() {
            return Err(err);
        }
        self.inserted.lock().await.push((table, row));
        Ok(())
    }

    async fn list_reviews(&self, limit: usize) -> Result<Vec<ReviewRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failure.lock().await.clone() {
            return Err(err);
        }

        let mut reviews = self.reviews.lock().await.clone();
        // Newest first; rows without a timestamp go last.
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews.truncate(limit);
        Ok(reviews)
    }
}
