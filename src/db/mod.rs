pub mod memory;
pub mod review;
pub mod supabase;

use async_trait::async_trait;

use crate::{
    errors::StoreError,
    models::{ReviewRecord, Table},
};

pub use memory::MemoryStore;
pub use supabase::SupabaseStore;

/// Most records the listing page will ever request.
pub const MAX_REVIEWS: usize = 500;

/// The hosted table store. Each call is one request with no retry.
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Inserts a single row into `table`.
    async fn insert(&self, table: Table, row: serde_json::Value) -> Result<(), StoreError>;

    /// Most recent reviews first, at most `limit` of them.
    async fn list_reviews(&self, limit: usize) -> Result<Vec<ReviewRecord>, StoreError>;
}
