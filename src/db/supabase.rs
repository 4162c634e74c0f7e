use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;

use crate::{
    db::ReviewStore,
    errors::StoreError,
    models::{ReviewRecord, Table, review::REVIEW_COLUMNS},
};

/// PostgREST client for a Supabase project, built once at startup and shared
/// through `AppState`.
#[derive(Clone)]
pub struct SupabaseStore {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: Option<String>,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url, api_key)
    }

    pub fn with_client(
        http: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            api_key: api_key.into(),
        }
    }

    pub fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.name())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Turns a non-2xx PostgREST response into a rejection carrying the store's
/// own message.
async fn check_status(res: Response) -> Result<Response, StoreError> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = res.text().await.unwrap_or_default();
    Err(StoreError::Rejected(rejection_message(status.as_u16(), &body)))
}

pub fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(PostgrestError { message: Some(msg) }) if !msg.is_empty() => msg,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("Store responded with status {status}"),
    }
}

#[async_trait]
impl ReviewStore for SupabaseStore {
    async fn insert(&self, table: Table, row: serde_json::Value) -> Result<(), StoreError> {
        let url = self.table_url(table);
        tracing::debug!("Inserting row into {}", table.name());

        let res = self
            .authorized(self.http.post(&url))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        check_status(res).await?;
        Ok(())
    }

    async fn list_reviews(&self, limit: usize) -> Result<Vec<ReviewRecord>, StoreError> {
        let url = self.table_url(Table::Reviews);
        let limit = limit.to_string();

        let res = self
            .authorized(self.http.get(&url))
            .query(&[
                ("select", REVIEW_COLUMNS),
                ("order", "created_at.desc"),
                ("limit", limit.as_str()),
            ])
            .send()
            .await?;

        let records = check_status(res)
            .await?
            .json::<Vec<ReviewRecord>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_urls_ignore_trailing_slash() {
        let store = SupabaseStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.table_url(Table::Feedback),
            "https://example.supabase.co/rest/v1/feedback_form"
        );
    }

    #[test]
    fn rejection_prefers_store_message() {
        let body = r#"{"code":"23502","message":"null value in column \"club_name\"","details":null}"#;
        assert_eq!(
            rejection_message(400, body),
            "null value in column \"club_name\""
        );
        assert_eq!(rejection_message(503, "upstream down"), "upstream down");
        assert_eq!(rejection_message(500, ""), "Store responded with status 500");
    }
}
