use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Authenticated access to the provider's REST API. Paths are relative to
/// the configured base URL.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value>;
    async fn post(&self, path: &str, body: &Value) -> Result<Value>;
    async fn put(&self, path: &str, body: &Value) -> Result<Value>;
    async fn delete(&self, path: &str) -> Result<String>;
}
