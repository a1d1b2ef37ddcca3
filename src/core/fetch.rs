use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Yields to the runtime exactly once, then resolves to `fetched:<key>`.
pub async fn async_fetch(key: &str) -> String {
    tokio::task::yield_now().await;
    format!("fetched:{}", key)
}

/// In-process fetcher with no external dependency. Useful as the default
/// `Fetcher` implementation and as a stand-in in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopbackFetcher;

#[async_trait]
impl Fetcher for LoopbackFetcher {
    async fn fetch(&self, key: &str) -> Result<String> {
        Ok(async_fetch(key).await)
    }
}
