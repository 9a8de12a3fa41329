use crate::model::FetchError;

/// Performs a GET and hands back the raw body. Anything but HTTP 200 is an error.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
