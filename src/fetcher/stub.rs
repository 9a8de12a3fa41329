use crate::fetcher::traits::Fetcher;
use crate::model::FetchError;
use std::sync::Mutex;

/// Canned fetcher for tests. Records every URL it was asked for.
pub struct StubFetcher {
    response: Result<Vec<u8>, u16>,
    urls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(body.into()),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            response: Err(code),
            urls: Mutex::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(code) => Err(FetchError::Status(*code)),
        }
    }
}
