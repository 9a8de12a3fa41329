// Movie sources behind one interface, picked by name
pub mod imdb;
pub mod rotten;
pub mod traits;

pub use imdb::ImdbProvider;
pub use rotten::RottenProvider;
pub use traits::MovieProvider;

use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::model::{ProviderError, ProviderKind, ScoreResult, SearchResult};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// A validated operation against one provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search { query: String },
    Score { id: String },
}

/// Either a match list or a single score; serializes as the bare value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderOutput {
    Search(Vec<SearchResult>),
    Score(ScoreResult),
}

pub enum ProviderHandle {
    Imdb(ImdbProvider),
    RottenTomatoes(RottenProvider),
}

impl ProviderHandle {
    pub fn new(kind: ProviderKind, config: &AppConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        match kind {
            ProviderKind::Imdb => ProviderHandle::Imdb(ImdbProvider::new(fetcher, config)),
            ProviderKind::RottenTomatoes => {
                ProviderHandle::RottenTomatoes(RottenProvider::new(fetcher, config))
            }
        }
    }

    fn inner(&self) -> &dyn MovieProvider {
        match self {
            ProviderHandle::Imdb(p) => p,
            ProviderHandle::RottenTomatoes(p) => p,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.inner().kind()
    }

    pub fn supports_score(&self) -> bool {
        self.inner().supports_score()
    }

    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        self.inner().search(query).await
    }

    pub async fn score(&self, id: &str) -> Result<ScoreResult, ProviderError> {
        if id.trim().is_empty() {
            return Err(ProviderError::InvalidArgument("id is empty".to_string()));
        }
        if !self.supports_score() {
            return Err(ProviderError::Unsupported(self.kind()));
        }
        self.inner().score(id).await
    }

    pub async fn execute(&self, request: &Request) -> Result<ProviderOutput, ProviderError> {
        info!("Running {:?} against {}", request, self.kind());
        match request {
            Request::Search { query } => self.search(query).await.map(ProviderOutput::Search),
            Request::Score { id } => self.score(id).await.map(ProviderOutput::Score),
        }
    }
}
