use crate::model::{ProviderError, ProviderKind, ScoreResult, SearchResult};

/// What every movie source exposes.
#[async_trait::async_trait]
pub trait MovieProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether `score` actually looks anything up. When false, `score`
    /// returns `ProviderError::Unsupported` without touching the network.
    fn supports_score(&self) -> bool {
        true
    }

    /// An empty query is an empty result, not an error.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError>;

    /// An empty id is `ProviderError::InvalidArgument`.
    async fn score(&self, id: &str) -> Result<ScoreResult, ProviderError>;
}
