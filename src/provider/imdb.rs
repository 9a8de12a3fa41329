use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::model::{ProviderError, ProviderKind, ScoreResult, SearchResult};
use crate::normalizer::normalize_imdb;
use crate::parser::imdb_parser::{parse_rating, parse_suggest};
use crate::provider::traits::MovieProvider;
use reqwest::Url;
use std::sync::Arc;
use tracing::info;

pub struct ImdbProvider {
    fetcher: Arc<dyn Fetcher>,
    search_url: String,
    base_url: String,
    score_enabled: bool,
}

impl ImdbProvider {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &AppConfig) -> Self {
        Self {
            fetcher,
            search_url: config.imdb_search_url.trim_end_matches('/').to_string(),
            base_url: config.imdb_base_url.trim_end_matches('/').to_string(),
            score_enabled: config.imdb_score_enabled,
        }
    }

    /// `iron man 2008` -> `<search_url>/i/iron_man_2008.json`, each segment
    /// percent-encoded. `None` for an empty query.
    fn build_search_url(&self, query: &str) -> Result<Option<Url>, ProviderError> {
        let query = query.to_lowercase();
        let Some(shard) = query.chars().next() else {
            return Ok(None);
        };

        let mut url = Url::parse(&self.search_url)
            .map_err(|e| ProviderError::InvalidArgument(format!("search url: {}", e)))?;
        let bad_base =
            || ProviderError::InvalidArgument(format!("search url: {}", self.search_url));
        url.path_segments_mut()
            .map_err(|_| bad_base())?
            .pop_if_empty()
            .push(&shard.to_string())
            .push(&format!("{}.json", query.replace(' ', "_")));
        Ok(Some(url))
    }

    fn build_title_url(&self, id: &str) -> String {
        format!("{}/title/{}/", self.base_url, id)
    }
}

#[async_trait::async_trait]
impl MovieProvider for ImdbProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Imdb
    }

    fn supports_score(&self) -> bool {
        self.score_enabled
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let Some(url) = self.build_search_url(query.trim())? else {
            return Ok(Vec::new());
        };

        let body = self.fetcher.fetch(url.as_str()).await?;
        let items = parse_suggest(&String::from_utf8_lossy(&body))?;
        let results = normalize_imdb(items);
        info!("IMDB search '{}' matched {} titles", query, results.len());
        Ok(results)
    }

    async fn score(&self, id: &str) -> Result<ScoreResult, ProviderError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ProviderError::InvalidArgument("id is empty".to_string()));
        }
        if !self.score_enabled {
            return Err(ProviderError::Unsupported(ProviderKind::Imdb));
        }

        let body = self.fetcher.fetch(&self.build_title_url(id)).await?;
        let score = parse_rating(&String::from_utf8_lossy(&body)).map_err(|e| match e {
            ProviderError::Extraction(reason) => {
                ProviderError::Extraction(format!("{} for title {}", reason, id))
            }
            other => other,
        })?;
        info!("IMDB score for {}: {}", id, score);

        Ok(ScoreResult {
            provider: ProviderKind::Imdb,
            id: id.to_string(),
            score,
            score_class: None,
        })
    }
}
