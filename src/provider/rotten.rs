use crate::config::AppConfig;
use crate::fetcher::Fetcher;
use crate::model::{ProviderError, ProviderKind, ScoreResult, SearchResult};
use crate::normalizer::normalize_rotten;
use crate::parser::rotten_parser::{normalize_movie_path, parse_score_page, parse_search};
use crate::provider::traits::MovieProvider;
use reqwest::Url;
use std::sync::Arc;
use tracing::info;

pub struct RottenProvider {
    fetcher: Arc<dyn Fetcher>,
    base_url: String,
    search_limit: u32,
}

impl RottenProvider {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: &AppConfig) -> Self {
        Self {
            fetcher,
            base_url: config.rotten_base_url.trim_end_matches('/').to_string(),
            search_limit: config.rotten_search_limit,
        }
    }

    fn build_search_url(&self, query: &str) -> Result<Url, ProviderError> {
        let limit = self.search_limit.to_string();
        Url::parse_with_params(
            &format!("{}/napi/search/", self.base_url),
            [("limit", limit.as_str()), ("query", query)],
        )
        .map_err(|e| ProviderError::InvalidArgument(format!("search url: {}", e)))
    }
}

#[async_trait::async_trait]
impl MovieProvider for RottenProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::RottenTomatoes
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.build_search_url(query)?;
        let body = self.fetcher.fetch(url.as_str()).await?;
        let results = normalize_rotten(parse_search(&body)?);
        info!("Rotten search '{}' matched {} movies", query, results.len());
        Ok(results)
    }

    async fn score(&self, id: &str) -> Result<ScoreResult, ProviderError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(ProviderError::InvalidArgument("id is empty".to_string()));
        }

        let path = normalize_movie_path(id);
        let body = self
            .fetcher
            .fetch(&format!("{}{}", self.base_url, path))
            .await?;
        let page = parse_score_page(&String::from_utf8_lossy(&body))?;
        info!(
            "Rotten score for '{}' ({}): {} {:?}",
            page.title, path, page.score, page.score_class
        );

        Ok(ScoreResult {
            provider: ProviderKind::RottenTomatoes,
            id: path,
            score: page.score as f32,
            score_class: page.score_class,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::HttpFetcher;
    use crate::fetcher::stub::StubFetcher;
    use crate::model::ScoreClass;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SEARCH: &str = r#"{
        "actorCount": 1, "actors": [{"image": "a.jpg", "name": "Iron Man Fan", "url": "/celebrity/fan"}],
        "criticCount": 0, "critics": [],
        "franchiseCount": 0, "franchises": [],
        "movieCount": 1,
        "movies": [{"castItems": [], "image": "https://img/iron_man.jpg", "meterClass": "certified_fresh",
                    "meterScore": 94, "name": "Iron Man", "subline": "", "url": "/m/iron_man", "year": 2008}],
        "tvCount": 0, "tvSeries": []
    }"#;

    const SHARKNADO: &str = r##"<html><body>
        <div id="heroImageContainer"><a href="/m/sharknado_2013"><h1 class="title">Sharknado</h1></a></div>
        <div id="all-critics-numbers"><div><div><div>
          <div class="critic-score meter">
            <a href="#contentReviews" class="unstyled articleLink">
              <span class="meter-tomato icon big medium-xs fresh pull-left"></span>
              <span class="meter-value superPageFontColor"><span>82</span>%</span>
            </a>
          </div>
        </div></div></div></div>
        </body></html>"##;

    fn http_fetcher() -> Arc<HttpFetcher> {
        Arc::new(HttpFetcher::new(Duration::from_secs(5), Vec::new()).unwrap())
    }

    fn config_for(server: &MockServer) -> AppConfig {
        AppConfig {
            rotten_base_url: server.uri(),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn search_sends_limit_and_escaped_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/napi/search/"))
            .and(query_param("limit", "5"))
            .and(query_param("query", "iron man"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH))
            .expect(1)
            .mount(&server)
            .await;

        let provider = RottenProvider::new(http_fetcher(), &config_for(&server));
        let results = provider.search("iron man").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "/m/iron_man");
        assert_eq!(results[0].title, "Iron Man");
        assert_eq!(results[0].year, 2008);
        assert_eq!(results[0].score, 94.0);
        assert_eq!(results[0].score_class, Some(ScoreClass::CertifiedFresh));
    }

    #[tokio::test]
    async fn search_url_is_form_encoded() {
        let stub = Arc::new(StubFetcher::ok(SEARCH));
        let provider = RottenProvider::new(stub.clone(), &AppConfig::default());
        provider.search("iron man & co").await.unwrap();
        assert_eq!(
            stub.urls(),
            vec!["https://www.rottentomatoes.com/napi/search/?limit=5&query=iron+man+%26+co"]
        );
    }

    #[tokio::test]
    async fn empty_query_is_a_no_op() {
        let stub = Arc::new(StubFetcher::ok(SEARCH));
        let provider = RottenProvider::new(stub.clone(), &AppConfig::default());
        assert!(provider.search("").await.unwrap().is_empty());
        assert!(stub.urls().is_empty());
    }

    #[tokio::test]
    async fn score_normalizes_unrooted_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/m/sharknado_2013"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SHARKNADO))
            .expect(1)
            .mount(&server)
            .await;

        let provider = RottenProvider::new(http_fetcher(), &config_for(&server));
        let result = provider.score("sharknado_2013").await.unwrap();
        assert_eq!(result.provider, ProviderKind::RottenTomatoes);
        assert_eq!(result.id, "/m/sharknado_2013");
        assert_eq!(result.score, 82.0);
        assert_eq!(result.score_class, Some(ScoreClass::Fresh));
    }

    #[tokio::test]
    async fn score_on_missing_page_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let provider = RottenProvider::new(http_fetcher(), &config_for(&server));
        let err = provider.score("/m/does_not_exist").await.unwrap_err();
        assert!(matches!(err, ProviderError::Transport(_)));
    }

    #[tokio::test]
    async fn score_without_widget_is_extraction_error() {
        let stub = Arc::new(StubFetcher::ok("<html><body><h1>Oops</h1></body></html>"));
        let provider = RottenProvider::new(stub, &AppConfig::default());
        let err = provider.score("m/sharknado_2013").await.unwrap_err();
        assert!(matches!(err, ProviderError::Extraction(_)));
    }

    #[tokio::test]
    async fn empty_id_is_invalid_argument() {
        let stub = Arc::new(StubFetcher::ok(SHARKNADO));
        let provider = RottenProvider::new(stub.clone(), &AppConfig::default());
        let err = provider.score("").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidArgument(_)));
        assert!(stub.urls().is_empty());
    }

    #[tokio::test]
    #[ignore = "hits the live Rotten Tomatoes site"]
    async fn live_score_for_sharknado() {
        let provider = RottenProvider::new(http_fetcher(), &AppConfig::default());
        let result = provider.score("sharknado_2013").await.unwrap();
        assert_eq!(result.id, "/m/sharknado_2013");
        assert!(result.score_class.is_some());
    }
}
