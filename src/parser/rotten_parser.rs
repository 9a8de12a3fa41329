// Rotten Tomatoes search payloads and movie pages
use crate::model::{ProviderError, ScoreClass};
use crate::parser::{null_as_default, selector};
use crate::utils::digits_only;
use reqwest::Url;
use scraper::Html;
use serde::Deserialize;
use tracing::{debug, warn};

/// Response of `/napi/search/`. Every entity kind is decoded, only movies are used.
#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RottenSearchResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub actor_count: u32,
    pub actors: Option<Vec<RottenActor>>,
    #[serde(deserialize_with = "null_as_default")]
    pub critic_count: u32,
    pub critics: Option<Vec<RottenCritic>>,
    #[serde(deserialize_with = "null_as_default")]
    pub franchise_count: u32,
    pub franchises: Option<Vec<RottenFranchise>>,
    #[serde(deserialize_with = "null_as_default")]
    pub movie_count: u32,
    pub movies: Option<Vec<RottenMovie>>,
    #[serde(deserialize_with = "null_as_default")]
    pub tv_count: u32,
    pub tv_series: Option<Vec<RottenTvShow>>,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RottenActor {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RottenCritic {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub publications: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RottenFranchise {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RottenMovie {
    #[serde(deserialize_with = "null_as_default")]
    pub cast_items: Vec<RottenCastItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    pub meter_class: Option<String>,
    pub meter_score: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subline: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    pub year: Option<u32>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RottenCastItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[allow(dead_code)]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RottenTvShow {
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    pub meter_class: Option<String>,
    pub meter_score: Option<u32>,
    pub start_year: Option<u32>,
    pub end_year: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Decodes a search body and keeps only the movie records.
pub fn parse_search(body: &[u8]) -> Result<Vec<RottenMovie>, ProviderError> {
    let response: RottenSearchResponse = serde_json::from_slice(body)?;
    debug!(
        "Rotten search: {} movies, {} tv, {} actors, {} critics, {} franchises",
        response.movie_count,
        response.tv_count,
        response.actor_count,
        response.critic_count,
        response.franchise_count
    );
    Ok(response.movies.unwrap_or_default())
}

/// Brings any movie path into the `/m/<slug>` form the site resolves.
/// Absolute URLs are reduced to their path first.
pub fn normalize_movie_path(input: &str) -> String {
    let path = match Url::parse(input) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => input.to_string(),
    };

    if path.starts_with("/m/") {
        path
    } else if path.starts_with("m/") {
        format!("/{}", path)
    } else if path.starts_with('/') {
        format!("/m{}", path)
    } else {
        format!("/m/{}", path)
    }
}

/// Reads a number out of decorated score text such as `82%`.
/// Text without digits is a score of 0, not a failure.
pub fn extract_score(text: &str) -> u32 {
    let digits = digits_only(text);
    if digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or_else(|e| {
        warn!("Score text '{}' is out of range: {}", text, e);
        0
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct RottenScorePage {
    pub title: String,
    pub score: u32,
    pub score_class: Option<ScoreClass>,
}

const CRITICS_WIDGET: &str =
    "#all-critics-numbers > div > div:nth-child(1) > div > div.critic-score.meter";
const TITLE: &str = "#heroImageContainer > a > h1";
const SCORE_TEXT: &str = "span.meter-value.superPageFontColor > span";
const METER_ICON: &str = "span.meter-tomato.icon";

/// Reads title, tomatometer and meter class off a movie page.
///
/// Only a missing critics widget is an error. Missing score text yields 0 and
/// a missing or unknown icon class leaves the class empty.
pub fn parse_score_page(html: &str) -> Result<RottenScorePage, ProviderError> {
    let document = Html::parse_document(html);

    let widget_selector = selector(CRITICS_WIDGET)?;
    let title_selector = selector(TITLE)?;
    let score_selector = selector(SCORE_TEXT)?;
    let icon_selector = selector(METER_ICON)?;

    let widget = document.select(&widget_selector).next().ok_or_else(|| {
        ProviderError::Extraction("couldn't find critics score widget".to_string())
    })?;

    let title = document
        .select(&title_selector)
        .next()
        .map(|node| node.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let score_text = widget
        .select(&score_selector)
        .next()
        .map(|node| node.text().collect::<String>())
        .unwrap_or_default();

    let score_class = widget
        .select(&icon_selector)
        .next()
        .and_then(|icon| icon.value().attr("class"))
        .and_then(ScoreClass::from_class_attr);

    Ok(RottenScorePage {
        title,
        score: extract_score(&score_text),
        score_class,
    })
}
