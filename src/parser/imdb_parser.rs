// IMDB suggest payloads and title pages
use crate::model::ProviderError;
use crate::parser::jsonp::unwrap_jsonp;
use crate::parser::{null_as_default, selector};
use scraper::Html;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

/// The suggest endpoint's `i` field. Some records carry a plain URL, others
/// `[url, width, height]`, others nothing at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ImageField {
    #[default]
    Absent,
    Text(String),
    Other,
}

impl ImageField {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => ImageField::Absent,
            Value::String(url) => ImageField::Text(url),
            Value::Array(mut items) if !items.is_empty() => match items.swap_remove(0) {
                Value::String(url) => ImageField::Text(url),
                _ => ImageField::Other,
            },
            _ => ImageField::Other,
        }
    }

    /// Poster URL, empty unless the field held text.
    pub fn into_poster(self) -> String {
        match self {
            ImageField::Text(url) => url,
            ImageField::Absent | ImageField::Other => String::new(),
        }
    }
}

fn deserialize_image<'de, D>(deserializer: D) -> Result<ImageField, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(ImageField::from_value)
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ImdbSuggestResponse {
    #[serde(default)]
    pub v: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub q: String,
    #[serde(default)]
    pub d: Option<Vec<ImdbSuggestItem>>,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct ImdbSuggestItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "l", default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(rename = "s", default, deserialize_with = "null_as_default")]
    pub subline: String,
    #[serde(rename = "y", default)]
    pub year: Option<u32>,
    #[serde(rename = "i", default, deserialize_with = "deserialize_image")]
    pub image: ImageField,
}

/// Decodes a `callback({...})` suggest body into its items.
pub fn parse_suggest(body: &str) -> Result<Vec<ImdbSuggestItem>, ProviderError> {
    let payload = unwrap_jsonp(body)?;
    let response: ImdbSuggestResponse = serde_json::from_str(payload)?;
    let items = response.d.unwrap_or_default();
    debug!("IMDB suggest for '{}' returned {} items", response.q, items.len());
    Ok(items)
}

// (container, rating node) pairs, oldest layout first.
const RATING_SELECTORS: [(&str, &str); 2] = [
    (
        "#title-overview-widget",
        "div.ratings_wrapper > div.imdbRating > div.ratingValue > strong > span",
    ),
    (
        "[data-testid=\"hero-rating-bar__aggregate-rating\"]",
        "[data-testid=\"hero-rating-bar__aggregate-rating__score\"] > span",
    ),
];

/// Pulls the aggregate rating (0-10) out of a title page.
pub fn parse_rating(html: &str) -> Result<f32, ProviderError> {
    let document = Html::parse_document(html);

    for (container_css, rating_css) in RATING_SELECTORS {
        let container_selector = selector(container_css)?;
        let rating_selector = selector(rating_css)?;

        let Some(container) = document.select(&container_selector).next() else {
            continue;
        };
        let Some(node) = container.select(&rating_selector).next() else {
            continue;
        };

        let text = node.text().collect::<String>();
        let text = text.trim();
        if text.is_empty() {
            continue;
        }

        return match text.parse::<f32>() {
            Ok(rating) if rating.is_finite() => Ok(rating),
            Ok(_) => {
                warn!("Rating text '{}' is not a finite number", text);
                Err(ProviderError::Extraction(format!("rating '{}' is not a number", text)))
            }
            Err(e) => {
                warn!("Rating text '{}' is not a number: {}", text, e);
                Err(ProviderError::Extraction(format!("rating '{}' is not a number", text)))
            }
        };
    }

    Err(ProviderError::Extraction(
        "couldn't find rating widget".to_string(),
    ))
}
