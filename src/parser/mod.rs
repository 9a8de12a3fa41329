// Source-specific extraction: raw payloads in, decoded records out
pub mod imdb_parser;
pub mod jsonp;
pub mod rotten_parser;

use crate::model::ProviderError;
use scraper::Selector;
use serde::{Deserialize, Deserializer};

pub use imdb_parser::ImdbSuggestItem;
pub use rotten_parser::RottenMovie;

/// Compiles a CSS selector, reporting a bad one as a decode failure.
pub(crate) fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css).map_err(|e| ProviderError::Decode(format!("selector `{}`: {}", css, e)))
}

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
