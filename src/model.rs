// Core structs: SearchResult, ScoreResult and the error taxonomy
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which external source a result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "imdb")]
    Imdb,
    #[serde(rename = "rotten")]
    RottenTomatoes,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Imdb => "imdb",
            ProviderKind::RottenTomatoes => "rotten",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imdb" => Ok(ProviderKind::Imdb),
            "rotten" => Ok(ProviderKind::RottenTomatoes),
            other => Err(format!("provider '{}' is not supported", other)),
        }
    }
}

/// Rotten Tomatoes meter class. IMDB never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreClass {
    Rotten,
    Fresh,
    CertifiedFresh,
}

impl ScoreClass {
    /// Containment checks run in this order; the first hit wins.
    pub const PRIORITY: [ScoreClass; 3] = [
        ScoreClass::Rotten,
        ScoreClass::Fresh,
        ScoreClass::CertifiedFresh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreClass::Rotten => "rotten",
            ScoreClass::Fresh => "fresh",
            ScoreClass::CertifiedFresh => "certified_fresh",
        }
    }

    /// Maps a space separated `class` attribute to a meter class.
    ///
    /// Note that `certified_fresh` contains `fresh`, so an attribute carrying
    /// it resolves to `Fresh`.
    pub fn from_class_attr(attr: &str) -> Option<ScoreClass> {
        Self::PRIORITY
            .iter()
            .copied()
            .find(|class| attr.contains(class.as_str()))
    }

    /// Exact label match, used for the `meterClass` field of search records.
    pub fn from_label(label: &str) -> Option<ScoreClass> {
        let label = label.trim().to_lowercase();
        Self::PRIORITY
            .iter()
            .copied()
            .find(|class| class.as_str() == label)
    }
}

fn is_zero(score: &f32) -> bool {
    *score == 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub provider: ProviderKind,
    pub id: String,
    pub title: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_class: Option<ScoreClass>,
    /// 0 when the source did not report a year.
    pub year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub provider: ProviderKind,
    pub id: String,
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_class: Option<ScoreClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Score,
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Operation::Search),
            "score" => Ok(Operation::Score),
            other => Err(format!("operation '{}' is not supported", other)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status code {0}")]
    Status(u16),
    #[error("failed to read body: {0}")]
    Body(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("transport error: {0}")]
    Transport(#[from] FetchError),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("extraction error: {0}")]
    Extraction(String),
    #[error("score is not supported by provider {0}")]
    Unsupported(ProviderKind),
}

impl From<serde_json::Error> for ProviderError {
    fn from(e: serde_json::Error) -> Self {
        ProviderError::Decode(e.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("output file name is empty")]
    EmptyName,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
