use crate::model::{Operation, ProviderKind};
use crate::provider::Request;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "movie-score",
    about = "Search movies and fetch critic scores from IMDB and Rotten Tomatoes",
    version
)]
pub struct Cli {
    /// Provider to query (imdb/rotten).
    #[arg(short = 'p', long)]
    pub provider: ProviderKind,

    /// Operation to execute (search/score).
    #[arg(long = "op")]
    pub operation: Operation,

    /// Base name of the JSON file the result is written to.
    #[arg(short = 'o', long = "out")]
    pub out: String,

    /// Query used by search.
    #[arg(short = 'q', long)]
    pub query: Option<String>,

    /// Identifier used by score (IMDB title id or Rotten Tomatoes path).
    #[arg(long)]
    pub id: Option<String>,

    /// Path to a JSON config file. Defaults to `config.json` when present.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG wins when set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("output file name is required")]
    MissingOutput,
    #[error("query is required for search operation")]
    MissingQuery,
    #[error("id is required for score operation")]
    MissingId,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl Cli {
    /// Checks that the operation got the argument it needs.
    pub fn request(&self) -> Result<Request, CliError> {
        if self.out.trim().is_empty() {
            return Err(CliError::MissingOutput);
        }
        match self.operation {
            Operation::Search => non_empty(&self.query)
                .map(|query| Request::Search { query })
                .ok_or(CliError::MissingQuery),
            Operation::Score => non_empty(&self.id)
                .map(|id| Request::Score { id })
                .ok_or(CliError::MissingId),
        }
    }
}
