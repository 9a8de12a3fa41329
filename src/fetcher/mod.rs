pub mod http;
pub mod traits;
pub mod user_agent;

#[cfg(test)]
pub mod stub;

pub use http::HttpFetcher;
pub use traits::Fetcher;
