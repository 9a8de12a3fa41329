use crate::model::ProviderError;
use crate::utils::substring_between;

/// Strips a `callback(...)` wrapper and returns the JSON inside it.
///
/// Uses the first `(` and the last `)`. A missing delimiter or a close that
/// comes before the open is a decode error; nothing is salvaged.
pub fn unwrap_jsonp(body: &str) -> Result<&str, ProviderError> {
    substring_between(body, '(', ')').ok_or_else(|| {
        ProviderError::Decode("couldn't find payload between `(` and `)`".to_string())
    })
}
