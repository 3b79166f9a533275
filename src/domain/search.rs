use url::Url;

use crate::error::{AppError, AppResult};

/// Tracker origin plus the decoded JQL filter, extracted once from the
/// search URL the user pasted in. Immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub origin: String,
    pub query: String,
}

impl SearchRequest {
    pub fn parse(search_url: &str) -> AppResult<Self> {
        let parsed = Url::parse(search_url)
            .map_err(|err| AppError::InvalidUrl(format!("{search_url}: {err}")))?;

        if parsed.scheme() != "https" {
            return Err(AppError::InvalidUrl(format!(
                "expected an https:// URL, got scheme '{}'",
                parsed.scheme()
            )));
        }
        let host = parsed
            .host_str()
            .ok_or_else(|| AppError::InvalidUrl("URL has no host".to_string()))?;

        let query = parsed
            .query_pairs()
            .find(|(name, _)| name == "jql")
            .map(|(_, value)| value.trim().to_string())
            .ok_or_else(|| AppError::InvalidUrl("URL has no jql= parameter".to_string()))?;
        if query.is_empty() {
            return Err(AppError::InvalidUrl(
                "jql= parameter is empty".to_string(),
            ));
        }

        // Default https port is already elided by the parser.
        let origin = match parsed.port() {
            Some(port) => format!("https://{host}:{port}"),
            None => format!("https://{host}"),
        };

        Ok(Self { origin, query })
    }
}
