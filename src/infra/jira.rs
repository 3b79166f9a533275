use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::issue::Issue;
use crate::domain::search::SearchRequest;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

/// Fields requested from the search endpoint; the customfield holds the
/// story-point estimate on this tracker.
const SEARCH_FIELDS: &str = "customfield_12310243,key,assignee";
/// Single-request result cap. The tracker may hold more matches than this;
/// anything beyond the cap is silently not returned.
const MAX_RESULTS: &str = "1000";

pub struct JiraClient {
    http: Client,
    token: String,
}

impl JiraClient {
    pub fn new(token: String) -> Self {
        Self {
            http: Client::new(),
            token,
        }
    }

    fn search_endpoint(origin: &str) -> String {
        format!("{}/rest/api/2/search", origin.trim_end_matches('/'))
    }

    fn auth_header(token: &str) -> String {
        format!("Bearer {token}")
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn search_issues(&self, request: &SearchRequest) -> AppResult<Vec<Issue>> {
        let endpoint = Self::search_endpoint(&request.origin);
        debug!(%endpoint, jql = %request.query, "searching issues");

        let response = self
            .http
            .get(&endpoint)
            .header(AUTHORIZATION, Self::auth_header(&self.token))
            .header(ACCEPT, "application/json")
            .query(&[
                ("jql", request.query.as_str()),
                ("fields", SEARCH_FIELDS),
                ("maxResults", MAX_RESULTS),
            ])
            .send()
            .await
            .map_err(|err| AppError::Fetch(format!("failed to call tracker: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(AppError::FetchStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SearchResponse = response.json().await.map_err(|err| {
            AppError::Fetch(format!("failed to parse search response: {err}"))
        })?;

        if let Some(total) = payload.total {
            if total as usize > payload.issues.len() {
                warn!(
                    total,
                    returned = payload.issues.len(),
                    "tracker reports more matches than returned; results are truncated"
                );
            }
        }

        let issues = payload
            .issues
            .into_iter()
            .filter_map(IssueRecord::into_issue)
            .collect::<Vec<_>>();
        debug!(count = issues.len(), "search returned issues");

        Ok(issues)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    issues: Vec<IssueRecord>,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Deserialize)]
struct IssueRecord {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    fields: IssueFields,
}

#[derive(Deserialize, Default)]
struct IssueFields {
    #[serde(rename = "customfield_12310243", default)]
    story_points: Option<Value>,
}

impl IssueRecord {
    fn into_issue(self) -> Option<Issue> {
        let Some(key) = self.key else {
            debug!("skipping search record without a key");
            return None;
        };
        // JSON-number semantics: booleans and strings never count as points.
        let story_points = self.fields.story_points.as_ref().and_then(Value::as_f64);
        Some(Issue { key, story_points })
    }
}
