use async_trait::async_trait;

use crate::domain::issue::Issue;
use crate::domain::search::SearchRequest;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn search_issues(&self, request: &SearchRequest) -> AppResult<Vec<Issue>>;
}
