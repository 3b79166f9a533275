use std::sync::Arc;

use crate::services::IssueTrackerService;

#[derive(Clone)]
pub struct AppContext {
    pub issue_tracker: Arc<dyn IssueTrackerService>,
}

impl AppContext {
    pub fn new(issue_tracker: Arc<dyn IssueTrackerService>) -> Self {
        Self { issue_tracker }
    }
}
