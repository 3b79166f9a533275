use crate::context::AppContext;
use crate::domain::points::PointsReport;
use crate::domain::search::SearchRequest;
use crate::error::AppResult;

/// Parse the search URL, run the one search against the tracker, and tally
/// the result. URL validation failures abort before any network access.
pub async fn sum_story_points(ctx: &AppContext, search_url: &str) -> AppResult<PointsReport> {
    let request = SearchRequest::parse(search_url)?;

    let issues = ctx.issue_tracker.search_issues(&request).await?;

    Ok(PointsReport::tally(&request.origin, &issues))
}
