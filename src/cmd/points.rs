use crate::context::AppContext;
use crate::domain::points::PointsReport;
use crate::error::AppResult;
use crate::workflow::points::sum_story_points;

#[derive(Debug, Clone)]
pub struct PointsCommandArgs {
    pub search_url: String,
}

pub async fn run(ctx: &AppContext, args: PointsCommandArgs) -> AppResult<PointsReport> {
    sum_story_points(ctx, &args.search_url).await
}
