use crate::domain::issue::Issue;

#[derive(Debug, Clone, PartialEq)]
pub struct PointsReport {
    pub total: f64,
    pub missing: Vec<String>,
}

impl PointsReport {
    /// Single pass over the issues in tracker order: numeric story points
    /// accumulate into the total, issues without them contribute a browse
    /// link instead.
    pub fn tally(origin: &str, issues: &[Issue]) -> Self {
        let mut total = 0.0;
        let mut missing = Vec::new();

        for issue in issues {
            match issue.story_points {
                Some(points) => total += points,
                None => missing.push(browse_url(origin, &issue.key)),
            }
        }

        Self { total, missing }
    }
}

pub fn browse_url(origin: &str, key: &str) -> String {
    format!("{}/browse/{}", origin.trim_end_matches('/'), key)
}
