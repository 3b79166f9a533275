/// One issue from a tracker search, reduced to what the points report needs.
///
/// `story_points` is `None` whenever the tracker returned anything other
/// than a JSON number for the field (absent, null, boolean, string).
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub key: String,
    pub story_points: Option<f64>,
}
