use crate::domain::model::SkillRatings;
use serde::Serialize;

pub const AXIS_MIN: u8 = 0;
pub const AXIS_MAX: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: String,
    pub value: u8,
    /// Display text next to the bar, e.g. "92%".
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub axis_min: u8,
    pub axis_max: u8,
    pub bars: Vec<ChartBar>,
}

/// Derives the proficiency bar chart from the skill ratings. Category axis is
/// the skill names in insertion order, value axis is fixed 0–100. Pure
/// transform: out-of-range values cannot reach this point because
/// `SkillRatings` rejects them at load time.
pub fn chart_spec(skills: &SkillRatings) -> ChartSpec {
    ChartSpec {
        axis_min: AXIS_MIN,
        axis_max: AXIS_MAX,
        bars: skills
            .iter()
            .map(|rating| ChartBar {
                label: rating.name.clone(),
                value: rating.proficiency,
                text: format!("{}%", rating.proficiency),
            })
            .collect(),
    }
}
