use super::round_half_up;
use crate::{model::Workflow, types::Minutes};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSavings {
    /// Negative if the fixture's potential time exceeds current time.
    pub time_saved_minutes: i64,
    pub savings_percent: i64,
}

/// Saved minutes and percentage. A zero current time yields 0%.
pub fn workflow_savings(workflow: &Workflow) -> WorkflowSavings {
    let current = i64::from(workflow.current_time_minutes);
    let time_saved_minutes = current - i64::from(workflow.potential_time_minutes);
    let savings_percent = if current == 0 {
        0
    } else {
        round_half_up(time_saved_minutes as f64 / current as f64 * 100.0) as i64
    };
    WorkflowSavings {
        time_saved_minutes,
        savings_percent,
    }
}

/// Steps flagged as bottlenecks.
pub fn bottleneck_step_count(workflow: &Workflow) -> usize {
    workflow.steps.iter().filter(|s| s.is_bottleneck).count()
}

pub fn total_step_minutes(workflow: &Workflow) -> Minutes {
    workflow.steps.iter().map(|s| s.duration).sum()
}
