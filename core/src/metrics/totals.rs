//! Whole-collection totals shown in summary cards.

use super::opportunities::is_high_impact;
use crate::{
    model::{AutomationOpportunity, Department, Tone},
    types::Money,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTotals {
    pub pain_points: u32,
    pub hours_wasted_per_week: f64,
    pub cost_impact_per_year: Money,
    pub automation_opportunities: u32,
}

pub fn department_totals(departments: &[Department]) -> DepartmentTotals {
    departments.iter().fold(DepartmentTotals::default(), |mut acc, d| {
        acc.pain_points += d.pain_points;
        acc.hours_wasted_per_week += d.hours_wasted_per_week;
        acc.cost_impact_per_year += d.cost_impact_per_year;
        acc.automation_opportunities += d.automation_opportunities;
        acc
    })
}

pub fn high_impact_count(opportunities: &[AutomationOpportunity]) -> usize {
    opportunities.iter().filter(|o| is_high_impact(o)).count()
}

/// Status dot next to a department row.
pub fn department_activity(department: &Department) -> Tone {
    match department.automation_opportunities {
        0 => Tone::Neutral,
        1 => Tone::Warning,
        _ => Tone::Success,
    }
}
