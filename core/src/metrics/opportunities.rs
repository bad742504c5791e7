//! Opportunity filtering, sorting, and summary figures.

use crate::{
    model::{AutomationOpportunity, OpportunityCategory, Tone},
    types::Money,
};
use serde::{Deserialize, Serialize, Serializer};
use std::{cmp::Ordering, collections::BTreeSet};

/// Impact score at or above which an opportunity counts as high impact.
pub const HIGH_IMPACT_THRESHOLD: u8 = 8;

/// Filter sentinel for "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Impact,
    Effort,
    Savings,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Impact, SortField::Effort, SortField::Savings];

    pub fn label(self) -> &'static str {
        match self {
            SortField::Impact  => "Impact",
            SortField::Effort  => "Effort",
            SortField::Savings => "Savings",
        }
    }

    fn key(self, opp: &AutomationOpportunity) -> f64 {
        match self {
            SortField::Impact  => f64::from(opp.impact_score),
            SortField::Effort  => f64::from(opp.effort_score),
            SortField::Savings => opp.estimated_annual_savings,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc  => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Same field flips direction; a new field starts descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Desc;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(OpportunityCategory),
}

impl CategoryFilter {
    /// "all" or a category wire name. Anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        if value == ALL {
            return Some(CategoryFilter::All);
        }
        OpportunityCategory::from_key(value).map(CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(c) => c.key(),
        }
    }

    pub fn matches(&self, opp: &AutomationOpportunity) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => opp.category == *c,
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Matches on the denormalized `department_name`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DepartmentFilter::All => ALL,
            DepartmentFilter::Only(name) => name,
        }
    }

    pub fn matches(&self, opp: &AutomationOpportunity) -> bool {
        match self {
            DepartmentFilter::All => true,
            DepartmentFilter::Only(name) => opp.department_name == *name,
        }
    }
}

impl Serialize for DepartmentFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct OpportunityQuery {
    pub category: CategoryFilter,
    pub department: DepartmentFilter,
    pub sort: SortSpec,
}

impl OpportunityQuery {
    /// Conjunctive: every non-"all" filter must match.
    pub fn matches(&self, opp: &AutomationOpportunity) -> bool {
        self.category.matches(opp) && self.department.matches(opp)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpportunitySummary {
    pub count: usize,
    pub total_savings: Money,
    pub high_impact: usize,
}

/// Filter, then stable-sort by the query's key. Equal keys keep fixture order.
pub fn filter_and_sort<'a>(
    opportunities: &'a [AutomationOpportunity],
    query: &OpportunityQuery,
) -> Vec<&'a AutomationOpportunity> {
    let mut result: Vec<&AutomationOpportunity> =
        opportunities.iter().filter(|o| query.matches(o)).collect();

    let field = query.sort.field;
    result.sort_by(|a, b| {
        let (a, b) = (field.key(a), field.key(b));
        let ord = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match query.sort.direction {
            SortDirection::Asc  => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    result
}

pub fn summarize(items: &[&AutomationOpportunity]) -> OpportunitySummary {
    OpportunitySummary {
        count: items.len(),
        total_savings: items.iter().map(|o| o.estimated_annual_savings).sum(),
        high_impact: items.iter().filter(|o| is_high_impact(o)).count(),
    }
}

pub fn is_high_impact(opp: &AutomationOpportunity) -> bool {
    opp.impact_score >= HIGH_IMPACT_THRESHOLD
}

/// Distinct department names across the whole, unfiltered collection, sorted.
pub fn department_options(opportunities: &[AutomationOpportunity]) -> Vec<String> {
    opportunities
        .iter()
        .map(|o| o.department_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Higher impact is better.
pub fn impact_tone(score: u8) -> Tone {
    match score {
        8..=u8::MAX => Tone::Success,
        6..=7 => Tone::Warning,
        _ => Tone::Neutral,
    }
}

/// Lower effort is better.
pub fn effort_tone(score: u8) -> Tone {
    match score {
        0..=3 => Tone::Success,
        4..=5 => Tone::Warning,
        _ => Tone::Destructive,
    }
}
