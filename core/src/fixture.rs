//! Fixture data store — the read-only audit dataset.
//!
//! RULE: The fixture is constructed once and never mutated.
//! It is passed explicitly into the metrics engine and views;
//! there is no global instance.

use crate::{
    error::{AuditError, AuditResult},
    model::{
        AuditMeta, AutomationOpportunity, Department, KpiSummary, OpportunityCategory,
        RoadmapItem, Workflow,
    },
    types::{EntityId, Money},
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path};

/// File name of the fixture inside a data directory.
pub const FIXTURE_FILE: &str = "audit_fixture.json";

const BUILTIN_FIXTURE: &str = include_str!("../../data/audit_fixture.json");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuditFixture {
    pub meta: AuditMeta,
    pub kpi: KpiSummary,
    pub departments: Vec<Department>,
    pub workflows: Vec<Workflow>,
    pub opportunities: Vec<AutomationOpportunity>,
    pub roadmap: Vec<RoadmapItem>,
}

/// One bar of the savings-by-department chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSavings {
    pub short_name: String,
    pub savings: Money,
}

/// One slice of the opportunity distribution chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub category: OpportunityCategory,
    pub label: &'static str,
    pub count: usize,
}

/// A fixture record that breaks a documented invariant.
/// Advisory only: nothing downstream refuses to run on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureIssue {
    DuplicateId { kind: &'static str, id: EntityId },
    PotentialExceedsCurrent { workflow_id: EntityId },
    ZeroCurrentTime { workflow_id: EntityId },
    EndBeforeStart { item_id: EntityId },
    DanglingDependency { item_id: EntityId, dependency: EntityId },
    UnknownDepartment { kind: &'static str, id: EntityId, department_id: EntityId },
    ScoreOutOfRange { opportunity_id: EntityId, field: &'static str, score: u8 },
    SavingsRangeInverted,
}

impl std::fmt::Display for FixtureIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureIssue::DuplicateId { kind, id } => write!(f, "duplicate {kind} id '{id}'"),
            FixtureIssue::PotentialExceedsCurrent { workflow_id } => {
                write!(f, "workflow '{workflow_id}' potential time exceeds current time")
            }
            FixtureIssue::ZeroCurrentTime { workflow_id } => {
                write!(f, "workflow '{workflow_id}' has zero current time")
            }
            FixtureIssue::EndBeforeStart { item_id } => {
                write!(f, "roadmap item '{item_id}' ends before it starts")
            }
            FixtureIssue::DanglingDependency { item_id, dependency } => {
                write!(f, "roadmap item '{item_id}' depends on unknown item '{dependency}'")
            }
            FixtureIssue::UnknownDepartment { kind, id, department_id } => {
                write!(f, "{kind} '{id}' references unknown department '{department_id}'")
            }
            FixtureIssue::ScoreOutOfRange { opportunity_id, field, score } => {
                write!(f, "opportunity '{opportunity_id}' {field} {score} is outside 1-10")
            }
            FixtureIssue::SavingsRangeInverted => {
                write!(f, "kpi savings range has min greater than max")
            }
        }
    }
}

impl AuditFixture {
    /// The dataset compiled into the binary.
    pub fn builtin() -> AuditResult<Self> {
        Self::from_json(BUILTIN_FIXTURE)
    }

    pub fn from_json(json: &str) -> AuditResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a substitute fixture from `<data_dir>/audit_fixture.json`.
    pub fn load(data_dir: impl AsRef<Path>) -> AuditResult<Self> {
        let path = data_dir.as_ref().join(FIXTURE_FILE);
        if !path.exists() {
            return Err(AuditError::FixtureNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        let fixture = Self::from_json(&content)?;
        log::debug!(
            "Loaded fixture from {}: {} departments, {} workflows, {} opportunities, {} roadmap items",
            path.display(),
            fixture.departments.len(),
            fixture.workflows.len(),
            fixture.opportunities.len(),
            fixture.roadmap.len()
        );
        Ok(fixture)
    }

    // ── Lookups ────────────────────────────────────────────────

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    pub fn workflow(&self, id: &str) -> Option<&Workflow> {
        self.workflows.iter().find(|w| w.id == id)
    }

    /// Workflows owned by a department, in fixture order.
    pub fn workflows_for<'a>(&'a self, department_id: &'a str) -> impl Iterator<Item = &'a Workflow> + 'a {
        self.workflows
            .iter()
            .filter(move |w| w.department_id == department_id)
    }

    // ── Aggregate series ───────────────────────────────────────

    /// One entry per department, in declaration order.
    pub fn department_savings_series(&self) -> Vec<DepartmentSavings> {
        self.departments
            .iter()
            .map(|d| DepartmentSavings {
                short_name: d.chart_label().to_string(),
                savings: d.cost_impact_per_year,
            })
            .collect()
    }

    /// One entry per category that has at least one opportunity,
    /// ordered by first appearance.
    pub fn category_distribution(&self) -> Vec<CategoryCount> {
        let mut series: Vec<CategoryCount> = Vec::new();
        for opp in &self.opportunities {
            match series.iter_mut().find(|c| c.category == opp.category) {
                Some(entry) => entry.count += 1,
                None => series.push(CategoryCount {
                    category: opp.category,
                    label: opp.category.label(),
                    count: 1,
                }),
            }
        }
        series
    }

    // ── Validation ─────────────────────────────────────────────

    /// Report invariant violations. Never fails.
    pub fn validate(&self) -> Vec<FixtureIssue> {
        let mut issues = Vec::new();

        check_unique(&mut issues, "department", self.departments.iter().map(|d| &d.id));
        check_unique(&mut issues, "workflow", self.workflows.iter().map(|w| &w.id));
        check_unique(&mut issues, "opportunity", self.opportunities.iter().map(|o| &o.id));
        check_unique(&mut issues, "roadmap item", self.roadmap.iter().map(|r| &r.id));

        let department_ids: HashSet<&str> = self.departments.iter().map(|d| d.id.as_str()).collect();

        for wf in &self.workflows {
            if wf.current_time_minutes == 0 {
                issues.push(FixtureIssue::ZeroCurrentTime { workflow_id: wf.id.clone() });
            }
            if wf.potential_time_minutes > wf.current_time_minutes {
                issues.push(FixtureIssue::PotentialExceedsCurrent { workflow_id: wf.id.clone() });
            }
            if !department_ids.contains(wf.department_id.as_str()) {
                issues.push(FixtureIssue::UnknownDepartment {
                    kind: "workflow",
                    id: wf.id.clone(),
                    department_id: wf.department_id.clone(),
                });
            }
        }

        for opp in &self.opportunities {
            for (field, score) in [("impact", opp.impact_score), ("effort", opp.effort_score)] {
                if !(1..=10).contains(&score) {
                    issues.push(FixtureIssue::ScoreOutOfRange {
                        opportunity_id: opp.id.clone(),
                        field,
                        score,
                    });
                }
            }
            if !department_ids.contains(opp.department_id.as_str()) {
                issues.push(FixtureIssue::UnknownDepartment {
                    kind: "opportunity",
                    id: opp.id.clone(),
                    department_id: opp.department_id.clone(),
                });
            }
        }

        let item_ids: HashSet<&str> = self.roadmap.iter().map(|r| r.id.as_str()).collect();
        for item in &self.roadmap {
            if item.end_day < item.start_day {
                issues.push(FixtureIssue::EndBeforeStart { item_id: item.id.clone() });
            }
            for dep in &item.dependencies {
                if !item_ids.contains(dep.as_str()) {
                    issues.push(FixtureIssue::DanglingDependency {
                        item_id: item.id.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        let range = self.kpi.total_potential_savings;
        if range.min > range.max {
            issues.push(FixtureIssue::SavingsRangeInverted);
        }

        issues
    }
}

fn check_unique<'a>(
    issues: &mut Vec<FixtureIssue>,
    kind: &'static str,
    ids: impl Iterator<Item = &'a EntityId>,
) {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id.as_str()) {
            issues.push(FixtureIssue::DuplicateId { kind, id: id.clone() });
        }
    }
}
