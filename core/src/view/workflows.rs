use crate::{
    fixture::AuditFixture,
    metrics::workflow::{bottleneck_step_count, total_step_minutes, workflow_savings, WorkflowSavings},
    model::{AutomationPotential, StepType, Tone, Workflow, WorkflowStep},
    types::{EntityId, Minutes},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepTile<'a> {
    pub name: &'a str,
    pub duration: Minutes,
    pub step_type: StepType,
    pub tone: Tone,
    pub is_bottleneck: bool,
    /// Absent for steps with no automation potential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential: Option<AutomationPotential>,
}

impl<'a> From<&'a WorkflowStep> for StepTile<'a> {
    fn from(step: &'a WorkflowStep) -> Self {
        Self {
            name: &step.name,
            duration: step.duration,
            step_type: step.step_type,
            tone: step.tone(),
            is_bottleneck: step.is_bottleneck,
            potential: step
                .automation_potential
                .is_badged()
                .then_some(step.automation_potential),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub department_id: &'a str,
    pub step_count: usize,
    pub bottleneck_step_count: usize,
    /// Sum of step durations; may differ from `current_time_minutes`.
    pub step_minutes: Minutes,
    pub current_time_minutes: Minutes,
    pub potential_time_minutes: Minutes,
    pub savings: WorkflowSavings,
    pub bottlenecks: &'a [String],
    pub expanded: bool,
    /// Filled only for the expanded card.
    pub steps: Vec<StepTile<'a>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkflowsPage<'a> {
    pub workflows: Vec<WorkflowCard<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowsView {
    expanded: Option<EntityId>,
}

impl WorkflowsView {
    /// The first workflow starts expanded.
    pub fn new(fixture: &AuditFixture) -> Self {
        Self {
            expanded: fixture.workflows.first().map(|w| w.id.clone()),
        }
    }

    /// Expanding one card collapses the other; toggling the open card closes it.
    pub fn toggle(&mut self, workflow_id: &str) {
        if self.expanded.as_deref() == Some(workflow_id) {
            self.expanded = None;
        } else {
            self.expanded = Some(workflow_id.to_string());
        }
    }

    pub fn expanded_id(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn render<'a>(&self, fixture: &'a AuditFixture) -> WorkflowsPage<'a> {
        WorkflowsPage {
            workflows: fixture.workflows.iter().map(|w| self.card(w)).collect(),
        }
    }

    fn card<'a>(&self, workflow: &'a Workflow) -> WorkflowCard<'a> {
        let expanded = self.expanded.as_deref() == Some(workflow.id.as_str());
        WorkflowCard {
            id: &workflow.id,
            name: &workflow.name,
            department_id: &workflow.department_id,
            step_count: workflow.steps.len(),
            bottleneck_step_count: bottleneck_step_count(workflow),
            step_minutes: total_step_minutes(workflow),
            current_time_minutes: workflow.current_time_minutes,
            potential_time_minutes: workflow.potential_time_minutes,
            savings: workflow_savings(workflow),
            bottlenecks: &workflow.bottlenecks,
            expanded,
            steps: if expanded {
                workflow.steps.iter().map(StepTile::from).collect()
            } else {
                Vec::new()
            },
        }
    }
}
