//! Domain model — the audit records the dashboard presents.
//!
//! RULE: Types here carry no behaviour beyond their display tables.
//! Every closed enumeration owns its label/tone mapping in an exhaustive
//! match, so adding a variant does not compile until it is mapped.

use crate::types::{DayOffset, EntityId, Minutes, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Display tone ─────────────────────────────────────────────────────────────

/// Semantic colour class a renderer maps to its own palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Info,
    Warning,
    Primary,
    Success,
    Destructive,
}

// ── Records ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    /// Axis label for the savings chart. Falls back to the first word of `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub pain_points: u32,
    pub hours_wasted_per_week: f64,
    /// Independent fixture estimate, not derived from `hours_wasted_per_week`.
    pub cost_impact_per_year: Money,
    pub automation_opportunities: u32,
}

impl Department {
    pub fn chart_label(&self) -> &str {
        match &self.short_name {
            Some(short) => short.as_str(),
            None => self.name.split_whitespace().next().unwrap_or(&self.name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    pub id: EntityId,
    pub name: String,
    pub department_id: EntityId,
    /// Process order; position is meaningful.
    pub steps: Vec<WorkflowStep>,
    pub current_time_minutes: Minutes,
    pub potential_time_minutes: Minutes,
    pub bottlenecks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub id: EntityId,
    pub name: String,
    pub duration: Minutes,
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub is_bottleneck: bool,
    pub automation_potential: AutomationPotential,
}

impl WorkflowStep {
    /// Bottlenecks override the step-type colour.
    pub fn tone(&self) -> Tone {
        if self.is_bottleneck {
            Tone::Destructive
        } else {
            self.step_type.tone()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationOpportunity {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub department_id: EntityId,
    /// Denormalized display copy of the owning department's name.
    pub department_name: String,
    /// 1–10.
    pub impact_score: u8,
    /// 1–10.
    pub effort_score: u8,
    pub estimated_annual_savings: Money,
    pub category: OpportunityCategory,
    pub status: OpportunityStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub phase: RoadmapPhase,
    pub start_day: DayOffset,
    pub end_day: DayOffset,
    /// Ids of other roadmap items. Display only; never resolved.
    #[serde(default)]
    pub dependencies: Vec<EntityId>,
    pub status: RoadmapStatus,
    pub estimated_savings: Money,
    pub department: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SavingsRange {
    pub min: Money,
    pub max: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_potential_savings: SavingsRange,
    pub departments_audited: u32,
    pub pain_points_identified: u32,
    pub automation_opportunities: u32,
}

/// Facts shown in the sidebar footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditMeta {
    pub title: String,
    pub audited_on: NaiveDate,
    pub version: String,
}

impl AuditMeta {
    /// e.g. "Last audit: Dec 15, 2024".
    pub fn last_audit_label(&self) -> String {
        format!("Last audit: {}", self.audited_on.format("%b %-d, %Y"))
    }
}

// ── Enumerations ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StepType {
    Manual,
    Automated,
    SemiAutomated,
}

impl StepType {
    pub const ALL: [StepType; 3] = [StepType::Manual, StepType::Automated, StepType::SemiAutomated];

    pub fn label(self) -> &'static str {
        match self {
            StepType::Manual        => "Manual",
            StepType::Automated     => "Automated",
            StepType::SemiAutomated => "Semi-automated",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            StepType::Manual        => Tone::Neutral,
            StepType::Automated     => Tone::Success,
            StepType::SemiAutomated => Tone::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AutomationPotential {
    High,
    Medium,
    Low,
    None,
}

impl AutomationPotential {
    pub const ALL: [AutomationPotential; 4] = [
        AutomationPotential::High,
        AutomationPotential::Medium,
        AutomationPotential::Low,
        AutomationPotential::None,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AutomationPotential::High   => "high",
            AutomationPotential::Medium => "medium",
            AutomationPotential::Low    => "low",
            AutomationPotential::None   => "none",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            AutomationPotential::High   => Tone::Success,
            AutomationPotential::Medium => Tone::Warning,
            AutomationPotential::Low    => Tone::Neutral,
            AutomationPotential::None   => Tone::Info,
        }
    }

    /// Steps with no potential get no badge.
    pub fn is_badged(self) -> bool {
        self != AutomationPotential::None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityCategory {
    Process,
    Communication,
    Data,
    Reporting,
    Integration,
}

impl OpportunityCategory {
    pub const ALL: [OpportunityCategory; 5] = [
        OpportunityCategory::Process,
        OpportunityCategory::Communication,
        OpportunityCategory::Data,
        OpportunityCategory::Reporting,
        OpportunityCategory::Integration,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OpportunityCategory::Process       => "Process",
            OpportunityCategory::Communication => "Communication",
            OpportunityCategory::Data          => "Data & Analytics",
            OpportunityCategory::Reporting     => "Reporting",
            OpportunityCategory::Integration   => "Integration",
        }
    }

    /// Wire name, e.g. "process". Matches the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            OpportunityCategory::Process       => "process",
            OpportunityCategory::Communication => "communication",
            OpportunityCategory::Data          => "data",
            OpportunityCategory::Reporting     => "reporting",
            OpportunityCategory::Integration   => "integration",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OpportunityStatus {
    Identified,
    Evaluated,
    Planned,
    InProgress,
    Completed,
}

impl OpportunityStatus {
    pub const ALL: [OpportunityStatus; 5] = [
        OpportunityStatus::Identified,
        OpportunityStatus::Evaluated,
        OpportunityStatus::Planned,
        OpportunityStatus::InProgress,
        OpportunityStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OpportunityStatus::Identified => "Identified",
            OpportunityStatus::Evaluated  => "Evaluated",
            OpportunityStatus::Planned    => "Planned",
            OpportunityStatus::InProgress => "In Progress",
            OpportunityStatus::Completed  => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            OpportunityStatus::Identified => Tone::Neutral,
            OpportunityStatus::Evaluated  => Tone::Info,
            OpportunityStatus::Planned    => Tone::Warning,
            OpportunityStatus::InProgress => Tone::Primary,
            OpportunityStatus::Completed  => Tone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapPhase {
    QuickWin,
    MediumTerm,
    LongTerm,
}

impl RoadmapPhase {
    /// Display order of the timeline.
    pub const ALL: [RoadmapPhase; 3] = [
        RoadmapPhase::QuickWin,
        RoadmapPhase::MediumTerm,
        RoadmapPhase::LongTerm,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoadmapPhase::QuickWin   => "Quick Wins",
            RoadmapPhase::MediumTerm => "Medium Term",
            RoadmapPhase::LongTerm   => "Long Term",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            RoadmapPhase::QuickWin   => "0–30 days",
            RoadmapPhase::MediumTerm => "30–90 days",
            RoadmapPhase::LongTerm   => "90+ days",
        }
    }

    /// Nominal horizon in days. `None` upper bound means open-ended.
    /// Informational only: an item's phase is fixed, never computed from dates.
    pub fn day_range(self) -> (DayOffset, Option<DayOffset>) {
        match self {
            RoadmapPhase::QuickWin   => (0, Some(30)),
            RoadmapPhase::MediumTerm => (30, Some(90)),
            RoadmapPhase::LongTerm   => (90, None),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RoadmapPhase::QuickWin   => Tone::Success,
            RoadmapPhase::MediumTerm => Tone::Warning,
            RoadmapPhase::LongTerm   => Tone::Primary,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Pending,
    InProgress,
    Completed,
}

impl RoadmapStatus {
    pub const ALL: [RoadmapStatus; 3] = [
        RoadmapStatus::Pending,
        RoadmapStatus::InProgress,
        RoadmapStatus::Completed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::Pending    => "Pending",
            RoadmapStatus::InProgress => "In Progress",
            RoadmapStatus::Completed  => "Completed",
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            RoadmapStatus::Pending    => Tone::Neutral,
            RoadmapStatus::InProgress => Tone::Primary,
            RoadmapStatus::Completed  => Tone::Success,
        }
    }
}
