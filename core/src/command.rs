use crate::metrics::opportunities::SortField;
use serde::{Deserialize, Serialize};

/// Every user interaction the dashboard understands.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum UiCommand {
    // ── Navigation ────────────────────────────────
    Navigate { path: String },

    // ── Departments ───────────────────────────────
    /// Selects the department, or deselects it if already selected.
    SelectDepartment { department_id: String },
    ClearDepartment,

    // ── Workflows ─────────────────────────────────
    ToggleWorkflow { workflow_id: String },

    // ── ROI calculator ────────────────────────────
    SetHourlyCost { value: f64 },
    SetHoursWasted { value: f64 },
    SetImplementationCost { value: f64 },
    ResetCalculator,

    // ── Automation opportunities ──────────────────
    /// `"all"` or a category wire name.
    SetCategoryFilter { category: String },
    /// `"all"` or a department display name.
    SetDepartmentFilter { department: String },
    ToggleSort { field: SortField },
}

impl UiCommand {
    /// Stable name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::Navigate { .. }              => "navigate",
            UiCommand::SelectDepartment { .. }      => "select_department",
            UiCommand::ClearDepartment              => "clear_department",
            UiCommand::ToggleWorkflow { .. }        => "toggle_workflow",
            UiCommand::SetHourlyCost { .. }         => "set_hourly_cost",
            UiCommand::SetHoursWasted { .. }        => "set_hours_wasted",
            UiCommand::SetImplementationCost { .. } => "set_implementation_cost",
            UiCommand::ResetCalculator              => "reset_calculator",
            UiCommand::SetCategoryFilter { .. }     => "set_category_filter",
            UiCommand::SetDepartmentFilter { .. }   => "set_department_filter",
            UiCommand::ToggleSort { .. }            => "toggle_sort",
        }
    }
}
