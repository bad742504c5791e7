//! View layer — per-page state and the page models rendered from it.
//!
//! RULE: A view owns its transient UI state and changes it only through
//! its own setters. Rendering is a pure read of that state plus the
//! fixture; page models borrow from the fixture.

pub mod automation;
pub mod calculator;
pub mod dashboard;
pub mod departments;
pub mod format;
pub mod roadmap;
pub mod workflows;

use serde::Serialize;

pub use automation::{AutomationPage, AutomationView};
pub use calculator::{CalculatorPage, CalculatorView};
pub use dashboard::{DashboardPage, DashboardView};
pub use departments::{DepartmentsPage, DepartmentsView};
pub use roadmap::{RoadmapPage, RoadmapView};
pub use workflows::{WorkflowsPage, WorkflowsView};

/// The rendered model of whichever page the current route shows.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageModel<'a> {
    Dashboard(DashboardPage),
    Departments(DepartmentsPage<'a>),
    Workflows(WorkflowsPage<'a>),
    Calculator(CalculatorPage),
    Automation(AutomationPage<'a>),
    Roadmap(RoadmapPage<'a>),
    NotFound { path: String },
}
