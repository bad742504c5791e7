//! The dashboard session — the one place UI state lives.
//!
//! A session owns the current route and every view's transient state.
//! The fixture is shared read-only; commands mutate views only.

use crate::{
    command::UiCommand,
    error::{AuditError, AuditResult},
    fixture::AuditFixture,
    metrics::opportunities::{CategoryFilter, DepartmentFilter},
    model::AuditMeta,
    nav::{sidebar, Route, SidebarItem},
    types::SessionId,
    view::{
        AutomationView, CalculatorView, DashboardView, DepartmentsView, PageModel, RoadmapView,
        WorkflowsView,
    },
};
use serde::Serialize;
use std::sync::Arc;

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState<'a> {
    pub session_id: &'a str,
    pub route: &'a Route,
    pub sidebar: Vec<SidebarItem>,
    pub meta: &'a AuditMeta,
    pub last_audit: String,
    pub page: PageModel<'a>,
}

pub struct DashboardSession {
    pub session_id: SessionId,
    fixture: Arc<AuditFixture>,
    route: Route,
    dashboard: DashboardView,
    departments: DepartmentsView,
    workflows: WorkflowsView,
    calculator: CalculatorView,
    automation: AutomationView,
    roadmap: RoadmapView,
}

impl DashboardSession {
    pub fn new(session_id: SessionId, fixture: Arc<AuditFixture>) -> Self {
        Self {
            workflows: WorkflowsView::new(&fixture),
            session_id,
            fixture,
            route: Route::Dashboard,
            dashboard: DashboardView,
            departments: DepartmentsView::default(),
            calculator: CalculatorView::default(),
            automation: AutomationView::default(),
            roadmap: RoadmapView,
        }
    }

    pub fn fixture(&self) -> &AuditFixture {
        &self.fixture
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn departments(&self) -> &DepartmentsView {
        &self.departments
    }

    pub fn workflows(&self) -> &WorkflowsView {
        &self.workflows
    }

    pub fn calculator(&self) -> &CalculatorView {
        &self.calculator
    }

    pub fn automation(&self) -> &AutomationView {
        &self.automation
    }

    pub fn navigate(&mut self, path: &str) {
        self.route = Route::resolve(path);
        if self.route.is_not_found() {
            log::warn!("session={} no route for '{path}'", self.session_id);
        }
    }

    /// Apply one user interaction. Only unparseable filter values are rejected.
    pub fn apply(&mut self, command: UiCommand) -> AuditResult<()> {
        log::debug!("session={} cmd={}", self.session_id, command.name());

        match command {
            UiCommand::Navigate { path } => self.navigate(&path),

            UiCommand::SelectDepartment { department_id } => {
                self.departments.toggle(&department_id);
            }
            UiCommand::ClearDepartment => self.departments.clear(),

            UiCommand::ToggleWorkflow { workflow_id } => self.workflows.toggle(&workflow_id),

            UiCommand::SetHourlyCost { value } => self.calculator.set_hourly_cost(value),
            UiCommand::SetHoursWasted { value } => self.calculator.set_hours_wasted(value),
            UiCommand::SetImplementationCost { value } => {
                self.calculator.set_implementation_cost(value)
            }
            UiCommand::ResetCalculator => self.calculator.reset(),

            UiCommand::SetCategoryFilter { category } => {
                let filter = CategoryFilter::parse(&category).ok_or_else(|| {
                    AuditError::InvalidCommand {
                        command: "set_category_filter".into(),
                        reason: format!("unknown category '{category}'"),
                    }
                })?;
                self.automation.set_category(filter);
            }
            UiCommand::SetDepartmentFilter { department } => {
                self.automation.set_department(DepartmentFilter::parse(&department));
            }
            UiCommand::ToggleSort { field } => self.automation.toggle_sort(field),
        }
        Ok(())
    }

    /// Render the current route's page.
    pub fn page(&self) -> PageModel<'_> {
        let fixture = self.fixture.as_ref();
        match &self.route {
            Route::Dashboard   => PageModel::Dashboard(self.dashboard.render(fixture)),
            Route::Departments => PageModel::Departments(self.departments.render(fixture)),
            Route::Workflows   => PageModel::Workflows(self.workflows.render(fixture)),
            Route::Calculator  => PageModel::Calculator(self.calculator.render()),
            Route::Automation  => PageModel::Automation(self.automation.render(fixture)),
            Route::Roadmap     => PageModel::Roadmap(self.roadmap.render(fixture)),
            Route::NotFound(path) => PageModel::NotFound { path: path.clone() },
        }
    }

    pub fn snapshot(&self) -> UiState<'_> {
        UiState {
            session_id: &self.session_id,
            route: &self.route,
            sidebar: sidebar(&self.route),
            meta: &self.fixture.meta,
            last_audit: self.fixture.meta.last_audit_label(),
            page: self.page(),
        }
    }
}
