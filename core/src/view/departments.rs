use crate::{
    fixture::AuditFixture,
    metrics::totals::{department_activity, department_totals, DepartmentTotals},
    model::{Department, Tone},
    types::EntityId,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRow<'a> {
    pub department: &'a Department,
    pub activity: Tone,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDetail<'a> {
    pub department: &'a Department,
    pub workflow_names: Vec<&'a str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepartmentsPage<'a> {
    pub rows: Vec<DepartmentRow<'a>>,
    pub totals: DepartmentTotals,
    /// `None` renders the "select a department" placeholder.
    pub selected: Option<DepartmentDetail<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentsView {
    selected: Option<EntityId>,
}

impl DepartmentsView {
    /// Clicking the selected row deselects it; any other row selects it.
    pub fn toggle(&mut self, department_id: &str) {
        if self.selected.as_deref() == Some(department_id) {
            self.selected = None;
        } else {
            self.selected = Some(department_id.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected department, or `None` if nothing is selected
    /// or the id is not in the fixture.
    pub fn selected<'a>(&self, fixture: &'a AuditFixture) -> Option<&'a Department> {
        self.selected.as_deref().and_then(|id| fixture.department(id))
    }

    pub fn render<'a>(&self, fixture: &'a AuditFixture) -> DepartmentsPage<'a> {
        let selected = self.selected(fixture);
        if selected.is_none() {
            if let Some(id) = &self.selected {
                log::debug!("departments: selection '{id}' not in fixture, showing none");
            }
        }

        let rows = fixture
            .departments
            .iter()
            .map(|d| DepartmentRow {
                department: d,
                activity: department_activity(d),
                selected: selected.is_some_and(|s| s.id == d.id),
            })
            .collect();

        DepartmentsPage {
            rows,
            totals: department_totals(&fixture.departments),
            selected: selected.map(|d| DepartmentDetail {
                department: d,
                workflow_names: fixture.workflows_for(&d.id).map(|w| w.name.as_str()).collect(),
            }),
        }
    }
}
