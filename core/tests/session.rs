//! Dashboard session tests: routing, commands, and rendered page models.

use opsaudit_core::{
    command::UiCommand,
    error::AuditError,
    fixture::AuditFixture,
    metrics::opportunities::{SortDirection, SortField},
    metrics::roi::{Payback, RoiInputs},
    nav::Route,
    session::DashboardSession,
    view::PageModel,
};
use std::sync::Arc;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn make_session() -> DashboardSession {
    let _ = env_logger::builder().is_test(true).try_init();
    let fixture = AuditFixture::builtin().expect("builtin fixture");
    DashboardSession::new("test-session".into(), Arc::new(fixture))
}

fn apply(session: &mut DashboardSession, command: UiCommand) {
    session.apply(command).expect("command accepted");
}

fn navigate(session: &mut DashboardSession, path: &str) {
    apply(session, UiCommand::Navigate { path: path.into() });
}

// ── Routing ──────────────────────────────────────────────────────────────────

#[test]
fn starts_on_dashboard() {
    let session = make_session();
    assert_eq!(session.route(), &Route::Dashboard);

    match session.page() {
        PageModel::Dashboard(p) => {
            assert_eq!(p.kpi_cards.len(), 4);
            assert_eq!(p.kpi_cards[0].value, "$450K - $720K");
            assert_eq!(p.kpi_cards[3].subtitle.as_deref(), Some("6 high-impact"));
            assert_eq!(p.high_impact_count, 6);
            assert_eq!(p.total_hours_wasted_per_week, 274.0);
            assert_eq!(p.department_savings.len(), 8);
        }
        other => panic!("expected dashboard, got {other:?}"),
    }
}

#[test]
fn unmatched_path_renders_not_found() {
    let mut session = make_session();
    navigate(&mut session, "/settings");

    assert_eq!(session.route(), &Route::NotFound("/settings".into()));
    assert_eq!(
        session.page(),
        PageModel::NotFound { path: "/settings".into() }
    );
    assert!(session.snapshot().sidebar.iter().all(|i| !i.active));
}

#[test]
fn snapshot_serializes_route_and_page_tag() {
    let mut session = make_session();
    navigate(&mut session, "/roadmap");

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["sessionId"], "test-session");
    assert_eq!(json["route"], "/roadmap");
    assert_eq!(json["page"]["page"], "roadmap");
    assert_eq!(json["page"]["totalSavings"], 513_000.0);
    assert_eq!(json["lastAudit"], "Last audit: Dec 15, 2024");
    assert_eq!(json["meta"]["version"], "v2.1.0");
}

/// Only the pain-points card carries a trend.
#[test]
fn pain_points_card_shows_assessment_trend() {
    let session = make_session();
    match session.page() {
        PageModel::Dashboard(p) => {
            let with_trend: Vec<&str> = p
                .kpi_cards
                .iter()
                .filter(|c| c.trend.is_some())
                .map(|c| c.title)
                .collect();
            assert_eq!(with_trend, vec!["Pain Points Identified"]);

            let trend = p.kpi_cards[2].trend.expect("pain point trend");
            assert_eq!(trend.value, 12);
            assert_eq!(trend.label, "from initial assessment");
            assert!(!trend.positive);
        }
        other => panic!("expected dashboard, got {other:?}"),
    }

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["page"]["kpiCards"][2]["trend"]["value"], 12);
    assert!(json["page"]["kpiCards"][0].get("trend").is_none());
}

// ── Departments ──────────────────────────────────────────────────────────────

#[test]
fn selecting_a_department_toggles_detail() {
    let mut session = make_session();
    navigate(&mut session, "/departments");

    apply(&mut session, UiCommand::SelectDepartment { department_id: "hr".into() });
    match session.page() {
        PageModel::Departments(p) => {
            let detail = p.selected.expect("hr selected");
            assert_eq!(detail.department.name, "Human Resources");
            assert_eq!(detail.workflow_names, vec!["Employee Onboarding"]);
            assert_eq!(p.rows.iter().filter(|r| r.selected).count(), 1);
            assert_eq!(p.totals.pain_points, 73);
            assert_eq!(p.totals.cost_impact_per_year, 712_400.0);
        }
        other => panic!("expected departments, got {other:?}"),
    }

    apply(&mut session, UiCommand::SelectDepartment { department_id: "hr".into() });
    assert_eq!(session.departments().selected_id(), None);
}

/// An id missing from the fixture shows "nothing selected" rather than failing.
#[test]
fn unknown_department_resolves_to_nothing_selected() {
    let mut session = make_session();
    navigate(&mut session, "/departments");
    apply(&mut session, UiCommand::SelectDepartment { department_id: "facilities".into() });

    match session.page() {
        PageModel::Departments(p) => {
            assert!(p.selected.is_none());
            assert!(p.rows.iter().all(|r| !r.selected));
        }
        other => panic!("expected departments, got {other:?}"),
    }
}

// ── Workflows ────────────────────────────────────────────────────────────────

#[test]
fn first_workflow_starts_expanded() {
    let mut session = make_session();
    navigate(&mut session, "/workflows");
    assert_eq!(session.workflows().expanded_id(), Some("wf-invoice"));

    match session.page() {
        PageModel::Workflows(p) => {
            let expanded: Vec<&str> = p.workflows.iter().filter(|w| w.expanded).map(|w| w.id).collect();
            assert_eq!(expanded, vec!["wf-invoice"]);
            assert_eq!(p.workflows[0].steps.len(), 5);
            assert!(p.workflows[1].steps.is_empty());
            assert_eq!(p.workflows[0].savings.savings_percent, 75);
            // The archive step has no potential and so no badge.
            assert_eq!(p.workflows[0].steps[4].potential, None);
        }
        other => panic!("expected workflows, got {other:?}"),
    }
}

#[test]
fn toggling_workflows_switches_and_collapses() {
    let mut session = make_session();
    apply(&mut session, UiCommand::ToggleWorkflow { workflow_id: "wf-tickets".into() });
    assert_eq!(session.workflows().expanded_id(), Some("wf-tickets"));

    apply(&mut session, UiCommand::ToggleWorkflow { workflow_id: "wf-tickets".into() });
    assert_eq!(session.workflows().expanded_id(), None);
}

// ── Calculator ───────────────────────────────────────────────────────────────

#[test]
fn calculator_edits_recompute_outputs() {
    let mut session = make_session();
    navigate(&mut session, "/calculator");

    apply(&mut session, UiCommand::SetHourlyCost { value: 100.0 });
    apply(&mut session, UiCommand::SetHoursWasted { value: 30.0 });
    apply(&mut session, UiCommand::SetImplementationCost { value: 60_000.0 });

    match session.page() {
        PageModel::Calculator(p) => {
            assert_eq!(p.weekly_wasted_cost, 3000.0);
            assert_eq!(p.outputs.monthly_savings, 12_990.0);
            assert_eq!(p.outputs.annual_savings, 156_000.0);
            assert_eq!(p.outputs.payback_period_months, Payback::Months(4.6));
        }
        other => panic!("expected calculator, got {other:?}"),
    }

    apply(&mut session, UiCommand::ResetCalculator);
    assert_eq!(session.calculator().inputs(), &RoiInputs::default());
}

#[test]
fn calculator_clamps_out_of_range_edits() {
    let mut session = make_session();
    apply(&mut session, UiCommand::SetHourlyCost { value: 5_000.0 });
    apply(&mut session, UiCommand::SetHoursWasted { value: 0.0 });
    apply(&mut session, UiCommand::SetImplementationCost { value: f64::NAN });

    let inputs = session.calculator().inputs();
    assert_eq!(inputs.employee_hourly_cost, 200.0);
    assert_eq!(inputs.hours_wasted_per_week, 5.0);
    assert_eq!(inputs.automation_implementation_cost, 0.0);
}

// ── Automation ───────────────────────────────────────────────────────────────

#[test]
fn automation_filters_and_sorts_through_commands() {
    let mut session = make_session();
    navigate(&mut session, "/automation");

    apply(&mut session, UiCommand::SetCategoryFilter { category: "process".into() });
    apply(&mut session, UiCommand::ToggleSort { field: SortField::Savings });

    match session.page() {
        PageModel::Automation(p) => {
            assert_eq!(p.summary.count, 6);
            assert_eq!(p.summary.total_savings, 309_000.0);
            assert_eq!(p.items[0].opportunity.id, "opp-1");
            assert_eq!(p.query.sort.direction, SortDirection::Desc);
            assert_eq!(p.department_options.len(), 7);
            assert_eq!(p.category_options.len(), 6);
        }
        other => panic!("expected automation, got {other:?}"),
    }

    apply(&mut session, UiCommand::SetDepartmentFilter { department: "Sales".into() });
    match session.page() {
        PageModel::Automation(p) => {
            let ids: Vec<&str> = p.items.iter().map(|c| c.opportunity.id.as_str()).collect();
            assert_eq!(ids, vec!["opp-7"]);
        }
        other => panic!("expected automation, got {other:?}"),
    }

    apply(&mut session, UiCommand::SetCategoryFilter { category: "all".into() });
    apply(&mut session, UiCommand::SetDepartmentFilter { department: "all".into() });
    assert_eq!(session.automation().query().sort.field, SortField::Savings);
}

#[test]
fn unknown_category_is_rejected_and_state_kept() {
    let mut session = make_session();
    apply(&mut session, UiCommand::SetCategoryFilter { category: "data".into() });

    let err = session
        .apply(UiCommand::SetCategoryFilter { category: "marketing".into() })
        .unwrap_err();
    assert!(matches!(err, AuditError::InvalidCommand { .. }));
    assert_eq!(session.automation().query().category.as_str(), "data");
}

#[test]
fn commands_parse_from_ipc_json() {
    let cmd: UiCommand =
        serde_json::from_str(r#"{"cmd":"toggle_sort","field":"effort"}"#).unwrap();
    assert_eq!(cmd, UiCommand::ToggleSort { field: SortField::Effort });

    let cmd: UiCommand =
        serde_json::from_str(r#"{"cmd":"navigate","path":"/calculator"}"#).unwrap();
    assert_eq!(cmd.name(), "navigate");

    let cmd: UiCommand = serde_json::from_str(r#"{"cmd":"reset_calculator"}"#).unwrap();
    assert_eq!(cmd, UiCommand::ResetCalculator);
}

// ── Roadmap ──────────────────────────────────────────────────────────────────

#[test]
fn roadmap_page_labels_phases() {
    let mut session = make_session();
    navigate(&mut session, "/roadmap");

    match session.page() {
        PageModel::Roadmap(p) => {
            let labels: Vec<&str> = p.phases.iter().map(|s| s.label).collect();
            assert_eq!(labels, vec!["Quick Wins", "Medium Term", "Long Term"]);
            assert_eq!(p.phases[0].subtitle, "0–30 days");
            assert_eq!(p.phases[0].items[0].day_span, "Day 1 – 21");
            let last = p.phases[2].items.last().expect("long-term items");
            assert_eq!(last.dependency_count, 2);
            assert_eq!(last.status_label, "Pending");
        }
        other => panic!("expected roadmap, got {other:?}"),
    }
}

#[test]
fn roadmap_page_counts_every_project() {
    let mut session = make_session();
    navigate(&mut session, "/roadmap");

    match session.page() {
        PageModel::Roadmap(p) => {
            assert_eq!(p.total_items, 10);
            let bucketed: usize = p.phases.iter().map(|s| s.items.len()).sum();
            assert_eq!(bucketed, p.total_items);
        }
        other => panic!("expected roadmap, got {other:?}"),
    }

    let json = serde_json::to_value(session.snapshot()).unwrap();
    assert_eq!(json["page"]["totalItems"], 10);
}
