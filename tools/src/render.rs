//! Plain-text rendering of a dashboard frame, for terminal use.

use opsaudit_core::{
    session::UiState,
    view::{
        format::{currency, currency_k},
        AutomationPage, CalculatorPage, DashboardPage, DepartmentsPage, PageModel, RoadmapPage,
        WorkflowsPage,
    },
};
use std::fmt::Write;

pub fn render_text(state: &UiState<'_>) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_frame(&mut out, state)?;
    Ok(out)
}

fn write_frame(out: &mut String, state: &UiState<'_>) -> std::fmt::Result {
    writeln!(out, "{} — {}", state.meta.title, state.route.path())?;
    let nav: Vec<String> = state
        .sidebar
        .iter()
        .map(|i| if i.active { format!("[{}]", i.name) } else { i.name.to_string() })
        .collect();
    writeln!(out, "  {}", nav.join(" | "))?;
    writeln!(out, "  {} · {}", state.last_audit, state.meta.version)?;
    writeln!(out)?;

    match &state.page {
        PageModel::Dashboard(p)   => write_dashboard(out, p),
        PageModel::Departments(p) => write_departments(out, p),
        PageModel::Workflows(p)   => write_workflows(out, p),
        PageModel::Calculator(p)  => write_calculator(out, p),
        PageModel::Automation(p)  => write_automation(out, p),
        PageModel::Roadmap(p)     => write_roadmap(out, p),
        PageModel::NotFound { path } => writeln!(out, "=== 404 ===\n  No page at {path}"),
    }
}

fn write_dashboard(out: &mut String, p: &DashboardPage) -> std::fmt::Result {
    writeln!(out, "=== {} ===", p.title)?;
    for card in &p.kpi_cards {
        match &card.subtitle {
            Some(sub) => writeln!(out, "  {:<26} {:>16}  ({sub})", card.title, card.value)?,
            None => writeln!(out, "  {:<26} {:>16}", card.title, card.value)?,
        }
        if let Some(trend) = &card.trend {
            let sign = if trend.positive { "+" } else { "-" };
            writeln!(out, "  {:<26} {:>16}  {sign}{}% {}", "", "", trend.value, trend.label)?;
        }
    }
    writeln!(out, "  {}h wasted weekly", p.total_hours_wasted_per_week)?;
    writeln!(out)?;
    writeln!(out, "=== SAVINGS BY DEPARTMENT ===")?;
    for bar in &p.department_savings {
        writeln!(out, "  {:<10} {:>8}", bar.short_name, currency_k(bar.savings))?;
    }
    writeln!(out)?;
    writeln!(out, "=== AUTOMATION DISTRIBUTION ===")?;
    for slice in &p.category_distribution {
        writeln!(out, "  {:<18} {}", slice.label, slice.count)?;
    }
    Ok(())
}

fn write_departments(out: &mut String, p: &DepartmentsPage<'_>) -> std::fmt::Result {
    writeln!(out, "=== DEPARTMENT ANALYSIS ===")?;
    for row in &p.rows {
        let d = row.department;
        let marker = if row.selected { ">" } else { " " };
        writeln!(
            out,
            "{marker} {:<22} {:>3} pain points  {:>5}h/week  {:>10}",
            d.name,
            d.pain_points,
            d.hours_wasted_per_week,
            currency(d.cost_impact_per_year)
        )?;
    }
    writeln!(
        out,
        "  totals: {} pain points · {}h/week · {} · {} opportunities",
        p.totals.pain_points,
        p.totals.hours_wasted_per_week,
        currency_k(p.totals.cost_impact_per_year),
        p.totals.automation_opportunities
    )?;
    writeln!(out)?;
    match &p.selected {
        Some(detail) => {
            let d = detail.department;
            writeln!(out, "--- {} ---", d.name)?;
            writeln!(out, "  {} Pain Points", d.pain_points)?;
            writeln!(out, "  {} hours/week", d.hours_wasted_per_week)?;
            writeln!(out, "  {}/year", currency(d.cost_impact_per_year))?;
            writeln!(out, "  {} Opportunities", d.automation_opportunities)?;
            if !detail.workflow_names.is_empty() {
                writeln!(out, "  workflows: {}", detail.workflow_names.join(", "))?;
            }
        }
        None => writeln!(out, "  Select a department to view details")?,
    }
    Ok(())
}

fn write_workflows(out: &mut String, p: &WorkflowsPage<'_>) -> std::fmt::Result {
    writeln!(out, "=== WORKFLOW MAPPING ===")?;
    for wf in &p.workflows {
        writeln!(
            out,
            "{} {} · {} steps · {} bottlenecks · {} min → {} min (-{}%)",
            if wf.expanded { "v" } else { ">" },
            wf.name,
            wf.step_count,
            wf.bottlenecks.len(),
            wf.current_time_minutes,
            wf.potential_time_minutes,
            wf.savings.savings_percent
        )?;
        if wf.expanded {
            for b in wf.bottlenecks {
                writeln!(out, "    ! {b}")?;
            }
            let flow: Vec<String> = wf
                .steps
                .iter()
                .map(|s| {
                    let mut tile = format!("{} ({}m)", s.name, s.duration);
                    if s.is_bottleneck {
                        tile.push_str(" *");
                    }
                    tile
                })
                .collect();
            writeln!(out, "    {}", flow.join(" → "))?;
        }
    }
    Ok(())
}

fn write_calculator(out: &mut String, p: &CalculatorPage) -> std::fmt::Result {
    writeln!(out, "=== ROI CALCULATOR ===")?;
    writeln!(out, "  hourly cost:          {}", currency(p.inputs.employee_hourly_cost))?;
    writeln!(out, "  hours wasted / week:  {}", p.inputs.hours_wasted_per_week)?;
    writeln!(out, "  implementation cost:  {}", currency(p.inputs.automation_implementation_cost))?;
    writeln!(out, "  weekly inefficiency:  {}", currency(p.weekly_wasted_cost))?;
    writeln!(out)?;
    writeln!(out, "  monthly savings:      {}", currency(p.outputs.monthly_savings))?;
    writeln!(out, "  annual savings:       {}", currency(p.outputs.annual_savings))?;
    writeln!(out, "  payback period:       {} months", p.outputs.payback_period_months)?;
    writeln!(out)?;
    writeln!(out, "=== 3-YEAR ROI SUMMARY ===")?;
    writeln!(out, "  gross savings:        {}", currency(p.summary.gross_savings))?;
    writeln!(out, "  implementation:      -{}", currency(p.summary.implementation_cost))?;
    writeln!(out, "  net benefit:          {}", currency(p.summary.net_benefit))?;
    writeln!(out, "  ROI:                  {}", p.summary.roi_percent)?;
    Ok(())
}

fn write_automation(out: &mut String, p: &AutomationPage<'_>) -> std::fmt::Result {
    writeln!(out, "=== AUTOMATION OPPORTUNITIES ===")?;
    writeln!(
        out,
        "  category={} department={} sort={} {:?}",
        p.query.category.as_str(),
        p.query.department.as_str(),
        p.query.sort.field.label(),
        p.query.sort.direction
    )?;
    writeln!(
        out,
        "  {} opportunities · {} total · {} high impact",
        p.summary.count,
        currency_k(p.summary.total_savings),
        p.summary.high_impact
    )?;
    writeln!(out)?;
    for card in &p.items {
        let o = card.opportunity;
        writeln!(
            out,
            "  {:<34} {:<22} {:<17} {:<12} impact {:>2}  effort {:>2}  {:>6}",
            o.title,
            o.department_name,
            card.category_label,
            card.status_label,
            o.impact_score,
            o.effort_score,
            currency_k(o.estimated_annual_savings)
        )?;
    }
    Ok(())
}

fn write_roadmap(out: &mut String, p: &RoadmapPage<'_>) -> std::fmt::Result {
    writeln!(out, "=== IMPLEMENTATION ROADMAP ===")?;
    for section in &p.phases {
        writeln!(
            out,
            "--- {} ({}) · {} ---",
            section.label,
            section.subtitle,
            currency_k(section.savings)
        )?;
        for card in &section.items {
            let item = card.item;
            let deps = if card.dependency_count > 0 {
                format!(" · depends on {} task(s)", card.dependency_count)
            } else {
                String::new()
            };
            writeln!(
                out,
                "  [{:<11}] {:<34} {:<22} {}{deps}  {}",
                card.status_label,
                item.title,
                item.department,
                card.day_span,
                currency_k(item.estimated_savings)
            )?;
        }
    }
    writeln!(out)?;
    writeln!(out, "  total projects: {}", p.total_items)?;
    writeln!(out, "  combined annual savings: {}", currency_k(p.total_savings))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::render_text;
    use opsaudit_core::{fixture::AuditFixture, session::DashboardSession};
    use std::sync::Arc;

    fn session_on(path: &str) -> DashboardSession {
        let fixture = AuditFixture::builtin().expect("builtin fixture");
        let mut session = DashboardSession::new("render-test".into(), Arc::new(fixture));
        session.navigate(path);
        session
    }

    #[test]
    fn every_route_renders_a_frame() {
        for path in ["/", "/departments", "/workflows", "/calculator", "/automation", "/roadmap", "/nope"] {
            let text = render_text(&session_on(path).snapshot()).expect("frame renders");
            assert!(text.starts_with("Operations Audit Dashboard"), "{path}: {text}");
        }
    }

    #[test]
    fn dashboard_frame_shows_pain_point_trend() {
        let text = render_text(&session_on("/").snapshot()).unwrap();
        assert!(text.contains("-12% from initial assessment"), "{text}");
    }

    #[test]
    fn roadmap_frame_shows_project_count() {
        let text = render_text(&session_on("/roadmap").snapshot()).unwrap();
        assert!(text.contains("total projects: 10"), "{text}");
    }
}
