use crate::{
    fixture::{AuditFixture, CategoryCount, DepartmentSavings},
    metrics::totals::{department_totals, high_impact_count},
    nav::Route,
};
use serde::Serialize;

use super::format::currency_k_range;

/// Pain points found since the initial assessment.
const PAIN_POINT_TREND: KpiTrend = KpiTrend {
    value: 12,
    label: "from initial assessment",
    positive: false,
};

/// Change since an earlier measurement, shown as "+N%" when `positive`, else "-N%".
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct KpiTrend {
    pub value: i32,
    pub label: &'static str,
    pub positive: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<KpiTrend>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub title: String,
    pub kpi_cards: Vec<KpiCard>,
    pub high_impact_count: usize,
    pub total_hours_wasted_per_week: f64,
    pub department_savings: Vec<DepartmentSavings>,
    pub category_distribution: Vec<CategoryCount>,
    pub quick_links: Vec<QuickLink>,
}

/// The overview page. Holds no state of its own.
#[derive(Debug, Clone, Default)]
pub struct DashboardView;

impl DashboardView {
    pub fn render(&self, fixture: &AuditFixture) -> DashboardPage {
        let kpi = &fixture.kpi;
        let high_impact = high_impact_count(&fixture.opportunities);

        let kpi_cards = vec![
            KpiCard {
                title: "Potential Annual Savings",
                value: currency_k_range(kpi.total_potential_savings.min, kpi.total_potential_savings.max),
                subtitle: None,
                trend: None,
            },
            KpiCard {
                title: "Departments Audited",
                value: kpi.departments_audited.to_string(),
                subtitle: Some("Across all operations".into()),
                trend: None,
            },
            KpiCard {
                title: "Pain Points Identified",
                value: kpi.pain_points_identified.to_string(),
                subtitle: None,
                trend: Some(PAIN_POINT_TREND),
            },
            KpiCard {
                title: "Automation Opportunities",
                value: kpi.automation_opportunities.to_string(),
                subtitle: Some(format!("{high_impact} high-impact")),
                trend: None,
            },
        ];

        DashboardPage {
            title: fixture.meta.title.clone(),
            kpi_cards,
            high_impact_count: high_impact,
            total_hours_wasted_per_week: department_totals(&fixture.departments).hours_wasted_per_week,
            department_savings: fixture.department_savings_series(),
            category_distribution: fixture.category_distribution(),
            quick_links: vec![
                QuickLink {
                    title: "Department Analysis",
                    description: "Detailed breakdown by team",
                    route: Route::Departments,
                },
                QuickLink {
                    title: "Workflow Mapping",
                    description: "Visualize process bottlenecks",
                    route: Route::Workflows,
                },
                QuickLink {
                    title: "Implementation Roadmap",
                    description: "Phased action plan",
                    route: Route::Roadmap,
                },
            ],
        }
    }
}
