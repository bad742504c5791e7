use crate::{
    fixture::AuditFixture,
    metrics::opportunities::{
        department_options, effort_tone, filter_and_sort, impact_tone, summarize,
        CategoryFilter, DepartmentFilter, OpportunityQuery, OpportunitySummary, SortField,
    },
    model::{AutomationOpportunity, OpportunityCategory, Tone},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryOption {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCard<'a> {
    pub opportunity: &'a AutomationOpportunity,
    pub category_label: &'static str,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub impact_tone: Tone,
    pub effort_tone: Tone,
}

impl<'a> From<&'a AutomationOpportunity> for OpportunityCard<'a> {
    fn from(opp: &'a AutomationOpportunity) -> Self {
        Self {
            opportunity: opp,
            category_label: opp.category.label(),
            status_label: opp.status.label(),
            status_tone: opp.status.tone(),
            impact_tone: impact_tone(opp.impact_score),
            effort_tone: effort_tone(opp.effort_score),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPage<'a> {
    pub category_options: Vec<CategoryOption>,
    pub department_options: Vec<String>,
    pub query: OpportunityQuery,
    pub summary: OpportunitySummary,
    pub items: Vec<OpportunityCard<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutomationView {
    query: OpportunityQuery,
}

impl AutomationView {
    pub fn query(&self) -> &OpportunityQuery {
        &self.query
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.query.category = category;
    }

    pub fn set_department(&mut self, department: DepartmentFilter) {
        self.query.department = department;
    }

    pub fn toggle_sort(&mut self, field: SortField) {
        self.query.sort.toggle(field);
    }

    pub fn render<'a>(&self, fixture: &'a AuditFixture) -> AutomationPage<'a> {
        let items = filter_and_sort(&fixture.opportunities, &self.query);
        AutomationPage {
            category_options: std::iter::once(CategoryOption {
                key: CategoryFilter::All.as_str(),
                label: "All Categories",
            })
            .chain(OpportunityCategory::ALL.iter().map(|c| CategoryOption {
                key: c.key(),
                label: c.label(),
            }))
            .collect(),
            department_options: department_options(&fixture.opportunities),
            query: self.query.clone(),
            summary: summarize(&items),
            items: items.into_iter().map(OpportunityCard::from).collect(),
        }
    }
}
