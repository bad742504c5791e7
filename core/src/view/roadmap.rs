use crate::{
    fixture::AuditFixture,
    metrics::roadmap::group_by_phase,
    model::{RoadmapItem, RoadmapPhase, Tone},
    types::Money,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapCard<'a> {
    pub item: &'a RoadmapItem,
    pub status_label: &'static str,
    pub status_tone: Tone,
    /// "Day 1 – 21".
    pub day_span: String,
    pub dependency_count: usize,
}

impl<'a> From<&'a RoadmapItem> for RoadmapCard<'a> {
    fn from(item: &'a RoadmapItem) -> Self {
        Self {
            item,
            status_label: item.status.label(),
            status_tone: item.status.tone(),
            day_span: format!("Day {} – {}", item.start_day, item.end_day),
            dependency_count: item.dependencies.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhaseSection<'a> {
    pub phase: RoadmapPhase,
    pub label: &'static str,
    pub subtitle: &'static str,
    pub tone: Tone,
    pub savings: Money,
    pub items: Vec<RoadmapCard<'a>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPage<'a> {
    pub phases: Vec<PhaseSection<'a>>,
    /// Every roadmap item, whatever its phase or status.
    pub total_items: usize,
    pub total_savings: Money,
}

/// The roadmap timeline. Holds no state of its own.
#[derive(Debug, Clone, Default)]
pub struct RoadmapView;

impl RoadmapView {
    pub fn render<'a>(&self, fixture: &'a AuditFixture) -> RoadmapPage<'a> {
        let grouped = group_by_phase(&fixture.roadmap);
        RoadmapPage {
            phases: grouped
                .buckets
                .into_iter()
                .map(|bucket| PhaseSection {
                    phase: bucket.phase,
                    label: bucket.phase.label(),
                    subtitle: bucket.phase.subtitle(),
                    tone: bucket.phase.tone(),
                    savings: bucket.savings,
                    items: bucket.items.into_iter().map(RoadmapCard::from).collect(),
                })
                .collect(),
            total_items: fixture.roadmap.len(),
            total_savings: grouped.total_savings,
        }
    }
}
