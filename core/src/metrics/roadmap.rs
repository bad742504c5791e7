//! Roadmap grouping by phase.
//!
//! Dependencies are display-only and never resolved into a schedule.

use crate::{
    model::{RoadmapItem, RoadmapPhase},
    types::Money,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhaseBucket<'a> {
    pub phase: RoadmapPhase,
    /// Fixture order is preserved within a bucket.
    pub items: Vec<&'a RoadmapItem>,
    pub savings: Money,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhases<'a> {
    /// Always three buckets, in `RoadmapPhase::ALL` order.
    pub buckets: Vec<PhaseBucket<'a>>,
    pub total_savings: Money,
}

impl<'a> RoadmapPhases<'a> {
    pub fn bucket(&self, phase: RoadmapPhase) -> &PhaseBucket<'a> {
        let index = RoadmapPhase::ALL
            .iter()
            .position(|p| *p == phase)
            .unwrap_or_default();
        &self.buckets[index]
    }
}

pub fn group_by_phase(items: &[RoadmapItem]) -> RoadmapPhases<'_> {
    let buckets: Vec<PhaseBucket<'_>> = RoadmapPhase::ALL
        .iter()
        .map(|&phase| {
            let members: Vec<&RoadmapItem> = items.iter().filter(|i| i.phase == phase).collect();
            let savings = members.iter().map(|i| i.estimated_savings).sum();
            PhaseBucket { phase, items: members, savings }
        })
        .collect();

    RoadmapPhases {
        buckets,
        total_savings: items.iter().map(|i| i.estimated_savings).sum(),
    }
}
