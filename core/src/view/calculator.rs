use crate::{
    metrics::roi::{
        project_roi, three_year_summary, weekly_wasted_cost, RoiInputBounds, RoiInputs,
        RoiOutputs, RoiSummary, ROI_INPUT_BOUNDS,
    },
    types::Money,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorPage {
    pub inputs: RoiInputs,
    pub bounds: RoiInputBounds,
    pub weekly_wasted_cost: Money,
    pub outputs: RoiOutputs,
    pub summary: RoiSummary,
}

/// Calculator inputs. Outputs are recomputed from these on every render.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculatorView {
    inputs: RoiInputs,
}

impl CalculatorView {
    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    pub fn set_hourly_cost(&mut self, value: f64) {
        self.inputs.employee_hourly_cost = ROI_INPUT_BOUNDS.employee_hourly_cost.clamp(value);
    }

    pub fn set_hours_wasted(&mut self, value: f64) {
        self.inputs.hours_wasted_per_week = ROI_INPUT_BOUNDS.hours_wasted_per_week.clamp(value);
    }

    pub fn set_implementation_cost(&mut self, value: f64) {
        self.inputs.automation_implementation_cost =
            ROI_INPUT_BOUNDS.automation_implementation_cost.clamp(value);
    }

    pub fn reset(&mut self) {
        self.inputs = RoiInputs::default();
    }

    pub fn render(&self) -> CalculatorPage {
        let outputs = project_roi(&self.inputs);
        CalculatorPage {
            inputs: self.inputs,
            bounds: ROI_INPUT_BOUNDS,
            weekly_wasted_cost: weekly_wasted_cost(&self.inputs),
            outputs,
            summary: three_year_summary(&self.inputs, &outputs),
        }
    }
}
