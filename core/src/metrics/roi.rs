//! ROI projection — the calculator's arithmetic.
//!
//! Formulas:
//!   weekly  = hourly_cost × hours_wasted
//!   monthly = round(weekly × 4.33)
//!   annual  = round(weekly × 52)
//!   payback = round(cost / monthly × 10) / 10   (cost > 0)
//!
//! `monthly × 12` and `annual` disagree slightly (51.96 vs 52 weeks).
//! Both constants are kept as-is.

use super::round_half_up;
use crate::types::Money;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Average weeks per month.
pub const WEEKS_PER_MONTH: f64 = 4.33;
pub const WEEKS_PER_YEAR: f64 = 52.0;
/// Horizon of the ROI summary card.
pub const ROI_HORIZON_YEARS: f64 = 3.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputs {
    pub employee_hourly_cost: Money,
    pub hours_wasted_per_week: f64,
    pub automation_implementation_cost: Money,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            employee_hourly_cost: 50.0,
            hours_wasted_per_week: 40.0,
            automation_implementation_cost: 25_000.0,
        }
    }
}

/// Time for savings to offset the implementation cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payback {
    /// Nothing to recover: implementation cost is zero. Displayed as 0.0.
    Immediate,
    /// Months, rounded to one decimal place.
    Months(f64),
    /// Cost is positive but nothing is saved, so it is never recovered.
    Unbounded,
}

impl Payback {
    /// Numeric months where one exists. `Immediate` is 0.0.
    pub fn months(self) -> Option<f64> {
        match self {
            Payback::Immediate => Some(0.0),
            Payback::Months(m) => Some(m),
            Payback::Unbounded => None,
        }
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Immediate => write!(f, "0.0"),
            Payback::Months(m) => write!(f, "{m:.1}"),
            Payback::Unbounded => write!(f, "∞"),
        }
    }
}

/// Numbers stay numbers on the wire; the sentinel is the string "unbounded".
impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.months() {
            Some(m) => serializer.serialize_f64(m),
            None => serializer.serialize_str("unbounded"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiOutputs {
    pub monthly_savings: Money,
    pub annual_savings: Money,
    pub payback_period_months: Payback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoiPercent {
    Percent(i64),
    /// No implementation cost to divide by.
    Unbounded,
}

impl fmt::Display for RoiPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoiPercent::Percent(p) => write!(f, "{p}%"),
            RoiPercent::Unbounded => write!(f, "∞"),
        }
    }
}

impl Serialize for RoiPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RoiPercent::Percent(p) => serializer.serialize_i64(*p),
            RoiPercent::Unbounded => serializer.serialize_str("unbounded"),
        }
    }
}

/// The three-year card under the calculator outputs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiSummary {
    pub gross_savings: Money,
    pub implementation_cost: Money,
    pub net_benefit: Money,
    pub roi_percent: RoiPercent,
}

pub fn weekly_wasted_cost(inputs: &RoiInputs) -> Money {
    inputs.employee_hourly_cost * inputs.hours_wasted_per_week
}

pub fn project_roi(inputs: &RoiInputs) -> RoiOutputs {
    let weekly = weekly_wasted_cost(inputs);
    let monthly_savings = round_half_up(weekly * WEEKS_PER_MONTH);
    let annual_savings = round_half_up(weekly * WEEKS_PER_YEAR);
    let cost = inputs.automation_implementation_cost;

    let payback_period_months = if cost > 0.0 {
        if monthly_savings > 0.0 {
            Payback::Months(round_half_up(cost / monthly_savings * 10.0) / 10.0)
        } else {
            Payback::Unbounded
        }
    } else {
        Payback::Immediate
    };

    RoiOutputs {
        monthly_savings,
        annual_savings,
        payback_period_months,
    }
}

pub fn three_year_summary(inputs: &RoiInputs, outputs: &RoiOutputs) -> RoiSummary {
    let cost = inputs.automation_implementation_cost;
    let gross_savings = outputs.annual_savings * ROI_HORIZON_YEARS;
    let net_benefit = gross_savings - cost;
    let roi_percent = if cost > 0.0 {
        RoiPercent::Percent(round_half_up(net_benefit / cost * 100.0) as i64)
    } else {
        RoiPercent::Unbounded
    };

    RoiSummary {
        gross_savings,
        implementation_cost: cost,
        net_benefit,
        roi_percent,
    }
}

// ── Input bounds ─────────────────────────────────────────────────────────────

/// Range a calculator control accepts.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct InputBound {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBound {
    /// Clamp into range. Non-finite input falls back to the minimum.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiInputBounds {
    pub employee_hourly_cost: InputBound,
    pub hours_wasted_per_week: InputBound,
    pub automation_implementation_cost: InputBound,
}

pub const ROI_INPUT_BOUNDS: RoiInputBounds = RoiInputBounds {
    employee_hourly_cost: InputBound { min: 20.0, max: 200.0, step: 5.0 },
    hours_wasted_per_week: InputBound { min: 5.0, max: 200.0, step: 5.0 },
    automation_implementation_cost: InputBound { min: 0.0, max: 500_000.0, step: 1_000.0 },
};
