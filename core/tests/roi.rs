//! ROI projection tests.

use opsaudit_core::metrics::roi::{
    project_roi, three_year_summary, weekly_wasted_cost, Payback, RoiInputs, RoiPercent,
    ROI_INPUT_BOUNDS,
};

fn inputs(hourly: f64, hours: f64, cost: f64) -> RoiInputs {
    RoiInputs {
        employee_hourly_cost: hourly,
        hours_wasted_per_week: hours,
        automation_implementation_cost: cost,
    }
}

/// The calculator's default inputs produce the figures shown on first load.
#[test]
fn default_inputs_project_known_figures() {
    let out = project_roi(&RoiInputs::default());

    assert_eq!(out.monthly_savings, 8660.0);
    assert_eq!(out.annual_savings, 104_000.0);
    assert_eq!(out.payback_period_months, Payback::Months(2.9));
}

#[test]
fn projection_is_deterministic() {
    let i = inputs(85.0, 35.0, 120_000.0);
    assert_eq!(project_roi(&i), project_roi(&i));
}

/// 4.33 × 12 = 51.96 weeks, not 52. The discrepancy is kept.
#[test]
fn monthly_times_twelve_approximates_annual() {
    for (hourly, hours) in [(20.0, 5.0), (50.0, 40.0), (125.0, 80.0), (200.0, 200.0)] {
        let out = project_roi(&inputs(hourly, hours, 0.0));
        let weekly = hourly * hours;
        let diff = (out.annual_savings - out.monthly_savings * 12.0).abs();
        // 0.04 weeks of drift, plus up to 12.5 from rounding the monthly figure.
        assert!(
            diff <= weekly * 0.04 + 12.5,
            "monthly×12 drifted too far from annual: {} vs {}",
            out.monthly_savings * 12.0,
            out.annual_savings
        );
    }
}

#[test]
fn zero_cost_pays_back_immediately() {
    let out = project_roi(&inputs(50.0, 40.0, 0.0));
    assert_eq!(out.payback_period_months, Payback::Immediate);
    assert_eq!(out.payback_period_months.months(), Some(0.0));
    assert_eq!(out.payback_period_months.to_string(), "0.0");
}

/// Zero hours wasted with a positive cost would divide by zero.
/// It must resolve to the unbounded sentinel, never NaN or infinity.
#[test]
fn zero_savings_with_cost_is_unbounded() {
    let out = project_roi(&inputs(50.0, 0.0, 1000.0));

    assert_eq!(out.monthly_savings, 0.0);
    assert_eq!(out.annual_savings, 0.0);
    assert_eq!(out.payback_period_months, Payback::Unbounded);
    assert_eq!(out.payback_period_months.months(), None);

    let json = serde_json::to_value(out).unwrap();
    assert_eq!(json["paybackPeriodMonths"], "unbounded");
    assert_eq!(json["monthlySavings"], 0.0);
}

#[test]
fn payback_rounds_to_one_decimal() {
    // 60000 / round(100×30×4.33 = 12990) = 4.6189…
    let out = project_roi(&inputs(100.0, 30.0, 60_000.0));
    assert_eq!(out.payback_period_months, Payback::Months(4.6));

    let json = serde_json::to_value(out).unwrap();
    assert_eq!(json["paybackPeriodMonths"], 4.6);
}

#[test]
fn weekly_cost_is_rate_times_hours() {
    assert_eq!(weekly_wasted_cost(&inputs(50.0, 40.0, 0.0)), 2000.0);
}

#[test]
fn three_year_summary_for_defaults() {
    let i = RoiInputs::default();
    let summary = three_year_summary(&i, &project_roi(&i));

    assert_eq!(summary.gross_savings, 312_000.0);
    assert_eq!(summary.implementation_cost, 25_000.0);
    assert_eq!(summary.net_benefit, 287_000.0);
    assert_eq!(summary.roi_percent, RoiPercent::Percent(1148));
    assert_eq!(summary.roi_percent.to_string(), "1148%");
}

#[test]
fn three_year_roi_without_cost_is_unbounded() {
    let i = inputs(50.0, 40.0, 0.0);
    let summary = three_year_summary(&i, &project_roi(&i));

    assert_eq!(summary.net_benefit, 312_000.0);
    assert_eq!(summary.roi_percent, RoiPercent::Unbounded);
    assert_eq!(serde_json::to_value(summary).unwrap()["roiPercent"], "unbounded");
}

/// A cost larger than three years of savings gives a negative ROI.
#[test]
fn three_year_roi_can_be_negative() {
    let i = inputs(20.0, 5.0, 500_000.0);
    let out = project_roi(&i);
    let summary = three_year_summary(&i, &out);

    // annual = 100 × 52 = 5200; net = 15600 − 500000
    assert_eq!(summary.net_benefit, -484_400.0);
    assert_eq!(summary.roi_percent, RoiPercent::Percent(-97));
}

#[test]
fn input_bounds_clamp_and_reject_non_finite() {
    let hourly = ROI_INPUT_BOUNDS.employee_hourly_cost;
    assert_eq!(hourly.clamp(10.0), 20.0);
    assert_eq!(hourly.clamp(500.0), 200.0);
    assert_eq!(hourly.clamp(75.0), 75.0);

    let cost = ROI_INPUT_BOUNDS.automation_implementation_cost;
    assert_eq!(cost.clamp(f64::NAN), 0.0);
    assert_eq!(cost.clamp(-5.0), 0.0);
}
