//! Derived metrics engine.
//!
//! RULE: Every function here is pure. Inputs are plain fixture values,
//! outputs are plain values; nothing reads global state, nothing caches.
//! Callers may recompute on every UI state change.

pub mod opportunities;
pub mod roadmap;
pub mod roi;
pub mod totals;
pub mod workflow;

/// Round to the nearest integer, halves toward positive infinity.
/// This is the rounding every displayed figure uses; note it differs from
/// `f64::round` for negative halves (-2.5 becomes -2, not -3).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::round_half_up;

    #[test]
    fn rounds_halves_upward() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }
}
