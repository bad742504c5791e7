//! Display formatting for currency figures.

use crate::{metrics::round_half_up, types::Money};

/// Whole-dollar currency with thousands separators, e.g. "$8,660" or "-$25,000".
pub fn currency(value: Money) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Thousands, e.g. "$85K".
pub fn currency_k(value: Money) -> String {
    format!("${}K", round_half_up(value / 1000.0) as i64)
}

/// "$450K - $720K".
pub fn currency_k_range(min: Money, max: Money) -> String {
    format!("{} - {}", currency_k(min), currency_k(max))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
