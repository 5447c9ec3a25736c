//! Input and display formatting for budget amounts and KPI targets.

use num_format::{Locale, ToFormattedString};

/// Maximum fraction digits accepted for a budget amount (ETH convention).
pub const BUDGET_FRACTION_DIGITS: usize = 4;

/// Normalizes raw budget input: keeps digits and the first decimal point,
/// drops everything else (currency signs, thousands separators, later
/// points), and truncates the fraction to [`BUDGET_FRACTION_DIGITS`].
pub fn sanitize_budget(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_point = false;
    for c in input.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push(c);
            }
            _ => {}
        }
    }
    clamp_budget_precision(&out)
}

/// Truncates (never rounds) the fraction part of a decimal string to
/// [`BUDGET_FRACTION_DIGITS`]. Values without a point pass through
/// unchanged, so `"1.2345"` round-trips exactly.
pub fn clamp_budget_precision(value: &str) -> String {
    match value.split_once('.') {
        Some((int, frac)) if frac.len() > BUDGET_FRACTION_DIGITS => {
            format!("{}.{}", int, &frac[..BUDGET_FRACTION_DIGITS])
        }
        _ => value.to_string(),
    }
}

/// Renders a stored budget string for display: thousands separators on the
/// integer part, trailing fraction zeros trimmed, empty for zero/unparsable
/// input (the input field then shows its placeholder instead).
pub fn format_budget_display(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value == "0" {
        return String::new();
    }
    if value.parse::<f64>().is_err() {
        return String::new();
    }

    let (int, frac) = match value.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (value, ""),
    };
    let int: u64 = match if int.is_empty() { "0" } else { int }.parse() {
        Ok(n) => n,
        Err(_) => return String::new(),
    };

    let grouped = int.to_formatted_string(&Locale::en);
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

/// Compact display for KPI targets: `100000` becomes `100K`, `1500` becomes
/// `1.5K`, values under a thousand are shown as-is. Unparsable input counts
/// as zero, matching how the summary treats missing targets.
pub fn format_compact(value: &str) -> String {
    let n = value.trim().parse::<f64>().unwrap_or(0.0);
    let n = if n.is_finite() { n as i64 } else { 0 };
    if n >= 1000 {
        let compact = format!("{:.1}", n as f64 / 1000.0);
        let compact = compact.trim_end_matches(".0");
        format!("{}K", compact)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_junk_and_extra_points() {
        assert_eq!(sanitize_budget("1,234.5"), "1234.5");
        assert_eq!(sanitize_budget("Ξ2.5 eth"), "2.5");
        assert_eq!(sanitize_budget("1.2.3"), "1.23");
        assert_eq!(sanitize_budget(""), "");
    }

    #[test]
    fn precision_is_truncated_to_four_decimals() {
        assert_eq!(clamp_budget_precision("1.2345"), "1.2345");
        assert_eq!(clamp_budget_precision("1.23456"), "1.2345");
        assert_eq!(clamp_budget_precision("1.99999"), "1.9999");
        assert_eq!(clamp_budget_precision("100"), "100");
    }

    #[test]
    fn display_groups_thousands_and_trims_zeros() {
        assert_eq!(format_budget_display("1234.5"), "1,234.5");
        assert_eq!(format_budget_display("1234.5000"), "1,234.5");
        assert_eq!(format_budget_display("2.5"), "2.5");
        assert_eq!(format_budget_display("1000000"), "1,000,000");
        assert_eq!(format_budget_display("0"), "");
        assert_eq!(format_budget_display(""), "");
        assert_eq!(format_budget_display("abc"), "");
    }

    #[test]
    fn compact_formatting_matches_the_summary_style() {
        assert_eq!(format_compact("100000"), "100K");
        assert_eq!(format_compact("1500"), "1.5K");
        assert_eq!(format_compact("1000"), "1K");
        assert_eq!(format_compact("999"), "999");
        assert_eq!(format_compact(""), "0");
        assert_eq!(format_compact("junk"), "0");
    }
}
