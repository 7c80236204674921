use evplan_core::EvSummary;

/// Group the integer part of `value` with commas (`1500000.4` -> `"1,500,000"`).
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs().round());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount for display, e.g. `Rp1,500,000` or `Rp-250,000`.
///
/// The sign follows the prefix, no decimals are shown.
pub fn format_money(value: f64, prefix: &str) -> String {
    let sign = if value.round() < 0.0 { "-" } else { "" };
    format!("{}{}{}", prefix, sign, group_thousands(value))
}

/// Compact form for axis labels (e.g. `Rp2.5M`, `Rp450K`, `Rp50`)
pub fn format_money_compact(value: f64, prefix: &str) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000_000.0 {
        format!("{}{}{:.1}B", prefix, sign, abs_value / 1_000_000_000.0)
    } else if abs_value >= 1_000_000.0 {
        format!("{}{}{:.1}M", prefix, sign, abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{}{:.0}K", prefix, sign, abs_value / 1_000.0)
    } else {
        format!("{}{}{:.0}", prefix, sign, abs_value)
    }
}

/// Format a probability with at least one decimal (`1` -> `"1.0"`, `0.35` -> `"0.35"`)
pub fn format_probability(p: f64) -> String {
    if p.fract() == 0.0 {
        format!("{:.1}", p)
    } else {
        format!("{}", p)
    }
}

/// Text shown after computing: one line per decision, then the best one.
pub fn format_ev_summary(summary: &EvSummary, prefix: &str) -> String {
    let lines = summary
        .ev
        .iter()
        .map(|(label, ev)| format!("{} : {}", label, format_money(ev, prefix)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Expected Value:\n{}\n\nBest Decision:\n{}",
        lines, summary.best_decision
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use evplan_core::{Record, compute_ev};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0, "Rp"), "Rp0");
        assert_eq!(format_money(200.0, "Rp"), "Rp200");
        assert_eq!(format_money(1_500_000.0, "Rp"), "Rp1,500,000");
        assert_eq!(format_money(-250_000.0, "Rp"), "Rp-250,000");
        assert_eq!(format_money(999.6, "$"), "$1,000");
    }

    #[test]
    fn test_format_money_beyond_u64() {
        assert_eq!(
            format_money(1e20, "Rp"),
            "Rp100,000,000,000,000,000,000"
        );
        assert_eq!(
            format_money(-3e19, "Rp"),
            "Rp-30,000,000,000,000,000,000"
        );
    }

    #[test]
    fn test_format_money_compact() {
        assert_eq!(format_money_compact(2_500_000.0, "Rp"), "Rp2.5M");
        assert_eq!(format_money_compact(450_000.0, "Rp"), "Rp450K");
        assert_eq!(format_money_compact(-50.0, "Rp"), "Rp-50");
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(1.0), "1.0");
        assert_eq!(format_probability(0.5), "0.5");
        assert_eq!(format_probability(0.35), "0.35");
    }

    #[test]
    fn test_format_ev_summary() {
        let records = vec![
            Record::new("A", "X", 0.5, 100.0, 300.0),
            Record::new("A", "Y", 0.5, 0.0, 100.0),
            Record::new("B", "Z", 1.0, 50.0, 50.0),
        ];
        let summary = compute_ev(&records).unwrap();

        assert_eq!(
            format_ev_summary(&summary, "Rp"),
            "Expected Value:\nA : Rp150\nB : Rp0\n\nBest Decision:\nA"
        );
    }
}
