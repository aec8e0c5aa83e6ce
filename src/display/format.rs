//! Formatting helpers for terminal output

/// Format an amount as whole currency units with thousands separators
///
/// Rounds half away from zero, e.g. `format_currency(-1234.6, "$")` gives
/// `"-$1,235"`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{}-", symbol);
    }

    let rounded = amount.abs().round();
    let digits = format!("{:.0}", rounded);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0.0 && rounded > 0.0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "$"), "$0");
        assert_eq!(format_currency(950.0, "$"), "$950");
        assert_eq!(format_currency(1000.0, "$"), "$1,000");
        assert_eq!(format_currency(1234567.0, "$"), "$1,234,567");
        assert_eq!(format_currency(-1234.6, "$"), "-$1,235");
        assert_eq!(format_currency(2.5, "€"), "€3");
        assert_eq!(format_currency(-0.2, "$"), "$0");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(42.0), "42.0%");
        assert_eq!(format_percentage(33.333), "33.3%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rent", 10), "Rent");
        assert_eq!(truncate("Very long subscription name", 10), "Very lo...");
        assert_eq!(truncate("abcdef", 2), "..");
    }
}
