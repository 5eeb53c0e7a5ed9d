//! Number and text formatting for table cells and headline cards.

use chrono::{DateTime, NaiveDate, Utc};

/// Format an amount as US dollars with thousands separators, e.g.
/// `$12,345.50`. Whole amounts drop the cents.
///
pub fn currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}${}", sign, whole),
        fraction => format!("{}${}.{:02}", sign, whole, fraction),
    }
}

/// Compact currency for chart labels: `$1.2k`, `$251k`, `$1.5M`.
///
pub fn compact_currency(amount: f64) -> String {
    let abs = amount.abs();
    let sign = if amount < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}${}M", sign, trim_decimal(abs / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}${}k", sign, trim_decimal(abs / 1_000.0))
    } else {
        format!("{}${}", sign, trim_decimal(abs))
    }
}

/// Percentage with at most one decimal: `4.8%`, `15%`.
///
pub fn percent(value: f64) -> String {
    format!("{}%", trim_decimal(value))
}

/// Integer with thousands separators.
///
pub fn count(value: u64) -> String {
    group_thousands(value)
}

pub fn date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

pub fn timestamp(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

/// Up to two upper-case initials of a name, for avatar cells.
///
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Cut text to `max` characters, ending with `...` when shortened.
///
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Title-case a dash separated name: `tokyo-night` -> `Tokyo Night`.
///
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{:.1}", rounded)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn currency_groups_and_keeps_cents() {
        assert_eq!(currency(0.0), "$0");
        assert_eq!(currency(5_000.0), "$5,000");
        assert_eq!(currency(1_234_567.5), "$1,234,567.50");
        assert_eq!(currency(-25.0), "-$25");
        assert_eq!(currency(999.999), "$1,000");
    }

    #[test]
    fn compact_currency_scales() {
        assert_eq!(compact_currency(251_000.0), "$251k");
        assert_eq!(compact_currency(1_250.0), "$1.3k");
        assert_eq!(compact_currency(1_500_000.0), "$1.5M");
        assert_eq!(compact_currency(800.0), "$800");
    }

    #[test]
    fn percent_trims_trailing_zero() {
        assert_eq!(percent(4.8), "4.8%");
        assert_eq!(percent(15.0), "15%");
    }

    #[test]
    fn dates_are_readable() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        assert_eq!(date(day), "Feb 5, 2024");
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(timestamp(at), "2024-01-15 10:30");
    }

    #[test]
    fn initials_take_two_letters() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("mike van der berg"), "MV");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("E-commerce Website Development", 12), "E-commerc...");
        assert_eq!(truncate("añoañoaño", 6), "año...");
    }

    #[test]
    fn title_case_splits_on_dashes() {
        assert_eq!(title_case("tokyo-night"), "Tokyo Night");
        assert_eq!(title_case("forest"), "Forest");
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(count(0), "0");
        assert_eq!(count(999), "999");
        assert_eq!(count(1_000), "1,000");
        assert_eq!(count(12_345_678), "12,345,678");
    }
}
