use super::{summary, text_part, Cursor, ListControls};
use crate::marketplace::models::{CategoryCommission, CommissionMonth, CommissionTransaction};
use crate::marketplace::sample::{self, CommissionHeadline, COMMISSION_HEADLINE};
use crate::marketplace::{Query, TextFilter};

/// Reporting window of the finance reports. Display only.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    SixMonths,
    OneYear,
    TwoYears,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::SixMonths => "6m",
            TimeRange::OneYear => "1y",
            TimeRange::TwoYears => "2y",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            TimeRange::SixMonths => TimeRange::OneYear,
            TimeRange::OneYear => TimeRange::TwoYears,
            TimeRange::TwoYears => TimeRange::SixMonths,
        }
    }
}

/// Commission report.
///
#[derive(Debug, Clone)]
pub struct CommissionsPanel {
    pub headline: CommissionHeadline,
    pub monthly: Vec<CommissionMonth>,
    pub by_category: Vec<CategoryCommission>,
    pub transactions: Vec<CommissionTransaction>,
    pub category: TextFilter,
    pub range: TimeRange,
    cursor: Cursor,
}

impl Default for CommissionsPanel {
    fn default() -> Self {
        CommissionsPanel {
            headline: COMMISSION_HEADLINE,
            monthly: sample::commission_monthly(),
            by_category: sample::commission_by_category(),
            transactions: sample::commission_transactions(),
            category: TextFilter::default(),
            range: TimeRange::SixMonths,
            cursor: Cursor::default(),
        }
    }
}

impl CommissionsPanel {
    pub fn visible(&self) -> Vec<&CommissionTransaction> {
        Query::new("")
            .select_text(&self.category, |t: &CommissionTransaction| t.category.as_str())
            .apply(&self.transactions)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    fn category_options(&self) -> Vec<&'static str> {
        self.by_category.iter().map(|c| c.category).collect()
    }
}

impl ListControls for CommissionsPanel {
    fn row_count(&self) -> usize {
        self.visible().len()
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn cycle_primary(&mut self) {
        let options = self.category_options();
        self.category = self.category.cycle(&options);
        self.clamp_selection();
    }

    fn cycle_order(&mut self) {
        self.range = self.range.cycle();
    }

    fn reset_filters(&mut self) {
        self.category = TextFilter::default();
        self.range = TimeRange::SixMonths;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            None,
            vec![
                text_part("category", &self.category),
                format!("range: {}", self.range.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_filter_uses_report_categories() {
        let mut panel = CommissionsPanel::default();
        panel.cycle_primary();
        assert_eq!(panel.category.value(), Some("Web Development"));
        let ids: Vec<&str> = panel.visible().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["COM-001", "COM-003"]);

        panel.cycle_primary();
        assert_eq!(panel.category.value(), Some("Mobile Apps"));
        assert_eq!(panel.row_count(), 0);
    }

    #[test]
    fn unfiltered_view_is_the_whole_ledger_in_order() {
        let panel = CommissionsPanel::default();
        let ids: Vec<&str> = panel.visible().iter().map(|t| t.id.as_str()).collect();
        let expected: Vec<&str> = panel.transactions.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut panel = CommissionsPanel::default();
        panel.cycle_primary();
        panel.cycle_order();
        panel.reset_filters();
        assert_eq!(panel.filter_summary(), "category: all | range: 6m");
    }
}
