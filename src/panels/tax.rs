use super::commissions::TimeRange;
use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{CountryTax, TaxKind, TaxMonth, TaxRate, TaxRecord, TaxStatus};
use crate::marketplace::sample::{self, TaxHeadline, TAX_HEADLINE};
use crate::marketplace::{Query, Selection};

/// Tax report.
///
#[derive(Debug, Clone)]
pub struct TaxPanel {
    pub headline: TaxHeadline,
    pub monthly: Vec<TaxMonth>,
    pub by_country: Vec<CountryTax>,
    pub rates: Vec<TaxRate>,
    pub records: Vec<TaxRecord>,
    pub kind: Selection<TaxKind>,
    pub status: Selection<TaxStatus>,
    pub range: TimeRange,
    cursor: Cursor,
}

impl Default for TaxPanel {
    fn default() -> Self {
        TaxPanel {
            headline: TAX_HEADLINE,
            monthly: sample::tax_monthly(),
            by_country: sample::tax_by_country(),
            rates: sample::tax_rates(),
            records: sample::tax_records(),
            kind: Selection::All,
            status: Selection::All,
            range: TimeRange::SixMonths,
            cursor: Cursor::default(),
        }
    }
}

impl TaxPanel {
    pub fn visible(&self) -> Vec<&TaxRecord> {
        Query::new("")
            .select(self.kind, |r: &TaxRecord| r.kind)
            .select(self.status, |r: &TaxRecord| r.status)
            .apply(&self.records)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }
}

impl ListControls for TaxPanel {
    fn row_count(&self) -> usize {
        self.visible().len()
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn cycle_primary(&mut self) {
        self.kind = self.kind.cycle();
        self.clamp_selection();
    }

    fn cycle_secondary(&mut self) {
        self.status = self.status.cycle();
        self.clamp_selection();
    }

    fn cycle_order(&mut self) {
        self.range = self.range.cycle();
    }

    fn reset_filters(&mut self) {
        self.kind = Selection::All;
        self.status = Selection::All;
        self.range = TimeRange::SixMonths;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            None,
            vec![
                selection_part("type", &self.kind),
                selection_part("status", &self.status),
                format!("range: {}", self.range.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_and_status_combine() {
        let mut panel = TaxPanel::default();
        panel.kind = Selection::parse("vat");
        assert_eq!(panel.visible().len(), 1);
        panel.status = Selection::parse("pending");
        assert!(panel.visible().is_empty());
        panel.kind = Selection::All;
        assert_eq!(panel.visible()[0].id, "TAX-003");
    }

    #[test]
    fn status_filter_keeps_record_order() {
        let mut panel = TaxPanel::default();
        panel.status = Selection::Only(TaxStatus::Paid);
        let ids: Vec<&str> = panel.visible().iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = panel
            .records
            .iter()
            .filter(|r| r.status == TaxStatus::Paid)
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, expected);
        assert_eq!(panel.row_count(), expected.len());
    }

    #[test]
    fn country_totals_add_up() {
        let panel = TaxPanel::default();
        for row in &panel.by_country {
            assert_eq!(row.gst + row.vat + row.income, row.total, "{}", row.country);
        }
    }
}
