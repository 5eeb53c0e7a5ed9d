use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{
    RevenueMonth, Transaction, TransactionKind, TransactionStatus, TypeVolume,
};
use crate::marketplace::{sample, Query, Selection};

/// Date range selector. Shown in the header only; the sample ledger is
/// never narrowed by it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Week,
    Month,
    Quarter,
    Year,
}

impl DateRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateRange::Week => "7d",
            DateRange::Month => "30d",
            DateRange::Quarter => "90d",
            DateRange::Year => "1y",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            DateRange::Week => DateRange::Month,
            DateRange::Month => DateRange::Quarter,
            DateRange::Quarter => DateRange::Year,
            DateRange::Year => DateRange::Week,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    pub revenue: f64,
    pub commission: f64,
    pub pending: usize,
}

/// Transaction logs with revenue trend and volume per type.
///
#[derive(Debug, Clone)]
pub struct TransactionsPanel {
    pub transactions: Vec<Transaction>,
    pub monthly: Vec<RevenueMonth>,
    pub volumes: Vec<TypeVolume>,
    pub search: String,
    pub kind: Selection<TransactionKind>,
    pub status: Selection<TransactionStatus>,
    pub range: DateRange,
    cursor: Cursor,
}

impl Default for TransactionsPanel {
    fn default() -> Self {
        TransactionsPanel {
            transactions: sample::transactions(),
            monthly: sample::monthly_revenue(),
            volumes: sample::transaction_volumes(),
            search: String::new(),
            kind: Selection::All,
            status: Selection::All,
            range: DateRange::Month,
            cursor: Cursor::default(),
        }
    }
}

impl TransactionsPanel {
    pub fn visible(&self) -> Vec<&Transaction> {
        Query::new(&self.search)
            .select(self.kind, |t: &Transaction| t.kind)
            .select(self.status, |t: &Transaction| t.status)
            .apply(&self.transactions)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    /// Folds over the whole ledger, independent of the active filters.
    ///
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            revenue: self.transactions.iter().map(|t| t.amount).sum(),
            commission: self
                .transactions
                .iter()
                .filter(|t| t.kind == TransactionKind::Commission)
                .map(|t| t.amount)
                .sum(),
            pending: self
                .transactions
                .iter()
                .filter(|t| t.status == TransactionStatus::Pending)
                .count(),
        }
    }
}

impl ListControls for TransactionsPanel {
    fn row_count(&self) -> usize {
        self.visible().len()
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn search(&mut self) -> Option<&mut String> {
        Some(&mut self.search)
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
        self.search.clear();
        self.kind = Selection::All;
        self.status = Selection::All;
        self.range = DateRange::Month;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        let mut parts = vec![
            selection_part("type", &self.kind),
            selection_part("status", &self.status),
        ];
        parts.push(format!("range: {}", self.range.as_str()));
        summary(Some(&self.search), parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_fold_over_the_whole_ledger() {
        let mut panel = TransactionsPanel::default();
        panel.kind = Selection::Only(TransactionKind::Refund);
        let totals = panel.totals();
        assert_eq!(totals.revenue, 8_550.0);
        assert_eq!(totals.commission, 250.0);
        assert_eq!(totals.pending, 1);
        assert_eq!(panel.visible().len(), 1);
    }

    #[test]
    fn search_covers_description_and_parties() {
        let mut panel = TransactionsPanel::default();
        panel.search = "bank".to_string();
        assert_eq!(panel.visible()[0].id, "TXN-003");
        panel.search = "REFUND".to_string();
        assert_eq!(panel.visible()[0].id, "TXN-004");
        panel.search = "freelancehub".to_string();
        assert_eq!(panel.visible().len(), 2);
    }

    #[test]
    fn date_range_does_not_filter_rows() {
        let mut panel = TransactionsPanel::default();
        for _ in 0..4 {
            panel.cycle_order();
            assert_eq!(panel.visible().len(), 4);
        }
        assert_eq!(panel.range, DateRange::Month);
    }
}
