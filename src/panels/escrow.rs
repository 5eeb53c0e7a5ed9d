use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{EscrowPeriod, EscrowStatus, EscrowTransaction, Ranked};
use crate::marketplace::sample::{self, EscrowHeadline, ESCROW_HEADLINE};
use crate::marketplace::{Query, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPeriod {
    Monthly,
    Yearly,
}

impl ChartPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartPeriod::Monthly => "monthly",
            ChartPeriod::Yearly => "yearly",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ChartPeriod::Monthly => ChartPeriod::Yearly,
            ChartPeriod::Yearly => ChartPeriod::Monthly,
        }
    }
}

/// Escrow balance report.
///
#[derive(Debug, Clone)]
pub struct EscrowPanel {
    pub headline: EscrowHeadline,
    pub transactions: Vec<EscrowTransaction>,
    pub breakdown: Vec<Ranked>,
    pub status: Selection<EscrowStatus>,
    pub period: ChartPeriod,
    monthly: Vec<EscrowPeriod>,
    yearly: Vec<EscrowPeriod>,
    cursor: Cursor,
}

impl Default for EscrowPanel {
    fn default() -> Self {
        EscrowPanel {
            headline: ESCROW_HEADLINE,
            transactions: sample::escrow_transactions(),
            breakdown: sample::escrow_breakdown(),
            status: Selection::All,
            period: ChartPeriod::Monthly,
            monthly: sample::escrow_monthly(),
            yearly: sample::escrow_yearly(),
            cursor: Cursor::default(),
        }
    }
}

impl EscrowPanel {
    pub fn visible(&self) -> Vec<&EscrowTransaction> {
        Query::new("")
            .select(self.status, |t: &EscrowTransaction| t.status)
            .apply(&self.transactions)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    /// Chart series for the selected period.
    ///
    pub fn series(&self) -> &[EscrowPeriod] {
        match self.period {
            ChartPeriod::Monthly => &self.monthly,
            ChartPeriod::Yearly => &self.yearly,
        }
    }
}

impl ListControls for EscrowPanel {
    fn row_count(&self) -> usize {
        self.visible().len()
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn cycle_primary(&mut self) {
        self.status = self.status.cycle();
        self.clamp_selection();
    }

    fn cycle_order(&mut self) {
        self.period = self.period.toggle();
    }

    fn reset_filters(&mut self) {
        self.status = Selection::All;
        self.period = ChartPeriod::Monthly;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            None,
            vec![
                selection_part("status", &self.status),
                format!("period: {}", self.period.as_str()),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_selects_disputed() {
        let mut panel = EscrowPanel::default();
        panel.status = Selection::parse("disputed");
        let visible = panel.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].project_name, "Brand Identity Package");
    }

    #[test]
    fn status_filter_keeps_sample_order() {
        let mut panel = EscrowPanel::default();
        panel.status = Selection::Only(EscrowStatus::Held);
        let visible = panel.visible();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|t| t.status == EscrowStatus::Held));
        let expected: Vec<&str> = panel
            .transactions
            .iter()
            .filter(|t| t.status == EscrowStatus::Held)
            .map(|t| t.id.as_str())
            .collect();
        let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, expected);

        panel.status = Selection::All;
        assert_eq!(panel.row_count(), panel.transactions.len());
    }

    #[test]
    fn period_switches_series() {
        let mut panel = EscrowPanel::default();
        assert_eq!(panel.series().len(), 6);
        panel.cycle_order();
        assert_eq!(panel.series().len(), 4);
        assert_eq!(panel.series()[0].label, "2021");
    }

    #[test]
    fn headline_is_fixed() {
        let mut panel = EscrowPanel::default();
        panel.status = Selection::Only(EscrowStatus::Held);
        assert_eq!(panel.headline.total_held, 251_000.0);
        assert_eq!(panel.headline.pending_release, 18);
    }
}
