use crate::marketplace::models::{Metric, Point};
use crate::marketplace::sample;

/// Dashboard landing page: headline cards and trend series.
///
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewPanel {
    pub metrics: Vec<Metric>,
    pub revenue: Vec<Point>,
    pub signups: Vec<Point>,
    pub users_by_country: Vec<Point>,
    pub jobs_by_technology: Vec<Point>,
    pub regions: Vec<Point>,
}

impl Default for OverviewPanel {
    fn default() -> Self {
        OverviewPanel {
            metrics: sample::overview_metrics(),
            revenue: sample::overview_revenue(),
            signups: sample::overview_signups(),
            users_by_country: sample::users_by_country(),
            jobs_by_technology: sample::jobs_by_technology(),
            regions: sample::active_regions(),
        }
    }
}

impl OverviewPanel {
    /// Share of each technology in the total job count, in percent.
    ///
    pub fn technology_shares(&self) -> Vec<(&'static str, f64)> {
        let total: f64 = self.jobs_by_technology.iter().map(|p| p.value).sum();
        self.jobs_by_technology
            .iter()
            .map(|p| {
                let share = if total > 0.0 { p.value / total * 100.0 } else { 0.0 };
                (p.label, share)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_has_four_cards() {
        let panel = OverviewPanel::default();
        assert_eq!(panel.metrics.len(), 4);
        assert_eq!(panel.metrics[3].trend, "5 urgent");
    }

    #[test]
    fn technology_shares_sum_to_one_hundred() {
        let panel = OverviewPanel::default();
        let total: f64 = panel.technology_shares().iter().map(|(_, s)| s).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
