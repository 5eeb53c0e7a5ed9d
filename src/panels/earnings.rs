use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{ActivityStatus, Point, Ranked, Role, UserEarnings};
use crate::marketplace::{sample, Query, Selection};

/// Sort key of the financial report table. Always descending.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EarningsSort {
    Earnings,
    Spent,
    Projects,
}

impl EarningsSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningsSort::Earnings => "earnings",
            EarningsSort::Spent => "spent",
            EarningsSort::Projects => "projects",
        }
    }

    pub fn cycle(&self) -> Self {
        match self {
            EarningsSort::Earnings => EarningsSort::Spent,
            EarningsSort::Spent => EarningsSort::Projects,
            EarningsSort::Projects => EarningsSort::Earnings,
        }
    }

    fn key(&self, row: &UserEarnings) -> f64 {
        match self {
            EarningsSort::Earnings => row.total_earnings,
            EarningsSort::Spent => row.total_spent,
            EarningsSort::Projects => row.projects_completed as f64,
        }
    }
}

/// Platform-wide totals over every report row.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarningsTotals {
    pub platform_earnings: f64,
    pub platform_spending: f64,
    pub active_freelancers: usize,
    pub active_clients: usize,
}

/// User earnings report.
///
#[derive(Debug, Clone)]
pub struct EarningsPanel {
    pub rows: Vec<UserEarnings>,
    pub top_earners: Vec<Ranked>,
    pub top_spenders: Vec<Ranked>,
    pub distribution: Vec<Point>,
    pub search: String,
    pub role: Selection<Role>,
    pub status: Selection<ActivityStatus>,
    pub sort: EarningsSort,
    cursor: Cursor,
}

impl Default for EarningsPanel {
    fn default() -> Self {
        EarningsPanel {
            rows: sample::earnings(),
            top_earners: sample::top_earners(),
            top_spenders: sample::top_spenders(),
            distribution: sample::earnings_distribution(),
            search: String::new(),
            role: Selection::All,
            status: Selection::All,
            sort: EarningsSort::Earnings,
            cursor: Cursor::default(),
        }
    }
}

impl EarningsPanel {
    pub fn visible(&self) -> Vec<&UserEarnings> {
        let sort = self.sort;
        Query::new(&self.search)
            .select(self.role, |r: &UserEarnings| r.role)
            .select(self.status, |r: &UserEarnings| r.status)
            .sort_desc(move |r: &UserEarnings| sort.key(r))
            .apply(&self.rows)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn totals(&self) -> EarningsTotals {
        let active = |role: Role| {
            self.rows
                .iter()
                .filter(|r| r.role == role && r.status == ActivityStatus::Active)
                .count()
        };
        EarningsTotals {
            platform_earnings: self.rows.iter().map(|r| r.total_earnings).sum(),
            platform_spending: self.rows.iter().map(|r| r.total_spent).sum(),
            active_freelancers: active(Role::Freelancer),
            active_clients: active(Role::Client),
        }
    }
}

impl ListControls for EarningsPanel {
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
        self.role = self.role.cycle();
        self.clamp_selection();
    }

    fn cycle_secondary(&mut self) {
        self.status = self.status.cycle();
        self.clamp_selection();
    }

    fn cycle_order(&mut self) {
        self.sort = self.sort.cycle();
    }

    fn reset_filters(&mut self) {
        self.search.clear();
        self.role = Selection::All;
        self.status = Selection::All;
        self.sort = EarningsSort::Earnings;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        let mut parts = vec![
            selection_part("role", &self.role),
            selection_part("status", &self.status),
        ];
        parts.push(format!("sort: {}", self.sort.as_str()));
        summary(Some(&self.search), parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(panel: &EarningsPanel) -> Vec<&str> {
        panel.visible().iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn default_sort_is_by_earnings_descending() {
        let panel = EarningsPanel::default();
        assert_eq!(
            names(&panel),
            vec!["Emily Davis", "Sarah Johnson", "Mike Chen", "John Smith"]
        );
    }

    #[test]
    fn sort_by_spent_keeps_ties_in_original_order() {
        let mut panel = EarningsPanel::default();
        panel.cycle_order();
        assert_eq!(panel.sort, EarningsSort::Spent);
        // only John Smith spends; the freelancers tie at zero
        assert_eq!(
            names(&panel),
            vec!["John Smith", "Sarah Johnson", "Mike Chen", "Emily Davis"]
        );
    }

    #[test]
    fn sort_by_projects() {
        let mut panel = EarningsPanel::default();
        panel.sort = EarningsSort::Projects;
        let projects: Vec<u32> = panel.visible().iter().map(|r| r.projects_completed).collect();
        assert_eq!(projects, vec![18, 15, 12, 8]);
    }

    #[test]
    fn totals_cover_every_row() {
        let mut panel = EarningsPanel::default();
        panel.role = Selection::Only(Role::Client);
        let totals = panel.totals();
        assert_eq!(totals.platform_earnings, 25_400.0 + 19_800.0 + 31_200.0);
        assert_eq!(totals.platform_spending, 18_500.0);
        assert_eq!(totals.active_freelancers, 3);
        assert_eq!(totals.active_clients, 1);
    }

    #[test]
    fn sort_cycle_returns_to_start() {
        let sort = EarningsSort::Earnings;
        assert_eq!(sort.cycle().cycle().cycle(), sort);
    }
}
