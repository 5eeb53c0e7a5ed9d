use super::{selection_part, summary, text_part, Cursor, ListControls};
use crate::marketplace::models::{Job, JobStatus};
use crate::marketplace::{sample, Query, Selection, TextFilter};

/// Categories offered by the job category selector.
///
pub const JOB_CATEGORIES: [&str; 3] = ["Web Development", "Design", "Data Science"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub flagged: usize,
}

/// Job management: listings filtered by status and category.
///
#[derive(Debug, Clone)]
pub struct JobsPanel {
    pub jobs: Vec<Job>,
    pub search: String,
    pub status: Selection<JobStatus>,
    pub category: TextFilter,
    pub detail_open: bool,
    cursor: Cursor,
}

impl Default for JobsPanel {
    fn default() -> Self {
        JobsPanel {
            jobs: sample::jobs(),
            search: String::new(),
            status: Selection::All,
            category: TextFilter::default(),
            detail_open: false,
            cursor: Cursor::default(),
        }
    }
}

impl JobsPanel {
    pub fn visible(&self) -> Vec<&Job> {
        Query::new(&self.search)
            .select(self.status, |j: &Job| j.status)
            .select_text(&self.category, |j: &Job| j.category.as_str())
            .apply(&self.jobs)
    }

    pub fn selected(&self) -> Option<&Job> {
        self.visible().get(self.cursor.index()).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn stats(&self) -> JobStats {
        JobStats {
            total: self.jobs.len(),
            open: self.jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
            in_progress: self
                .jobs
                .iter()
                .filter(|j| j.status == JobStatus::InProgress)
                .count(),
            flagged: self.jobs.iter().filter(|j| j.flagged).count(),
        }
    }

    /// Show or hide the detail overlay of the selected job.
    ///
    pub fn toggle_detail(&mut self) {
        self.detail_open = !self.detail_open && self.selected().is_some();
    }
}

impl ListControls for JobsPanel {
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
        self.status = self.status.cycle();
        self.clamp_selection();
    }

    fn cycle_secondary(&mut self) {
        self.category = self.category.cycle(&JOB_CATEGORIES);
        self.clamp_selection();
    }

    fn reset_filters(&mut self) {
        self.search.clear();
        self.status = Selection::All;
        self.category = TextFilter::default();
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            Some(&self.search),
            vec![
                selection_part("status", &self.status),
                text_part("category", &self.category),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(panel: &JobsPanel) -> Vec<&str> {
        panel.visible().iter().map(|j| j.title.as_str()).collect()
    }

    #[test]
    fn open_status_yields_the_ecommerce_job() {
        let mut panel = JobsPanel::default();
        panel.status = Selection::parse("open");
        assert_eq!(titles(&panel), vec!["E-commerce Website Development"]);
    }

    #[test]
    fn search_chen_matches_client_name() {
        let mut panel = JobsPanel::default();
        panel.search = "chen".to_string();
        let visible = panel.visible();
        assert_eq!(visible.len(), 1);
        assert!(visible.iter().all(|j| j.client.to_lowercase().contains("chen")));
        assert_eq!(visible[0].title, "Data Analysis Project");
    }

    #[test]
    fn padded_search_is_not_trimmed() {
        let mut panel = JobsPanel::default();
        panel.search = "chen ".to_string();
        assert_eq!(panel.row_count(), 0);
        panel.search = "   ".to_string();
        assert_eq!(panel.row_count(), 0);
        panel.search.clear();
        assert_eq!(panel.row_count(), 4);
    }

    #[test]
    fn unknown_status_token_means_no_constraint() {
        let mut panel = JobsPanel::default();
        panel.status = Selection::parse("archived");
        assert_eq!(panel.visible().len(), 4);
    }

    #[test]
    fn category_cycle_filters_by_name() {
        let mut panel = JobsPanel::default();
        panel.cycle_secondary();
        assert_eq!(
            titles(&panel),
            vec!["E-commerce Website Development", "WordPress Plugin Development"]
        );
        panel.cycle_secondary();
        assert_eq!(titles(&panel), vec!["Mobile App UI/UX Design"]);
        assert_eq!(panel.filter_summary(), "status: all | category: Design");
    }

    #[test]
    fn stats_reflect_full_collection() {
        let mut panel = JobsPanel::default();
        panel.status = Selection::Only(JobStatus::Closed);
        assert_eq!(
            panel.stats(),
            JobStats {
                total: 4,
                open: 1,
                in_progress: 1,
                flagged: 1
            }
        );
    }

    #[test]
    fn detail_needs_a_selection() {
        let mut panel = JobsPanel::default();
        panel.toggle_detail();
        assert!(panel.detail_open);
        panel.toggle_detail();
        assert!(!panel.detail_open);
        panel.search = "no such job".to_string();
        panel.toggle_detail();
        assert!(!panel.detail_open);
    }
}
