use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{Role, User, UserStatus};
use crate::marketplace::{sample, Query, Selection};

/// Headline counts over the full user directory.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub freelancers: usize,
    pub banned: usize,
}

/// User management: directory filtered by role and status.
///
#[derive(Debug, Clone)]
pub struct UsersPanel {
    pub users: Vec<User>,
    pub search: String,
    pub role: Selection<Role>,
    pub status: Selection<UserStatus>,
    cursor: Cursor,
}

impl Default for UsersPanel {
    fn default() -> Self {
        UsersPanel {
            users: sample::users(),
            search: String::new(),
            role: Selection::All,
            status: Selection::All,
            cursor: Cursor::default(),
        }
    }
}

impl UsersPanel {
    pub fn visible(&self) -> Vec<&User> {
        Query::new(&self.search)
            .select(self.role, |u: &User| u.role)
            .select(self.status, |u: &User| u.status)
            .apply(&self.users)
    }

    pub fn selected(&self) -> Option<&User> {
        self.visible().get(self.cursor.index()).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn stats(&self) -> UserStats {
        UserStats {
            total: self.users.len(),
            active: self.users.iter().filter(|u| u.status == UserStatus::Active).count(),
            freelancers: self.users.iter().filter(|u| u.role == Role::Freelancer).count(),
            banned: self.users.iter().filter(|u| u.status == UserStatus::Banned).count(),
        }
    }
}

impl ListControls for UsersPanel {
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

    fn reset_filters(&mut self) {
        self.search.clear();
        self.role = Selection::All;
        self.status = Selection::All;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            Some(&self.search),
            vec![
                selection_part("role", &self.role),
                selection_part("status", &self.status),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(panel: &UsersPanel) -> Vec<&str> {
        panel.visible().iter().map(|u| u.name.as_str()).collect()
    }

    #[test]
    fn active_freelancers_are_sarah_and_alex() {
        let mut panel = UsersPanel::default();
        panel.role = Selection::parse("freelancer");
        panel.status = Selection::parse("active");
        assert_eq!(names(&panel), vec!["Sarah Johnson", "Alex Rodriguez"]);
    }

    #[test]
    fn search_matches_email_too() {
        let mut panel = UsersPanel::default();
        for c in "ALEX.R@".chars() {
            panel.push_search(c);
        }
        assert_eq!(names(&panel), vec!["Alex Rodriguez"]);
    }

    #[test]
    fn stats_ignore_filters() {
        let mut panel = UsersPanel::default();
        let before = panel.stats();
        panel.status = Selection::Only(UserStatus::Banned);
        assert_eq!(panel.visible().len(), 1);
        assert_eq!(panel.stats(), before);
        assert_eq!(before.total, 5);
        assert_eq!(before.active, 3);
    }

    #[test]
    fn filter_cycling_keeps_selection_in_range() {
        let mut panel = UsersPanel::default();
        panel.select_previous();
        assert_eq!(panel.selected_index(), 4);
        panel.cycle_secondary(); // active only
        assert_eq!(panel.row_count(), 3);
        assert_eq!(panel.selected_index(), 2);
        panel.reset_filters();
        assert_eq!(panel.row_count(), 5);
        assert_eq!(panel.filter_summary(), "role: all | status: all");
    }
}
