//! Per-section view state.
//!
//! Every business area has its own typed panel struct holding a private copy
//! of its sample collection plus the local UI state (search text, selected
//! filters, sort key, tab, open dialog). Panels are built fresh whenever their
//! section is activated and never share state with each other.

pub mod categories;
pub mod cms;
pub mod commissions;
pub mod earnings;
pub mod escrow;
pub mod jobs;
pub mod overview;
pub mod settings;
pub mod support;
pub mod system;
pub mod tax;
pub mod transactions;
pub mod users;

use crate::marketplace::{Choice, Selection, TextFilter};

/// Row cursor over a derived list.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
}

impl Cursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move down one row, wrapping to the top.
    ///
    pub fn next(&mut self, len: usize) {
        self.index = if len == 0 || self.index + 1 >= len {
            0
        } else {
            self.index + 1
        };
    }

    /// Move up one row, wrapping to the bottom.
    ///
    pub fn previous(&mut self, len: usize) {
        self.index = if len == 0 {
            0
        } else if self.index == 0 {
            len - 1
        } else {
            self.index - 1
        };
    }

    /// Keep the cursor inside a list that may have shrunk.
    ///
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Shared keyboard surface of list panels.
///
/// Only `row_count`, `cursor`, `reset_filters` and `filter_summary` are
/// required; the rest default to no-ops for panels without that control.
pub trait ListControls {
    /// Number of rows currently visible.
    fn row_count(&self) -> usize;

    fn cursor(&mut self) -> &mut Cursor;

    /// Search buffer, if the panel has a search box.
    fn search(&mut self) -> Option<&mut String> {
        None
    }

    fn cycle_primary(&mut self) {}

    fn cycle_secondary(&mut self) {}

    /// Cycle the sort key or chart period.
    fn cycle_order(&mut self) {}

    fn next_tab(&mut self) {}

    fn previous_tab(&mut self) {}

    /// Flip the boolean flag of the selected record. Returns a log line
    /// describing the change.
    fn toggle_selected(&mut self) -> Option<String> {
        None
    }

    /// Restore every filter to its default.
    fn reset_filters(&mut self);

    /// One-line description of the active filters.
    fn filter_summary(&self) -> String;

    fn select_next(&mut self) {
        let len = self.row_count();
        self.cursor().next(len);
    }

    fn select_previous(&mut self) {
        let len = self.row_count();
        self.cursor().previous(len);
    }

    fn clamp_selection(&mut self) {
        let len = self.row_count();
        self.cursor().clamp(len);
    }

    fn has_search(&mut self) -> bool {
        self.search().is_some()
    }

    fn push_search(&mut self, c: char) {
        if let Some(search) = self.search() {
            search.push(c);
        }
        self.clamp_selection();
    }

    fn pop_search(&mut self) {
        if let Some(search) = self.search() {
            search.pop();
        }
        self.clamp_selection();
    }
}

/// Render a `name: value` fragment for filter summaries.
///
pub(crate) fn selection_part<E: Choice>(name: &str, selection: &Selection<E>) -> String {
    format!("{}: {}", name, selection.as_str())
}

pub(crate) fn text_part(name: &str, filter: &TextFilter) -> String {
    format!("{}: {}", name, filter.value().unwrap_or("all"))
}

pub(crate) fn summary(search: Option<&str>, parts: Vec<String>) -> String {
    let mut parts = parts;
    if let Some(search) = search.filter(|s| !s.is_empty()) {
        parts.insert(0, format!("search: '{}'", search));
    }
    parts.join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut cursor = Cursor::default();
        cursor.previous(3);
        assert_eq!(cursor.index(), 2);
        cursor.next(3);
        assert_eq!(cursor.index(), 0);
        cursor.next(3);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn cursor_handles_empty_lists() {
        let mut cursor = Cursor::default();
        cursor.next(0);
        assert_eq!(cursor.index(), 0);
        cursor.previous(0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_clamps_when_list_shrinks() {
        let mut cursor = Cursor::default();
        cursor.next(5);
        cursor.next(5);
        cursor.next(5);
        cursor.clamp(2);
        assert_eq!(cursor.index(), 1);
        cursor.clamp(0);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn summary_leads_with_search() {
        let text = summary(Some("chen"), vec!["status: open".to_string()]);
        assert_eq!(text, "search: 'chen' | status: open");
        assert_eq!(summary(Some(""), vec!["a: all".to_string()]), "a: all");
    }
}
