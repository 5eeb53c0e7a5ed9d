use super::{selection_part, summary, Cursor, ListControls};
use crate::marketplace::models::{Ticket, TicketPriority, TicketStatus};
use crate::marketplace::settings::Notice;
use crate::marketplace::{sample, Choice, Query, Selection, ValidationError};
use tui_textarea::TextArea;

/// Statuses offered by the ticket dialog's status selector.
///
pub const DIALOG_STATUSES: [TicketStatus; 3] = [
    TicketStatus::InProgress,
    TicketStatus::Resolved,
    TicketStatus::Closed,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub urgent: usize,
}

/// Reply dialog for one ticket.
///
pub struct TicketDialog {
    pub ticket_id: String,
    pub reply: TextArea<'static>,
    pub status: TicketStatus,
    pub error: Option<ValidationError>,
}

impl TicketDialog {
    fn new(ticket: &Ticket) -> Self {
        let status = if DIALOG_STATUSES.contains(&ticket.status) {
            ticket.status
        } else {
            DIALOG_STATUSES[0]
        };
        TicketDialog {
            ticket_id: ticket.id.clone(),
            reply: TextArea::default(),
            status,
            error: None,
        }
    }

    pub fn cycle_status(&mut self) {
        let position = DIALOG_STATUSES
            .iter()
            .position(|s| *s == self.status)
            .unwrap_or(0);
        self.status = DIALOG_STATUSES[(position + 1) % DIALOG_STATUSES.len()];
    }

    pub fn reply_text(&self) -> String {
        self.reply.lines().join("\n")
    }
}

/// Support ticket queue.
///
pub struct SupportPanel {
    pub tickets: Vec<Ticket>,
    pub search: String,
    pub status: Selection<TicketStatus>,
    pub priority: Selection<TicketPriority>,
    pub dialog: Option<TicketDialog>,
    cursor: Cursor,
}

impl Default for SupportPanel {
    fn default() -> Self {
        SupportPanel {
            tickets: sample::tickets(),
            search: String::new(),
            status: Selection::All,
            priority: Selection::All,
            dialog: None,
            cursor: Cursor::default(),
        }
    }
}

impl SupportPanel {
    pub fn visible(&self) -> Vec<&Ticket> {
        Query::new(&self.search)
            .select(self.status, |t: &Ticket| t.status)
            .select(self.priority, |t: &Ticket| t.priority)
            .apply(&self.tickets)
    }

    pub fn selected(&self) -> Option<&Ticket> {
        self.visible().get(self.cursor.index()).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn stats(&self) -> TicketStats {
        let count = |f: &dyn Fn(&Ticket) -> bool| self.tickets.iter().filter(|t| f(t)).count();
        TicketStats {
            total: self.tickets.len(),
            open: count(&|t| t.status == TicketStatus::Open),
            in_progress: count(&|t| t.status == TicketStatus::InProgress),
            urgent: count(&|t| t.priority == TicketPriority::Urgent),
        }
    }

    /// The ticket the open dialog refers to.
    ///
    pub fn dialog_ticket(&self) -> Option<&Ticket> {
        let id = &self.dialog.as_ref()?.ticket_id;
        self.tickets.iter().find(|t| &t.id == id)
    }

    pub fn open_dialog(&mut self) -> bool {
        self.dialog = self.selected().map(TicketDialog::new);
        self.dialog.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn set_status(&mut self, id: &str, status: TicketStatus) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.status = status;
                log::info!("Ticket {} set to {}", id, status.as_str());
                true
            }
            None => {
                log::warn!("No ticket with id {}", id);
                false
            }
        }
    }

    /// Apply the dialog's status and record the reply. The reply must not be
    /// blank.
    ///
    pub fn send_reply(&mut self) -> Option<Notice> {
        let dialog = self.dialog.take()?;
        if dialog.reply_text().trim().is_empty() {
            self.dialog = Some(TicketDialog {
                error: Some(ValidationError::Empty { field: "Reply" }),
                ..dialog
            });
            return None;
        }
        self.set_status(&dialog.ticket_id, dialog.status);
        self.clamp_selection();
        Some(Notice::new(
            "Reply Sent",
            &format!("Ticket #{} updated.", dialog.ticket_id),
        ))
    }
}

impl ListControls for SupportPanel {
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
        self.priority = self.priority.cycle();
        self.clamp_selection();
    }

    fn reset_filters(&mut self) {
        self.search.clear();
        self.status = Selection::All;
        self.priority = Selection::All;
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(
            Some(&self.search),
            vec![
                selection_part("status", &self.status),
                selection_part("priority", &self.priority),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_the_whole_queue() {
        let mut panel = SupportPanel::default();
        panel.priority = Selection::Only(TicketPriority::Low);
        assert_eq!(panel.visible().len(), 0);
        assert_eq!(
            panel.stats(),
            TicketStats {
                total: 4,
                open: 2,
                in_progress: 1,
                urgent: 1
            }
        );
    }

    #[test]
    fn search_matches_requester() {
        let mut panel = SupportPanel::default();
        panel.search = "emily".to_string();
        assert_eq!(panel.visible()[0].subject, "Inappropriate Job Posting");
    }

    #[test]
    fn dialog_starts_from_an_allowed_status() {
        let mut panel = SupportPanel::default();
        assert!(panel.open_dialog());
        let dialog = panel.dialog.as_mut().unwrap();
        assert_eq!(dialog.ticket_id, "1");
        assert_eq!(dialog.status, TicketStatus::InProgress);
        dialog.cycle_status();
        dialog.cycle_status();
        dialog.cycle_status();
        assert_eq!(dialog.status, TicketStatus::InProgress);
    }

    #[test]
    fn blank_reply_is_rejected() {
        let mut panel = SupportPanel::default();
        panel.open_dialog();
        assert!(panel.send_reply().is_none());
        assert!(panel.dialog.as_ref().and_then(|d| d.error.as_ref()).is_some());
        assert_eq!(panel.tickets[0].status, TicketStatus::Open);
    }

    #[test]
    fn reply_updates_only_the_ticket_in_the_dialog() {
        let mut panel = SupportPanel::default();
        panel.open_dialog();
        if let Some(dialog) = panel.dialog.as_mut() {
            dialog.reply.insert_str("We are looking into it.");
            dialog.cycle_status();
        }
        let notice = panel.send_reply().unwrap();
        assert_eq!(notice.title, "Reply Sent");
        assert!(panel.dialog.is_none());
        assert_eq!(panel.tickets[0].status, TicketStatus::Resolved);
        assert_eq!(panel.tickets[1].status, TicketStatus::InProgress);
        assert_eq!(panel.tickets[3].status, TicketStatus::Open);
    }

    #[test]
    fn unknown_ticket_is_ignored() {
        let mut panel = SupportPanel::default();
        assert!(!panel.set_status("99", TicketStatus::Closed));
    }
}
