use super::{list_layout, section_title, Frame, PanelContext};
use crate::marketplace::badge::REQUESTER;
use crate::marketplace::{Badged, Choice};
use crate::panels::support::SupportPanel;
use crate::panels::ListControls;
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card, DataTable};
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Cell, Row},
};

const HEADER: [&str; 8] = ["#", "Subject", "Requester", "Type", "Priority", "Status", "Assigned", "Last Reply"];
const WIDTHS: [Constraint; 8] = [
    Constraint::Length(4),
    Constraint::Percentage(28),
    Constraint::Percentage(14),
    Constraint::Length(11),
    Constraint::Length(9),
    Constraint::Length(12),
    Constraint::Length(14),
    Constraint::Min(16),
];

/// Render the support ticket queue.
///
pub fn support(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &SupportPanel) {
    let areas = list_layout(size);
    let stats = panel.stats();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Tickets", stats.total.to_string()),
            Card::new("Open", stats.open.to_string()),
            Card::new("In Progress", stats.in_progress.to_string()),
            Card::new("Urgent", stats.urgent.to_string()).caption("needs attention"),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|ticket| {
            Row::new(vec![
                Cell::from(ticket.id.clone()),
                Cell::from(ticket.subject.clone()),
                Cell::from(ticket.user.clone()),
                Cell::from(styling::badge_span(
                    ctx.theme,
                    REQUESTER.lookup(ticket.user_type.as_str()),
                )),
                Cell::from(styling::badge_span(ctx.theme, ticket.priority.badge())),
                Cell::from(styling::badge_span(ctx.theme, ticket.status.badge())),
                Cell::from(
                    ticket
                        .assigned_to
                        .clone()
                        .unwrap_or_else(|| "Unassigned".to_string()),
                ),
                Cell::from(format::timestamp(ticket.last_reply)),
            ])
        })
        .collect();
    DataTable {
        title: section_title("support", visible.len()),
        header: &HEADER,
        widths: &WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, areas[2], ctx.theme);
}
