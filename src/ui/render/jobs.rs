use super::{list_layout, section_title, Frame, PanelContext};
use crate::marketplace::Badged;
use crate::panels::jobs::JobsPanel;
use crate::panels::ListControls;
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card, DataTable};
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row},
};

const HEADER: [&str; 7] = ["Title", "Client", "Category", "Budget", "Deadline", "Proposals", "Status"];
const WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(30),
    Constraint::Percentage(15),
    Constraint::Percentage(15),
    Constraint::Length(10),
    Constraint::Length(13),
    Constraint::Length(10),
    Constraint::Min(11),
];

/// Render jobs and projects. The detail view is drawn as an overlay.
///
pub fn jobs(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &JobsPanel) {
    let areas = list_layout(size);
    let stats = panel.stats();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Jobs", stats.total.to_string()),
            Card::new("Open", stats.open.to_string()),
            Card::new("In Progress", stats.in_progress.to_string()),
            Card::new("Flagged", stats.flagged.to_string()).caption("needs review"),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|job| {
            let title = if job.flagged {
                Span::styled(
                    format!("⚑ {}", job.title),
                    Style::default()
                        .fg(ctx.theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(job.title.clone())
            };
            Row::new(vec![
                Cell::from(title),
                Cell::from(job.client.clone()),
                Cell::from(job.category.clone()),
                Cell::from(format::currency(job.budget)),
                Cell::from(format::date(job.deadline)),
                Cell::from(job.proposals.to_string()),
                Cell::from(styling::badge_span(ctx.theme, job.status.badge())),
            ])
        })
        .collect();
    DataTable {
        title: section_title("jobs", visible.len()),
        header: &HEADER,
        widths: &WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, areas[2], ctx.theme);
}
