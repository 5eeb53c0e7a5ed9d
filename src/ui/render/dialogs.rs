use super::modal::centered_rect;
use super::Frame;
use crate::marketplace::Badged;
use crate::panels::categories::{CategoryDialog, DialogField};
use crate::panels::jobs::JobsPanel;
use crate::panels::support::SupportPanel;
use crate::state::{Panel, State};
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the modal dialog of the active panel, if one is open.
///
pub fn dialogs(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    match state.panel() {
        Panel::Categories(p) => {
            if let Some(dialog) = &p.dialog {
                category(frame, size, theme, dialog);
            }
        }
        Panel::Support(p) if p.dialog.is_some() => ticket(frame, size, theme, p),
        Panel::Jobs(p) if p.detail_open => job_detail(frame, size, theme, p),
        _ => {}
    }
}

fn dialog_block<'a>(theme: &Theme, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default()
                .fg(theme.footer_dialog.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.footer_dialog.to_color()))
}

fn field_block<'a>(theme: &Theme, title: &'a str, focused: bool) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::block_border_style(theme, focused))
}

fn error_line(theme: &Theme, error: Option<String>) -> Line<'static> {
    match error {
        Some(message) => Line::from(Span::styled(
            message,
            Style::default().fg(theme.error.to_color()),
        )),
        None => Line::from(""),
    }
}

fn category(frame: &mut Frame, size: Rect, theme: &Theme, dialog: &CategoryDialog) {
    let area = centered_rect(60, 50, size);
    frame.render_widget(Clear, area);
    let block = dialog_block(theme, "Add Category");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let name_focused = dialog.focus == DialogField::Name;
    let name = if name_focused {
        format!("{}▏", dialog.name)
    } else {
        dialog.name.clone()
    };
    frame.render_widget(
        Paragraph::new(name)
            .style(styling::normal_text_style(theme))
            .block(field_block(theme, "Name", name_focused)),
        chunks[0],
    );

    let description_block = field_block(
        theme,
        "Description",
        dialog.focus == DialogField::Description,
    );
    let description_area = description_block.inner(chunks[1]);
    frame.render_widget(description_block, chunks[1]);
    frame.render_widget(dialog.description.widget(), description_area);

    frame.render_widget(
        Paragraph::new(error_line(theme, dialog.error.as_ref().map(|e| e.to_string()))),
        chunks[2],
    );
}

fn ticket(frame: &mut Frame, size: Rect, theme: &Theme, panel: &SupportPanel) {
    let (Some(dialog), Some(ticket)) = (&panel.dialog, panel.dialog_ticket()) else {
        return;
    };
    let area = centered_rect(70, 70, size);
    frame.render_widget(Clear, area);
    let title = format!("Ticket {}", ticket.id);
    let block = dialog_block(theme, &title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let muted = styling::muted_text_style(theme);
    let details = vec![
        Line::from(Span::styled(
            ticket.subject.clone(),
            styling::header_style(theme),
        )),
        Line::from(vec![
            Span::styled("From: ", muted),
            Span::raw(format!("{} ", ticket.user)),
            styling::badge_span(theme, ticket.user_type.badge()),
            Span::raw(" "),
            styling::badge_span(theme, ticket.priority.badge()),
        ]),
        Line::from(vec![
            Span::styled("Opened: ", muted),
            Span::raw(format::timestamp(ticket.created_at)),
            Span::styled("  Assigned: ", muted),
            Span::raw(
                ticket
                    .assigned_to
                    .clone()
                    .unwrap_or_else(|| "Unassigned".to_string()),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            ticket.description.clone(),
            styling::normal_text_style(theme),
        )),
    ];
    frame.render_widget(
        Paragraph::new(details).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let reply_block = field_block(theme, "Reply", true);
    let reply_area = reply_block.inner(chunks[1]);
    frame.render_widget(reply_block, chunks[1]);
    frame.render_widget(dialog.reply.widget(), reply_area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Status after reply: ", muted),
            styling::badge_span(theme, dialog.status.badge()),
        ])),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(error_line(theme, dialog.error.as_ref().map(|e| e.to_string()))),
        chunks[3],
    );
}

fn job_detail(frame: &mut Frame, size: Rect, theme: &Theme, panel: &JobsPanel) {
    let Some(job) = panel.selected() else {
        return;
    };
    let area = centered_rect(60, 60, size);
    frame.render_widget(Clear, area);

    let muted = styling::muted_text_style(theme);
    let mut status_line = vec![styling::badge_span(theme, job.status.badge())];
    if job.flagged {
        status_line.push(Span::raw(" "));
        status_line.push(Span::styled(
            "⚑ Flagged",
            Style::default().fg(theme.error.to_color()),
        ));
    }
    let text = vec![
        Line::from(Span::styled(job.title.clone(), styling::header_style(theme))),
        Line::from(status_line),
        Line::from(""),
        Line::from(vec![
            Span::styled("Client: ", muted),
            Span::raw(job.client.clone()),
            Span::styled("  Category: ", muted),
            Span::raw(job.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Budget: ", muted),
            Span::raw(format::currency(job.budget)),
            Span::styled("  Proposals: ", muted),
            Span::raw(job.proposals.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Posted: ", muted),
            Span::raw(format::date(job.time_posted)),
            Span::styled("  Deadline: ", muted),
            Span::raw(format::date(job.deadline)),
        ]),
        Line::from(vec![
            Span::styled("Skills: ", muted),
            Span::raw(job.skills.join(", ")),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            job.description.clone(),
            styling::normal_text_style(theme),
        )),
    ];
    let title = format!("Job {}", job.id);
    frame.render_widget(
        Paragraph::new(text)
            .block(dialog_block(theme, &title))
            .wrap(Wrap { trim: true }),
        area,
    );
}
