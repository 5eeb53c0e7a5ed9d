use super::{Frame, PanelContext};
use crate::panels::system::SystemPanel;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn system(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &SystemPanel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, panel.checks.len().max(1) as u32);
            panel.checks.len().max(1)
        ])
        .split(rows[0]);
    for (check, column) in panel.checks.iter().zip(columns.iter()) {
        let color = if check.healthy {
            ctx.theme.success.to_color()
        } else {
            ctx.theme.warning.to_color()
        };
        let marker = if check.healthy { "● " } else { "▲ " };
        let card = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(
                    check.value,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                if check.healthy { "OK" } else { "Needs attention" },
                styling::muted_text_style(ctx.theme),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(check.name, styling::header_style(ctx.theme))),
        );
        frame.render_widget(card, *column);
    }

    let summary = if panel.warnings() == 0 {
        "All systems operational".to_string()
    } else {
        format!("{} check(s) need attention", panel.warnings())
    };
    let footer = Paragraph::new(vec![
        Line::from(Span::styled(summary, styling::normal_text_style(ctx.theme))),
        Line::from(Span::styled(panel.updated, styling::muted_text_style(ctx.theme))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(ctx.theme))
            .title("System Health"),
    );
    frame.render_widget(footer, rows[1]);
}
