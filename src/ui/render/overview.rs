use super::{Frame, PanelContext};
use crate::panels::overview::OverviewPanel;
use crate::ui::widgets::chart::{self, ValueFormat};
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

/// Render the dashboard landing page.
///
pub fn overview(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &OverviewPanel) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Min(6),
        ])
        .split(size);

    let cards = panel
        .metrics
        .iter()
        .map(|metric| {
            Card::new(metric.title, metric.value.clone())
                .caption(format!("{} {}", metric.trend, metric.caption))
        })
        .collect();
    table::cards(frame, rows[0], ctx.theme, cards);

    let trends = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    chart::bars(
        frame,
        trends[0],
        ctx.theme,
        "Revenue",
        &points(&panel.revenue),
        ValueFormat::Currency,
        Direction::Vertical,
    );
    chart::bars(
        frame,
        trends[1],
        ctx.theme,
        "New Users",
        &points(&panel.signups),
        ValueFormat::Count,
        Direction::Vertical,
    );

    let breakdowns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[2]);
    chart::bars(
        frame,
        breakdowns[0],
        ctx.theme,
        "Users by Country",
        &points(&panel.users_by_country),
        ValueFormat::Count,
        Direction::Horizontal,
    );
    technology_shares(frame, breakdowns[1], ctx, panel);
    chart::bars(
        frame,
        breakdowns[2],
        ctx.theme,
        "Active Regions",
        &points(&panel.regions),
        ValueFormat::Count,
        Direction::Horizontal,
    );
}

fn points(series: &[crate::marketplace::models::Point]) -> Vec<(&str, f64)> {
    series.iter().map(|p| (p.label, p.value)).collect()
}

/// One gauge per technology, showing its share of all jobs.
///
fn technology_shares(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &OverviewPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(ctx.theme))
        .title(Span::styled("Jobs by Technology", styling::header_style(ctx.theme)));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let shares = panel.technology_shares();
    if shares.is_empty() {
        frame.render_widget(Paragraph::new("No jobs"), inner);
        return;
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); shares.len()])
        .split(inner);
    for ((label, share), row) in shares.into_iter().zip(rows.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(12), Constraint::Min(0)])
            .split(*row);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                label,
                styling::normal_text_style(ctx.theme),
            ))),
            columns[0],
        );
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(ctx.theme.accent.to_color())
                    .bg(ctx.theme.surface.to_color()),
            )
            .ratio((share / 100.0).clamp(0.0, 1.0))
            .label(crate::utils::format::percent(share));
        frame.render_widget(gauge, columns[1]);
    }
}
