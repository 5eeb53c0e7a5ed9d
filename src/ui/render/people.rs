use super::{list_layout, section_title, Frame, PanelContext};
use crate::marketplace::Badged;
use crate::panels::earnings::EarningsPanel;
use crate::panels::users::UsersPanel;
use crate::panels::ListControls;
use crate::ui::widgets::chart::{self, ValueFormat};
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card, DataTable};
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Row},
};

const USER_HEADER: [&str; 7] = ["User", "Email", "Role", "Status", "Country", "Joined", "Spent / Earned"];
const USER_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(20),
    Constraint::Percentage(22),
    Constraint::Length(11),
    Constraint::Length(9),
    Constraint::Length(10),
    Constraint::Length(13),
    Constraint::Min(10),
];

/// Render user management.
///
pub fn users(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &UsersPanel) {
    let areas = list_layout(size);
    let stats = panel.stats();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Users", format::count(stats.total as u64)),
            Card::new("Active", format::count(stats.active as u64)),
            Card::new("Freelancers", format::count(stats.freelancers as u64)),
            Card::new("Banned", format::count(stats.banned as u64)),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|user| {
            let amount = user
                .total_spent
                .or(user.total_earned)
                .map(format::currency)
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from(Line::from(vec![
                    Span::styled(
                        format!("{:<3}", format::initials(&user.name)),
                        styling::muted_text_style(ctx.theme),
                    ),
                    Span::raw(user.name.clone()),
                ])),
                Cell::from(user.email.clone()),
                Cell::from(styling::badge_span(ctx.theme, user.role.badge())),
                Cell::from(styling::badge_span(ctx.theme, user.status.badge())),
                Cell::from(user.country.clone()),
                Cell::from(format::date(user.join_date)),
                Cell::from(amount),
            ])
        })
        .collect();
    DataTable {
        title: section_title("users", visible.len()),
        header: &USER_HEADER,
        widths: &USER_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, areas[2], ctx.theme);
}

const EARNINGS_HEADER: [&str; 7] = ["User", "Role", "Earned", "Spent", "Projects", "Avg Value", "Status"];
const EARNINGS_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(24),
    Constraint::Length(11),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(9),
    Constraint::Length(11),
    Constraint::Min(8),
];

/// Render user earnings and spending.
///
pub fn earnings(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &EarningsPanel) {
    let areas = list_layout(size);
    let totals = panel.totals();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Platform Earnings", format::currency(totals.platform_earnings)),
            Card::new("Platform Spending", format::currency(totals.platform_spending)),
            Card::new("Active Freelancers", format::count(totals.active_freelancers as u64)),
            Card::new("Active Clients", format::count(totals.active_clients as u64)),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(areas[2]);

    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.name.clone()),
                Cell::from(styling::badge_span(ctx.theme, row.role.badge())),
                Cell::from(format::currency(row.total_earnings)),
                Cell::from(format::currency(row.total_spent)),
                Cell::from(row.projects_completed.to_string()),
                Cell::from(format::currency(row.avg_project_value)),
                Cell::from(styling::badge_span(ctx.theme, row.status.badge())),
            ])
        })
        .collect();
    DataTable {
        title: format!("{} sorted by {}", section_title("earnings", visible.len()), panel.sort.as_str()),
        header: &EARNINGS_HEADER,
        widths: &EARNINGS_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, body[0], ctx.theme);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(body[1]);
    let earners: Vec<(&str, f64)> = panel.top_earners.iter().map(|r| (r.name, r.amount)).collect();
    let spenders: Vec<(&str, f64)> = panel.top_spenders.iter().map(|r| (r.name, r.amount)).collect();
    let distribution: Vec<(&str, f64)> = panel.distribution.iter().map(|p| (p.label, p.value)).collect();
    chart::bars(frame, side[0], ctx.theme, "Top Earners", &earners, ValueFormat::Currency, Direction::Horizontal);
    chart::bars(frame, side[1], ctx.theme, "Top Spenders", &spenders, ValueFormat::Currency, Direction::Horizontal);
    chart::bars(frame, side[2], ctx.theme, "Earnings Distribution", &distribution, ValueFormat::Count, Direction::Horizontal);
}
