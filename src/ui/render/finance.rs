use super::{list_layout, section_title, Frame, PanelContext};
use crate::marketplace::Badged;
use crate::panels::commissions::CommissionsPanel;
use crate::panels::escrow::EscrowPanel;
use crate::panels::tax::TaxPanel;
use crate::panels::transactions::TransactionsPanel;
use crate::panels::ListControls;
use crate::ui::widgets::chart::{self, ValueFormat};
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card, DataTable};
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Row},
};

/// Table on the left, two stacked charts on the right.
///
fn split_body(area: Rect) -> (Rect, Rect, Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);
    (columns[0], side[0], side[1])
}

const TRANSACTION_HEADER: [&str; 7] = ["ID", "Type", "Description", "Amount", "Net", "Status", "Date"];
const TRANSACTION_WIDTHS: [Constraint; 7] = [
    Constraint::Length(8),
    Constraint::Length(11),
    Constraint::Percentage(30),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Min(16),
];

pub fn transactions(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &TransactionsPanel) {
    let areas = list_layout(size);
    let totals = panel.totals();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Volume", format::currency(totals.revenue)),
            Card::new("Commission", format::currency(totals.commission)),
            Card::new("Pending", totals.pending.to_string()),
            Card::new("Range", panel.range.as_str()).caption("display only"),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let (main, top, bottom) = split_body(areas[2]);
    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.id.clone()),
                Cell::from(styling::badge_span(ctx.theme, tx.kind.badge())),
                Cell::from(Line::from(vec![
                    Span::raw(tx.description.clone()),
                    Span::styled(
                        format!("  {} → {}", tx.from, tx.to),
                        styling::muted_text_style(ctx.theme),
                    ),
                ])),
                Cell::from(format::currency(tx.amount)),
                Cell::from(format::currency(tx.net_amount)),
                Cell::from(styling::badge_span(ctx.theme, tx.status.badge())),
                Cell::from(format::timestamp(tx.date)),
            ])
        })
        .collect();
    DataTable {
        title: section_title("transactions", visible.len()),
        header: &TRANSACTION_HEADER,
        widths: &TRANSACTION_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, main, ctx.theme);

    let revenue: Vec<(&str, f64)> = panel.monthly.iter().map(|m| (m.month, m.revenue)).collect();
    let volumes: Vec<(&str, f64)> = panel.volumes.iter().map(|v| (v.name, v.amount)).collect();
    chart::bars(frame, top, ctx.theme, "Monthly Revenue", &revenue, ValueFormat::Currency, Direction::Vertical);
    chart::bars(frame, bottom, ctx.theme, "Volume by Type", &volumes, ValueFormat::Currency, Direction::Horizontal);
}

const ESCROW_HEADER: [&str; 7] = ["Project", "Client", "Freelancer", "Amount", "Held", "Release", "Status"];
const ESCROW_WIDTHS: [Constraint; 7] = [
    Constraint::Percentage(24),
    Constraint::Percentage(15),
    Constraint::Percentage(15),
    Constraint::Length(10),
    Constraint::Length(8),
    Constraint::Length(13),
    Constraint::Min(9),
];

pub fn escrow(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &EscrowPanel) {
    let areas = list_layout(size);
    let headline = &panel.headline;
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Held", format::currency(headline.total_held)),
            Card::new("Total Released", format::currency(headline.total_released)),
            Card::new("Avg Hold Time", format!("{} days", headline.average_hold_days)),
            Card::new("Pending Release", headline.pending_release.to_string()),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let (main, top, bottom) = split_body(areas[2]);
    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.project_name.clone()),
                Cell::from(tx.client.clone()),
                Cell::from(tx.freelancer.clone()),
                Cell::from(format::currency(tx.amount)),
                Cell::from(format!("{}d", tx.days_held)),
                Cell::from(format::date(tx.release_date)),
                Cell::from(styling::badge_span(ctx.theme, tx.status.badge())),
            ])
        })
        .collect();
    DataTable {
        title: section_title("escrow", visible.len()),
        header: &ESCROW_HEADER,
        widths: &ESCROW_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, main, ctx.theme);

    let held: Vec<(&str, f64)> = panel.series().iter().map(|p| (p.label, p.held)).collect();
    let breakdown: Vec<(&str, f64)> = panel.breakdown.iter().map(|r| (r.name, r.amount)).collect();
    chart::bars(
        frame,
        top,
        ctx.theme,
        &format!("Held in Escrow ({})", panel.period.as_str()),
        &held,
        ValueFormat::Currency,
        Direction::Vertical,
    );
    chart::bars(frame, bottom, ctx.theme, "Held by Category", &breakdown, ValueFormat::Currency, Direction::Horizontal);
}

const COMMISSION_HEADER: [&str; 6] = ["Project", "Freelancer", "Value", "Rate", "Commission", "Tier"];
const COMMISSION_WIDTHS: [Constraint; 6] = [
    Constraint::Percentage(28),
    Constraint::Percentage(18),
    Constraint::Length(10),
    Constraint::Length(6),
    Constraint::Length(11),
    Constraint::Min(10),
];

pub fn commissions(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &CommissionsPanel) {
    let areas = list_layout(size);
    let headline = &panel.headline;
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Commission", format::currency(headline.total_commission)),
            Card::new("Average Rate", format::percent(headline.average_rate)),
            Card::new("Monthly Growth", format!("+{}", format::percent(headline.monthly_growth))),
            Card::new("Projected Annual", format::currency(headline.projected_annual))
                .caption(format!("range {}", panel.range.as_str())),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let (main, top, bottom) = split_body(areas[2]);
    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.project_name.clone()),
                Cell::from(tx.freelancer.clone()),
                Cell::from(format::currency(tx.project_value)),
                Cell::from(format::percent(tx.commission_rate)),
                Cell::from(format::currency(tx.commission_amount)),
                Cell::from(styling::badge_span(ctx.theme, tx.tier.badge())),
            ])
        })
        .collect();
    DataTable {
        title: section_title("commissions", visible.len()),
        header: &COMMISSION_HEADER,
        widths: &COMMISSION_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, main, ctx.theme);

    let monthly: Vec<(&str, f64)> = panel.monthly.iter().map(|m| (m.month, m.commission)).collect();
    let by_category: Vec<(&str, f64)> = panel.by_category.iter().map(|c| (c.category, c.commission)).collect();
    chart::bars(frame, top, ctx.theme, "Monthly Commission", &monthly, ValueFormat::Currency, Direction::Vertical);
    chart::bars(frame, bottom, ctx.theme, "By Category", &by_category, ValueFormat::Currency, Direction::Horizontal);
}

const TAX_HEADER: [&str; 7] = ["Transaction", "Type", "Base", "Rate", "Tax", "Country", "Status"];
const TAX_WIDTHS: [Constraint; 7] = [
    Constraint::Length(12),
    Constraint::Length(11),
    Constraint::Length(10),
    Constraint::Length(6),
    Constraint::Length(9),
    Constraint::Percentage(15),
    Constraint::Min(11),
];

pub fn tax(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &TaxPanel) {
    let areas = list_layout(size);
    let headline = &panel.headline;
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Total Tax", format::currency(headline.total_tax)),
            Card::new("Pending", format::currency(headline.pending_tax)),
            Card::new("Average Rate", format::percent(headline.average_rate)),
            Card::new("Countries", headline.countries.to_string())
                .caption(format!("range {}", panel.range.as_str())),
        ],
    );
    table::filter_bar(frame, areas[1], ctx.theme, &panel.filter_summary(), ctx.searching);

    let (main, top, bottom) = split_body(areas[2]);
    let visible = panel.visible();
    let rows = visible
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.transaction_id.clone()),
                Cell::from(styling::badge_span(ctx.theme, record.kind.badge())),
                Cell::from(format::currency(record.base_amount)),
                Cell::from(format::percent(record.rate)),
                Cell::from(format::currency(record.amount)),
                Cell::from(record.country.clone()),
                Cell::from(styling::badge_span(ctx.theme, record.status.badge())),
            ])
        })
        .collect();
    DataTable {
        title: section_title("tax", visible.len()),
        header: &TAX_HEADER,
        widths: &TAX_WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, main, ctx.theme);

    let by_country: Vec<(&str, f64)> = panel.by_country.iter().map(|c| (c.country, c.total)).collect();
    chart::bars(frame, top, ctx.theme, "Tax by Country", &by_country, ValueFormat::Currency, Direction::Horizontal);

    let rates: Vec<ListItem> = panel
        .rates
        .iter()
        .map(|rate| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", rate.kind), styling::normal_text_style(ctx.theme)),
                Span::styled(format!("{:>6} ", format::percent(rate.rate)), styling::active_list_item_style(ctx.theme)),
                Span::styled(rate.countries.join(", "), styling::muted_text_style(ctx.theme)),
            ]))
        })
        .collect();
    let list = List::new(rates).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(ctx.theme))
            .title(Span::styled("Tax Rates", styling::header_style(ctx.theme))),
    );
    frame.render_widget(list, bottom);
}
