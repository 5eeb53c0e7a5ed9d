use super::{tab_strip, Frame, PanelContext};
use crate::marketplace::Badged;
use crate::panels::cms::{CmsPanel, CmsTab};
use crate::ui::widgets::styling;
use crate::ui::widgets::table::DataTable;
use crate::utils::format;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Cell, Row},
};

const PAGE_HEADER: [&str; 6] = ["Title", "Slug", "Type", "Status", "Modified", "Views"];
const PAGE_WIDTHS: [Constraint; 6] = [
    Constraint::Percentage(30),
    Constraint::Percentage(20),
    Constraint::Length(8),
    Constraint::Length(11),
    Constraint::Length(13),
    Constraint::Min(7),
];
const FAQ_HEADER: [&str; 4] = ["Question", "Answer", "Category", "Published"];
const FAQ_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(32),
    Constraint::Percentage(42),
    Constraint::Length(16),
    Constraint::Min(11),
];
const MAIL_HEADER: [&str; 2] = ["Template", "Body"];
const MAIL_WIDTHS: [Constraint; 2] = [Constraint::Length(20), Constraint::Min(10)];
const LANGUAGE_HEADER: [&str; 3] = ["Code", "Language", "Enabled"];
const LANGUAGE_WIDTHS: [Constraint; 3] = [
    Constraint::Length(6),
    Constraint::Percentage(40),
    Constraint::Min(9),
];

/// Render content management.
///
pub fn cms(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &CmsPanel) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(size);
    let selected_tab = CmsTab::ALL.iter().position(|t| *t == panel.tab).unwrap_or(0);
    tab_strip(
        frame,
        areas[0],
        ctx.theme,
        CmsTab::ALL.iter().map(|t| t.title()).collect(),
        selected_tab,
    );

    let (header, widths, rows): (&[&str], &[Constraint], Vec<Row>) = match panel.tab {
        CmsTab::Pages => (
            &PAGE_HEADER,
            &PAGE_WIDTHS,
            panel
                .pages
                .iter()
                .map(|page| {
                    Row::new(vec![
                        Cell::from(page.title.clone()),
                        Cell::from(page.slug.clone()),
                        Cell::from(styling::badge_span(ctx.theme, page.kind.badge())),
                        Cell::from(styling::badge_span(ctx.theme, page.status.badge())),
                        Cell::from(format::date(page.last_modified)),
                        Cell::from(format::count(page.views as u64)),
                    ])
                })
                .collect(),
        ),
        CmsTab::Faqs => (
            &FAQ_HEADER,
            &FAQ_WIDTHS,
            panel
                .faqs
                .iter()
                .map(|faq| {
                    Row::new(vec![
                        Cell::from(faq.question.clone()),
                        Cell::from(format::truncate(&faq.answer, 60)),
                        Cell::from(faq.category.clone()),
                        Cell::from(styling::flag_span(ctx.theme, faq.published, "Published", "Hidden")),
                    ])
                })
                .collect(),
        ),
        CmsTab::Mail => (
            &MAIL_HEADER,
            &MAIL_WIDTHS,
            panel
                .template_rows()
                .iter()
                .map(|(name, body)| Row::new(vec![Cell::from(*name), Cell::from(body.to_string())]))
                .collect(),
        ),
        CmsTab::Languages => (
            &LANGUAGE_HEADER,
            &LANGUAGE_WIDTHS,
            panel
                .languages
                .iter()
                .map(|language| {
                    Row::new(vec![
                        Cell::from(language.code.clone()),
                        Cell::from(language.name.clone()),
                        Cell::from(styling::flag_span(ctx.theme, language.enabled, "Enabled", "Disabled")),
                    ])
                })
                .collect(),
        ),
    };

    DataTable {
        title: format!("{} ({})", panel.tab.title(), rows.len()),
        header,
        widths,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, areas[1], ctx.theme);
}
