use super::{tab_strip, Frame, PanelContext};
use crate::panels::categories::{CatalogueTab, CategoriesPanel};
use crate::panels::ListControls;
use crate::ui::widgets::styling;
use crate::ui::widgets::table::{self, Card, DataTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Row},
};

const CATEGORY_HEADER: [&str; 5] = ["Category", "Description", "Subcategories", "Jobs", "Status"];
const CATEGORY_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(22),
    Constraint::Percentage(40),
    Constraint::Length(14),
    Constraint::Length(6),
    Constraint::Min(9),
];

const SKILL_HEADER: [&str; 4] = ["Skill", "Category", "Used by", "Verified"];
const SKILL_WIDTHS: [Constraint; 4] = [
    Constraint::Percentage(30),
    Constraint::Percentage(35),
    Constraint::Length(9),
    Constraint::Min(10),
];

/// Render categories and skills management.
///
pub fn categories(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &CategoriesPanel) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(size);

    let stats = panel.stats();
    table::cards(
        frame,
        areas[0],
        ctx.theme,
        vec![
            Card::new("Categories", stats.categories.to_string()),
            Card::new("Total Jobs", stats.total_jobs.to_string()),
            Card::new("Skills", stats.skills.to_string()),
            Card::new("Verified Skills", stats.verified_skills.to_string()),
        ],
    );
    let selected_tab = match panel.tab {
        CatalogueTab::Categories => 0,
        CatalogueTab::Skills => 1,
    };
    tab_strip(
        frame,
        areas[1],
        ctx.theme,
        vec![CatalogueTab::Categories.title(), CatalogueTab::Skills.title()],
        selected_tab,
    );
    table::filter_bar(frame, areas[2], ctx.theme, &panel.filter_summary(), ctx.searching);

    match panel.tab {
        CatalogueTab::Categories => {
            let visible = panel.visible_categories();
            let rows = visible
                .iter()
                .map(|category| {
                    let subcategories = category
                        .subcategories
                        .iter()
                        .map(|s| s.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    Row::new(vec![
                        Cell::from(category.name.clone()),
                        Cell::from(Line::from(vec![
                            Span::raw(category.description.clone()),
                            Span::styled(
                                if subcategories.is_empty() {
                                    String::new()
                                } else {
                                    format!("  [{}]", subcategories)
                                },
                                styling::muted_text_style(ctx.theme),
                            ),
                        ])),
                        Cell::from(category.subcategories.len().to_string()),
                        Cell::from(category.job_count.to_string()),
                        Cell::from(styling::flag_span(ctx.theme, category.is_active, "Active", "Inactive")),
                    ])
                })
                .collect();
            DataTable {
                title: format!("Categories ({})", visible.len()),
                header: &CATEGORY_HEADER,
                widths: &CATEGORY_WIDTHS,
                rows,
                selected: panel.selected_index(),
                focused: ctx.focused,
            }
            .render(frame, areas[3], ctx.theme);
        }
        CatalogueTab::Skills => {
            let visible = panel.visible_skills();
            let rows = visible
                .iter()
                .map(|skill| {
                    Row::new(vec![
                        Cell::from(skill.name.clone()),
                        Cell::from(skill.category.clone()),
                        Cell::from(skill.usage_count.to_string()),
                        Cell::from(styling::flag_span(ctx.theme, skill.is_verified, "Verified", "Unverified")),
                    ])
                })
                .collect();
            DataTable {
                title: format!("Skills ({})", visible.len()),
                header: &SKILL_HEADER,
                widths: &SKILL_WIDTHS,
                rows,
                selected: panel.selected_index(),
                focused: ctx.focused,
            }
            .render(frame, areas[3], ctx.theme);
        }
    }
}
