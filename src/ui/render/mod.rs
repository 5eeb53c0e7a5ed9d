mod all;
mod catalogue;
mod cms;
mod dialogs;
mod finance;
mod footer;
mod jobs;
mod log;
mod modal;
mod overview;
mod people;
mod settings;
mod sidebar;
mod support;
mod system;

use super::*;

pub use all::all as render;

/// What every panel renderer needs besides its own panel.
///
pub struct PanelContext<'a> {
    pub theme: &'a Theme,
    pub focused: bool,
    pub searching: bool,
}

/// Standard list panel layout: headline cards, filter strip, then the body.
///
pub fn list_layout(size: ratatui::layout::Rect) -> std::rc::Rc<[ratatui::layout::Rect]> {
    use ratatui::layout::{Constraint, Direction, Layout};
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(size)
}

/// Table title: the sidebar label of the section and the row count.
///
pub fn section_title(id: &str, rows: usize) -> String {
    let label = crate::state::navigation::label_for(id).unwrap_or(id);
    format!("{} ({})", label, rows)
}

/// Tab strip for panels with tabs.
///
pub fn tab_strip(
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    theme: &Theme,
    titles: Vec<&'static str>,
    selected: usize,
) {
    use crate::ui::widgets::styling;
    use ratatui::widgets::{Block, Borders, Tabs};
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::muted_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .divider("|");
    frame.render_widget(tabs, area);
}
