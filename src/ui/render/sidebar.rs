use super::Frame;
use crate::state::navigation::parent_of;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const BLOCK_TITLE: &str = "Navigation";
const BANNER: &str = "FreelanceHub";
const SUBTITLE: &str = "Admin Dashboard";

/// Render the banner and the navigation tree.
///
pub fn sidebar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(size);

    let banner = Paragraph::new(vec![
        Line::from(Span::styled(
            BANNER,
            styling::banner_style(theme).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, styling::muted_text_style(theme))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(banner, rows[0]);

    let sidebar = state.sidebar();
    let focused = *state.current_focus() == Focus::Sidebar;
    let active = sidebar.active();
    let active_parent = parent_of(active);

    let items: Vec<ListItem> = sidebar
        .visible_rows()
        .into_iter()
        .map(|row| {
            let marker = match (row.has_children, row.expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let indent = if row.parent.is_some() { "  " } else { "" };
            let style = if row.id == active {
                styling::active_list_item_style(theme)
            } else if Some(row.id) == active_parent {
                Style::default().fg(theme.accent.to_color())
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(marker, styling::muted_text_style(theme)),
                Span::styled(row.label, style),
            ]))
        })
        .collect();

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, focused));
    block = if focused {
        block.title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()))
    } else {
        block.title(BLOCK_TITLE)
    };

    let mut list_state = ListState::default();
    list_state.select(Some(sidebar.cursor()));
    let highlight = if focused {
        styling::highlight_style(theme)
    } else {
        styling::current_list_item_style(theme)
    };
    let list = List::new(items)
        .block(block)
        .style(styling::normal_text_style(theme))
        .highlight_style(highlight);
    frame.render_stateful_widget(list, rows[1], &mut list_state);
}
