use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let title = if state.is_debug_mode() {
        "Log (DEBUG MODE: j/k: navigate, y: copy, Esc: exit)"
    } else {
        "Log (Press d to enter debug mode)"
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styling::block_border_style(theme, state.is_debug_mode()));

    let entries = state.get_debug_entries();
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.contains("ERROR") {
                ratatui::style::Style::default().fg(theme.error.to_color())
            } else if entry.contains("WARN") {
                ratatui::style::Style::default().fg(theme.warning.to_color())
            } else {
                styling::normal_text_style(theme)
            };
            ListItem::new(Line::from(Span::styled(entry.clone(), style)))
        })
        .collect();

    let mut list = List::new(items)
        .style(styling::normal_text_style(theme))
        .block(block);

    // Without a selection the newest lines stay in view.
    let mut list_state = ListState::default();
    if state.is_debug_mode() {
        list = list.highlight_style(styling::highlight_style(theme));
        list_state.select(Some(state.get_debug_index()));
    } else if !entries.is_empty() {
        list_state.select(Some(entries.len() - 1));
    }
    frame.render_stateful_widget(list, size, &mut list_state);
}
