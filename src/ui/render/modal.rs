use super::Frame;
use crate::marketplace::settings::Notice;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::ui::Theme;
use crate::utils::format::title_case;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

/// Render the theme selector on top of everything.
///
pub fn theme_selector(frame: &mut Frame, size: Rect, state: &State) {
    let popup_area = centered_rect(40, 40, size);
    frame.render_widget(Clear, popup_area);

    let available_themes = Theme::available_themes();
    let selected_index = state.get_theme_dropdown_index();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(popup_area);

    let theme = state.get_theme();
    let title_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Select Theme",
            Style::default()
                .fg(theme.info.to_color())
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(styling::active_block_border_style(theme));
    let title_text = Paragraph::new("j/k: navigate, Enter: select, Esc: cancel")
        .block(title_block)
        .alignment(Alignment::Center);
    frame.render_widget(title_text, chunks[0]);

    let items: Vec<ListItem> = available_themes
        .iter()
        .map(|theme_name| {
            let current_indicator = if theme_name == &theme.name {
                " (current)"
            } else {
                ""
            };
            ListItem::new(format!("{}{}", title_case(theme_name), current_indicator))
        })
        .collect();

    let mut list_state = ListState::default();
    if !items.is_empty() {
        list_state.select(Some(selected_index.min(items.len() - 1)));
    }
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Themes ({})", available_themes.len()))
                .border_style(styling::active_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme));
    frame.render_stateful_widget(list, chunks[1], &mut list_state);
}

/// Render a confirmation toast. Any key dismisses it.
///
pub fn notice(frame: &mut Frame, size: Rect, theme: &Theme, notice: &Notice) {
    let popup_area = centered_rect(50, 20, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.description.clone(),
            styling::normal_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            styling::muted_text_style(theme),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    notice.title.clone(),
                    Style::default()
                        .fg(theme.success.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(theme.success.to_color())),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Helper function to create a centered rectangle (ratatui modal pattern)
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(50, 40, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 15);
    }
}
