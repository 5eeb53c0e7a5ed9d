use super::styling;
use crate::ui::theme::Theme;
use crate::ui::Frame;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, TableState},
};

/// One headline card: title, value and an optional caption line.
///
pub struct Card {
    pub title: String,
    pub value: String,
    pub caption: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Card {
            title: title.into(),
            value: value.into(),
            caption: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// Render a row of equally sized headline cards.
///
pub fn cards(frame: &mut Frame, area: Rect, theme: &Theme, cards: Vec<Card>) {
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, column) in cards.into_iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(Span::styled(
            card.value,
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        ))];
        if let Some(caption) = card.caption {
            lines.push(Line::from(Span::styled(
                caption,
                styling::muted_text_style(theme),
            )));
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme))
            .title(Span::styled(card.title, styling::header_style(theme)));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Left),
            *column,
        );
    }
}

/// A bordered table with a header row and a cursor. Shows a placeholder
/// line when there are no rows.
///
pub struct DataTable<'a> {
    pub title: String,
    pub header: &'a [&'a str],
    pub widths: &'a [Constraint],
    pub rows: Vec<Row<'a>>,
    pub selected: usize,
    pub focused: bool,
}

impl<'a> DataTable<'a> {
    pub fn render(self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(styling::block_border_style(theme, self.focused))
            .title(if self.focused {
                Span::styled(self.title, styling::active_block_title_style())
            } else {
                Span::raw(self.title)
            });

        if self.rows.is_empty() {
            let empty = Paragraph::new("No results found")
                .style(styling::muted_text_style(theme))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let header = Row::new(self.header.iter().copied()).style(styling::header_style(theme));
        let mut table_state = TableState::default();
        if self.focused {
            table_state.select(Some(self.selected.min(self.rows.len() - 1)));
        }
        let table = Table::new(self.rows, self.widths.iter().copied())
            .header(header)
            .block(block)
            .style(styling::normal_text_style(theme))
            .highlight_style(styling::highlight_style(theme));
        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

/// Render a one-line filter summary strip.
///
pub fn filter_bar(frame: &mut Frame, area: Rect, theme: &Theme, summary: &str, searching: bool) {
    let label_style = if searching {
        Style::default()
            .fg(theme.footer_input.to_color())
            .add_modifier(Modifier::BOLD)
    } else {
        styling::muted_text_style(theme)
    };
    let line = Line::from(vec![
        Span::styled(" Filters: ", label_style),
        Span::styled(summary.to_string(), styling::normal_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
