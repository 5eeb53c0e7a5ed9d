use super::styling;
use crate::ui::theme::Theme;
use crate::ui::Frame;
use ratatui::{
    layout::{Direction, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

/// How bar values are printed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Currency,
    Count,
    Percent,
}

impl ValueFormat {
    fn render(&self, value: f64) -> String {
        use crate::utils::format;
        match self {
            ValueFormat::Currency => format::compact_currency(value),
            ValueFormat::Count => format::count(value.max(0.0).round() as u64),
            ValueFormat::Percent => format::percent(value),
        }
    }
}

/// Render labelled values as a bar chart. Vertical charts suit short month
/// labels; horizontal ones suit names.
///
pub fn bars(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    points: &[(&str, f64)],
    format: ValueFormat,
    direction: Direction,
) {
    let bars: Vec<Bar> = points
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .label(Line::from(label.to_string()))
                .text_value(format.render(*value))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme))
        .title(Span::styled(title.to_string(), styling::header_style(theme)));

    let mut chart = BarChart::default()
        .block(block)
        .direction(direction)
        .data(BarGroup::default().bars(&bars))
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.primary.to_color()))
        .value_style(
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.primary.to_color()),
        )
        .label_style(styling::muted_text_style(theme));
    chart = match direction {
        Direction::Vertical => chart.bar_width(bar_width(area, points.len())),
        Direction::Horizontal => chart.bar_width(1),
    };
    frame.render_widget(chart, area);
}

/// Widest bars that still fit every point inside the block borders.
///
fn bar_width(area: Rect, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2) as usize;
    let width = inner.saturating_sub(count.saturating_sub(1)) / count;
    width.clamp(3, 9) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_width_fits_and_is_bounded() {
        assert_eq!(bar_width(Rect::new(0, 0, 70, 10), 6), 9);
        assert_eq!(bar_width(Rect::new(0, 0, 32, 10), 6), 4);
        assert_eq!(bar_width(Rect::new(0, 0, 10, 10), 6), 3);
        assert_eq!(bar_width(Rect::new(0, 0, 10, 10), 0), 1);
    }

    #[test]
    fn values_are_formatted() {
        assert_eq!(ValueFormat::Currency.render(45_000.0), "$45k");
        assert_eq!(ValueFormat::Count.render(1234.4), "1,234");
        assert_eq!(ValueFormat::Percent.render(28.0), "28%");
    }
}
