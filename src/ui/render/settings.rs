use super::{tab_strip, Frame, PanelContext};
use crate::marketplace::settings::{FieldKind, SettingValue, SettingsTab};
use crate::panels::settings::SettingsPanel;
use crate::ui::widgets::styling;
use crate::ui::widgets::table::DataTable;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row},
};

const HEADER: [&str; 3] = ["Setting", "Value", "Accepts"];
const WIDTHS: [Constraint; 3] = [
    Constraint::Percentage(35),
    Constraint::Percentage(40),
    Constraint::Min(10),
];

fn accepts(kind: FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Email => "email".to_string(),
        FieldKind::Host => "host name".to_string(),
        FieldKind::Toggle => "on / off".to_string(),
        FieldKind::Number { min, max, integer } => {
            let noun = if integer { "integer" } else { "number" };
            match (min, max) {
                (Some(min), Some(max)) => format!("{} {}-{}", noun, min, max),
                (Some(min), None) => format!("{} >= {}", noun, min),
                (None, Some(max)) => format!("{} <= {}", noun, max),
                (None, None) => noun.to_string(),
            }
        }
    }
}

/// Render the platform settings form.
///
pub fn settings(frame: &mut Frame, size: Rect, ctx: &PanelContext, panel: &SettingsPanel) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);
    let selected_tab = SettingsTab::ALL.iter().position(|t| *t == panel.tab).unwrap_or(0);
    tab_strip(
        frame,
        areas[0],
        ctx.theme,
        SettingsTab::ALL.iter().map(|t| t.title()).collect(),
        selected_tab,
    );

    let selected = panel.selected_field();
    let rows = panel
        .fields()
        .into_iter()
        .map(|field| {
            let value = match (&panel.editing, Some(field) == selected) {
                (Some(buffer), true) => Span::styled(
                    format!("{}▏", buffer),
                    Style::default()
                        .fg(ctx.theme.footer_input.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
                _ => match panel.settings.get(field) {
                    SettingValue::Toggle(on) => styling::flag_span(ctx.theme, on, "On", "Off"),
                    other => Span::raw(other.to_string()),
                },
            };
            Row::new(vec![
                Cell::from(field.label()),
                Cell::from(value),
                Cell::from(Span::styled(accepts(field.kind()), styling::muted_text_style(ctx.theme))),
            ])
        })
        .collect();
    DataTable {
        title: format!("{} Settings", panel.tab.title()),
        header: &HEADER,
        widths: &WIDTHS,
        rows,
        selected: panel.selected_index(),
        focused: ctx.focused,
    }
    .render(frame, areas[1], ctx.theme);

    let feedback = match &panel.feedback {
        Some(feedback) => {
            let color = if feedback.is_error() {
                ctx.theme.error.to_color()
            } else {
                ctx.theme.success.to_color()
            };
            Line::from(Span::styled(feedback.message(), Style::default().fg(color)))
        }
        None => Line::from(Span::styled(
            "Changes stay in this session until saved",
            styling::muted_text_style(ctx.theme),
        )),
    };
    frame.render_widget(
        Paragraph::new(feedback).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(ctx.theme)),
        ),
        areas[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_describes_ranges() {
        assert_eq!(
            accepts(FieldKind::Number { min: Some(0.0), max: Some(20.0), integer: false }),
            "number 0-20"
        );
        assert_eq!(accepts(FieldKind::Toggle), "on / off");
    }
}
