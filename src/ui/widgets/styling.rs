use crate::marketplace::Badge;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Border style for a block, depending on whether it has the focus.
///
pub fn block_border_style(theme: &Theme, focused: bool) -> Style {
    if focused {
        active_block_border_style(theme)
    } else {
        normal_block_border_style(theme)
    }
}

/// Return the style for current list items.
///
pub fn current_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    current_list_item_style(theme).fg(theme.primary.to_color())
}

/// Highlighted row of a focused table or list.
///
pub fn highlight_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Table header row.
///
pub fn header_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.text_secondary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the banner.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default().fg(theme.banner.to_color())
}

/// Render a badge as a coloured span.
///
pub fn badge_span(theme: &Theme, badge: Badge) -> Span<'static> {
    Span::styled(
        badge.label.into_owned(),
        Style::default()
            .fg(theme.tone(badge.tone))
            .add_modifier(Modifier::BOLD),
    )
}

/// Green or red span for an on/off flag.
///
pub fn flag_span(theme: &Theme, on: bool, on_label: &'static str, off_label: &'static str) -> Span<'static> {
    if on {
        Span::styled(on_label, Style::default().fg(theme.success.to_color()))
    } else {
        Span::styled(off_label, Style::default().fg(theme.text_muted.to_color()))
    }
}
