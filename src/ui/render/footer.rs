use super::Frame;
use crate::config::{build_footer_text, HotkeyAction, SpecialMode};
use crate::state::{Focus, Panel, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Hotkey hints for the current mode, and the mode label shown in front.
///
fn controls_text(state: &State) -> (&'static str, String) {
    let hotkeys = state.get_hotkeys();
    match state.special_mode() {
        Some(SpecialMode::ThemeSelector) => (
            "THEME:",
            build_footer_text(
                &hotkeys.theme_selector,
                &[
                    (
                        HotkeyAction::ThemeSelectorNavigateNext,
                        "navigate themes",
                        Some(HotkeyAction::ThemeSelectorNavigatePrev),
                    ),
                    (HotkeyAction::ThemeSelectorSelect, "select theme", None),
                    (HotkeyAction::ThemeSelectorCancel, "cancel", None),
                ],
            ),
        ),
        Some(SpecialMode::Debug) => (
            "DEBUG:",
            build_footer_text(
                &hotkeys.debug_mode,
                &[
                    (
                        HotkeyAction::DebugModeNavigateNext,
                        "navigate logs",
                        Some(HotkeyAction::DebugModeNavigatePrev),
                    ),
                    (HotkeyAction::DebugModeCopyLog, "copy log", None),
                    (HotkeyAction::DebugModeExit, "exit debug mode", None),
                ],
            ),
        ),
        Some(SpecialMode::Dialog) => {
            let next_field = match state.panel() {
                Panel::Support(_) => "cycle status",
                _ => "next field",
            };
            let actions: Vec<(HotkeyAction, &str, Option<HotkeyAction>)> = match state.panel() {
                Panel::Jobs(_) => vec![(HotkeyAction::DialogCancel, "close", None)],
                _ => vec![
                    (HotkeyAction::DialogNextField, next_field, None),
                    (HotkeyAction::DialogSubmit, "submit", None),
                    (HotkeyAction::DialogCancel, "cancel", None),
                ],
            };
            ("DIALOG:", build_footer_text(&hotkeys.dialog, &actions))
        }
        Some(SpecialMode::Input) => {
            let label = if state.is_search_mode() { "SEARCH:" } else { "EDIT:" };
            (
                label,
                format!(
                    " Type to edit,{}",
                    build_footer_text(
                        &hotkeys.input_mode,
                        &[
                            (HotkeyAction::InputConfirm, "confirm", None),
                            (HotkeyAction::InputCancel, "cancel", None),
                        ],
                    )
                ),
            )
        }
        None if *state.current_focus() == Focus::Sidebar => (
            "NAV:",
            build_footer_text(
                &hotkeys.sidebar,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navigate",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (HotkeyAction::Select, "open/expand", None),
                    (HotkeyAction::SwitchFocus, "panel", None),
                    (HotkeyAction::OpenThemeSelector, "themes", None),
                    (HotkeyAction::EnterDebug, "debug mode", None),
                    (HotkeyAction::Quit, "quit", None),
                ],
            ),
        ),
        None => ("PANEL:", panel_controls_text(state)),
    }
}

fn panel_controls_text(state: &State) -> String {
    let hotkeys = &state.get_hotkeys().panel;
    let mut actions: Vec<(HotkeyAction, &str, Option<HotkeyAction>)> = vec![(
        HotkeyAction::NavigateNext,
        "navigate",
        Some(HotkeyAction::NavigatePrev),
    )];
    match state.panel() {
        Panel::Users(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "role", None),
            (HotkeyAction::CycleSecondaryFilter, "status", None),
        ]),
        Panel::Earnings(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "role", None),
            (HotkeyAction::CycleSecondaryFilter, "status", None),
            (HotkeyAction::CycleOrder, "sort", None),
        ]),
        Panel::Jobs(_) => actions.extend([
            (HotkeyAction::Select, "details", None),
            (HotkeyAction::CyclePrimaryFilter, "status", None),
            (HotkeyAction::CycleSecondaryFilter, "category", None),
        ]),
        Panel::Transactions(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "type", None),
            (HotkeyAction::CycleSecondaryFilter, "status", None),
            (HotkeyAction::CycleOrder, "range", None),
        ]),
        Panel::Escrow(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "status", None),
            (HotkeyAction::CycleOrder, "period", None),
        ]),
        Panel::Commissions(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "category", None),
            (HotkeyAction::CycleOrder, "range", None),
        ]),
        Panel::Tax(_) => actions.extend([
            (HotkeyAction::CyclePrimaryFilter, "type", None),
            (HotkeyAction::CycleSecondaryFilter, "status", None),
            (HotkeyAction::CycleOrder, "range", None),
        ]),
        Panel::Categories(_) => actions.extend([
            (HotkeyAction::NextTab, "tab", Some(HotkeyAction::PrevTab)),
            (HotkeyAction::ToggleRecord, "toggle", None),
            (HotkeyAction::NewItem, "new category", None),
        ]),
        Panel::Support(_) => actions.extend([
            (HotkeyAction::Select, "reply", None),
            (HotkeyAction::CyclePrimaryFilter, "status", None),
            (HotkeyAction::CycleSecondaryFilter, "priority", None),
        ]),
        Panel::Cms(_) => actions.extend([
            (HotkeyAction::NextTab, "tab", Some(HotkeyAction::PrevTab)),
            (HotkeyAction::ToggleRecord, "toggle", None),
        ]),
        Panel::Settings(_) => actions.extend([
            (HotkeyAction::NextTab, "tab", Some(HotkeyAction::PrevTab)),
            (HotkeyAction::Select, "edit", None),
            (HotkeyAction::SaveSettings, "save", None),
        ]),
        Panel::Overview(_) | Panel::System(_) => {}
    }
    if matches!(
        state.panel(),
        Panel::Users(_)
            | Panel::Earnings(_)
            | Panel::Jobs(_)
            | Panel::Transactions(_)
            | Panel::Categories(_)
            | Panel::Support(_)
    ) {
        actions.push((HotkeyAction::EnterSearch, "search", None));
    }
    actions.extend([
        (HotkeyAction::ResetFilters, "reset", None),
        (HotkeyAction::Back, "sidebar", None),
        (HotkeyAction::Quit, "quit", None),
    ]);
    build_footer_text(hotkeys, &actions)
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, controls_text) = controls_text(state);
    let label_bg = match state.special_mode() {
        Some(SpecialMode::Input) => theme.footer_input.to_color(),
        Some(SpecialMode::Debug) => theme.footer_debug.to_color(),
        Some(SpecialMode::Dialog) | Some(SpecialMode::ThemeSelector) => {
            theme.footer_dialog.to_color()
        }
        None => theme.footer_normal.to_color(),
    };
    let label_fg = if label_bg == Color::Rgb(0, 0, 0) {
        theme.text.to_color()
    } else {
        theme.background.to_color()
    };
    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(label_fg)
                .bg(label_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {} v{}", state.active_section(), env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_follows_the_mode() {
        let mut state = State::default();
        let (label, text) = controls_text(&state);
        assert_eq!(label, "NAV:");
        assert!(text.contains("quit"));

        state.set_active_section("support").focus_panel();
        let (label, text) = controls_text(&state);
        assert_eq!(label, "PANEL:");
        assert!(text.contains("priority"));
        assert!(text.contains("search"));

        state.open_selected();
        let (label, text) = controls_text(&state);
        assert_eq!(label, "DIALOG:");
        assert!(text.contains("cycle status"));
        assert!(text.contains("Ctrl+s"));
    }

    #[test]
    fn search_mode_label() {
        let mut state = State::default();
        state.set_active_section("jobs").focus_panel().enter_search_mode();
        assert_eq!(controls_text(&state).0, "SEARCH:");
    }
}
