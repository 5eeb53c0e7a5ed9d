use crate::config::{get_action_for_event, get_action_for_special_mode, HotkeyAction, SpecialMode};
use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(state, event)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply one key event to state. Returns false when exit was requested.
///
pub fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }
    if state.get_notice().is_some() {
        state.dismiss_notice();
        return true;
    }

    match state.special_mode() {
        Some(mode) => {
            let action = get_action_for_special_mode(&event, mode, state.get_hotkeys());
            handle_special_mode(state, mode, action, event);
            true
        }
        None => match get_action_for_event(&event, state.current_focus(), state.get_hotkeys()) {
            Some(action) => handle_action(state, action),
            None => {
                debug!("Skipping processing of terminal event '{:?}'...", event);
                true
            }
        },
    }
}

fn handle_special_mode(
    state: &mut State,
    mode: SpecialMode,
    action: Option<HotkeyAction>,
    event: KeyEvent,
) {
    match (mode, action) {
        (SpecialMode::ThemeSelector, Some(HotkeyAction::ThemeSelectorNavigateNext)) => {
            state.next_theme();
        }
        (SpecialMode::ThemeSelector, Some(HotkeyAction::ThemeSelectorNavigatePrev)) => {
            state.previous_theme();
        }
        (SpecialMode::ThemeSelector, Some(HotkeyAction::ThemeSelectorSelect)) => {
            state.select_theme();
        }
        (SpecialMode::ThemeSelector, Some(HotkeyAction::ThemeSelectorCancel)) => {
            state.close_theme_selector();
        }
        (SpecialMode::Debug, Some(HotkeyAction::DebugModeNavigateNext)) => {
            state.next_debug();
        }
        (SpecialMode::Debug, Some(HotkeyAction::DebugModeNavigatePrev)) => {
            state.previous_debug();
        }
        (SpecialMode::Debug, Some(HotkeyAction::DebugModeCopyLog)) => {
            match state.copy_current_debug() {
                Ok(()) => info!("Log entry copied to clipboard"),
                Err(e) => warn!("{}", e),
            }
        }
        (SpecialMode::Debug, Some(HotkeyAction::DebugModeExit)) => {
            state.exit_debug_mode();
        }
        (SpecialMode::Dialog, Some(HotkeyAction::DialogSubmit)) => {
            state.dialog_submit();
        }
        (SpecialMode::Dialog, Some(HotkeyAction::DialogCancel)) => {
            state.dialog_cancel();
        }
        (SpecialMode::Dialog, Some(HotkeyAction::DialogNextField)) => {
            state.dialog_next_field();
        }
        (SpecialMode::Dialog, _) => {
            state.dialog_input(event);
        }
        (SpecialMode::Input, Some(HotkeyAction::InputConfirm)) => {
            state.confirm_input();
        }
        (SpecialMode::Input, Some(HotkeyAction::InputCancel)) => {
            state.cancel_input();
        }
        (SpecialMode::Input, _) => match event.code {
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                state.add_input_char(c);
            }
            KeyCode::Backspace => {
                state.remove_input_char();
            }
            _ => {}
        },
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}

fn handle_action(state: &mut State, action: HotkeyAction) -> bool {
    let focus = *state.current_focus();
    match (focus, action) {
        (_, HotkeyAction::Quit) => {
            debug!("Processing exit action...");
            return false;
        }
        (Focus::Sidebar, HotkeyAction::NavigateNext) => {
            state.next_sidebar_row();
        }
        (Focus::Sidebar, HotkeyAction::NavigatePrev) => {
            state.previous_sidebar_row();
        }
        (Focus::Sidebar, HotkeyAction::Select) => {
            state.activate_sidebar_row();
        }
        (Focus::Panel, HotkeyAction::NavigateNext) => {
            state.next_row();
        }
        (Focus::Panel, HotkeyAction::NavigatePrev) => {
            state.previous_row();
        }
        (Focus::Panel, HotkeyAction::Select) => {
            state.open_selected();
        }
        (_, HotkeyAction::SwitchFocus) => {
            state.toggle_focus();
        }
        (_, HotkeyAction::Back) => {
            state.focus_sidebar();
        }
        (_, HotkeyAction::EnterDebug) => {
            state.enter_debug_mode();
        }
        (_, HotkeyAction::OpenThemeSelector) => {
            state.open_theme_selector();
        }
        (_, HotkeyAction::EnterSearch) => {
            state.enter_search_mode();
        }
        (_, HotkeyAction::CyclePrimaryFilter) => {
            state.cycle_primary_filter();
        }
        (_, HotkeyAction::CycleSecondaryFilter) => {
            state.cycle_secondary_filter();
        }
        (_, HotkeyAction::CycleOrder) => {
            state.cycle_order();
        }
        (_, HotkeyAction::ResetFilters) => {
            state.reset_filters();
        }
        (_, HotkeyAction::ToggleRecord) => {
            state.toggle_record();
        }
        (_, HotkeyAction::NextTab) => {
            state.next_tab();
        }
        (_, HotkeyAction::PrevTab) => {
            state.previous_tab();
        }
        (_, HotkeyAction::NewItem) => {
            state.open_new_item();
        }
        (_, HotkeyAction::SaveSettings) => {
            state.save_settings();
        }
        (_, other) => debug!("Action {:?} has no effect here", other),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Panel;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_keys(state: &mut State, keys: &str) {
        for c in keys.chars() {
            assert!(handle_key(state, press(KeyCode::Char(c))));
        }
    }

    #[test]
    fn ctrl_c_and_q_exit() {
        let mut state = State::default();
        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char('c'))
        };
        assert!(!handle_key(&mut state, ctrl_c));
        assert!(!handle_key(&mut state, press(KeyCode::Char('q'))));
    }

    #[test]
    fn releases_are_ignored() {
        let mut state = State::default();
        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..press(KeyCode::Char('q'))
        };
        assert!(handle_key(&mut state, release));
    }

    #[test]
    fn sidebar_keys_open_a_section() {
        let mut state = State::default();
        type_keys(&mut state, "jj");
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.active_section(), "jobs");
        assert_eq!(*state.current_focus(), Focus::Panel);
        handle_key(&mut state, press(KeyCode::Esc));
        assert_eq!(*state.current_focus(), Focus::Sidebar);
    }

    #[test]
    fn q_is_typed_into_search() {
        let mut state = State::default();
        state.set_active_section("users").focus_panel();
        type_keys(&mut state, "/q");
        assert!(state.is_search_mode());
        handle_key(&mut state, press(KeyCode::Backspace));
        type_keys(&mut state, "alex");
        handle_key(&mut state, press(KeyCode::Enter));
        assert!(!state.is_search_mode());
        if let Panel::Users(panel) = state.panel() {
            assert_eq!(panel.search, "alex");
        }
    }

    #[test]
    fn dialog_keys_reach_the_dialog() {
        let mut state = State::default();
        state.set_active_section("categories").focus_panel();
        type_keys(&mut state, "n");
        type_keys(&mut state, "jq");
        assert!(state.has_dialog());
        let submit = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..press(KeyCode::Char('s'))
        };
        handle_key(&mut state, submit);
        assert!(!state.has_dialog());
        assert!(state.get_notice().is_some());
        handle_key(&mut state, press(KeyCode::Char('x')));
        assert!(state.get_notice().is_none());
    }

    #[test]
    fn theme_selector_round_trip() {
        let mut state = State::default();
        type_keys(&mut state, "tjj");
        handle_key(&mut state, press(KeyCode::Enter));
        assert_eq!(state.get_theme().name, "dracula");
        assert!(!state.has_theme_selector());
    }

    #[test]
    fn debug_mode_escape() {
        let mut state = State::default();
        type_keys(&mut state, "d");
        assert!(state.is_debug_mode());
        handle_key(&mut state, press(KeyCode::Esc));
        assert!(!state.is_debug_mode());
    }
}
