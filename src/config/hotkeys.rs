//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application, including action types,
//! hotkey bindings, and default configurations per focus and per special mode.

use crate::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Shared by sidebar and panel
    NavigateNext,
    NavigatePrev,
    Select,
    SwitchFocus,
    EnterDebug,
    OpenThemeSelector,
    Quit,
    Back,

    // Panel actions
    EnterSearch,
    CyclePrimaryFilter,
    CycleSecondaryFilter,
    CycleOrder,
    ResetFilters,
    ToggleRecord,
    NextTab,
    PrevTab,
    NewItem,
    SaveSettings,

    // Special mode actions (for text input, debug, dialogs, etc.)
    InputConfirm,
    InputCancel,
    DebugModeNavigateNext,
    DebugModeNavigatePrev,
    DebugModeCopyLog,
    DebugModeExit,
    DialogSubmit,
    DialogCancel,
    DialogNextField,
    ThemeSelectorNavigateNext,
    ThemeSelectorNavigatePrev,
    ThemeSelectorSelect,
    ThemeSelectorCancel,
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    fn key(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::empty(),
        }
    }

    fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn ctrl(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => {
                if let Some(c) = helper.char {
                    KeyCode::Char(c)
                } else {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ));
                }
            }
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings per focus and special mode.
///
/// Maps missing from a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewHotkeys {
    pub sidebar: HashMap<HotkeyAction, Hotkey>,
    pub panel: HashMap<HotkeyAction, Hotkey>,
    pub input_mode: HashMap<HotkeyAction, Hotkey>,
    pub debug_mode: HashMap<HotkeyAction, Hotkey>,
    pub dialog: HashMap<HotkeyAction, Hotkey>,
    pub theme_selector: HashMap<HotkeyAction, Hotkey>,
}

impl Default for ViewHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

fn bindings(pairs: &[(HotkeyAction, Hotkey)]) -> HashMap<HotkeyAction, Hotkey> {
    pairs.iter().cloned().collect()
}

/// Returns default hotkey mappings for all foci and modes.
///
pub fn default_hotkeys() -> ViewHotkeys {
    use HotkeyAction::*;

    let sidebar = bindings(&[
        (NavigateNext, Hotkey::key('j')),
        (NavigatePrev, Hotkey::key('k')),
        (Select, Hotkey::plain(KeyCode::Enter)),
        (SwitchFocus, Hotkey::plain(KeyCode::Tab)),
        (EnterDebug, Hotkey::key('d')),
        (OpenThemeSelector, Hotkey::key('t')),
        (Quit, Hotkey::key('q')),
    ]);

    let panel = bindings(&[
        (NavigateNext, Hotkey::key('j')),
        (NavigatePrev, Hotkey::key('k')),
        (Select, Hotkey::plain(KeyCode::Enter)),
        (SwitchFocus, Hotkey::plain(KeyCode::Tab)),
        (EnterSearch, Hotkey::key('/')),
        (CyclePrimaryFilter, Hotkey::key('f')),
        (CycleSecondaryFilter, Hotkey::key('g')),
        (CycleOrder, Hotkey::key('o')),
        (ResetFilters, Hotkey::key('r')),
        (ToggleRecord, Hotkey::key(' ')),
        (NextTab, Hotkey::key('l')),
        (PrevTab, Hotkey::key('h')),
        (NewItem, Hotkey::key('n')),
        (SaveSettings, Hotkey::key('s')),
        (EnterDebug, Hotkey::key('d')),
        (OpenThemeSelector, Hotkey::key('t')),
        (Back, Hotkey::plain(KeyCode::Esc)),
        (Quit, Hotkey::key('q')),
    ]);

    let input_mode = bindings(&[
        (InputConfirm, Hotkey::plain(KeyCode::Enter)),
        (InputCancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    let debug_mode = bindings(&[
        (DebugModeNavigateNext, Hotkey::key('j')),
        (DebugModeNavigatePrev, Hotkey::key('k')),
        (DebugModeCopyLog, Hotkey::key('y')),
        (DebugModeExit, Hotkey::plain(KeyCode::Esc)),
    ]);

    let dialog = bindings(&[
        (DialogSubmit, Hotkey::ctrl('s')),
        (DialogCancel, Hotkey::plain(KeyCode::Esc)),
        (DialogNextField, Hotkey::plain(KeyCode::Tab)),
    ]);

    let theme_selector = bindings(&[
        (ThemeSelectorNavigateNext, Hotkey::key('j')),
        (ThemeSelectorNavigatePrev, Hotkey::key('k')),
        (ThemeSelectorSelect, Hotkey::plain(KeyCode::Enter)),
        (ThemeSelectorCancel, Hotkey::plain(KeyCode::Esc)),
    ]);

    ViewHotkeys {
        sidebar,
        panel,
        input_mode,
        debug_mode,
        dialog,
        theme_selector,
    }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

fn find_action(
    event: &KeyEvent,
    bindings: &HashMap<HotkeyAction, Hotkey>,
) -> Option<HotkeyAction> {
    bindings
        .iter()
        .find(|(_, hotkey)| matches_hotkey(event, hotkey))
        .map(|(action, _)| *action)
}

/// Gets the action for a KeyEvent under the current focus.
///
pub fn get_action_for_event(
    event: &KeyEvent,
    focus: &Focus,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    let focus_hotkeys = match focus {
        Focus::Sidebar => &hotkeys.sidebar,
        Focus::Panel => &hotkeys.panel,
    };
    find_action(event, focus_hotkeys)
}

/// Gets the action for a KeyEvent in a special mode.
///
pub fn get_action_for_special_mode(
    event: &KeyEvent,
    mode: SpecialMode,
    hotkeys: &ViewHotkeys,
) -> Option<HotkeyAction> {
    find_action(event, hotkeys.for_mode(mode))
}

/// Represents special modes that have their own hotkey configurations.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMode {
    Input,
    Debug,
    Dialog,
    ThemeSelector,
}

impl ViewHotkeys {
    pub fn for_mode(&self, mode: SpecialMode) -> &HashMap<HotkeyAction, Hotkey> {
        match mode {
            SpecialMode::Input => &self.input_mode,
            SpecialMode::Debug => &self.debug_mode,
            SpecialMode::Dialog => &self.dialog,
            SpecialMode::ThemeSelector => &self.theme_selector,
        }
    }

    pub fn for_focus(&self, focus: Focus) -> &HashMap<HotkeyAction, Hotkey> {
        match focus {
            Focus::Sidebar => &self.sidebar,
            Focus::Panel => &self.panel,
        }
    }
}

/// Builds a footer text string from hotkey configurations.
/// Takes a list of tuples: (action, description, optional_second_action_for_paired_keys)
///
pub fn build_footer_text(
    hotkeys: &HashMap<HotkeyAction, Hotkey>,
    actions: &[(HotkeyAction, &str, Option<HotkeyAction>)],
) -> String {
    let parts: Vec<String> = actions
        .iter()
        .filter_map(|(action, description, paired_action)| {
            let hotkey = hotkeys.get(action)?;
            let paired = paired_action.and_then(|paired| hotkeys.get(&paired));
            Some(match paired {
                Some(paired_hotkey) => format!(
                    " {}/{}: {}",
                    format_hotkey_display(hotkey),
                    format_hotkey_display(paired_hotkey),
                    description
                ),
                None => format!(" {}: {}", format_hotkey_display(hotkey), description),
            })
        })
        .collect();
    parts.join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
