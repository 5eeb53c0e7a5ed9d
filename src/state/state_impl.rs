use crate::app::ConfigSaveSender;
use crate::config::{SpecialMode, ViewHotkeys};
use crate::marketplace::settings::Notice;
use crate::ui::Theme;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::event::KeyEvent;
use log::*;
use ratatui::layout::Rect;

use super::error::StateError;
use super::navigation::{Activation, Focus, Sidebar};
use super::panel::Panel;

/// Maximum number of log lines kept for the log pane.
///
pub const LOG_CAPACITY: usize = 1000;

/// Houses data representative of application state.
///
pub struct State {
    config_save_sender: Option<ConfigSaveSender>,
    terminal_size: Rect,
    sidebar: Sidebar,
    panel: Panel,
    current_focus: Focus,
    search_mode: bool,
    debug_mode: bool,
    debug_index: usize,
    debug_entries: Vec<String>,
    theme_selector_open: bool,
    theme_dropdown_index: usize,
    theme: Theme,
    hotkeys: ViewHotkeys,
    notice: Option<Notice>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            config_save_sender: None,
            terminal_size: Rect::default(),
            sidebar: Sidebar::default(),
            panel: Panel::default(),
            current_focus: Focus::Sidebar,
            search_mode: false,
            debug_mode: false,
            debug_index: 0,
            debug_entries: vec![],
            theme_selector_open: false,
            theme_dropdown_index: 0,
            theme: Theme::default(),
            hotkeys: ViewHotkeys::default(),
            notice: None,
        }
    }
}

impl State {
    pub fn new(
        config_save_sender: ConfigSaveSender,
        start_section: &str,
        theme: Theme,
        hotkeys: ViewHotkeys,
    ) -> Self {
        let sidebar = Sidebar::starting_at(start_section);
        let panel = Panel::for_section(sidebar.active());
        State {
            config_save_sender: Some(config_save_sender),
            sidebar,
            panel,
            theme,
            hotkeys,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Apply a built-in theme by name without persisting it.
    ///
    pub fn set_theme_by_name(&mut self, name: &str) -> Result<&mut Self, StateError> {
        let theme = Theme::from_name(name).ok_or_else(|| StateError::UnknownTheme(name.to_string()))?;
        self.theme = theme;
        Ok(self)
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    pub fn focus_sidebar(&mut self) -> &mut Self {
        self.current_focus = Focus::Sidebar;
        self
    }

    /// Focus the panel. Panels without a list keep the focus on the sidebar.
    ///
    pub fn focus_panel(&mut self) -> &mut Self {
        if self.panel.controls().is_some() {
            self.current_focus = Focus::Panel;
        } else {
            debug!("Panel '{}' has nothing to focus", self.panel.section_id());
        }
        self
    }

    pub fn toggle_focus(&mut self) -> &mut Self {
        match self.current_focus {
            Focus::Sidebar => self.focus_panel(),
            Focus::Panel => self.focus_sidebar(),
        }
    }

    /// Returns the sidebar state.
    ///
    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn next_sidebar_row(&mut self) -> &mut Self {
        self.sidebar.next();
        self
    }

    pub fn previous_sidebar_row(&mut self) -> &mut Self {
        self.sidebar.previous();
        self
    }

    /// Activate the sidebar row under the cursor. Selecting a section moves
    /// the focus to its panel.
    ///
    pub fn activate_sidebar_row(&mut self) -> &mut Self {
        if let Activation::Selected(_) = self.sidebar.activate_cursor() {
            self.sync_panel();
            self.focus_panel();
        }
        self
    }

    /// The id of the active section, as tracked by the sidebar.
    ///
    pub fn active_section(&self) -> &str {
        self.sidebar.active()
    }

    /// Navigate to a section by id. The panel is rebuilt only when the
    /// section changes; unknown ids are ignored.
    ///
    pub fn set_active_section(&mut self, id: &str) -> &mut Self {
        self.sidebar.activate(id);
        self.sync_panel();
        self
    }

    fn sync_panel(&mut self) {
        if self.panel.section_id() != self.sidebar.active() {
            info!("Opening section '{}'", self.sidebar.active());
            self.panel = Panel::for_section(self.sidebar.active());
            self.search_mode = false;
        }
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut Panel {
        &mut self.panel
    }

    pub fn next_row(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.select_next();
        }
        self
    }

    pub fn previous_row(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.select_previous();
        }
        self
    }

    pub fn cycle_primary_filter(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.cycle_primary();
        }
        self
    }

    pub fn cycle_secondary_filter(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.cycle_secondary();
        }
        self
    }

    pub fn cycle_order(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.cycle_order();
        }
        self
    }

    pub fn next_tab(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.next_tab();
        }
        self
    }

    pub fn previous_tab(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.previous_tab();
        }
        self
    }

    pub fn reset_filters(&mut self) -> &mut Self {
        if let Some(controls) = self.panel.controls() {
            controls.reset_filters();
            debug!("Filters reset");
        }
        self
    }

    /// Flip the boolean flag of the selected record, if the panel has one.
    ///
    pub fn toggle_record(&mut self) -> &mut Self {
        if let Some(message) = self.panel.controls().and_then(|c| c.toggle_selected()) {
            info!("{}", message);
        }
        self
    }

    /// Enter on a panel row: open its detail or dialog.
    ///
    pub fn open_selected(&mut self) -> &mut Self {
        match &mut self.panel {
            Panel::Jobs(panel) => panel.toggle_detail(),
            Panel::Support(panel) => {
                panel.open_dialog();
            }
            Panel::Settings(panel) => panel.begin_edit(),
            _ => {}
        }
        self
    }

    pub fn open_new_item(&mut self) -> &mut Self {
        if let Panel::Categories(panel) = &mut self.panel {
            panel.open_dialog();
        }
        self
    }

    pub fn save_settings(&mut self) -> &mut Self {
        if let Panel::Settings(panel) = &mut self.panel {
            let notice = panel.save();
            self.show_notice(notice);
        }
        self
    }

    /// Whether a panel dialog or overlay is open.
    ///
    pub fn has_dialog(&self) -> bool {
        self.panel.has_dialog()
    }

    /// Route a key to the focused input of the open dialog.
    ///
    pub fn dialog_input(&mut self, event: KeyEvent) -> &mut Self {
        use crate::panels::categories::DialogField;
        use crossterm::event::KeyCode;

        match &mut self.panel {
            Panel::Support(panel) => {
                if let Some(dialog) = panel.dialog.as_mut() {
                    dialog.reply.input(event);
                }
            }
            Panel::Categories(panel) => {
                if let Some(dialog) = panel.dialog.as_mut() {
                    match (dialog.focus, event.code) {
                        (DialogField::Name, KeyCode::Char(c)) => dialog.name.push(c),
                        (DialogField::Name, KeyCode::Backspace) => {
                            dialog.name.pop();
                        }
                        (DialogField::Name, _) => {}
                        (DialogField::Description, _) => {
                            dialog.description.input(event);
                        }
                    }
                }
            }
            _ => {}
        }
        self
    }

    /// Tab inside a dialog: switch the input, or cycle the ticket status.
    ///
    pub fn dialog_next_field(&mut self) -> &mut Self {
        match &mut self.panel {
            Panel::Support(panel) => {
                if let Some(dialog) = panel.dialog.as_mut() {
                    dialog.cycle_status();
                }
            }
            Panel::Categories(panel) => {
                if let Some(dialog) = panel.dialog.as_mut() {
                    dialog.switch_focus();
                }
            }
            _ => {}
        }
        self
    }

    pub fn dialog_submit(&mut self) -> &mut Self {
        match &mut self.panel {
            Panel::Support(panel) => {
                if let Some(notice) = panel.send_reply() {
                    self.show_notice(notice);
                }
            }
            Panel::Categories(panel) => {
                if panel.submit_dialog() {
                    self.show_notice(Notice::new("Category Added", "The category list has been updated."));
                }
            }
            _ => {}
        }
        self
    }

    pub fn dialog_cancel(&mut self) -> &mut Self {
        match &mut self.panel {
            Panel::Support(panel) => panel.close_dialog(),
            Panel::Categories(panel) => panel.close_dialog(),
            Panel::Jobs(panel) => panel.detail_open = false,
            _ => {}
        }
        self
    }

    /// Start editing the panel's search box.
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        let has_search = self
            .panel
            .controls()
            .map(|controls| controls.has_search())
            .unwrap_or(false);
        if has_search {
            self.search_mode = true;
        } else {
            debug!("Panel '{}' has no search box", self.panel.section_id());
        }
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    /// Whether keystrokes go to a text buffer: the search box or a settings
    /// field.
    ///
    pub fn is_input_mode(&self) -> bool {
        self.search_mode || matches!(&self.panel, Panel::Settings(p) if p.is_editing())
    }

    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        if let Panel::Settings(panel) = &mut self.panel {
            if panel.is_editing() {
                panel.push_edit(c);
                return self;
            }
        }
        if let Some(controls) = self.panel.controls() {
            controls.push_search(c);
        }
        self
    }

    pub fn remove_input_char(&mut self) -> &mut Self {
        if let Panel::Settings(panel) = &mut self.panel {
            if panel.is_editing() {
                panel.pop_edit();
                return self;
            }
        }
        if let Some(controls) = self.panel.controls() {
            controls.pop_search();
        }
        self
    }

    /// Enter in input mode: commit a settings field or keep the search.
    ///
    pub fn confirm_input(&mut self) -> &mut Self {
        if let Panel::Settings(panel) = &mut self.panel {
            if panel.is_editing() {
                panel.commit_edit();
                return self;
            }
        }
        self.exit_search_mode()
    }

    /// Esc in input mode: drop the settings edit or clear the search.
    ///
    pub fn cancel_input(&mut self) -> &mut Self {
        if let Panel::Settings(panel) = &mut self.panel {
            if panel.is_editing() {
                panel.cancel_edit();
                return self;
            }
        }
        if let Some(search) = self.panel.controls().and_then(|c| c.search()) {
            search.clear();
        }
        if let Some(controls) = self.panel.controls() {
            controls.clamp_selection();
        }
        self.exit_search_mode()
    }

    /// The special mode that currently owns the keyboard, if any.
    ///
    pub fn special_mode(&self) -> Option<SpecialMode> {
        if self.theme_selector_open {
            Some(SpecialMode::ThemeSelector)
        } else if self.debug_mode {
            Some(SpecialMode::Debug)
        } else if self.has_dialog() {
            Some(SpecialMode::Dialog)
        } else if self.is_input_mode() {
            Some(SpecialMode::Input)
        } else {
            None
        }
    }

    pub fn show_notice(&mut self, notice: Notice) -> &mut Self {
        info!("{}: {}", notice.title, notice.description);
        self.notice = Some(notice);
        self
    }

    pub fn dismiss_notice(&mut self) -> &mut Self {
        self.notice = None;
        self
    }

    pub fn get_notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Open theme selector modal.
    ///
    pub fn open_theme_selector(&mut self) -> &mut Self {
        self.theme_selector_open = true;
        let available_themes = Theme::available_themes();
        self.theme_dropdown_index = available_themes
            .iter()
            .position(|name| name == &self.theme.name)
            .unwrap_or(0);
        self
    }

    /// Close theme selector modal.
    ///
    pub fn close_theme_selector(&mut self) -> &mut Self {
        self.theme_selector_open = false;
        self
    }

    pub fn has_theme_selector(&self) -> bool {
        self.theme_selector_open
    }

    pub fn get_theme_dropdown_index(&self) -> usize {
        self.theme_dropdown_index
    }

    /// Navigate to next theme in selector.
    ///
    pub fn next_theme(&mut self) -> &mut Self {
        let available_themes = Theme::available_themes();
        if !available_themes.is_empty() {
            self.theme_dropdown_index = (self.theme_dropdown_index + 1) % available_themes.len();
        }
        self
    }

    /// Navigate to previous theme in selector.
    ///
    pub fn previous_theme(&mut self) -> &mut Self {
        let available_themes = Theme::available_themes();
        if !available_themes.is_empty() {
            if self.theme_dropdown_index == 0 {
                self.theme_dropdown_index = available_themes.len() - 1;
            } else {
                self.theme_dropdown_index -= 1;
            }
        }
        self
    }

    /// Select current theme, apply it and ask for the config to be saved.
    ///
    pub fn select_theme(&mut self) -> &mut Self {
        let available_themes = Theme::available_themes();
        if let Some(new_theme) = available_themes
            .get(self.theme_dropdown_index)
            .and_then(|name| Theme::from_name(name))
        {
            info!("Switching to theme '{}'", new_theme.name);
            self.theme = new_theme;
            if let Err(e) = self.request_config_save() {
                warn!("{}", e);
            }
        }
        self.close_theme_selector()
    }

    /// Ask the config saver thread to write the config.
    ///
    pub fn request_config_save(&self) -> Result<(), StateError> {
        match &self.config_save_sender {
            Some(sender) => sender.send(()).map_err(|_| StateError::ConfigSaverStopped),
            None => Ok(()),
        }
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn set_hotkeys(&mut self, hotkeys: ViewHotkeys) -> &mut Self {
        self.hotkeys = hotkeys;
        self
    }

    /// Enter debug mode.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = true;
        self.debug_index = self.debug_entries.len().saturating_sub(1);
        self
    }

    /// Exit debug mode.
    ///
    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.debug_mode = false;
        self
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode
    }

    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            self.debug_index = (self.debug_index + 1) % self.debug_entries.len();
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        if !self.debug_entries.is_empty() {
            if self.debug_index == 0 {
                self.debug_index = self.debug_entries.len() - 1;
            } else {
                self.debug_index -= 1;
            }
        }
        self
    }

    /// Get the currently selected log entry.
    ///
    pub fn get_current_debug(&self) -> Option<&String> {
        self.debug_entries.get(self.debug_index)
    }

    /// Copy the selected log entry to the system clipboard.
    ///
    pub fn copy_current_debug(&self) -> Result<(), StateError> {
        let entry = self.get_current_debug().ok_or(StateError::NoLogEntry)?;
        let mut ctx: ClipboardContext =
            ClipboardProvider::new().map_err(|e| StateError::Clipboard(e.to_string()))?;
        ctx.set_contents(entry.to_string())
            .map_err(|e| StateError::Clipboard(e.to_string()))
    }

    /// Add a log entry to the debug buffer, keeping the newest
    /// `LOG_CAPACITY` lines.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.debug_entries.push(entry);
        if self.debug_entries.len() > LOG_CAPACITY {
            let excess = self.debug_entries.len() - LOG_CAPACITY;
            self.debug_entries.drain(..excess);
        }
        self.debug_index = self.debug_entries.len() - 1;
    }

    /// Get debug entries for rendering (read-only access).
    ///
    pub fn get_debug_entries(&self) -> &[String] {
        &self.debug_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::Selection;
    use crate::panels::ListControls;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn starts_on_overview() {
        let state = State::default();
        assert_eq!(state.active_section(), "overview");
        assert_eq!(state.panel().section_id(), "overview");
        assert_eq!(*state.current_focus(), Focus::Sidebar);
    }

    #[test]
    fn new_uses_start_section_or_overview() {
        let (tx, _rx) = std::sync::mpsc::channel();
        let state = State::new(tx.clone(), "support", Theme::forest(), ViewHotkeys::default());
        assert_eq!(state.panel().section_id(), "support");
        assert_eq!(state.get_theme().name, "forest");
        let state = State::new(tx, "billing", Theme::default(), ViewHotkeys::default());
        assert_eq!(state.active_section(), "overview");
    }

    #[test]
    fn reselecting_a_section_keeps_filters() {
        let mut state = State::default();
        state.set_active_section("users");
        if let Panel::Users(panel) = state.panel_mut() {
            panel.role = Selection::parse("client");
        }
        state.set_active_section("users");
        assert!(matches!(state.panel(), Panel::Users(p) if p.role != Selection::All));
        state.set_active_section("jobs");
        state.set_active_section("users");
        assert!(matches!(state.panel(), Panel::Users(p) if p.role == Selection::All));
    }

    #[test]
    fn parent_ids_do_not_change_the_panel() {
        let mut state = State::default();
        state.set_active_section("escrow");
        state.set_active_section("finance");
        assert_eq!(state.active_section(), "escrow");
        assert_eq!(state.panel().section_id(), "escrow");
        state.set_active_section("nowhere");
        assert_eq!(state.panel().section_id(), "escrow");
    }

    #[test]
    fn sidebar_selection_opens_panel_and_focuses_it() {
        let mut state = State::default();
        state.next_sidebar_row().next_sidebar_row();
        state.activate_sidebar_row();
        assert_eq!(state.active_section(), "jobs");
        assert_eq!(*state.current_focus(), Focus::Panel);
        state.toggle_focus();
        assert_eq!(*state.current_focus(), Focus::Sidebar);
    }

    #[test]
    fn overview_cannot_take_focus() {
        let mut state = State::default();
        state.focus_panel();
        assert_eq!(*state.current_focus(), Focus::Sidebar);
    }

    #[test]
    fn search_input_filters_and_cancel_clears() {
        let mut state = State::default();
        state.set_active_section("jobs");
        state.enter_search_mode();
        assert_eq!(state.special_mode(), Some(SpecialMode::Input));
        for c in "chen".chars() {
            state.add_input_char(c);
        }
        state.confirm_input();
        assert!(!state.is_search_mode());
        if let Panel::Jobs(panel) = state.panel() {
            assert_eq!(panel.visible().len(), 1);
        }
        state.enter_search_mode().cancel_input();
        assert_eq!(
            state.panel_mut().controls().map(|c| c.row_count()),
            Some(4)
        );
    }

    #[test]
    fn search_mode_needs_a_search_box() {
        let mut state = State::default();
        state.set_active_section("escrow");
        state.enter_search_mode();
        assert!(!state.is_search_mode());
    }

    #[test]
    fn category_dialog_flow() {
        let mut state = State::default();
        state.set_active_section("categories");
        state.open_new_item();
        assert_eq!(state.special_mode(), Some(SpecialMode::Dialog));
        for c in "Writing".chars() {
            state.dialog_input(key(KeyCode::Char(c)));
        }
        state.dialog_next_field();
        state.dialog_input(key(KeyCode::Char('x')));
        state.dialog_submit();
        assert!(!state.has_dialog());
        assert_eq!(state.get_notice().map(|n| n.title.as_str()), Some("Category Added"));
        if let Panel::Categories(panel) = state.panel() {
            assert_eq!(panel.categories.last().map(|c| c.name.as_str()), Some("Writing"));
            assert_eq!(panel.categories.last().map(|c| c.description.as_str()), Some("x"));
        }
    }

    #[test]
    fn ticket_dialog_cancel_changes_nothing() {
        let mut state = State::default();
        state.set_active_section("support");
        state.open_selected();
        assert!(state.has_dialog());
        state.dialog_next_field();
        state.dialog_cancel();
        assert!(!state.has_dialog());
        if let Panel::Support(panel) = state.panel() {
            assert_eq!(panel.tickets, crate::marketplace::sample::tickets());
        }
    }

    #[test]
    fn settings_edit_goes_through_input_mode() {
        let mut state = State::default();
        state.set_active_section("settings");
        state.next_tab();
        state.open_selected();
        assert_eq!(state.special_mode(), Some(SpecialMode::Input));
        state.remove_input_char().add_input_char('9');
        state.confirm_input();
        assert!(!state.is_input_mode());
        if let Panel::Settings(panel) = state.panel() {
            assert_eq!(panel.settings.platform_commission, 9.0);
        }
        state.save_settings();
        assert_eq!(
            state.get_notice().map(|n| n.title.as_str()),
            Some("Settings Updated")
        );
        state.dismiss_notice();
        assert!(state.get_notice().is_none());
    }

    #[test]
    fn toggle_record_uses_panel_controls() {
        let mut state = State::default();
        state.set_active_section("cms");
        state.previous_tab();
        state.next_row();
        state.toggle_record();
        if let Panel::Cms(panel) = state.panel() {
            assert!(panel.languages[1].enabled);
            assert!(!panel.languages[2].enabled);
        }
    }

    #[test]
    fn add_log_entry_is_bounded() {
        let mut state = State::default();
        for i in 0..LOG_CAPACITY + 5 {
            state.add_log_entry(format!("line {}", i));
        }
        assert_eq!(state.get_debug_entries().len(), LOG_CAPACITY);
        assert_eq!(state.get_debug_entries()[0], "line 5");
        assert_eq!(state.get_debug_index(), LOG_CAPACITY - 1);
    }

    #[test]
    fn debug_navigation_wraps() {
        let mut state = State::default();
        state.add_log_entry("a".to_string());
        state.add_log_entry("b".to_string());
        state.enter_debug_mode();
        assert_eq!(state.special_mode(), Some(SpecialMode::Debug));
        assert_eq!(state.get_current_debug().map(String::as_str), Some("b"));
        state.next_debug();
        assert_eq!(state.get_current_debug().map(String::as_str), Some("a"));
        state.previous_debug();
        assert_eq!(state.get_current_debug().map(String::as_str), Some("b"));
        state.exit_debug_mode();
        assert_eq!(state.special_mode(), None);
    }

    #[test]
    fn copy_without_entries_fails() {
        let state = State::default();
        assert!(matches!(
            state.copy_current_debug(),
            Err(StateError::NoLogEntry)
        ));
    }

    #[test]
    fn select_theme_requests_save() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut state = State::new(tx, "overview", Theme::default(), ViewHotkeys::default());
        state.open_theme_selector();
        assert_eq!(state.get_theme_dropdown_index(), 0);
        state.next_theme().select_theme();
        assert_eq!(state.get_theme().name, "tokyo-night");
        assert!(!state.has_theme_selector());
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn theme_selector_wraps() {
        let mut state = State::default();
        state.open_theme_selector();
        state.previous_theme();
        assert_eq!(
            state.get_theme_dropdown_index(),
            Theme::available_themes().len() - 1
        );
        state.next_theme();
        assert_eq!(state.get_theme_dropdown_index(), 0);
    }

    #[test]
    fn unknown_theme_name_is_an_error() {
        let mut state = State::default();
        assert!(state.set_theme_by_name("neon").is_err());
        assert!(state.set_theme_by_name("dracula").is_ok());
        assert_eq!(state.get_theme().name, "dracula");
    }

    #[test]
    fn special_mode_precedence() {
        let mut state = State::default();
        state.set_active_section("support");
        state.open_selected();
        state.enter_debug_mode();
        state.open_theme_selector();
        assert_eq!(state.special_mode(), Some(SpecialMode::ThemeSelector));
        state.close_theme_selector();
        assert_eq!(state.special_mode(), Some(SpecialMode::Debug));
        state.exit_debug_mode();
        assert_eq!(state.special_mode(), Some(SpecialMode::Dialog));
    }
}
