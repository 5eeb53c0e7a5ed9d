use super::{summary, Cursor, ListControls};
use crate::marketplace::settings::{
    Applied, Field, FieldKind, Notice, PlatformSettings, SettingsTab,
};
use crate::marketplace::ValidationError;

/// Result of the most recent committed edit, shown under the form.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Saved(Field),
    Adjusted { field: Field, requested: f64, stored: f64 },
    Rejected(ValidationError),
}

impl Feedback {
    pub fn message(&self) -> String {
        match self {
            Feedback::Saved(field) => format!("{} updated", field.label()),
            Feedback::Adjusted {
                field,
                requested,
                stored,
            } => format!(
                "{} adjusted from {} to {}",
                field.label(),
                requested,
                stored
            ),
            Feedback::Rejected(e) => e.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Rejected(_))
    }
}

/// Platform settings form.
///
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    pub settings: PlatformSettings,
    pub tab: SettingsTab,
    pub editing: Option<String>,
    pub feedback: Option<Feedback>,
    cursor: Cursor,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        SettingsPanel {
            settings: PlatformSettings::default(),
            tab: SettingsTab::General,
            editing: None,
            feedback: None,
            cursor: Cursor::default(),
        }
    }
}

impl SettingsPanel {
    pub fn fields(&self) -> Vec<Field> {
        Field::on_tab(self.tab)
    }

    pub fn selected_field(&self) -> Option<Field> {
        self.fields().get(self.cursor.index()).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Start editing the selected field with its current value. Toggles flip
    /// instead.
    ///
    pub fn begin_edit(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        if field.kind() == FieldKind::Toggle {
            self.toggle_selected();
            return;
        }
        self.editing = Some(self.settings.get(field).to_string());
        self.feedback = None;
    }

    pub fn push_edit(&mut self, c: char) {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.push(c);
        }
    }

    pub fn pop_edit(&mut self) {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Validate the edit buffer into the selected field. A rejected value
    /// keeps the buffer open for correction.
    ///
    pub fn commit_edit(&mut self) {
        let (Some(field), Some(raw)) = (self.selected_field(), self.editing.clone()) else {
            return;
        };
        match self.settings.apply(field, &raw) {
            Ok(Applied::Accepted) => {
                self.editing = None;
                self.feedback = Some(Feedback::Saved(field));
            }
            Ok(Applied::Clamped { requested, stored }) => {
                self.editing = None;
                self.feedback = Some(Feedback::Adjusted {
                    field,
                    requested,
                    stored,
                });
            }
            Err(e) => {
                log::warn!("Rejected value for {}: {}", field.label(), e);
                self.feedback = Some(Feedback::Rejected(e));
            }
        }
    }

    pub fn save(&mut self) -> Notice {
        self.editing = None;
        self.feedback = None;
        log::info!("Platform settings saved");
        Notice::settings_saved()
    }

    fn set_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
        self.editing = None;
        self.cursor.reset();
    }

    fn tab_position(&self) -> usize {
        SettingsTab::ALL
            .iter()
            .position(|t| *t == self.tab)
            .unwrap_or(0)
    }
}

impl ListControls for SettingsPanel {
    fn row_count(&self) -> usize {
        self.fields().len()
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn next_tab(&mut self) {
        let next = (self.tab_position() + 1) % SettingsTab::ALL.len();
        self.set_tab(SettingsTab::ALL[next]);
    }

    fn previous_tab(&mut self) {
        let len = SettingsTab::ALL.len();
        let previous = (self.tab_position() + len - 1) % len;
        self.set_tab(SettingsTab::ALL[previous]);
    }

    fn toggle_selected(&mut self) -> Option<String> {
        let field = self.selected_field()?;
        let value = self.settings.toggle(field)?;
        self.feedback = Some(Feedback::Saved(field));
        Some(format!(
            "{} {}",
            field.label(),
            if value { "enabled" } else { "disabled" }
        ))
    }

    fn reset_filters(&mut self) {
        self.set_tab(SettingsTab::General);
    }

    fn filter_summary(&self) -> String {
        summary(None, vec![format!("tab: {}", self.tab.title())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::settings::SettingValue;

    fn select(panel: &mut SettingsPanel, field: Field) {
        panel.tab = field.tab();
        while panel.selected_field() != Some(field) {
            panel.select_next();
        }
    }

    fn edit(panel: &mut SettingsPanel, field: Field, input: &str) {
        select(panel, field);
        panel.begin_edit();
        panel.editing = Some(input.to_string());
        panel.commit_edit();
    }

    #[test]
    fn edit_starts_from_current_value() {
        let mut panel = SettingsPanel::default();
        select(&mut panel, Field::SmtpPort);
        panel.begin_edit();
        assert_eq!(panel.editing.as_deref(), Some("587"));
        panel.pop_edit();
        panel.push_edit('0');
        panel.commit_edit();
        assert_eq!(panel.settings.get(Field::SmtpPort), SettingValue::Number(580.0));
        assert!(!panel.is_editing());
    }

    #[test]
    fn fractional_port_is_rejected_not_clamped() {
        let mut panel = SettingsPanel::default();
        edit(&mut panel, Field::SmtpPort, "25.5");
        assert!(matches!(
            panel.feedback,
            Some(Feedback::Rejected(ValidationError::NotAWholeNumber { .. }))
        ));
        assert!(panel.feedback.as_ref().is_some_and(Feedback::is_error));
        assert!(panel.is_editing());
        assert_eq!(panel.settings.get(Field::SmtpPort), SettingValue::Number(587.0));
    }

    #[test]
    fn out_of_range_commission_is_clamped() {
        let mut panel = SettingsPanel::default();
        edit(&mut panel, Field::PlatformCommission, "35");
        assert_eq!(
            panel.feedback,
            Some(Feedback::Adjusted {
                field: Field::PlatformCommission,
                requested: 35.0,
                stored: 20.0
            })
        );
        assert_eq!(panel.settings.platform_commission, 20.0);
    }

    #[test]
    fn rejected_input_keeps_buffer_and_value() {
        let mut panel = SettingsPanel::default();
        edit(&mut panel, Field::SessionTimeout, "soon");
        assert!(panel.feedback.as_ref().is_some_and(Feedback::is_error));
        assert_eq!(panel.editing.as_deref(), Some("soon"));
        assert_eq!(panel.settings.session_timeout, 30.0);
        panel.cancel_edit();
        assert!(!panel.is_editing());
    }

    #[test]
    fn enter_on_a_toggle_flips_it() {
        let mut panel = SettingsPanel::default();
        select(&mut panel, Field::MaintenanceMode);
        panel.begin_edit();
        assert!(!panel.is_editing());
        assert!(panel.settings.maintenance_mode);
    }

    #[test]
    fn save_produces_notice() {
        let mut panel = SettingsPanel::default();
        let notice = panel.save();
        assert_eq!(notice.title, "Settings Updated");
    }

    #[test]
    fn tabs_wrap() {
        let mut panel = SettingsPanel::default();
        panel.previous_tab();
        assert_eq!(panel.tab, SettingsTab::Content);
        panel.next_tab();
        assert_eq!(panel.tab, SettingsTab::General);
        assert_eq!(panel.row_count(), 5);
    }
}
