use super::{summary, Cursor, ListControls};
use crate::marketplace::models::{Faq, Language, MailTemplates, Page};
use crate::marketplace::sample;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmsTab {
    Pages,
    Faqs,
    Mail,
    Languages,
}

impl CmsTab {
    pub const ALL: [CmsTab; 4] = [CmsTab::Pages, CmsTab::Faqs, CmsTab::Mail, CmsTab::Languages];

    pub fn title(&self) -> &'static str {
        match self {
            CmsTab::Pages => "Pages & Policies",
            CmsTab::Faqs => "FAQs",
            CmsTab::Mail => "Email Templates",
            CmsTab::Languages => "Languages",
        }
    }

    fn position(&self) -> usize {
        CmsTab::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    fn next(&self) -> Self {
        CmsTab::ALL[(self.position() + 1) % CmsTab::ALL.len()]
    }

    fn previous(&self) -> Self {
        CmsTab::ALL[(self.position() + CmsTab::ALL.len() - 1) % CmsTab::ALL.len()]
    }
}

/// Content management: pages, FAQs, mail templates, languages.
///
#[derive(Debug, Clone)]
pub struct CmsPanel {
    pub pages: Vec<Page>,
    pub faqs: Vec<Faq>,
    pub templates: MailTemplates,
    pub languages: Vec<Language>,
    pub tab: CmsTab,
    cursor: Cursor,
}

impl Default for CmsPanel {
    fn default() -> Self {
        CmsPanel {
            pages: sample::pages(),
            faqs: sample::faqs(),
            templates: sample::mail_templates(),
            languages: sample::languages(),
            tab: CmsTab::Pages,
            cursor: Cursor::default(),
        }
    }
}

impl CmsPanel {
    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    /// Mail templates as (name, body) rows.
    ///
    pub fn template_rows(&self) -> [(&'static str, &str); 3] {
        [
            ("Welcome Email", &self.templates.welcome),
            ("Password Reset", &self.templates.password_reset),
            ("Project Completed", &self.templates.project_completed),
        ]
    }

    /// Flip the enabled flag of one language. Other languages are untouched.
    ///
    pub fn toggle_language(&mut self, code: &str) -> Option<bool> {
        let language = self.languages.iter_mut().find(|l| l.code == code)?;
        language.enabled = !language.enabled;
        Some(language.enabled)
    }

    pub fn toggle_faq(&mut self, id: &str) -> Option<bool> {
        let faq = self.faqs.iter_mut().find(|f| f.id == id)?;
        faq.published = !faq.published;
        Some(faq.published)
    }

    fn set_tab(&mut self, tab: CmsTab) {
        self.tab = tab;
        self.cursor.reset();
    }
}

impl ListControls for CmsPanel {
    fn row_count(&self) -> usize {
        match self.tab {
            CmsTab::Pages => self.pages.len(),
            CmsTab::Faqs => self.faqs.len(),
            CmsTab::Mail => self.template_rows().len(),
            CmsTab::Languages => self.languages.len(),
        }
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    fn previous_tab(&mut self) {
        self.set_tab(self.tab.previous());
    }

    fn toggle_selected(&mut self) -> Option<String> {
        let index = self.cursor.index();
        match self.tab {
            CmsTab::Languages => {
                let code = self.languages.get(index)?.code.clone();
                let enabled = self.toggle_language(&code)?;
                Some(format!(
                    "Language {} {}",
                    code,
                    if enabled { "enabled" } else { "disabled" }
                ))
            }
            CmsTab::Faqs => {
                let id = self.faqs.get(index)?.id.clone();
                let published = self.toggle_faq(&id)?;
                Some(format!(
                    "FAQ {} {}",
                    id,
                    if published { "published" } else { "unpublished" }
                ))
            }
            CmsTab::Pages | CmsTab::Mail => None,
        }
    }

    fn reset_filters(&mut self) {
        self.set_tab(CmsTab::Pages);
    }

    fn filter_summary(&self) -> String {
        summary(None, vec![format!("tab: {}", self.tab.title())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_spanish_leaves_other_languages() {
        let mut panel = CmsPanel::default();
        let before = panel.languages.clone();
        assert_eq!(panel.toggle_language("es"), Some(true));
        for (old, new) in before.iter().zip(panel.languages.iter()) {
            if old.code == "es" {
                assert!(new.enabled);
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(panel.toggle_language("xx"), None);
    }

    #[test]
    fn toggle_follows_the_tab() {
        let mut panel = CmsPanel::default();
        assert_eq!(panel.toggle_selected(), None);
        panel.next_tab();
        assert_eq!(panel.tab, CmsTab::Faqs);
        assert_eq!(panel.toggle_selected().as_deref(), Some("FAQ 1 unpublished"));
        assert!(!panel.faqs[0].published);
        panel.previous_tab();
        panel.previous_tab();
        assert_eq!(panel.tab, CmsTab::Languages);
        panel.select_next();
        assert_eq!(panel.toggle_selected().as_deref(), Some("Language es enabled"));
    }

    #[test]
    fn tab_change_resets_the_cursor() {
        let mut panel = CmsPanel::default();
        panel.select_previous();
        assert_eq!(panel.selected_index(), 3);
        panel.next_tab();
        assert_eq!(panel.selected_index(), 0);
        assert_eq!(panel.row_count(), 3);
    }
}
