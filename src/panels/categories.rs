use super::{summary, Cursor, ListControls};
use crate::marketplace::models::{Category, Skill};
use crate::marketplace::{sample, Query, ValidationError};
use tui_textarea::TextArea;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogueTab {
    Categories,
    Skills,
}

impl CatalogueTab {
    pub fn title(&self) -> &'static str {
        match self {
            CatalogueTab::Categories => "Categories",
            CatalogueTab::Skills => "Skills",
        }
    }

    fn other(&self) -> Self {
        match self {
            CatalogueTab::Categories => CatalogueTab::Skills,
            CatalogueTab::Skills => CatalogueTab::Categories,
        }
    }
}

/// Which input of the new-category dialog has focus.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Name,
    Description,
}

/// New-category dialog.
///
pub struct CategoryDialog {
    pub name: String,
    pub description: TextArea<'static>,
    pub focus: DialogField,
    pub error: Option<ValidationError>,
}

impl Default for CategoryDialog {
    fn default() -> Self {
        CategoryDialog {
            name: String::new(),
            description: TextArea::default(),
            focus: DialogField::Name,
            error: None,
        }
    }
}

impl CategoryDialog {
    pub fn description_text(&self) -> String {
        self.description.lines().join("\n")
    }

    pub fn switch_focus(&mut self) {
        self.focus = match self.focus {
            DialogField::Name => DialogField::Description,
            DialogField::Description => DialogField::Name,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueStats {
    pub categories: usize,
    pub total_jobs: u32,
    pub skills: usize,
    pub verified_skills: usize,
}

/// Category and skill management.
///
pub struct CategoriesPanel {
    pub categories: Vec<Category>,
    pub skills: Vec<Skill>,
    pub tab: CatalogueTab,
    pub search: String,
    pub dialog: Option<CategoryDialog>,
    cursor: Cursor,
}

impl Default for CategoriesPanel {
    fn default() -> Self {
        CategoriesPanel {
            categories: sample::categories(),
            skills: sample::skills(),
            tab: CatalogueTab::Categories,
            search: String::new(),
            dialog: None,
            cursor: Cursor::default(),
        }
    }
}

impl CategoriesPanel {
    pub fn visible_categories(&self) -> Vec<&Category> {
        Query::new(&self.search).apply(&self.categories)
    }

    pub fn visible_skills(&self) -> Vec<&Skill> {
        Query::new(&self.search).apply(&self.skills)
    }

    pub fn selected_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn stats(&self) -> CatalogueStats {
        CatalogueStats {
            categories: self.categories.len(),
            total_jobs: self.categories.iter().map(|c| c.job_count).sum(),
            skills: self.skills.len(),
            verified_skills: self.skills.iter().filter(|s| s.is_verified).count(),
        }
    }

    pub fn open_dialog(&mut self) {
        self.dialog = Some(CategoryDialog::default());
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Add a category with no subcategories. The name must not be blank.
    ///
    pub fn add_category(&mut self, name: &str, description: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "Category Name",
            });
        }
        let next_id = self.categories.len() + 1;
        self.categories.push(Category {
            id: next_id.to_string(),
            name: name.to_string(),
            description: description.trim().to_string(),
            subcategories: vec![],
            job_count: 0,
            is_active: true,
        });
        log::info!("Added category '{}'", name);
        Ok(())
    }

    /// Submit the open dialog. On failure the dialog stays open with the
    /// error attached.
    ///
    pub fn submit_dialog(&mut self) -> bool {
        let Some(dialog) = self.dialog.take() else {
            return false;
        };
        match self.add_category(&dialog.name, &dialog.description_text()) {
            Ok(()) => true,
            Err(e) => {
                self.dialog = Some(CategoryDialog {
                    error: Some(e),
                    ..dialog
                });
                false
            }
        }
    }
}

impl ListControls for CategoriesPanel {
    fn row_count(&self) -> usize {
        match self.tab {
            CatalogueTab::Categories => self.visible_categories().len(),
            CatalogueTab::Skills => self.visible_skills().len(),
        }
    }

    fn cursor(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    fn search(&mut self) -> Option<&mut String> {
        Some(&mut self.search)
    }

    fn next_tab(&mut self) {
        self.tab = self.tab.other();
        self.cursor.reset();
    }

    fn previous_tab(&mut self) {
        self.next_tab();
    }

    fn toggle_selected(&mut self) -> Option<String> {
        let index = self.cursor.index();
        match self.tab {
            CatalogueTab::Categories => {
                let id = self.visible_categories().get(index)?.id.clone();
                let category = self.categories.iter_mut().find(|c| c.id == id)?;
                category.is_active = !category.is_active;
                Some(format!(
                    "Category '{}' is now {}",
                    category.name,
                    if category.is_active { "active" } else { "inactive" }
                ))
            }
            CatalogueTab::Skills => {
                let id = self.visible_skills().get(index)?.id.clone();
                let skill = self.skills.iter_mut().find(|s| s.id == id)?;
                skill.is_verified = !skill.is_verified;
                Some(format!(
                    "Skill '{}' is now {}",
                    skill.name,
                    if skill.is_verified { "verified" } else { "unverified" }
                ))
            }
        }
    }

    fn reset_filters(&mut self) {
        self.search.clear();
        self.cursor.reset();
    }

    fn filter_summary(&self) -> String {
        summary(Some(&self.search), vec![format!("tab: {}", self.tab.title())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_applies_to_the_current_tab() {
        let mut panel = CategoriesPanel::default();
        panel.search = "design".to_string();
        assert_eq!(panel.row_count(), 1);
        panel.next_tab();
        assert_eq!(panel.tab, CatalogueTab::Skills);
        assert_eq!(panel.row_count(), 0);
        panel.search = "py".to_string();
        assert_eq!(panel.visible_skills()[0].name, "Python");
    }

    #[test]
    fn toggle_affects_only_the_selected_category() {
        let mut panel = CategoriesPanel::default();
        panel.select_next();
        let before = panel.categories.clone();
        let message = panel.toggle_selected();
        assert_eq!(
            message.as_deref(),
            Some("Category 'Mobile Development' is now inactive")
        );
        for (old, new) in before.iter().zip(panel.categories.iter()) {
            if old.id == "2" {
                assert_eq!(new.is_active, !old.is_active);
            } else {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn dialog_rejects_blank_names() {
        let mut panel = CategoriesPanel::default();
        panel.open_dialog();
        assert!(!panel.submit_dialog());
        assert!(matches!(
            panel.dialog.as_ref().and_then(|d| d.error.clone()),
            Some(ValidationError::Empty { .. })
        ));
        assert_eq!(panel.categories.len(), 3);
    }

    #[test]
    fn dialog_adds_a_category() {
        let mut panel = CategoriesPanel::default();
        panel.open_dialog();
        if let Some(dialog) = panel.dialog.as_mut() {
            dialog.name = "Writing".to_string();
            dialog.description.insert_str("Articles and copy");
        }
        assert!(panel.submit_dialog());
        assert!(panel.dialog.is_none());
        let added = panel.categories.last().unwrap();
        assert_eq!(added.name, "Writing");
        assert_eq!(added.description, "Articles and copy");
        assert_eq!(panel.stats().categories, 4);
    }
}
