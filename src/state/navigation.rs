//! Navigation-related state types.
//!
//! The sidebar keeps two independent pieces of state: the set of expanded
//! parent nodes and the id of the active section. Activating a parent only
//! toggles its expansion; activating a leaf or child only changes the active
//! section.

use std::collections::BTreeSet;

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Focus {
    Sidebar,
    Panel,
}

/// A node of the sidebar tree.
///
#[derive(Debug, PartialEq, Eq)]
pub struct NavNode {
    pub id: &'static str,
    pub label: &'static str,
    pub children: &'static [NavNode],
}

const fn leaf(id: &'static str, label: &'static str) -> NavNode {
    NavNode {
        id,
        label,
        children: &[],
    }
}

/// Sidebar tree in display order.
///
pub const NAV_TREE: &[NavNode] = &[
    leaf("overview", "Overview"),
    NavNode {
        id: "people",
        label: "People",
        children: &[leaf("users", "User Management"), leaf("earnings", "User Earnings")],
    },
    leaf("jobs", "Jobs & Projects"),
    NavNode {
        id: "finance",
        label: "Finance",
        children: &[
            leaf("transactions", "Transactions"),
            leaf("escrow", "Escrow"),
            leaf("commissions", "Commissions"),
            leaf("tax", "Tax Reports"),
        ],
    },
    leaf("categories", "Categories"),
    leaf("support", "Support Tickets"),
    leaf("cms", "CMS & Pages"),
    leaf("system", "System Health"),
    leaf("settings", "Settings"),
];

pub const DEFAULT_SECTION: &str = "overview";

/// One visible line of the sidebar.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavRow {
    pub id: &'static str,
    pub label: &'static str,
    pub parent: Option<&'static str>,
    pub has_children: bool,
    pub expanded: bool,
}

/// What an activation did.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Activation {
    Expanded(&'static str),
    Collapsed(&'static str),
    Selected(&'static str),
    Unknown,
}

/// Look up a node anywhere in the tree, together with its parent id.
///
fn find(id: &str) -> Option<(&'static NavNode, Option<&'static str>)> {
    NAV_TREE.iter().find_map(|node| {
        if node.id == id {
            return Some((node, None));
        }
        node.children
            .iter()
            .find(|child| child.id == id)
            .map(|child| (child, Some(node.id)))
    })
}

/// Ids that can become the active section, in tree order.
///
pub fn section_ids() -> Vec<&'static str> {
    NAV_TREE
        .iter()
        .flat_map(|node| {
            if node.children.is_empty() {
                vec![node.id]
            } else {
                node.children.iter().map(|child| child.id).collect()
            }
        })
        .collect()
}

pub fn is_section(id: &str) -> bool {
    find(id).is_some_and(|(node, _)| node.children.is_empty())
}

pub fn label_for(id: &str) -> Option<&'static str> {
    find(id).map(|(node, _)| node.label)
}

/// Group id of a child section.
///
pub fn parent_of(id: &str) -> Option<&'static str> {
    find(id).and_then(|(_, parent)| parent)
}

/// Accordion sidebar state.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    expanded: BTreeSet<&'static str>,
    active: String,
    cursor: usize,
}

impl Default for Sidebar {
    fn default() -> Self {
        Sidebar {
            expanded: BTreeSet::new(),
            active: DEFAULT_SECTION.to_string(),
            cursor: 0,
        }
    }
}

impl Sidebar {
    /// Start on the given section, falling back to the default for ids that
    /// are not sections. Parents stay collapsed.
    ///
    pub fn starting_at(id: &str) -> Self {
        let mut sidebar = Sidebar::default();
        if is_section(id) {
            sidebar.activate(id);
        } else {
            log::warn!("Unknown start section '{}', using {}", id, DEFAULT_SECTION);
        }
        sidebar.cursor = sidebar.row_position(id).unwrap_or(0);
        sidebar
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Top-level nodes plus the children of expanded parents.
    ///
    pub fn visible_rows(&self) -> Vec<NavRow> {
        let mut rows = vec![];
        for node in NAV_TREE {
            let expanded = self.is_expanded(node.id);
            rows.push(NavRow {
                id: node.id,
                label: node.label,
                parent: None,
                has_children: !node.children.is_empty(),
                expanded,
            });
            if expanded {
                rows.extend(node.children.iter().map(|child| NavRow {
                    id: child.id,
                    label: child.label,
                    parent: Some(node.id),
                    has_children: false,
                    expanded: false,
                }));
            }
        }
        rows
    }

    /// Visible row index of `id`, or of its parent when the parent is
    /// collapsed.
    ///
    fn row_position(&self, id: &str) -> Option<usize> {
        let rows = self.visible_rows();
        rows.iter().position(|row| row.id == id).or_else(|| {
            let (_, parent) = find(id)?;
            rows.iter().position(|row| Some(row.id) == parent)
        })
    }

    /// Toggle a parent or select a section. Unknown ids change nothing.
    ///
    pub fn activate(&mut self, id: &str) -> Activation {
        let Some((node, _)) = find(id) else {
            log::warn!("Ignoring unknown navigation id '{}'", id);
            return Activation::Unknown;
        };
        if node.children.is_empty() {
            self.active = node.id.to_string();
            return Activation::Selected(node.id);
        }
        let under_cursor = self.visible_rows().get(self.cursor).map(|row| row.id);
        let activation = if self.expanded.remove(node.id) {
            Activation::Collapsed(node.id)
        } else {
            self.expanded.insert(node.id);
            Activation::Expanded(node.id)
        };
        if let Some(position) = under_cursor.and_then(|row| self.row_position(row)) {
            self.cursor = position;
        }
        activation
    }

    pub fn activate_cursor(&mut self) -> Activation {
        match self.visible_rows().get(self.cursor) {
            Some(row) => self.activate(row.id),
            None => Activation::Unknown,
        }
    }

    pub fn next(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = if self.cursor + 1 >= len { 0 } else { self.cursor + 1 };
    }

    pub fn previous(&mut self) {
        let len = self.visible_rows().len();
        self.cursor = if self.cursor == 0 {
            len.saturating_sub(1)
        } else {
            self.cursor - 1
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(sidebar: &Sidebar) -> Vec<&'static str> {
        sidebar.visible_rows().iter().map(|row| row.id).collect()
    }

    #[test]
    fn parents_start_collapsed() {
        let sidebar = Sidebar::default();
        assert_eq!(sidebar.active(), "overview");
        assert_eq!(
            ids(&sidebar),
            vec![
                "overview", "people", "jobs", "finance", "categories", "support", "cms",
                "system", "settings"
            ]
        );
    }

    #[test]
    fn activating_a_parent_only_toggles_it() {
        let mut sidebar = Sidebar::default();
        assert_eq!(sidebar.activate("finance"), Activation::Expanded("finance"));
        assert_eq!(sidebar.active(), "overview");
        assert!(sidebar.is_expanded("finance"));
        assert!(!sidebar.is_expanded("people"));
        assert_eq!(sidebar.activate("finance"), Activation::Collapsed("finance"));
        assert!(!sidebar.is_expanded("finance"));
        assert_eq!(sidebar.active(), "overview");
    }

    #[test]
    fn activating_a_leaf_keeps_expansion() {
        let mut sidebar = Sidebar::default();
        sidebar.activate("people");
        assert_eq!(sidebar.activate("jobs"), Activation::Selected("jobs"));
        assert_eq!(sidebar.active(), "jobs");
        assert!(sidebar.is_expanded("people"));
    }

    #[test]
    fn child_stays_active_when_parent_collapses() {
        let mut sidebar = Sidebar::default();
        sidebar.activate("finance");
        sidebar.activate("escrow");
        sidebar.activate("finance");
        assert_eq!(sidebar.active(), "escrow");
        assert!(!ids(&sidebar).contains(&"escrow"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut sidebar = Sidebar::default();
        sidebar.activate("people");
        let before = sidebar.clone();
        assert_eq!(sidebar.activate("billing"), Activation::Unknown);
        assert_eq!(sidebar, before);
    }

    #[test]
    fn cursor_walks_visible_rows() {
        let mut sidebar = Sidebar::default();
        sidebar.next();
        assert_eq!(sidebar.activate_cursor(), Activation::Expanded("people"));
        sidebar.next();
        sidebar.next();
        assert_eq!(sidebar.activate_cursor(), Activation::Selected("earnings"));
        assert_eq!(sidebar.active(), "earnings");
        sidebar.previous();
        sidebar.previous();
        sidebar.previous();
        assert_eq!(sidebar.cursor(), 0);
        sidebar.previous();
        assert_eq!(sidebar.cursor(), ids(&sidebar).len() - 1);
    }

    #[test]
    fn collapsing_moves_cursor_off_hidden_child() {
        let mut sidebar = Sidebar::default();
        sidebar.activate("finance");
        while sidebar.visible_rows()[sidebar.cursor()].id != "tax" {
            sidebar.next();
        }
        sidebar.activate("finance");
        assert_eq!(sidebar.visible_rows()[sidebar.cursor()].id, "finance");
    }

    #[test]
    fn expanding_above_the_cursor_keeps_its_row() {
        let mut sidebar = Sidebar::default();
        while sidebar.visible_rows()[sidebar.cursor()].id != "support" {
            sidebar.next();
        }
        sidebar.activate("people");
        assert_eq!(sidebar.visible_rows()[sidebar.cursor()].id, "support");
    }

    #[test]
    fn start_section_falls_back_to_overview() {
        assert_eq!(Sidebar::starting_at("nowhere").active(), "overview");
        let sidebar = Sidebar::starting_at("tax");
        assert_eq!(sidebar.active(), "tax");
        assert!(!sidebar.is_expanded("finance"));
        assert_eq!(sidebar.visible_rows()[sidebar.cursor()].id, "finance");
        assert_eq!(Sidebar::starting_at("people").active(), "overview");
    }

    #[test]
    fn section_ids_skip_parents() {
        let ids = section_ids();
        assert_eq!(ids.len(), 13);
        assert!(!ids.contains(&"people"));
        assert!(!ids.contains(&"finance"));
        assert_eq!(label_for("cms"), Some("CMS & Pages"));
    }

    #[test]
    fn parent_of_children_only() {
        assert_eq!(parent_of("escrow"), Some("finance"));
        assert_eq!(parent_of("users"), Some("people"));
        assert_eq!(parent_of("jobs"), None);
        assert_eq!(parent_of("finance"), None);
    }
}
