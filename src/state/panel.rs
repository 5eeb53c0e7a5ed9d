//! Section id to panel dispatch.

use super::navigation::DEFAULT_SECTION;
use crate::panels::categories::CategoriesPanel;
use crate::panels::cms::CmsPanel;
use crate::panels::commissions::CommissionsPanel;
use crate::panels::earnings::EarningsPanel;
use crate::panels::escrow::EscrowPanel;
use crate::panels::jobs::JobsPanel;
use crate::panels::overview::OverviewPanel;
use crate::panels::settings::SettingsPanel;
use crate::panels::support::SupportPanel;
use crate::panels::system::SystemPanel;
use crate::panels::tax::TaxPanel;
use crate::panels::transactions::TransactionsPanel;
use crate::panels::users::UsersPanel;
use crate::panels::ListControls;

/// The view state of the active section.
///
pub enum Panel {
    Overview(OverviewPanel),
    Users(UsersPanel),
    Earnings(EarningsPanel),
    Jobs(JobsPanel),
    Transactions(TransactionsPanel),
    Escrow(EscrowPanel),
    Commissions(CommissionsPanel),
    Tax(TaxPanel),
    Categories(CategoriesPanel),
    Support(SupportPanel),
    Cms(CmsPanel),
    System(SystemPanel),
    Settings(SettingsPanel),
}

impl Default for Panel {
    fn default() -> Self {
        Panel::Overview(OverviewPanel::default())
    }
}

impl Panel {
    /// Build a fresh panel for a section id. Unknown ids get the overview.
    ///
    pub fn for_section(id: &str) -> Panel {
        match id {
            "overview" => Panel::Overview(OverviewPanel::default()),
            "users" => Panel::Users(UsersPanel::default()),
            "earnings" => Panel::Earnings(EarningsPanel::default()),
            "jobs" => Panel::Jobs(JobsPanel::default()),
            "transactions" => Panel::Transactions(TransactionsPanel::default()),
            "escrow" => Panel::Escrow(EscrowPanel::default()),
            "commissions" => Panel::Commissions(CommissionsPanel::default()),
            "tax" => Panel::Tax(TaxPanel::default()),
            "categories" => Panel::Categories(CategoriesPanel::default()),
            "support" => Panel::Support(SupportPanel::default()),
            "cms" => Panel::Cms(CmsPanel::default()),
            "system" => Panel::System(SystemPanel::default()),
            "settings" => Panel::Settings(SettingsPanel::default()),
            other => {
                log::warn!("No panel for section '{}', showing {}", other, DEFAULT_SECTION);
                Panel::default()
            }
        }
    }

    pub fn section_id(&self) -> &'static str {
        match self {
            Panel::Overview(_) => "overview",
            Panel::Users(_) => "users",
            Panel::Earnings(_) => "earnings",
            Panel::Jobs(_) => "jobs",
            Panel::Transactions(_) => "transactions",
            Panel::Escrow(_) => "escrow",
            Panel::Commissions(_) => "commissions",
            Panel::Tax(_) => "tax",
            Panel::Categories(_) => "categories",
            Panel::Support(_) => "support",
            Panel::Cms(_) => "cms",
            Panel::System(_) => "system",
            Panel::Settings(_) => "settings",
        }
    }

    /// List controls of panels that have a navigable list.
    ///
    pub fn controls(&mut self) -> Option<&mut dyn ListControls> {
        match self {
            Panel::Overview(_) | Panel::System(_) => None,
            Panel::Users(p) => Some(p),
            Panel::Earnings(p) => Some(p),
            Panel::Jobs(p) => Some(p),
            Panel::Transactions(p) => Some(p),
            Panel::Escrow(p) => Some(p),
            Panel::Commissions(p) => Some(p),
            Panel::Tax(p) => Some(p),
            Panel::Categories(p) => Some(p),
            Panel::Support(p) => Some(p),
            Panel::Cms(p) => Some(p),
            Panel::Settings(p) => Some(p),
        }
    }

    /// Filter summary for the footer, if the panel has filters.
    ///
    pub fn filter_summary(&mut self) -> Option<String> {
        self.controls().map(|controls| controls.filter_summary())
    }

    /// Whether a modal dialog of the panel is open.
    ///
    pub fn has_dialog(&self) -> bool {
        match self {
            Panel::Categories(p) => p.dialog.is_some(),
            Panel::Support(p) => p.dialog.is_some(),
            Panel::Jobs(p) => p.detail_open,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::navigation::{section_ids, NAV_TREE};

    #[test]
    fn every_sidebar_section_has_its_panel() {
        for id in section_ids() {
            assert_eq!(Panel::for_section(id).section_id(), id);
        }
    }

    #[test]
    fn parents_and_unknown_ids_fall_back_to_overview() {
        for node in NAV_TREE.iter().filter(|n| !n.children.is_empty()) {
            assert_eq!(Panel::for_section(node.id).section_id(), "overview");
        }
        assert_eq!(Panel::for_section("").section_id(), "overview");
        assert_eq!(Panel::for_section("USERS").section_id(), "overview");
    }

    #[test]
    fn list_panels_expose_controls() {
        assert!(Panel::for_section("overview").controls().is_none());
        assert!(Panel::for_section("system").controls().is_none());
        let mut users = Panel::for_section("users");
        assert_eq!(
            users.filter_summary().as_deref(),
            Some("role: all | status: all")
        );
    }
}
