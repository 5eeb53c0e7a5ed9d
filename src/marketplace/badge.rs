//! Table-driven mapping from enum values to presentational badges.
//!
//! Each closed enumeration has one static table of `(token, label, tone)`
//! rows. Lookups by raw token never fail: unknown values render as a neutral
//! [`Tone::Secondary`] badge carrying the raw text.

use super::filter::Choice;
use super::models::*;
use std::borrow::Cow;

/// Semantic colour class of a badge. Resolved to a concrete colour by the
/// active theme.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Destructive,
    Info,
    Accent,
    Primary,
    Muted,
    Secondary,
}

/// Display descriptor for an enum value.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: Cow<'static, str>,
    pub tone: Tone,
}

impl Badge {
    /// Neutral badge for a value no table knows about.
    ///
    pub fn fallback(raw: &str) -> Self {
        let label = if raw.trim().is_empty() {
            Cow::Borrowed("unknown")
        } else {
            Cow::Owned(raw.to_string())
        };
        Badge {
            label,
            tone: Tone::Secondary,
        }
    }
}

/// Static lookup table for one enumeration.
///
pub struct BadgeTable {
    pub name: &'static str,
    rows: &'static [(&'static str, &'static str, Tone)],
}

impl BadgeTable {
    /// Return the badge for a raw token, or the fallback badge.
    ///
    pub fn lookup(&self, raw: &str) -> Badge {
        self.rows
            .iter()
            .find(|(token, _, _)| *token == raw)
            .map(|(_, label, tone)| Badge {
                label: Cow::Borrowed(*label),
                tone: *tone,
            })
            .unwrap_or_else(|| Badge::fallback(raw))
    }

    /// Whether every member of `E` has its own row.
    ///
    pub fn covers<E: Choice>(&self) -> bool {
        E::ALL
            .iter()
            .all(|c| self.rows.iter().any(|(token, _, _)| *token == c.as_str()))
    }
}

/// Enumerations with a badge table.
///
pub trait Badged: Choice {
    const TABLE: &'static BadgeTable;

    fn badge(&self) -> Badge {
        Self::TABLE.lookup(self.as_str())
    }

    fn label(&self) -> Cow<'static, str> {
        self.badge().label
    }
}

macro_rules! badge_table {
    ($const_name:ident, $ty:ty, $name:literal, [$(($token:literal, $label:literal, $tone:ident)),+ $(,)?]) => {
        pub const $const_name: BadgeTable = BadgeTable {
            name: $name,
            rows: &[$(($token, $label, Tone::$tone)),+],
        };

        impl Badged for $ty {
            const TABLE: &'static BadgeTable = &$const_name;
        }
    };
}

badge_table!(ROLE, Role, "role", [
    ("client", "Client", Info),
    ("freelancer", "Freelancer", Accent),
]);

badge_table!(USER_STATUS, UserStatus, "user status", [
    ("active", "Active", Success),
    ("inactive", "Inactive", Warning),
    ("banned", "Banned", Destructive),
]);

badge_table!(ACTIVITY_STATUS, ActivityStatus, "activity status", [
    ("active", "Active", Success),
    ("inactive", "Inactive", Muted),
]);

badge_table!(JOB_STATUS, JobStatus, "job status", [
    ("open", "Open", Success),
    ("in_progress", "In Progress", Info),
    ("paused", "Paused", Warning),
    ("closed", "Closed", Muted),
]);

badge_table!(TRANSACTION_KIND, TransactionKind, "transaction type", [
    ("payment", "Payment", Success),
    ("withdrawal", "Withdrawal", Info),
    ("commission", "Commission", Warning),
    ("refund", "Refund", Destructive),
]);

badge_table!(TRANSACTION_STATUS, TransactionStatus, "transaction status", [
    ("completed", "Completed", Success),
    ("pending", "Pending", Warning),
    ("failed", "Failed", Destructive),
]);

badge_table!(ESCROW_STATUS, EscrowStatus, "escrow status", [
    ("held", "Held", Warning),
    ("released", "Released", Success),
    ("disputed", "Disputed", Destructive),
]);

badge_table!(COMMISSION_TIER, CommissionTier, "commission tier", [
    ("standard", "Standard", Info),
    ("premium", "Premium", Warning),
    ("enterprise", "Enterprise", Primary),
]);

badge_table!(TAX_KIND, TaxKind, "tax type", [
    ("gst", "GST", Info),
    ("vat", "VAT", Success),
    ("income", "Income Tax", Warning),
    ("other", "Other", Muted),
]);

badge_table!(TAX_STATUS, TaxStatus, "tax status", [
    ("calculated", "Calculated", Info),
    ("paid", "Paid", Success),
    ("pending", "Pending", Warning),
]);

badge_table!(TICKET_STATUS, TicketStatus, "ticket status", [
    ("open", "Open", Destructive),
    ("in_progress", "In Progress", Warning),
    ("resolved", "Resolved", Success),
    ("closed", "Closed", Muted),
]);

badge_table!(TICKET_PRIORITY, TicketPriority, "ticket priority", [
    ("urgent", "Urgent", Destructive),
    ("high", "High", Warning),
    ("medium", "Medium", Info),
    ("low", "Low", Muted),
]);

badge_table!(PAGE_KIND, PageKind, "page type", [
    ("page", "Page", Primary),
    ("policy", "Policy", Info),
    ("faq", "FAQ", Warning),
    ("banner", "Banner", Secondary),
]);

badge_table!(PAGE_STATUS, PageStatus, "page status", [
    ("published", "Published", Success),
    ("draft", "Draft", Warning),
]);

/// Requester type on tickets uses primary rather than info for clients.
///
pub static REQUESTER: BadgeTable = BadgeTable {
    name: "requester type",
    rows: &[
        ("client", "Client", Tone::Primary),
        ("freelancer", "Freelancer", Tone::Accent),
    ],
};

/// The earnings report colours roles differently from user management.
///
pub static EARNINGS_ROLE: BadgeTable = BadgeTable {
    name: "earnings role",
    rows: &[
        ("freelancer", "Freelancer", Tone::Success),
        ("client", "Client", Tone::Info),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exhaustive<E: Badged>() {
        assert!(E::TABLE.covers::<E>(), "{} table is not exhaustive", E::TABLE.name);
        for member in E::ALL {
            let badge = member.badge();
            assert!(!badge.label.is_empty());
            assert_ne!(badge.tone, Tone::Secondary, "{} fell back", member.as_str());
        }
    }

    #[test]
    fn every_table_covers_its_enum() {
        assert_exhaustive::<Role>();
        assert_exhaustive::<UserStatus>();
        assert_exhaustive::<ActivityStatus>();
        assert_exhaustive::<JobStatus>();
        assert_exhaustive::<TransactionKind>();
        assert_exhaustive::<TransactionStatus>();
        assert_exhaustive::<EscrowStatus>();
        assert_exhaustive::<CommissionTier>();
        assert_exhaustive::<TaxKind>();
        assert_exhaustive::<TaxStatus>();
        assert_exhaustive::<TicketStatus>();
        assert_exhaustive::<TicketPriority>();
        assert_exhaustive::<PageStatus>();
        assert!(REQUESTER.covers::<Role>());
        assert!(EARNINGS_ROLE.covers::<Role>());
    }

    #[test]
    fn page_kind_banner_is_secondary_by_design() {
        let badge = PageKind::Banner.badge();
        assert_eq!(badge.label, "Banner");
        assert_eq!(badge.tone, Tone::Secondary);
        assert!(PAGE_KIND.covers::<PageKind>());
    }

    #[test]
    fn unknown_values_fall_back_to_secondary() {
        let badge = JOB_STATUS.lookup("archived");
        assert_eq!(badge.label, "archived");
        assert_eq!(badge.tone, Tone::Secondary);

        let badge = TICKET_PRIORITY.lookup("");
        assert_eq!(badge.label, "unknown");
        assert_eq!(badge.tone, Tone::Secondary);
    }

    #[test]
    fn lookup_is_idempotent() {
        for raw in ["open", "closed", "???"] {
            assert_eq!(TICKET_STATUS.lookup(raw), TICKET_STATUS.lookup(raw));
        }
    }

    #[test]
    fn labels_use_dashboard_wording() {
        assert_eq!(TaxKind::Income.label(), "Income Tax");
        assert_eq!(JobStatus::InProgress.label(), "In Progress");
        assert_eq!(TicketStatus::Open.badge().tone, Tone::Destructive);
        assert_eq!(REQUESTER.lookup("client").tone, Tone::Primary);
        assert_eq!(EARNINGS_ROLE.lookup("freelancer").tone, Tone::Success);
    }
}
