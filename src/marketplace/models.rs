use super::filter::{Choice, Searchable};
use chrono::{DateTime, NaiveDate, Utc};
use fake::{Dummy, Faker};
use rand::Rng;

/// Declare a closed enumeration with its wire tokens.
///
macro_rules! choice {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl Dummy<Faker> for $name {
            fn dummy_with_rng<R: Rng + ?Sized>(_: &Faker, rng: &mut R) -> Self {
                Self::ALL[rng.gen_range(0..Self::ALL.len())]
            }
        }
    };
}

choice!(
    /// Account role on the marketplace.
    Role { Client => "client", Freelancer => "freelancer" }
);

choice!(
    /// Account standing as shown in user management.
    UserStatus { Active => "active", Inactive => "inactive", Banned => "banned" }
);

choice!(
    /// Activity status in the earnings report.
    ActivityStatus { Active => "active", Inactive => "inactive" }
);

choice!(
    JobStatus {
        Open => "open",
        InProgress => "in_progress",
        Paused => "paused",
        Closed => "closed",
    }
);

choice!(
    TransactionKind {
        Payment => "payment",
        Withdrawal => "withdrawal",
        Commission => "commission",
        Refund => "refund",
    }
);

choice!(
    TransactionStatus { Completed => "completed", Pending => "pending", Failed => "failed" }
);

choice!(
    EscrowStatus { Held => "held", Released => "released", Disputed => "disputed" }
);

choice!(
    CommissionTier { Standard => "standard", Premium => "premium", Enterprise => "enterprise" }
);

choice!(
    TaxKind { Gst => "gst", Vat => "vat", Income => "income", Other => "other" }
);

choice!(
    TaxStatus { Calculated => "calculated", Paid => "paid", Pending => "pending" }
);

choice!(
    TicketStatus {
        Open => "open",
        InProgress => "in_progress",
        Resolved => "resolved",
        Closed => "closed",
    }
);

choice!(
    TicketPriority { Low => "low", Medium => "medium", High => "high", Urgent => "urgent" }
);

choice!(
    PageKind { Page => "page", Policy => "policy", Faq => "faq", Banner => "banner" }
);

choice!(
    PageStatus { Published => "published", Draft => "draft" }
);

/// Defines a marketplace account as listed in user management.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: UserStatus,
    pub country: String,
    pub join_date: NaiveDate,
    pub total_spent: Option<f64>,
    pub total_earned: Option<f64>,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// Defines a row of the earnings report.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct UserEarnings {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[dummy(faker = "0.0..50000.0")]
    pub total_earnings: f64,
    #[dummy(faker = "0.0..50000.0")]
    pub total_spent: f64,
    #[dummy(faker = "0..40")]
    pub projects_completed: u32,
    pub avg_project_value: f64,
    pub country: String,
    pub join_date: NaiveDate,
    pub last_activity: NaiveDate,
    pub status: ActivityStatus,
}

impl Searchable for UserEarnings {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// Defines a job posting.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: String,
    pub budget: f64,
    pub deadline: NaiveDate,
    pub status: JobStatus,
    pub proposals: u32,
    pub time_posted: NaiveDate,
    pub description: String,
    pub skills: Vec<String>,
    pub flagged: bool,
}

impl Searchable for Job {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.client]
    }
}

/// Defines a ledger entry. `from` and `to` are free-text actor names.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub fee: f64,
    pub net_amount: f64,
    pub from: String,
    pub to: String,
    pub description: String,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    pub job_id: Option<String>,
    pub currency: String,
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.from, &self.to]
    }
}

/// Defines funds held between a client and a freelancer.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct EscrowTransaction {
    pub id: String,
    pub project_name: String,
    pub client: String,
    pub freelancer: String,
    pub amount: f64,
    pub status: EscrowStatus,
    pub days_held: u32,
    pub release_date: NaiveDate,
    pub category: String,
}

impl Searchable for EscrowTransaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.project_name, &self.client, &self.freelancer]
    }
}

/// Defines a commission charged on a completed project.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct CommissionTransaction {
    pub id: String,
    pub project_name: String,
    pub client: String,
    pub freelancer: String,
    pub project_value: f64,
    pub commission_rate: f64,
    pub commission_amount: f64,
    pub category: String,
    pub date: NaiveDate,
    pub tier: CommissionTier,
}

impl Searchable for CommissionTransaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.project_name, &self.client, &self.freelancer]
    }
}

/// Defines a tax line attached to a transaction.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct TaxRecord {
    pub id: String,
    pub transaction_id: String,
    pub kind: TaxKind,
    pub amount: f64,
    pub rate: f64,
    pub base_amount: f64,
    pub country: String,
    pub date: NaiveDate,
    pub status: TaxStatus,
    pub description: String,
}

impl Searchable for TaxRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.transaction_id, &self.country, &self.description]
    }
}

/// Defines a support request.
///
#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub user: String,
    pub user_type: Role,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub last_reply: DateTime<Utc>,
    pub assigned_to: Option<String>,
    pub description: String,
}

impl Searchable for Ticket {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.subject, &self.user]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub skills: Vec<String>,
    pub job_count: u32,
}

/// Defines a top-level job category.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub subcategories: Vec<Subcategory>,
    pub job_count: u32,
    pub is_active: bool,
}

impl Searchable for Category {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

#[derive(Clone, Debug, Dummy, PartialEq)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub usage_count: u32,
    pub is_verified: bool,
}

impl Searchable for Skill {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

/// Defines a CMS page or policy document.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub kind: PageKind,
    pub status: PageStatus,
    pub last_modified: NaiveDate,
    pub views: u32,
}

impl Searchable for Page {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.slug]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub order: u32,
    pub published: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub enabled: bool,
}

/// Editable notification email bodies.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailTemplates {
    pub welcome: String,
    pub password_reset: String,
    pub project_completed: String,
}

/// A labelled value in a chart series.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub label: &'static str,
    pub value: f64,
}

/// Platform revenue for one month of the ledger.
///
#[derive(Clone, Debug, PartialEq)]
pub struct RevenueMonth {
    pub month: &'static str,
    pub revenue: f64,
    pub commission: f64,
    pub transactions: u32,
}

/// Volume per transaction type.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TypeVolume {
    pub name: &'static str,
    pub count: u32,
    pub amount: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TaxMonth {
    pub month: &'static str,
    pub gst: f64,
    pub vat: f64,
    pub income: f64,
    pub total: f64,
}

/// Escrow volumes for one period.
///
#[derive(Clone, Debug, PartialEq)]
pub struct EscrowPeriod {
    pub label: &'static str,
    pub held: f64,
    pub released: f64,
    pub pending: f64,
}

/// Commission revenue for one month.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CommissionMonth {
    pub month: &'static str,
    pub commission: f64,
    pub revenue: f64,
    pub rate: f64,
    pub transactions: u32,
}

/// Commission totals for one category.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryCommission {
    pub category: &'static str,
    pub commission: f64,
    pub rate: f64,
    pub projects: u32,
}

/// Tax totals for one country.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CountryTax {
    pub country: &'static str,
    pub gst: f64,
    pub vat: f64,
    pub income: f64,
    pub total: f64,
}

/// A tax regime and where it applies.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TaxRate {
    pub kind: &'static str,
    pub rate: f64,
    pub countries: &'static [&'static str],
}

/// A ranked account in the earnings leaderboards.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Ranked {
    pub name: &'static str,
    pub amount: f64,
    pub projects: u32,
}

/// Health indicator row.
///
#[derive(Clone, Debug, PartialEq)]
pub struct HealthCheck {
    pub name: &'static str,
    pub value: &'static str,
    pub healthy: bool,
}

/// Headline card with a trend annotation.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    pub value: String,
    pub trend: &'static str,
    pub caption: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    #[test]
    fn choice_tokens_round_trip() {
        for status in JobStatus::ALL {
            assert_eq!(JobStatus::parse(status.as_str()), Some(*status));
        }
        assert_eq!(JobStatus::parse("in_progress"), Some(JobStatus::InProgress));
        assert_eq!(JobStatus::parse("archived"), None);
    }

    #[test]
    fn choice_members_are_listed_once() {
        assert_eq!(Role::ALL.len(), 2);
        assert_eq!(UserStatus::ALL.len(), 3);
        assert_eq!(TransactionKind::ALL.len(), 4);
        assert_eq!(TicketPriority::ALL.len(), 4);
        assert_eq!(PageKind::ALL.len(), 4);
    }

    #[test]
    fn search_fields_follow_panel_contract() {
        let job: Job = Faker.fake();
        assert_eq!(job.search_fields(), vec![job.title.as_str(), job.client.as_str()]);
        let tx: Transaction = Faker.fake();
        assert_eq!(tx.search_fields().len(), 3);
    }
}
