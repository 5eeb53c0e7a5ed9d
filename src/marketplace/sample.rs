//! Static sample collections backing every panel.
//!
//! Collections are rebuilt on each call so a panel always starts from a
//! pristine copy. Headline figures of the escrow, commission and tax reports
//! are fixed constants and are not derived from the rows below.

use super::models::*;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Headline figures of the escrow report.
///
#[derive(Clone, Debug, PartialEq)]
pub struct EscrowHeadline {
    pub total_held: f64,
    pub total_released: f64,
    pub average_hold_days: f64,
    pub pending_release: u32,
}

pub const ESCROW_HEADLINE: EscrowHeadline = EscrowHeadline {
    total_held: 251_000.0,
    total_released: 185_000.0,
    average_hold_days: 7.2,
    pending_release: 18,
};

/// Headline figures of the commission report.
///
#[derive(Clone, Debug, PartialEq)]
pub struct CommissionHeadline {
    pub total_commission: f64,
    pub average_rate: f64,
    pub monthly_growth: f64,
    pub projected_annual: f64,
}

pub const COMMISSION_HEADLINE: CommissionHeadline = CommissionHeadline {
    total_commission: 28_485.0,
    average_rate: 4.8,
    monthly_growth: 15.3,
    projected_annual: 65_840.0,
};

/// Headline figures of the tax report.
///
#[derive(Clone, Debug, PartialEq)]
pub struct TaxHeadline {
    pub total_tax: f64,
    pub pending_tax: f64,
    pub average_rate: f64,
    pub countries: u32,
}

pub const TAX_HEADLINE: TaxHeadline = TaxHeadline {
    total_tax: 18_650.0,
    pending_tax: 2_340.0,
    average_rate: 12.5,
    countries: 8,
};

/// Commission rate in percent per pricing tier.
///
pub fn tier_rate(tier: CommissionTier) -> f64 {
    match tier {
        CommissionTier::Standard => 5.0,
        CommissionTier::Premium => 3.5,
        CommissionTier::Enterprise => 2.5,
    }
}

// Overview

pub fn overview_metrics() -> Vec<Metric> {
    vec![
        Metric {
            title: "Total Users",
            value: "8,756".to_string(),
            trend: "+12.5%",
            caption: "vs last month",
        },
        Metric {
            title: "Active Jobs",
            value: "1,234".to_string(),
            trend: "+8.2%",
            caption: "vs last month",
        },
        Metric {
            title: "Monthly Revenue",
            value: "$67,000".to_string(),
            trend: "+15.3%",
            caption: "vs last month",
        },
        Metric {
            title: "Support Tickets",
            value: "23".to_string(),
            trend: "5 urgent",
            caption: "pending review",
        },
    ]
}

pub fn overview_revenue() -> Vec<Point> {
    [
        ("Jan", 45_000.0),
        ("Feb", 52_000.0),
        ("Mar", 48_000.0),
        ("Apr", 61_000.0),
        ("May", 55_000.0),
        ("Jun", 67_000.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

pub fn overview_signups() -> Vec<Point> {
    [
        ("Jan", 1_200.0),
        ("Feb", 1_400.0),
        ("Mar", 1_350.0),
        ("Apr", 1_600.0),
        ("May", 1_500.0),
        ("Jun", 1_750.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

pub fn users_by_country() -> Vec<Point> {
    [
        ("United States", 2_500.0),
        ("United Kingdom", 1_800.0),
        ("Canada", 1_200.0),
        ("Australia", 900.0),
        ("Germany", 800.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

pub fn jobs_by_technology() -> Vec<Point> {
    [
        ("Web Development", 450.0),
        ("Mobile Apps", 320.0),
        ("UI/UX Design", 280.0),
        ("Data Science", 190.0),
        ("DevOps", 150.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

pub fn active_regions() -> Vec<Point> {
    [
        ("North America", 456.0),
        ("Europe", 342.0),
        ("Asia Pacific", 234.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

// People

pub fn users() -> Vec<User> {
    let user = |id: &str,
                name: &str,
                email: &str,
                role: Role,
                status: UserStatus,
                country: &str,
                joined: NaiveDate,
                total: f64| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        country: country.to_string(),
        join_date: joined,
        total_spent: (role == Role::Client).then_some(total),
        total_earned: (role == Role::Freelancer).then_some(total),
    };
    vec![
        user("1", "John Smith", "john.smith@email.com", Role::Client, UserStatus::Active, "United States", date(2024, 1, 15), 15_420.0),
        user("2", "Sarah Johnson", "sarah.j@email.com", Role::Freelancer, UserStatus::Active, "United Kingdom", date(2024, 2, 3), 8_950.0),
        user("3", "Mike Chen", "mike.chen@email.com", Role::Freelancer, UserStatus::Inactive, "Canada", date(2024, 1, 28), 12_300.0),
        user("4", "Emily Davis", "emily.davis@email.com", Role::Client, UserStatus::Banned, "Australia", date(2024, 3, 10), 2_100.0),
        user("5", "Alex Rodriguez", "alex.r@email.com", Role::Freelancer, UserStatus::Active, "Spain", date(2024, 2, 20), 6_750.0),
    ]
}

pub fn earnings() -> Vec<UserEarnings> {
    #[allow(clippy::too_many_arguments)]
    fn row(
        id: &str,
        name: &str,
        email: &str,
        role: Role,
        amount: f64,
        projects: u32,
        average: f64,
        country: &str,
        joined: NaiveDate,
        last: NaiveDate,
    ) -> UserEarnings {
        let (total_earnings, total_spent) = match role {
            Role::Freelancer => (amount, 0.0),
            Role::Client => (0.0, amount),
        };
        UserEarnings {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            total_earnings,
            total_spent,
            projects_completed: projects,
            avg_project_value: average,
            country: country.to_string(),
            join_date: joined,
            last_activity: last,
            status: ActivityStatus::Active,
        }
    }
    vec![
        row("1", "Sarah Johnson", "sarah.j@email.com", Role::Freelancer, 25_400.0, 12, 2_117.0, "United States", date(2023, 3, 15), date(2024, 1, 15)),
        row("2", "John Smith", "john.smith@company.com", Role::Client, 18_500.0, 8, 2_312.0, "United Kingdom", date(2023, 1, 10), date(2024, 1, 14)),
        row("3", "Mike Chen", "mike.chen@design.com", Role::Freelancer, 19_800.0, 15, 1_320.0, "Canada", date(2023, 5, 22), date(2024, 1, 13)),
        row("4", "Emily Davis", "emily.d@creative.com", Role::Freelancer, 31_200.0, 18, 1_733.0, "Australia", date(2022, 11, 8), date(2024, 1, 12)),
    ]
}

pub fn top_earners() -> Vec<Ranked> {
    vec![
        Ranked { name: "Emily Davis", amount: 31_200.0, projects: 18 },
        Ranked { name: "Sarah Johnson", amount: 25_400.0, projects: 12 },
        Ranked { name: "Mike Chen", amount: 19_800.0, projects: 15 },
        Ranked { name: "Alex Rodriguez", amount: 16_750.0, projects: 9 },
        Ranked { name: "Lisa Wang", amount: 14_200.0, projects: 11 },
    ]
}

pub fn top_spenders() -> Vec<Ranked> {
    vec![
        Ranked { name: "TechCorp Inc", amount: 45_600.0, projects: 22 },
        Ranked { name: "StartupXYZ", amount: 32_400.0, projects: 15 },
        Ranked { name: "Digital Agency", amount: 28_900.0, projects: 18 },
        Ranked { name: "John Smith", amount: 18_500.0, projects: 8 },
        Ranked { name: "MediaCompany", amount: 15_200.0, projects: 12 },
    ]
}

pub fn earnings_distribution() -> Vec<Point> {
    [
        ("$0-$5k", 145.0),
        ("$5k-$15k", 89.0),
        ("$15k-$30k", 67.0),
        ("$30k+", 34.0),
    ]
    .into_iter()
    .map(|(label, value)| Point { label, value })
    .collect()
}

// Jobs

pub fn jobs() -> Vec<Job> {
    #[allow(clippy::too_many_arguments)]
    fn job(
        id: &str,
        title: &str,
        client: &str,
        category: &str,
        budget: f64,
        deadline: NaiveDate,
        status: JobStatus,
        proposals: u32,
        posted: NaiveDate,
        description: &str,
        skills: &[&str],
        flagged: bool,
    ) -> Job {
        Job {
            id: id.to_string(),
            title: title.to_string(),
            client: client.to_string(),
            category: category.to_string(),
            budget,
            deadline,
            status,
            proposals,
            time_posted: posted,
            description: description.to_string(),
            skills: strings(skills),
            flagged,
        }
    }
    vec![
        job(
            "1",
            "E-commerce Website Development",
            "John Smith",
            "Web Development",
            5_000.0,
            date(2024, 2, 15),
            JobStatus::Open,
            12,
            date(2024, 1, 10),
            "Looking for a full-stack developer to build an e-commerce platform...",
            &["React", "Node.js", "MongoDB"],
            false,
        ),
        job(
            "2",
            "Mobile App UI/UX Design",
            "Sarah Johnson",
            "Design",
            2_500.0,
            date(2024, 2, 20),
            JobStatus::InProgress,
            8,
            date(2024, 1, 12),
            "Need a mobile app design for iOS and Android...",
            &["Figma", "UI/UX", "Mobile Design"],
            false,
        ),
        job(
            "3",
            "Data Analysis Project",
            "Mike Chen",
            "Data Science",
            1_500.0,
            date(2024, 2, 10),
            JobStatus::Paused,
            5,
            date(2024, 1, 8),
            "Analyze customer data and create insights...",
            &["Python", "Pandas", "SQL"],
            true,
        ),
        job(
            "4",
            "WordPress Plugin Development",
            "Emily Davis",
            "Web Development",
            800.0,
            date(2024, 2, 25),
            JobStatus::Closed,
            15,
            date(2024, 1, 5),
            "Custom WordPress plugin for booking system...",
            &["WordPress", "PHP", "JavaScript"],
            false,
        ),
    ]
}

// Finance

pub fn transactions() -> Vec<Transaction> {
    #[allow(clippy::too_many_arguments)]
    fn tx(
        id: &str,
        kind: TransactionKind,
        amount: f64,
        fee: f64,
        from: &str,
        to: &str,
        description: &str,
        status: TransactionStatus,
        date: DateTime<Utc>,
        job_id: Option<&str>,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            amount,
            fee,
            net_amount: amount - fee,
            from: from.to_string(),
            to: to.to_string(),
            description: description.to_string(),
            status,
            date,
            job_id: job_id.map(str::to_string),
            currency: "USD".to_string(),
        }
    }
    vec![
        tx("TXN-001", TransactionKind::Payment, 5_000.0, 250.0, "John Smith", "Sarah Johnson", "E-commerce website development", TransactionStatus::Completed, at(2024, 1, 15, 10, 30), Some("JOB-001")),
        tx("TXN-002", TransactionKind::Commission, 250.0, 0.0, "Platform", "FreelanceHub", "Platform commission (5%)", TransactionStatus::Completed, at(2024, 1, 15, 10, 31), Some("JOB-001")),
        tx("TXN-003", TransactionKind::Withdrawal, 2_500.0, 25.0, "Mike Chen", "Bank Account", "Earnings withdrawal", TransactionStatus::Pending, at(2024, 1, 14, 16, 20), None),
        tx("TXN-004", TransactionKind::Refund, 800.0, 0.0, "FreelanceHub", "Emily Davis", "Cancelled project refund", TransactionStatus::Completed, at(2024, 1, 13, 14, 15), Some("JOB-004")),
    ]
}

pub fn monthly_revenue() -> Vec<RevenueMonth> {
    [
        ("Jul", 45_000.0, 2_250.0, 180),
        ("Aug", 52_000.0, 2_600.0, 210),
        ("Sep", 48_000.0, 2_400.0, 195),
        ("Oct", 61_000.0, 3_050.0, 245),
        ("Nov", 55_000.0, 2_750.0, 220),
        ("Dec", 67_000.0, 3_350.0, 270),
    ]
    .into_iter()
    .map(|(month, revenue, commission, transactions)| RevenueMonth {
        month,
        revenue,
        commission,
        transactions,
    })
    .collect()
}

pub fn transaction_volumes() -> Vec<TypeVolume> {
    vec![
        TypeVolume { name: "Payments", count: 456, amount: 234_000.0 },
        TypeVolume { name: "Withdrawals", count: 234, amount: 156_000.0 },
        TypeVolume { name: "Commissions", count: 456, amount: 11_700.0 },
        TypeVolume { name: "Refunds", count: 23, amount: 8_900.0 },
    ]
}

pub fn escrow_monthly() -> Vec<EscrowPeriod> {
    [
        ("Jan", 125_000.0, 98_000.0, 27_000.0),
        ("Feb", 142_000.0, 118_000.0, 24_000.0),
        ("Mar", 158_000.0, 134_000.0, 24_000.0),
        ("Apr", 176_000.0, 152_000.0, 24_000.0),
        ("May", 195_000.0, 168_000.0, 27_000.0),
        ("Jun", 218_000.0, 185_000.0, 33_000.0),
    ]
    .into_iter()
    .map(|(label, held, released, pending)| EscrowPeriod {
        label,
        held,
        released,
        pending,
    })
    .collect()
}

pub fn escrow_yearly() -> Vec<EscrowPeriod> {
    [
        ("2021", 1_200_000.0, 1_100_000.0, 100_000.0),
        ("2022", 1_850_000.0, 1_720_000.0, 130_000.0),
        ("2023", 2_650_000.0, 2_480_000.0, 170_000.0),
        ("2024", 3_200_000.0, 2_980_000.0, 220_000.0),
    ]
    .into_iter()
    .map(|(label, held, released, pending)| EscrowPeriod {
        label,
        held,
        released,
        pending,
    })
    .collect()
}

pub fn escrow_breakdown() -> Vec<Ranked> {
    vec![
        Ranked { name: "Web Development", amount: 89_000.0, projects: 45 },
        Ranked { name: "Mobile Apps", amount: 67_000.0, projects: 32 },
        Ranked { name: "UI/UX Design", amount: 54_000.0, projects: 28 },
        Ranked { name: "Content Writing", amount: 23_000.0, projects: 67 },
        Ranked { name: "Digital Marketing", amount: 18_000.0, projects: 23 },
    ]
}

pub fn escrow_transactions() -> Vec<EscrowTransaction> {
    #[allow(clippy::too_many_arguments)]
    fn esc(
        id: &str,
        project: &str,
        client: &str,
        freelancer: &str,
        amount: f64,
        status: EscrowStatus,
        days_held: u32,
        release: NaiveDate,
        category: &str,
    ) -> EscrowTransaction {
        EscrowTransaction {
            id: id.to_string(),
            project_name: project.to_string(),
            client: client.to_string(),
            freelancer: freelancer.to_string(),
            amount,
            status,
            days_held,
            release_date: release,
            category: category.to_string(),
        }
    }
    vec![
        esc("ESC-001", "E-commerce Platform Development", "John Smith", "Sarah Johnson", 5_000.0, EscrowStatus::Held, 3, date(2024, 1, 20), "Web Development"),
        esc("ESC-002", "Mobile App UI Design", "Tech Corp", "Mike Chen", 3_200.0, EscrowStatus::Released, 7, date(2024, 1, 18), "UI/UX Design"),
        esc("ESC-003", "Brand Identity Package", "StartupXYZ", "Emily Davis", 2_800.0, EscrowStatus::Disputed, 12, date(2024, 1, 25), "Design"),
    ]
}

pub fn commission_monthly() -> Vec<CommissionMonth> {
    [
        ("Jul", 3_250.0, 65_000.0, 180),
        ("Aug", 3_890.0, 77_800.0, 210),
        ("Sep", 3_620.0, 72_400.0, 195),
        ("Oct", 4_575.0, 91_500.0, 245),
        ("Nov", 4_125.0, 82_500.0, 220),
        ("Dec", 5_025.0, 100_500.0, 270),
    ]
    .into_iter()
    .map(|(month, commission, revenue, transactions)| CommissionMonth {
        month,
        commission,
        revenue,
        rate: 5.0,
        transactions,
    })
    .collect()
}

pub fn commission_by_category() -> Vec<CategoryCommission> {
    [
        ("Web Development", 12_400.0, 5.0, 156),
        ("Mobile Apps", 8_900.0, 5.0, 89),
        ("UI/UX Design", 7_200.0, 5.0, 120),
        ("Content Writing", 3_800.0, 4.5, 203),
        ("Digital Marketing", 2_900.0, 5.5, 78),
        ("Data Science", 6_700.0, 5.0, 45),
    ]
    .into_iter()
    .map(|(category, commission, rate, projects)| CategoryCommission {
        category,
        commission,
        rate,
        projects,
    })
    .collect()
}

pub fn commission_transactions() -> Vec<CommissionTransaction> {
    #[allow(clippy::too_many_arguments)]
    fn com(
        id: &str,
        project: &str,
        client: &str,
        freelancer: &str,
        value: f64,
        amount: f64,
        category: &str,
        date: NaiveDate,
        tier: CommissionTier,
    ) -> CommissionTransaction {
        CommissionTransaction {
            id: id.to_string(),
            project_name: project.to_string(),
            client: client.to_string(),
            freelancer: freelancer.to_string(),
            project_value: value,
            commission_rate: tier_rate(tier),
            commission_amount: amount,
            category: category.to_string(),
            date,
            tier,
        }
    }
    vec![
        com("COM-001", "E-commerce Platform Development", "John Smith", "Sarah Johnson", 5_000.0, 250.0, "Web Development", date(2024, 1, 15), CommissionTier::Standard),
        com("COM-002", "Mobile App UI Design", "Tech Corp", "Mike Chen", 3_200.0, 112.0, "UI/UX Design", date(2024, 1, 14), CommissionTier::Premium),
        com("COM-003", "Enterprise Software Solution", "BigCompany Inc", "Emily Davis", 12_000.0, 300.0, "Web Development", date(2024, 1, 13), CommissionTier::Enterprise),
    ]
}

pub fn tax_monthly() -> Vec<TaxMonth> {
    [
        ("Jul", 1_250.0, 890.0, 650.0, 2_790.0),
        ("Aug", 1_480.0, 1_020.0, 780.0, 3_280.0),
        ("Sep", 1_360.0, 950.0, 720.0, 3_030.0),
        ("Oct", 1_720.0, 1_200.0, 910.0, 3_830.0),
        ("Nov", 1_580.0, 1_100.0, 830.0, 3_510.0),
        ("Dec", 1_890.0, 1_320.0, 1_000.0, 4_210.0),
    ]
    .into_iter()
    .map(|(month, gst, vat, income, total)| TaxMonth {
        month,
        gst,
        vat,
        income,
        total,
    })
    .collect()
}

pub fn tax_by_country() -> Vec<CountryTax> {
    [
        ("United States", 0.0, 0.0, 2_650.0, 2_650.0),
        ("United Kingdom", 0.0, 2_340.0, 980.0, 3_320.0),
        ("Canada", 1_890.0, 0.0, 890.0, 2_780.0),
        ("Australia", 1_240.0, 0.0, 670.0, 1_910.0),
        ("Germany", 0.0, 1_890.0, 720.0, 2_610.0),
    ]
    .into_iter()
    .map(|(country, gst, vat, income, total)| CountryTax {
        country,
        gst,
        vat,
        income,
        total,
    })
    .collect()
}

pub fn tax_rates() -> Vec<TaxRate> {
    vec![
        TaxRate { kind: "GST", rate: 10.0, countries: &["Canada", "Australia"] },
        TaxRate { kind: "VAT", rate: 20.0, countries: &["UK", "Germany", "France"] },
        TaxRate { kind: "Income Tax", rate: 15.0, countries: &["US", "Canada", "UK"] },
        TaxRate { kind: "Other", rate: 5.0, countries: &["Various"] },
    ]
}

pub fn tax_records() -> Vec<TaxRecord> {
    #[allow(clippy::too_many_arguments)]
    fn tax(
        id: &str,
        transaction_id: &str,
        kind: TaxKind,
        amount: f64,
        rate: f64,
        base: f64,
        country: &str,
        date: NaiveDate,
        status: TaxStatus,
        description: &str,
    ) -> TaxRecord {
        TaxRecord {
            id: id.to_string(),
            transaction_id: transaction_id.to_string(),
            kind,
            amount,
            rate,
            base_amount: base,
            country: country.to_string(),
            date,
            status,
            description: description.to_string(),
        }
    }
    vec![
        tax("TAX-001", "TXN-5643", TaxKind::Gst, 125.50, 10.0, 1_255.0, "Canada", date(2024, 1, 15), TaxStatus::Calculated, "Platform commission - Web Development"),
        tax("TAX-002", "TXN-5644", TaxKind::Vat, 234.80, 20.0, 1_174.0, "United Kingdom", date(2024, 1, 14), TaxStatus::Paid, "Project payment - UI/UX Design"),
        tax("TAX-003", "TXN-5645", TaxKind::Income, 187.50, 15.0, 1_250.0, "United States", date(2024, 1, 13), TaxStatus::Pending, "Freelancer earnings - Content Writing"),
    ]
}

// Catalogue

pub fn categories() -> Vec<Category> {
    let sub = |id: &str, name: &str, description: &str, skills: &[&str], jobs: u32| Subcategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        skills: strings(skills),
        job_count: jobs,
    };
    let category = |id: &str, name: &str, description: &str, subcategories: Vec<Subcategory>, jobs: u32| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subcategories,
        job_count: jobs,
        is_active: true,
    };
    vec![
        category(
            "1",
            "Web Development",
            "Building websites and web applications",
            vec![
                sub("1-1", "Frontend Development", "Client-side web development", &["React", "Vue.js", "Angular", "JavaScript", "CSS"], 280),
                sub("1-2", "Backend Development", "Server-side development", &["Node.js", "Python", "PHP", "Java", "Go"], 170),
            ],
            450,
        ),
        category(
            "2",
            "Mobile Development",
            "Creating mobile applications",
            vec![
                sub("2-1", "iOS Development", "Native iOS app development", &["Swift", "Objective-C", "Xcode", "iOS SDK"], 180),
                sub("2-2", "Android Development", "Native Android app development", &["Java", "Kotlin", "Android Studio", "Firebase"], 140),
            ],
            320,
        ),
        category(
            "3",
            "Design",
            "Visual and user experience design",
            vec![
                sub("3-1", "UI/UX Design", "User interface and experience design", &["Figma", "Sketch", "Adobe XD", "Prototyping"], 200),
                sub("3-2", "Graphic Design", "Visual graphics and branding", &["Photoshop", "Illustrator", "InDesign", "Branding"], 80),
            ],
            280,
        ),
    ]
}

pub fn skills() -> Vec<Skill> {
    [
        ("1", "React", "Web Development", 150),
        ("2", "Python", "Web Development", 120),
        ("3", "Figma", "Design", 95),
        ("4", "Swift", "Mobile Development", 80),
        ("5", "Node.js", "Web Development", 110),
    ]
    .into_iter()
    .map(|(id, name, category, usage_count)| Skill {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        usage_count,
        is_verified: true,
    })
    .collect()
}

// Support

pub fn tickets() -> Vec<Ticket> {
    #[allow(clippy::too_many_arguments)]
    fn ticket(
        id: &str,
        subject: &str,
        user: &str,
        user_type: Role,
        status: TicketStatus,
        priority: TicketPriority,
        category: &str,
        created: DateTime<Utc>,
        last_reply: DateTime<Utc>,
        assigned_to: Option<&str>,
        description: &str,
    ) -> Ticket {
        Ticket {
            id: id.to_string(),
            subject: subject.to_string(),
            user: user.to_string(),
            user_type,
            status,
            priority,
            category: category.to_string(),
            created_at: created,
            last_reply,
            assigned_to: assigned_to.map(str::to_string),
            description: description.to_string(),
        }
    }
    vec![
        ticket(
            "1",
            "Payment Issue - Escrow Release",
            "John Smith",
            Role::Client,
            TicketStatus::Open,
            TicketPriority::Urgent,
            "Payment",
            at(2024, 1, 15, 10, 30),
            at(2024, 1, 15, 10, 30),
            None,
            "Unable to release escrow payment for completed project...",
        ),
        ticket(
            "2",
            "Account Verification Problem",
            "Sarah Johnson",
            Role::Freelancer,
            TicketStatus::InProgress,
            TicketPriority::High,
            "Account",
            at(2024, 1, 14, 14, 20),
            at(2024, 1, 15, 9, 15),
            Some("Support Agent 1"),
            "Documents uploaded but verification still pending...",
        ),
        ticket(
            "3",
            "Profile Settings Not Saving",
            "Mike Chen",
            Role::Freelancer,
            TicketStatus::Resolved,
            TicketPriority::Medium,
            "Technical",
            at(2024, 1, 13, 16, 45),
            at(2024, 1, 14, 11, 30),
            Some("Support Agent 2"),
            "Changes to profile information are not being saved...",
        ),
        ticket(
            "4",
            "Inappropriate Job Posting",
            "Emily Davis",
            Role::Freelancer,
            TicketStatus::Open,
            TicketPriority::Medium,
            "Report",
            at(2024, 1, 15, 8, 15),
            at(2024, 1, 15, 8, 15),
            None,
            "Reporting a job posting that seems to be spam...",
        ),
    ]
}

// CMS

pub fn pages() -> Vec<Page> {
    [
        ("1", "Terms & Conditions", "/terms", PageKind::Policy, PageStatus::Published, date(2024, 1, 15), 1_250),
        ("2", "Privacy Policy", "/privacy", PageKind::Policy, PageStatus::Published, date(2024, 1, 10), 890),
        ("3", "Homepage Hero Banner", "/home-banner", PageKind::Banner, PageStatus::Published, date(2024, 1, 20), 0),
        ("4", "About Us", "/about", PageKind::Page, PageStatus::Draft, date(2024, 1, 18), 0),
    ]
    .into_iter()
    .map(|(id, title, slug, kind, status, last_modified, views)| Page {
        id: id.to_string(),
        title: title.to_string(),
        slug: slug.to_string(),
        kind,
        status,
        last_modified,
        views,
    })
    .collect()
}

pub fn faqs() -> Vec<Faq> {
    [
        (
            "1",
            "How do I create a freelancer account?",
            "To create a freelancer account, click on 'Sign Up' and select 'I'm a Freelancer'. Fill in your details and verify your email.",
            "Getting Started",
        ),
        (
            "2",
            "What are the platform fees?",
            "We charge a 5% service fee on completed projects for freelancers and a 3% processing fee for clients.",
            "Pricing",
        ),
        (
            "3",
            "How does the escrow system work?",
            "Funds are held securely in escrow until project milestones are completed and approved by the client.",
            "Payments",
        ),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (id, question, answer, category))| Faq {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: category.to_string(),
        order: index as u32 + 1,
        published: true,
    })
    .collect()
}

pub fn languages() -> Vec<Language> {
    [
        ("en", "English", true),
        ("es", "Spanish", false),
        ("fr", "French", false),
        ("de", "German", false),
        ("hi", "Hindi", false),
    ]
    .into_iter()
    .map(|(code, name, enabled)| Language {
        code: code.to_string(),
        name: name.to_string(),
        enabled,
    })
    .collect()
}

pub fn mail_templates() -> MailTemplates {
    MailTemplates {
        welcome: "Welcome to our platform! Your account has been created successfully.".to_string(),
        password_reset: "Click here to reset your password: {{reset_link}}".to_string(),
        project_completed: "Congratulations! Your project has been completed.".to_string(),
    }
}

// System

pub const HEALTH_UPDATED: &str = "Last updated: 2 minutes ago";

pub fn health_checks() -> Vec<HealthCheck> {
    vec![
        HealthCheck { name: "Server Status", value: "Healthy", healthy: true },
        HealthCheck { name: "API Response", value: "95ms", healthy: true },
        HealthCheck { name: "Memory Usage", value: "78%", healthy: false },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketplace::filter::Choice;

    #[test]
    fn collection_sizes_match_dashboard() {
        assert_eq!(users().len(), 5);
        assert_eq!(earnings().len(), 4);
        assert_eq!(jobs().len(), 4);
        assert_eq!(transactions().len(), 4);
        assert_eq!(escrow_transactions().len(), 3);
        assert_eq!(commission_transactions().len(), 3);
        assert_eq!(tax_records().len(), 3);
        assert_eq!(tickets().len(), 4);
        assert_eq!(categories().len(), 3);
        assert_eq!(skills().len(), 5);
        assert_eq!(pages().len(), 4);
        assert_eq!(faqs().len(), 3);
        assert_eq!(languages().len(), 5);
    }

    #[test]
    fn job_statuses_cover_every_member_once() {
        let statuses: Vec<JobStatus> = jobs().iter().map(|j| j.status).collect();
        assert_eq!(statuses, JobStatus::ALL.to_vec());
    }

    #[test]
    fn net_amount_is_amount_minus_fee() {
        for tx in transactions() {
            assert_eq!(tx.net_amount, tx.amount - tx.fee);
        }
        assert_eq!(transactions()[0].net_amount, 4_750.0);
    }

    #[test]
    fn user_totals_follow_role() {
        for user in users() {
            match user.role {
                Role::Client => assert!(user.total_spent.is_some() && user.total_earned.is_none()),
                Role::Freelancer => assert!(user.total_earned.is_some() && user.total_spent.is_none()),
            }
        }
    }

    #[test]
    fn commission_rates_follow_tier() {
        for tx in commission_transactions() {
            assert_eq!(tx.commission_rate, tier_rate(tx.tier));
        }
    }

    #[test]
    fn sample_dates_are_real() {
        assert_eq!(jobs()[0].deadline, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
        assert_eq!(
            tickets()[1].last_reply.format("%Y-%m-%d %H:%M").to_string(),
            "2024-01-15 09:15"
        );
    }
}
