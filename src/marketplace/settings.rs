//! Platform settings form model.
//!
//! Holds the editable platform configuration shown on the settings panel.
//! Nothing here is persisted: saving only produces a confirmation notice.

use super::error::ValidationError;
use regex::Regex;
use std::fmt;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const HOST_PATTERN: &str = r"^[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$";

/// Tabs of the settings form.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsTab {
    General,
    Financial,
    Security,
    Email,
    Content,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::Financial,
        SettingsTab::Security,
        SettingsTab::Email,
        SettingsTab::Content,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Financial => "Financial",
            SettingsTab::Security => "Security",
            SettingsTab::Email => "Email",
            SettingsTab::Content => "Content",
        }
    }
}

/// How a field accepts input.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Host,
    Toggle,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        integer: bool,
    },
}

/// Every editable setting.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SiteName,
    SiteDescription,
    MaintenanceMode,
    AllowRegistration,
    RequireEmailVerification,
    PlatformCommission,
    PaymentProcessingFee,
    WithdrawalFee,
    MinimumWithdrawal,
    PasswordMinLength,
    SessionTimeout,
    MaxLoginAttempts,
    TwoFactorRequired,
    SmtpHost,
    SmtpPort,
    FromEmail,
    FromName,
    MaxProjectBudget,
    ProjectBidDeadline,
    AutomaticPaymentRelease,
    DisputeResolutionTime,
}

const fn number(min: Option<f64>, max: Option<f64>, integer: bool) -> FieldKind {
    FieldKind::Number { min, max, integer }
}

impl Field {
    pub const ALL: [Field; 21] = [
        Field::SiteName,
        Field::SiteDescription,
        Field::MaintenanceMode,
        Field::AllowRegistration,
        Field::RequireEmailVerification,
        Field::PlatformCommission,
        Field::PaymentProcessingFee,
        Field::WithdrawalFee,
        Field::MinimumWithdrawal,
        Field::PasswordMinLength,
        Field::SessionTimeout,
        Field::MaxLoginAttempts,
        Field::TwoFactorRequired,
        Field::SmtpHost,
        Field::SmtpPort,
        Field::FromEmail,
        Field::FromName,
        Field::MaxProjectBudget,
        Field::ProjectBidDeadline,
        Field::AutomaticPaymentRelease,
        Field::DisputeResolutionTime,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::SiteName => "Site Name",
            Field::SiteDescription => "Site Description",
            Field::MaintenanceMode => "Maintenance Mode",
            Field::AllowRegistration => "Allow User Registration",
            Field::RequireEmailVerification => "Require Email Verification",
            Field::PlatformCommission => "Platform Commission (%)",
            Field::PaymentProcessingFee => "Payment Processing Fee (%)",
            Field::WithdrawalFee => "Withdrawal Fee ($)",
            Field::MinimumWithdrawal => "Minimum Withdrawal Amount ($)",
            Field::PasswordMinLength => "Minimum Password Length",
            Field::SessionTimeout => "Session Timeout (minutes)",
            Field::MaxLoginAttempts => "Max Login Attempts",
            Field::TwoFactorRequired => "Require Two-Factor Authentication",
            Field::SmtpHost => "SMTP Host",
            Field::SmtpPort => "SMTP Port",
            Field::FromEmail => "From Email Address",
            Field::FromName => "From Name",
            Field::MaxProjectBudget => "Maximum Project Budget ($)",
            Field::ProjectBidDeadline => "Project Bid Deadline (days)",
            Field::AutomaticPaymentRelease => "Automatic Payment Release (days)",
            Field::DisputeResolutionTime => "Dispute Resolution Time (days)",
        }
    }

    pub fn tab(&self) -> SettingsTab {
        match self {
            Field::SiteName
            | Field::SiteDescription
            | Field::MaintenanceMode
            | Field::AllowRegistration
            | Field::RequireEmailVerification => SettingsTab::General,
            Field::PlatformCommission
            | Field::PaymentProcessingFee
            | Field::WithdrawalFee
            | Field::MinimumWithdrawal => SettingsTab::Financial,
            Field::PasswordMinLength
            | Field::SessionTimeout
            | Field::MaxLoginAttempts
            | Field::TwoFactorRequired => SettingsTab::Security,
            Field::SmtpHost | Field::SmtpPort | Field::FromEmail | Field::FromName => {
                SettingsTab::Email
            }
            Field::MaxProjectBudget
            | Field::ProjectBidDeadline
            | Field::AutomaticPaymentRelease
            | Field::DisputeResolutionTime => SettingsTab::Content,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::SiteName | Field::SiteDescription | Field::FromName => FieldKind::Text,
            Field::FromEmail => FieldKind::Email,
            Field::SmtpHost => FieldKind::Host,
            Field::MaintenanceMode
            | Field::AllowRegistration
            | Field::RequireEmailVerification
            | Field::TwoFactorRequired => FieldKind::Toggle,
            Field::PlatformCommission => number(Some(0.0), Some(20.0), false),
            Field::PaymentProcessingFee => number(Some(0.0), Some(5.0), false),
            Field::WithdrawalFee => number(Some(0.0), None, false),
            Field::MinimumWithdrawal => number(Some(1.0), None, false),
            Field::PasswordMinLength => number(Some(6.0), Some(20.0), true),
            Field::SessionTimeout => number(Some(15.0), Some(120.0), true),
            Field::MaxLoginAttempts => number(Some(3.0), Some(10.0), true),
            Field::SmtpPort => number(Some(1.0), Some(65535.0), true),
            Field::MaxProjectBudget => number(Some(1000.0), None, true),
            Field::ProjectBidDeadline => number(Some(1.0), Some(30.0), true),
            Field::AutomaticPaymentRelease => number(Some(1.0), Some(30.0), true),
            Field::DisputeResolutionTime => number(Some(3.0), Some(30.0), true),
        }
    }

    /// Fields shown on the given tab, in form order.
    ///
    pub fn on_tab(tab: SettingsTab) -> Vec<Field> {
        Field::ALL.iter().copied().filter(|f| f.tab() == tab).collect()
    }
}

/// Current value of a field.
///
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Number(f64),
    Toggle(bool),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(text) => write!(f, "{}", text),
            SettingValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            SettingValue::Number(n) => write!(f, "{}", n),
            SettingValue::Toggle(true) => write!(f, "On"),
            SettingValue::Toggle(false) => write!(f, "Off"),
        }
    }
}

/// Outcome of an accepted edit.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Accepted,
    Clamped { requested: f64, stored: f64 },
}

/// The platform configuration as edited on the settings panel.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformSettings {
    pub site_name: String,
    pub site_description: String,
    pub maintenance_mode: bool,
    pub allow_registration: bool,
    pub require_email_verification: bool,
    pub platform_commission: f64,
    pub payment_processing_fee: f64,
    pub withdrawal_fee: f64,
    pub minimum_withdrawal: f64,
    pub password_min_length: f64,
    pub session_timeout: f64,
    pub max_login_attempts: f64,
    pub two_factor_required: bool,
    pub smtp_host: String,
    pub smtp_port: f64,
    pub from_email: String,
    pub from_name: String,
    pub max_project_budget: f64,
    pub project_bid_deadline: f64,
    pub automatic_payment_release: f64,
    pub dispute_resolution_time: f64,
}

impl Default for PlatformSettings {
    fn default() -> Self {
        PlatformSettings {
            site_name: "FreelanceHub".to_string(),
            site_description: "Professional freelance marketplace".to_string(),
            maintenance_mode: false,
            allow_registration: true,
            require_email_verification: true,
            platform_commission: 5.0,
            payment_processing_fee: 2.9,
            withdrawal_fee: 25.0,
            minimum_withdrawal: 50.0,
            password_min_length: 8.0,
            session_timeout: 30.0,
            max_login_attempts: 5.0,
            two_factor_required: false,
            smtp_host: "smtp.freelancehub.com".to_string(),
            smtp_port: 587.0,
            from_email: "noreply@freelancehub.com".to_string(),
            from_name: "FreelanceHub".to_string(),
            max_project_budget: 100_000.0,
            project_bid_deadline: 14.0,
            automatic_payment_release: 7.0,
            dispute_resolution_time: 10.0,
        }
    }
}

impl PlatformSettings {
    pub fn get(&self, field: Field) -> SettingValue {
        match field {
            Field::SiteName => SettingValue::Text(self.site_name.clone()),
            Field::SiteDescription => SettingValue::Text(self.site_description.clone()),
            Field::MaintenanceMode => SettingValue::Toggle(self.maintenance_mode),
            Field::AllowRegistration => SettingValue::Toggle(self.allow_registration),
            Field::RequireEmailVerification => {
                SettingValue::Toggle(self.require_email_verification)
            }
            Field::PlatformCommission => SettingValue::Number(self.platform_commission),
            Field::PaymentProcessingFee => SettingValue::Number(self.payment_processing_fee),
            Field::WithdrawalFee => SettingValue::Number(self.withdrawal_fee),
            Field::MinimumWithdrawal => SettingValue::Number(self.minimum_withdrawal),
            Field::PasswordMinLength => SettingValue::Number(self.password_min_length),
            Field::SessionTimeout => SettingValue::Number(self.session_timeout),
            Field::MaxLoginAttempts => SettingValue::Number(self.max_login_attempts),
            Field::TwoFactorRequired => SettingValue::Toggle(self.two_factor_required),
            Field::SmtpHost => SettingValue::Text(self.smtp_host.clone()),
            Field::SmtpPort => SettingValue::Number(self.smtp_port),
            Field::FromEmail => SettingValue::Text(self.from_email.clone()),
            Field::FromName => SettingValue::Text(self.from_name.clone()),
            Field::MaxProjectBudget => SettingValue::Number(self.max_project_budget),
            Field::ProjectBidDeadline => SettingValue::Number(self.project_bid_deadline),
            Field::AutomaticPaymentRelease => SettingValue::Number(self.automatic_payment_release),
            Field::DisputeResolutionTime => SettingValue::Number(self.dispute_resolution_time),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::SiteName => Some(&mut self.site_name),
            Field::SiteDescription => Some(&mut self.site_description),
            Field::SmtpHost => Some(&mut self.smtp_host),
            Field::FromEmail => Some(&mut self.from_email),
            Field::FromName => Some(&mut self.from_name),
            _ => None,
        }
    }

    fn number_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::PlatformCommission => Some(&mut self.platform_commission),
            Field::PaymentProcessingFee => Some(&mut self.payment_processing_fee),
            Field::WithdrawalFee => Some(&mut self.withdrawal_fee),
            Field::MinimumWithdrawal => Some(&mut self.minimum_withdrawal),
            Field::PasswordMinLength => Some(&mut self.password_min_length),
            Field::SessionTimeout => Some(&mut self.session_timeout),
            Field::MaxLoginAttempts => Some(&mut self.max_login_attempts),
            Field::SmtpPort => Some(&mut self.smtp_port),
            Field::MaxProjectBudget => Some(&mut self.max_project_budget),
            Field::ProjectBidDeadline => Some(&mut self.project_bid_deadline),
            Field::AutomaticPaymentRelease => Some(&mut self.automatic_payment_release),
            Field::DisputeResolutionTime => Some(&mut self.dispute_resolution_time),
            _ => None,
        }
    }

    fn toggle_mut(&mut self, field: Field) -> Option<&mut bool> {
        match field {
            Field::MaintenanceMode => Some(&mut self.maintenance_mode),
            Field::AllowRegistration => Some(&mut self.allow_registration),
            Field::RequireEmailVerification => Some(&mut self.require_email_verification),
            Field::TwoFactorRequired => Some(&mut self.two_factor_required),
            _ => None,
        }
    }

    /// Flip a toggle field. Returns the new value, or `None` if the field is
    /// not a toggle.
    ///
    pub fn toggle(&mut self, field: Field) -> Option<bool> {
        let flag = self.toggle_mut(field)?;
        *flag = !*flag;
        Some(*flag)
    }

    /// Validate raw input for `field` and store it. Invalid input, including
    /// a fraction for a whole-number field, leaves the settings untouched;
    /// out-of-range numbers are clamped.
    ///
    pub fn apply(&mut self, field: Field, raw: &str) -> Result<Applied, ValidationError> {
        let raw = raw.trim();
        match field.kind() {
            FieldKind::Toggle => Err(ValidationError::NotEditable {
                field: field.label(),
            }),
            FieldKind::Number { min, max, integer } => {
                let requested: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
                    field: field.label(),
                    input: raw.to_string(),
                })?;
                if !requested.is_finite() {
                    return Err(ValidationError::NotANumber {
                        field: field.label(),
                        input: raw.to_string(),
                    });
                }
                if integer && requested.fract() != 0.0 {
                    return Err(ValidationError::NotAWholeNumber {
                        field: field.label(),
                        input: raw.to_string(),
                    });
                }
                let stored = clamp(requested, min, max);
                if let Some(slot) = self.number_mut(field) {
                    *slot = stored;
                }
                if stored == requested {
                    Ok(Applied::Accepted)
                } else {
                    log::debug!("Clamped {} from {} to {}", field.label(), requested, stored);
                    Ok(Applied::Clamped { requested, stored })
                }
            }
            kind => {
                validate_text(field, kind, raw)?;
                if let Some(slot) = self.text_mut(field) {
                    *slot = raw.to_string();
                }
                Ok(Applied::Accepted)
            }
        }
    }
}

fn clamp(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let value = min.map_or(value, |min| value.max(min));
    max.map_or(value, |max| value.min(max))
}

fn matches(pattern: &str, text: &str) -> bool {
    Regex::new(pattern)
        .map(|re| re.is_match(text))
        .unwrap_or(false)
}

fn validate_text(field: Field, kind: FieldKind, raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty {
            field: field.label(),
        });
    }
    match kind {
        FieldKind::Email if !matches(EMAIL_PATTERN, raw) => {
            Err(ValidationError::InvalidEmail(raw.to_string()))
        }
        FieldKind::Host if !matches(HOST_PATTERN, raw) => {
            Err(ValidationError::InvalidHost(raw.to_string()))
        }
        _ => Ok(()),
    }
}

/// Transient confirmation shown after a successful save.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(title: &str, description: &str) -> Self {
        Notice {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn settings_saved() -> Self {
        Notice::new(
            "Settings Updated",
            "Platform settings have been successfully updated.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_configuration() {
        let settings = PlatformSettings::default();
        assert_eq!(settings.get(Field::PlatformCommission), SettingValue::Number(5.0));
        assert_eq!(settings.get(Field::SmtpPort).to_string(), "587");
        assert_eq!(settings.get(Field::PaymentProcessingFee).to_string(), "2.9");
        assert_eq!(settings.get(Field::AllowRegistration), SettingValue::Toggle(true));
    }

    #[test]
    fn every_tab_has_fields() {
        for tab in SettingsTab::ALL {
            assert!(!Field::on_tab(tab).is_empty(), "{} is empty", tab.title());
        }
        let total: usize = SettingsTab::ALL.iter().map(|t| Field::on_tab(*t).len()).sum();
        assert_eq!(total, Field::ALL.len());
    }

    #[test]
    fn numbers_clamp_at_both_bounds() {
        let mut settings = PlatformSettings::default();
        assert_eq!(
            settings.apply(Field::PlatformCommission, "35"),
            Ok(Applied::Clamped {
                requested: 35.0,
                stored: 20.0
            })
        );
        assert_eq!(settings.platform_commission, 20.0);

        assert_eq!(
            settings.apply(Field::SessionTimeout, "5"),
            Ok(Applied::Clamped {
                requested: 5.0,
                stored: 15.0
            })
        );
        assert_eq!(settings.session_timeout, 15.0);

        assert_eq!(settings.apply(Field::WithdrawalFee, "1000"), Ok(Applied::Accepted));
        assert_eq!(settings.withdrawal_fee, 1000.0);
    }

    #[test]
    fn non_numeric_input_is_rejected_without_change() {
        let mut settings = PlatformSettings::default();
        let result = settings.apply(Field::MaxLoginAttempts, "many");
        assert!(matches!(result, Err(ValidationError::NotANumber { .. })));
        assert_eq!(settings, PlatformSettings::default());

        let result = settings.apply(Field::MaxLoginAttempts, "NaN");
        assert!(result.is_err());
        assert_eq!(settings.max_login_attempts, 5.0);
    }

    #[test]
    fn integer_fields_reject_fractions() {
        let mut settings = PlatformSettings::default();
        assert_eq!(
            settings.apply(Field::ProjectBidDeadline, "7.8"),
            Err(ValidationError::NotAWholeNumber {
                field: Field::ProjectBidDeadline.label(),
                input: "7.8".to_string(),
            })
        );
        assert_eq!(settings, PlatformSettings::default());

        assert_eq!(settings.apply(Field::ProjectBidDeadline, "7.0"), Ok(Applied::Accepted));
        assert_eq!(settings.project_bid_deadline, 7.0);
        assert_eq!(settings.apply(Field::PlatformCommission, "7.5"), Ok(Applied::Accepted));
    }

    #[test]
    fn email_and_host_are_validated() {
        let mut settings = PlatformSettings::default();
        assert_eq!(
            settings.apply(Field::FromEmail, "not-an-email"),
            Err(ValidationError::InvalidEmail("not-an-email".to_string()))
        );
        assert_eq!(settings.from_email, "noreply@freelancehub.com");
        assert_eq!(settings.apply(Field::FromEmail, "ops@freelancehub.io"), Ok(Applied::Accepted));
        assert_eq!(settings.from_email, "ops@freelancehub.io");

        assert!(settings.apply(Field::SmtpHost, "smtp host").is_err());
        assert!(settings.apply(Field::SmtpHost, "mail.example.org").is_ok());
    }

    #[test]
    fn text_fields_must_not_be_blank() {
        let mut settings = PlatformSettings::default();
        assert_eq!(
            settings.apply(Field::SiteName, "   "),
            Err(ValidationError::Empty { field: "Site Name" })
        );
    }

    #[test]
    fn toggles_flip_only_their_field() {
        let mut settings = PlatformSettings::default();
        assert_eq!(settings.toggle(Field::MaintenanceMode), Some(true));
        assert_eq!(settings.toggle(Field::SiteName), None);
        let mut expected = PlatformSettings::default();
        expected.maintenance_mode = true;
        assert_eq!(settings, expected);
        assert!(settings.apply(Field::MaintenanceMode, "on").is_err());
    }
}
