use crate::marketplace::models::HealthCheck;
use crate::marketplace::sample;

#[derive(Debug, Clone, PartialEq)]
pub struct SystemPanel {
    pub checks: Vec<HealthCheck>,
    pub updated: &'static str,
}

impl Default for SystemPanel {
    fn default() -> Self {
        SystemPanel {
            checks: sample::health_checks(),
            updated: sample::HEALTH_UPDATED,
        }
    }
}

impl SystemPanel {
    pub fn warnings(&self) -> usize {
        self.checks.iter().filter(|c| !c.healthy).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_usage_is_the_only_warning() {
        let panel = SystemPanel::default();
        assert_eq!(panel.warnings(), 1);
        assert!(panel.checks.iter().any(|c| c.name == "Memory Usage" && !c.healthy));
    }
}
