//! Alert collection state.

use crate::state::FetchLifecycle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

/// Display metadata for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityBadge {
    pub label: &'static str,
    pub symbol: &'static str,
}

impl Severity {
    /// Display metadata for this level. Total over the enum.
    pub fn badge(&self) -> SeverityBadge {
        match self {
            Self::Critical => SeverityBadge {
                label: "Critical",
                symbol: "🚨",
            },
            Self::High => SeverityBadge {
                label: "High",
                symbol: "⚠️",
            },
            Self::Medium => SeverityBadge {
                label: "Medium",
                symbol: "🟡",
            },
            Self::Low => SeverityBadge {
                label: "Low",
                symbol: "✅",
            },
        }
    }

    /// Urgency rank, 0 = most urgent.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

/// A market alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Provider-assigned identifier.
    pub id: String,
    /// Alert message.
    pub message: String,
    /// Severity level.
    pub severity: Severity,
    /// Time the alert fired.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// State for the alerts collection.
#[derive(Debug, Default)]
pub struct AlertState {
    /// All loaded alerts, in provider order.
    pub items: Vec<Alert>,
    /// Fetch lifecycle tracking.
    pub lifecycle: FetchLifecycle,
}

impl AlertState {
    /// Get alerts at a given severity level.
    pub fn by_severity(&self, severity: Severity) -> Vec<&Alert> {
        self.items
            .iter()
            .filter(|alert| alert.severity == severity)
            .collect()
    }

    /// Get alerts ordered by urgency, most urgent first. Ties keep
    /// provider order.
    pub fn by_urgency(&self) -> Vec<&Alert> {
        let mut alerts: Vec<&Alert> = self.items.iter().collect();
        alerts.sort_by_key(|alert| alert.severity.rank());
        alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_alert(id: &str, severity: Severity) -> Alert {
        Alert {
            id: id.to_string(),
            message: format!("alert {id}"),
            severity,
            timestamp: None,
        }
    }

    #[test]
    fn test_badge_mapping_is_total() {
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            let badge = severity.badge();
            assert!(!badge.label.is_empty());
            assert!(!badge.symbol.is_empty());
        }
        assert_eq!(Severity::Critical.badge().label, "Critical");
    }

    #[test]
    fn test_severity_parses_from_wire_names() {
        let severity: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(severity, Severity::Critical);
        assert!(serde_json::from_str::<Severity>("\"urgent\"").is_err());
    }

    #[test]
    fn test_by_severity_filters() {
        let state = AlertState {
            items: vec![
                create_test_alert("1", Severity::Low),
                create_test_alert("2", Severity::Critical),
                create_test_alert("3", Severity::Low),
            ],
            ..AlertState::default()
        };
        assert_eq!(state.by_severity(Severity::Low).len(), 2);
        assert_eq!(state.by_severity(Severity::High).len(), 0);
    }

    #[test]
    fn test_by_urgency_orders_critical_first() {
        let state = AlertState {
            items: vec![
                create_test_alert("1", Severity::Low),
                create_test_alert("2", Severity::Critical),
                create_test_alert("3", Severity::Medium),
            ],
            ..AlertState::default()
        };
        let ordered: Vec<&str> = state.by_urgency().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ordered, vec!["2", "3", "1"]);
    }
}
