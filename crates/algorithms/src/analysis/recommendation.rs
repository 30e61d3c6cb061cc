//! Actionable recommendations from a trend report

use serde::{Deserialize, Serialize};

use super::report::TrendReport;
use crate::imagery::HealthStatus;
use crate::statistics::{AnomalySeverity, TrendDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitoringFrequency {
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stakeholder {
    #[serde(rename = "Forest Department")]
    ForestDepartment,
    #[serde(rename = "Local Community Leaders")]
    LocalCommunityLeaders,
    #[serde(rename = "Environmental NGOs")]
    EnvironmentalNgos,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub actions: Vec<String>,
    pub priority: Priority,
    pub action_required: bool,
    pub monitoring_frequency: MonitoringFrequency,
    pub stakeholders: Vec<Stakeholder>,
}

/// Turn a report into prioritized field actions.
pub fn recommend(report: &TrendReport) -> Recommendation {
    let mut actions: Vec<String> = Vec::new();
    let mut priority = Priority::Low;
    let mut action_required = false;

    match report.health_assessment.status {
        HealthStatus::Critical | HealthStatus::SeverelyDegraded => {
            actions.push("Immediate field verification required".into());
            actions.push("Implement emergency conservation measures".into());
            actions.push("Contact local forest officials".into());
            priority = Priority::Critical;
            action_required = true;
        }
        HealthStatus::Degraded => {
            actions.push("Schedule field inspection within 7 days".into());
            actions.push("Monitor for encroachment or illegal activities".into());
            actions.push("Consider soil conservation measures".into());
            priority = Priority::High;
            action_required = true;
        }
        HealthStatus::Moderate => {
            actions.push("Increase monitoring frequency".into());
            actions.push("Check for early signs of degradation".into());
            priority = Priority::Medium;
        }
        HealthStatus::Healthy => {}
    }

    if report.trend_analysis.overall_trend == TrendDirection::Declining {
        actions.push("Investigate causes of vegetation decline".into());
        actions.push("Implement preventive conservation strategies".into());
        if priority == Priority::Low {
            priority = Priority::Medium;
        }
    }

    if !report.anomalies.is_empty() {
        actions.push(format!(
            "Investigate {} anomalous readings",
            report.anomalies.len()
        ));
        if report
            .anomalies
            .iter()
            .any(|a| a.severity == AnomalySeverity::Extreme)
        {
            priority = priority.max(Priority::High);
            action_required = true;
        }
    }

    let urgent = matches!(priority, Priority::Critical | Priority::High);
    let mut stakeholders = Vec::new();
    if urgent {
        stakeholders.push(Stakeholder::ForestDepartment);
    }
    if action_required {
        stakeholders.push(Stakeholder::LocalCommunityLeaders);
    }
    if priority == Priority::Critical {
        stakeholders.push(Stakeholder::EnvironmentalNgos);
    }

    Recommendation {
        actions,
        priority,
        action_required,
        monitoring_frequency: if urgent {
            MonitoringFrequency::Weekly
        } else {
            MonitoringFrequency::Monthly
        },
        stakeholders,
    }
}
