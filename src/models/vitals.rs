use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VitalKind {
    Steps,
    HeartRate,
    SleepHours,
    ActiveEnergy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSample {
    pub kind: VitalKind,
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Aggregates shown on the home dashboard. When health data access has not
/// been granted every numeric field reads zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub authorized: bool,
    pub steps_today: f64,
    pub active_energy_today: f64,
    pub latest_heart_rate: Option<f64>,
    pub sleep_hours_last_night: f64,
    pub as_of: DateTime<Utc>,
}
