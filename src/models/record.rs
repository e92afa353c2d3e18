use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordCategory {
    LabReport,
    Prescription,
    Imaging,
    VisitNote,
    Vaccination,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub title: String,
    pub category: RecordCategory,
    #[serde(default)]
    pub provider: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Fields the frontend supplies when creating or editing a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordInput {
    pub title: String,
    pub category: RecordCategory,
    #[serde(default)]
    pub provider: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}
