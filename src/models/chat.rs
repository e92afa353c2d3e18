use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatEntry {
    pub id: String,
    pub role: String,        // "user" or "assistant"
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The assistant specialties the frontend can pick from. Tags are the stable
/// identifiers exchanged with the UI; labels are for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssistantCategory {
    #[serde(rename = "general")]
    General,
    #[serde(rename = "medication")]
    Medication,
    #[serde(rename = "nutrition")]
    Nutrition,
    #[serde(rename = "mental-health")]
    MentalHealth,
    #[serde(rename = "chronic-care")]
    ChronicCare,
}

impl AssistantCategory {
    pub const ALL: [AssistantCategory; 5] = [
        AssistantCategory::General,
        AssistantCategory::Medication,
        AssistantCategory::Nutrition,
        AssistantCategory::MentalHealth,
        AssistantCategory::ChronicCare,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            AssistantCategory::General => "general",
            AssistantCategory::Medication => "medication",
            AssistantCategory::Nutrition => "nutrition",
            AssistantCategory::MentalHealth => "mental-health",
            AssistantCategory::ChronicCare => "chronic-care",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssistantCategory::General => "General Health",
            AssistantCategory::Medication => "Medication",
            AssistantCategory::Nutrition => "Nutrition",
            AssistantCategory::MentalHealth => "Mental Health",
            AssistantCategory::ChronicCare => "Chronic Care",
        }
    }

    pub fn from_tag(tag: &str) -> Option<AssistantCategory> {
        match tag.trim().to_lowercase().as_str() {
            "general" => Some(AssistantCategory::General),
            "medication" => Some(AssistantCategory::Medication),
            "nutrition" => Some(AssistantCategory::Nutrition),
            "mental-health" => Some(AssistantCategory::MentalHealth),
            "chronic-care" => Some(AssistantCategory::ChronicCare),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub tag: String,
    pub label: String,
}

impl From<AssistantCategory> for CategoryInfo {
    fn from(category: AssistantCategory) -> Self {
        Self {
            tag: category.tag().to_string(),
            label: category.label().to_string(),
        }
    }
}
