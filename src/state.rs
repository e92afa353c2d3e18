use std::sync::Mutex;

use crate::models::{ChatEntry, HealthProfile};
use crate::services::health_service::VitalsLog;
use crate::services::record_service::RecordStore;
use crate::services::transcription_service::TranscriptionSession;

/// Session state managed by the Tauri builder. Nothing in here outlives the
/// process; only the settings file is persisted.
#[derive(Default)]
pub struct AppState {
    pub chat: Mutex<Vec<ChatEntry>>,
    pub records: Mutex<RecordStore>,
    pub profile: Mutex<HealthProfile>,
    pub vitals: Mutex<VitalsLog>,
    pub transcription: Mutex<TranscriptionSession>,
}
