use chrono::Utc;
use tauri::{AppHandle, Emitter, State};

use crate::models::{TranscriptResult, TranscriptionState};
use crate::state::AppState;

#[tauri::command]
pub fn start_transcription(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<TranscriptionState, String> {
    let snapshot = {
        let mut session = state
            .transcription
            .lock()
            .map_err(|_| "transcription lock poisoned")?;
        session.start(Utc::now())?;
        session.state()
    };

    let _ = app.emit("transcription-updated", &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn push_transcript_segment(
    app: AppHandle,
    state: State<'_, AppState>,
    text: String,
) -> Result<TranscriptionState, String> {
    let snapshot = {
        let mut session = state
            .transcription
            .lock()
            .map_err(|_| "transcription lock poisoned")?;
        session.push_segment(&text)?;
        session.state()
    };

    let _ = app.emit("transcription-updated", &snapshot);
    Ok(snapshot)
}

#[tauri::command]
pub fn stop_transcription(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<TranscriptResult, String> {
    let (result, snapshot) = {
        let mut session = state
            .transcription
            .lock()
            .map_err(|_| "transcription lock poisoned")?;
        let result = session.stop(Utc::now())?;
        let snapshot = session.state();
        (result, snapshot)
    };

    let _ = app.emit("transcription-updated", &snapshot);
    Ok(result)
}

#[tauri::command]
pub fn get_transcription_state(
    state: State<'_, AppState>,
) -> Result<TranscriptionState, String> {
    let session = state
        .transcription
        .lock()
        .map_err(|_| "transcription lock poisoned")?;
    Ok(session.state())
}
