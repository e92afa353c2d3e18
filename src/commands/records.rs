use tauri::{AppHandle, Emitter, State};

use crate::models::{MedicalRecord, RecordInput};
use crate::state::AppState;

#[tauri::command]
pub fn list_records(state: State<'_, AppState>) -> Result<Vec<MedicalRecord>, String> {
    let records = state.records.lock().map_err(|_| "records lock poisoned")?;
    Ok(records.list())
}

#[tauri::command]
pub fn add_record(
    app: AppHandle,
    state: State<'_, AppState>,
    input: RecordInput,
) -> Result<MedicalRecord, String> {
    let record = {
        let mut records = state.records.lock().map_err(|_| "records lock poisoned")?;
        records.add(input)?
    };

    let _ = app.emit("records-updated", &record);
    Ok(record)
}

#[tauri::command]
pub fn update_record(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
    input: RecordInput,
) -> Result<MedicalRecord, String> {
    let record = {
        let mut records = state.records.lock().map_err(|_| "records lock poisoned")?;
        records.update(&id, input)?
    };

    let _ = app.emit("records-updated", &record);
    Ok(record)
}

#[tauri::command]
pub fn delete_record(
    app: AppHandle,
    state: State<'_, AppState>,
    id: String,
) -> Result<(), String> {
    {
        let mut records = state.records.lock().map_err(|_| "records lock poisoned")?;
        records.delete(&id)?;
    }

    let _ = app.emit("records-updated", &id);
    Ok(())
}
