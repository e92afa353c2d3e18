use chrono::{DateTime, Utc};
use tauri::{AppHandle, Emitter, State};

use crate::models::{DashboardSummary, VitalKind};
use crate::state::AppState;

/// Log one vital sample. `recorded_at` defaults to now; sensor bridges pass
/// the device timestamp instead.
#[tauri::command]
pub fn record_vital(
    app: AppHandle,
    state: State<'_, AppState>,
    kind: VitalKind,
    value: f64,
    recorded_at: Option<DateTime<Utc>>,
) -> Result<(), String> {
    let recorded_at = recorded_at.unwrap_or_else(Utc::now);

    {
        let mut vitals = state.vitals.lock().map_err(|_| "vitals lock poisoned")?;
        vitals.record(kind, value, recorded_at)?;
    }

    let _ = app.emit("vitals-updated", ());
    Ok(())
}

#[tauri::command]
pub fn get_dashboard_summary(state: State<'_, AppState>) -> Result<DashboardSummary, String> {
    let vitals = state.vitals.lock().map_err(|_| "vitals lock poisoned")?;
    Ok(vitals.summary(Utc::now()))
}

#[tauri::command]
pub fn set_health_authorization(
    app: AppHandle,
    state: State<'_, AppState>,
    granted: bool,
) -> Result<(), String> {
    {
        let mut vitals = state.vitals.lock().map_err(|_| "vitals lock poisoned")?;
        vitals.set_authorized(granted);
    }

    let _ = app.emit("vitals-updated", ());
    Ok(())
}
