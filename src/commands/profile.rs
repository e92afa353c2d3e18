use tauri::{AppHandle, Emitter, State};

use crate::models::HealthProfile;
use crate::services::share_service;
use crate::state::AppState;

#[tauri::command]
pub fn get_profile(state: State<'_, AppState>) -> Result<HealthProfile, String> {
    let profile = state.profile.lock().map_err(|_| "profile lock poisoned")?;
    Ok(profile.clone())
}

#[tauri::command]
pub fn update_profile(
    app: AppHandle,
    state: State<'_, AppState>,
    profile: HealthProfile,
) -> Result<HealthProfile, String> {
    let mut profile = profile;
    profile.full_name = profile.full_name.trim().to_string();

    {
        let mut current = state.profile.lock().map_err(|_| "profile lock poisoned")?;
        *current = profile.clone();
    }

    let _ = app.emit("profile-updated", &profile);
    Ok(profile)
}

/// Deep link for handing the profile to another device or caregiver.
#[tauri::command]
pub fn get_profile_share_link(state: State<'_, AppState>) -> Result<String, String> {
    let profile = {
        let profile = state.profile.lock().map_err(|_| "profile lock poisoned")?;
        profile.clone()
    };

    share_service::build_share_link(&profile)
}

/// The share link rendered as an SVG QR code for the profile screen.
#[tauri::command]
pub fn get_profile_qr_svg(state: State<'_, AppState>) -> Result<String, String> {
    let profile = {
        let profile = state.profile.lock().map_err(|_| "profile lock poisoned")?;
        profile.clone()
    };

    let link = share_service::build_share_link(&profile)?;
    share_service::render_qr_svg(&link)
}
