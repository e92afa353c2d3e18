use url::Url;

use crate::services::config_service;

#[tauri::command]
pub fn get_api_key() -> Result<Option<String>, String> {
    config_service::get_api_key()
}

#[tauri::command]
pub fn set_api_key(key: String) -> Result<(), String> {
    config_service::set_api_key(key.trim())
}

#[tauri::command]
pub fn get_api_key_status() -> Result<bool, String> {
    let key = config_service::get_api_key()?;
    Ok(key.map(|k| !k.trim().is_empty()).unwrap_or(false))
}

#[tauri::command]
pub fn get_base_url() -> Result<Option<String>, String> {
    config_service::get_base_url()
}

#[tauri::command]
pub fn set_base_url(url: String) -> Result<(), String> {
    let url = url.trim();
    // an empty value falls back to the built-in default endpoint
    if !url.is_empty() {
        Url::parse(url).map_err(|_| "Base URL is not a valid URL".to_string())?;
    }
    config_service::set_base_url(url)
}

#[tauri::command]
pub fn get_model() -> Result<Option<String>, String> {
    config_service::get_model()
}

#[tauri::command]
pub fn set_model(model: String) -> Result<(), String> {
    config_service::set_model(model.trim())
}

#[tauri::command]
pub fn get_config() -> Result<config_service::Config, String> {
    config_service::get_full_config()
}
