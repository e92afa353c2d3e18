mod commands;
mod models;
mod services;
mod state;

use commands::*;
use state::AppState;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    init_tracing();

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::default())
        .invoke_handler(tauri::generate_handler![
            // Config commands
            get_api_key,
            set_api_key,
            get_api_key_status,
            get_base_url,
            set_base_url,
            get_model,
            set_model,
            get_config,
            // Assistant commands
            list_assistant_categories,
            ask_assistant,
            get_chat_history,
            clear_chat_history,
            // Record commands
            list_records,
            add_record,
            update_record,
            delete_record,
            // Profile commands
            get_profile,
            update_profile,
            get_profile_share_link,
            get_profile_qr_svg,
            // Vitals commands
            record_vital,
            get_dashboard_summary,
            set_health_authorization,
            // Transcription commands
            start_transcription,
            push_transcript_segment,
            stop_transcription,
            get_transcription_state,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
