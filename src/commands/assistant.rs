use chrono::Utc;
use tauri::{AppHandle, Emitter, State};
use tracing::warn;
use uuid::Uuid;

use crate::models::{AssistantCategory, CategoryInfo, ChatEntry};
use crate::services::guidance_service;
use crate::services::llm_client::LlmClient;
use crate::state::AppState;

#[tauri::command]
pub fn list_assistant_categories() -> Result<Vec<CategoryInfo>, String> {
    Ok(AssistantCategory::ALL
        .iter()
        .copied()
        .map(CategoryInfo::from)
        .collect())
}

/// Ask the assistant a question. The user's entry is appended to the chat
/// immediately; if the completion fails the assistant still "replies" with
/// an apology carrying the reason, so the conversation never dead-ends.
#[tauri::command]
pub async fn ask_assistant(
    app: AppHandle,
    state: State<'_, AppState>,
    query: String,
    category: String,
) -> Result<ChatEntry, String> {
    let trimmed = query.trim().to_string();
    if trimmed.is_empty() {
        return Err("Question must not be empty".to_string());
    }

    let client = LlmClient::from_config()?;

    let user_entry = ChatEntry {
        id: Uuid::new_v4().to_string(),
        role: "user".to_string(),
        content: trimmed.clone(),
        timestamp: Utc::now(),
    };
    {
        let mut chat = state.chat.lock().map_err(|_| "chat lock poisoned")?;
        chat.push(user_entry.clone());
    }
    let _ = app.emit("chat-updated", &user_entry);

    let content = match guidance_service::get_guidance(&client, &trimmed, &category).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, category = %category, "guidance request failed");
            format!("I'm sorry, I encountered an issue: {}. Please try again.", e)
        }
    };

    let assistant_entry = ChatEntry {
        id: Uuid::new_v4().to_string(),
        role: "assistant".to_string(),
        content,
        timestamp: Utc::now(),
    };
    {
        let mut chat = state.chat.lock().map_err(|_| "chat lock poisoned")?;
        chat.push(assistant_entry.clone());
    }
    let _ = app.emit("chat-updated", &assistant_entry);

    Ok(assistant_entry)
}

#[tauri::command]
pub fn get_chat_history(state: State<'_, AppState>) -> Result<Vec<ChatEntry>, String> {
    let chat = state.chat.lock().map_err(|_| "chat lock poisoned")?;
    Ok(chat.clone())
}

#[tauri::command]
pub fn clear_chat_history(app: AppHandle, state: State<'_, AppState>) -> Result<(), String> {
    {
        let mut chat = state.chat.lock().map_err(|_| "chat lock poisoned")?;
        chat.clear();
    }
    let _ = app.emit("chat-updated", ());
    Ok(())
}
