pub mod config_service;
pub mod guidance_service;
pub mod health_service;
pub mod llm_client;
pub mod record_service;
pub mod share_service;
pub mod transcription_service;
