use chrono::{DateTime, Utc};

use crate::models::{TranscriptResult, TranscriptionState};

/// Visit-note capture session: idle until started, collects partial text
/// segments while recording, yields the full transcript on stop.
#[derive(Debug, Default)]
pub struct TranscriptionSession {
    recording: bool,
    started_at: Option<DateTime<Utc>>,
    segments: Vec<String>,
}

impl TranscriptionSession {
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), String> {
        if self.recording {
            return Err("A recording is already in progress".to_string());
        }

        self.recording = true;
        self.started_at = Some(now);
        self.segments.clear();
        Ok(())
    }

    /// Append a partial transcript segment. Blank segments are dropped.
    pub fn push_segment(&mut self, text: &str) -> Result<(), String> {
        if !self.recording {
            return Err("No recording in progress".to_string());
        }

        let text = text.trim();
        if !text.is_empty() {
            self.segments.push(text.to_string());
        }
        Ok(())
    }

    pub fn stop(&mut self, now: DateTime<Utc>) -> Result<TranscriptResult, String> {
        if !self.recording {
            return Err("No recording in progress".to_string());
        }
        let started_at = self.started_at.take().ok_or("No recording in progress")?;

        let result = TranscriptResult {
            text: self.segments.join(" "),
            started_at,
            duration_secs: (now - started_at).num_seconds().max(0),
        };

        self.recording = false;
        self.segments.clear();
        Ok(result)
    }

    pub fn state(&self) -> TranscriptionState {
        TranscriptionState {
            recording: self.recording,
            partial_text: self.segments.join(" "),
        }
    }
}
