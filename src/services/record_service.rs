use chrono::Utc;
use uuid::Uuid;

use crate::models::{MedicalRecord, RecordInput};

/// In-memory store for the user's medical records, held behind the app
/// state mutex. Records live for the session only.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<MedicalRecord>,
}

impl RecordStore {
    /// Records sorted newest first: by record date, then by creation time.
    pub fn list(&self) -> Vec<MedicalRecord> {
        let mut records = self.records.clone();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.created_at.cmp(&a.created_at))
        });
        records
    }

    pub fn add(&mut self, input: RecordInput) -> Result<MedicalRecord, String> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err("Record title must not be empty".to_string());
        }

        let record = MedicalRecord {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            category: input.category,
            provider: input.provider.trim().to_string(),
            date: input.date,
            notes: input.notes,
            created_at: Utc::now(),
        };

        self.records.push(record.clone());
        Ok(record)
    }

    pub fn update(&mut self, id: &str, input: RecordInput) -> Result<MedicalRecord, String> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err("Record title must not be empty".to_string());
        }

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| "Record not found".to_string())?;

        record.title = title.to_string();
        record.category = input.category;
        record.provider = input.provider.trim().to_string();
        record.date = input.date;
        record.notes = input.notes;

        Ok(record.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), String> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() == before {
            return Err("Record not found".to_string());
        }
        Ok(())
    }
}
