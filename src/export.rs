use crate::models::{iso8601, ExportDocument, ExportedEntry, MoodEntry};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("No data to export. Please record some mood entries first.")]
    NoEntries,
}

pub fn build_export(entries: &[MoodEntry], now: DateTime<Utc>) -> Result<ExportDocument, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NoEntries);
    }

    Ok(ExportDocument {
        export_date: iso8601::format(&now),
        total_entries: entries.len(),
        entries: entries
            .iter()
            .map(|entry| ExportedEntry {
                date: iso8601::format(&entry.timestamp()),
                mood: entry.mood(),
                sentiment: entry.sentiment(),
                recommendation: entry.recommendation().to_string(),
            })
            .collect(),
    })
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("wellness-data-{}.json", now.format("%Y-%m-%d"))
}
