use crate::models::MoodEntry;
use serde::{Deserialize, Serialize};

/// Session-owned check-ins in insertion order. Append is the only mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: Vec<MoodEntry>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoodEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[MoodEntry] {
        &self.entries
    }
}

impl FromIterator<MoodEntry> for EntryCollection {
    fn from_iter<I: IntoIterator<Item = MoodEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryCollection {
    type Item = &'a MoodEntry;
    type IntoIter = std::slice::Iter<'a, MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn append_keeps_insertion_order() {
        let base = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let mut entries = EntryCollection::new();
        entries.append(MoodEntry::new(Mood::Sad, base));
        entries.append(MoodEntry::new(Mood::Happy, base - Duration::days(3)));

        let moods: Vec<Mood> = entries.iter().map(MoodEntry::mood).collect();
        assert_eq!(moods, vec![Mood::Sad, Mood::Happy]);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn json_round_trip_preserves_entries() {
        let base = Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap();
        let entries: EntryCollection = Mood::ALL
            .iter()
            .enumerate()
            .map(|(i, mood)| MoodEntry::new(*mood, base - Duration::hours(i as i64 * 7)))
            .collect();

        let payload = serde_json::to_string(&entries).unwrap();
        assert!(payload.starts_with('['));
        let restored: EntryCollection = serde_json::from_str(&payload).unwrap();
        assert_eq!(restored, entries);
    }
}
