use crate::classifier::classify;
use crate::streak::Badge;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Stressed, Mood::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Neutral => "neutral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Stressed => "Stressed",
            Mood::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Stressed => "😰",
            Mood::Neutral => "😐",
        }
    }

    /// Plotting value for the mood chart. The ordering is fixed, not a measure.
    pub fn intensity(self) -> u8 {
        match self {
            Mood::Stressed => 1,
            Mood::Sad => 2,
            Mood::Neutral => 3,
            Mood::Happy => 4,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "stressed" => Ok(Mood::Stressed),
            "neutral" => Ok(Mood::Neutral),
            _ => Err(UnknownMood(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded check-in. Sentiment and recommendation are always derived from
/// the mood, both at creation and when rehydrated from storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredEntry")]
pub struct MoodEntry {
    id: String,
    mood: Mood,
    sentiment: Sentiment,
    recommendation: String,
    #[serde(serialize_with = "iso8601::serialize")]
    timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Timestamps are kept at the millisecond precision they are stored with.
    pub fn new(mood: Mood, timestamp: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), mood, timestamp.trunc_subsecs(3))
    }

    fn with_id(id: String, mood: Mood, timestamp: DateTime<Utc>) -> Self {
        let classification = classify(mood);
        Self {
            id,
            mood,
            sentiment: classification.sentiment,
            recommendation: classification.recommendation.to_string(),
            timestamp,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn recommendation(&self) -> &str {
        &self.recommendation
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[derive(Deserialize)]
struct StoredEntry {
    id: String,
    mood: Mood,
    #[serde(deserialize_with = "iso8601::deserialize")]
    timestamp: DateTime<Utc>,
}

impl From<StoredEntry> for MoodEntry {
    fn from(stored: StoredEntry) -> Self {
        MoodEntry::with_id(stored.id, stored.mood, stored.timestamp)
    }
}

/// Millisecond-precision UTC timestamps, `2026-01-05T09:30:00.000Z`.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(timestamp: &DateTime<Utc>) -> String {
        timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(timestamp))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|timestamp| timestamp.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitMoodRequest {
    pub mood: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentimentPercentages {
    pub positive: u8,
    pub negative: u8,
    pub neutral: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub day: String,
    pub date: String,
    pub mood: Mood,
    pub mood_value: u8,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

impl From<Badge> for BadgeView {
    fn from(badge: Badge) -> Self {
        Self {
            name: badge.name(),
            emoji: badge.emoji(),
            description: badge.description(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub streak: u32,
    pub badges: Vec<BadgeView>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_entries: usize,
    pub counts: SentimentCounts,
    pub percentages: SentimentPercentages,
    pub distribution: BTreeMap<Mood, usize>,
    pub series: Vec<SeriesPoint>,
    pub latest: Option<MoodEntry>,
    pub recent: Vec<MoodEntry>,
    pub streak: StreakResponse,
    pub journey_message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub export_date: String,
    pub total_entries: usize,
    pub entries: Vec<ExportedEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedEntry {
    pub date: String,
    pub mood: Mood,
    pub sentiment: Sentiment,
    pub recommendation: String,
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}
