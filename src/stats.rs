use crate::models::{
    BadgeView, DashboardResponse, Mood, MoodEntry, Sentiment, SentimentCounts, SentimentPercentages,
    SeriesPoint, StreakResponse,
};
use crate::streak::{badges_for, journey_message, BadgeInputs};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

pub const RECENT_LIMIT: usize = 5;

pub fn build_dashboard(entries: &[MoodEntry]) -> DashboardResponse {
    build_dashboard_at(Utc::now(), entries)
}

pub fn build_dashboard_at(now: DateTime<Utc>, entries: &[MoodEntry]) -> DashboardResponse {
    DashboardResponse {
        total_entries: entries.len(),
        counts: counts_by_sentiment(entries),
        percentages: percentages(entries),
        distribution: mood_distribution(entries),
        series: chronological_series(entries),
        latest: latest(entries).cloned(),
        recent: recent(entries, RECENT_LIMIT),
        streak: build_streak_at(now, entries),
        journey_message: journey_message(entries.len()),
    }
}

pub fn build_streak_at(now: DateTime<Utc>, entries: &[MoodEntry]) -> StreakResponse {
    let inputs = BadgeInputs::from_entries(entries, now);
    StreakResponse {
        streak: inputs.streak,
        badges: badges_for(&inputs).into_iter().map(BadgeView::from).collect(),
    }
}

pub fn counts_by_sentiment(entries: &[MoodEntry]) -> SentimentCounts {
    let mut counts = SentimentCounts::default();
    for entry in entries {
        match entry.sentiment() {
            Sentiment::Positive => counts.positive += 1,
            Sentiment::Negative => counts.negative += 1,
            Sentiment::Neutral => counts.neutral += 1,
        }
    }
    counts
}

pub fn percentages(entries: &[MoodEntry]) -> SentimentPercentages {
    let counts = counts_by_sentiment(entries);
    let total = entries.len();
    SentimentPercentages {
        positive: percent(counts.positive, total),
        negative: percent(counts.negative, total),
        neutral: percent(counts.neutral, total),
    }
}

fn percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    u8::try_from((count as f64 / total as f64 * 100.0).round() as u64).unwrap_or(100)
}

pub fn mood_distribution(entries: &[MoodEntry]) -> BTreeMap<Mood, usize> {
    let mut distribution = BTreeMap::new();
    for entry in entries {
        *distribution.entry(entry.mood()).or_insert(0) += 1;
    }
    distribution
}

pub fn chronological_series(entries: &[MoodEntry]) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.timestamp());

    sorted
        .into_iter()
        .enumerate()
        .map(|(index, entry)| SeriesPoint {
            day: format!("Day {}", index + 1),
            date: entry.timestamp().date_naive().to_string(),
            mood: entry.mood(),
            mood_value: entry.mood().intensity(),
            sentiment: entry.sentiment(),
        })
        .collect()
}

pub fn latest(entries: &[MoodEntry]) -> Option<&MoodEntry> {
    entries.iter().max_by_key(|entry| entry.timestamp())
}

/// Most recently inserted first.
pub fn recent(entries: &[MoodEntry], limit: usize) -> Vec<MoodEntry> {
    entries.iter().rev().take(limit).cloned().collect()
}
