use crate::models::{MoodEntry, Sentiment};
use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Positivity Master is only awarded once at least this many entries exist.
pub const POSITIVITY_MIN_ENTRIES: usize = 5;

/// How many badges the collapsed sidebar shows.
pub const SIDEBAR_BADGE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Badge {
    ThreeDayStreak,
    WeekWarrior,
    FortnightHero,
    PositivityMaster,
    ConsistencyKing,
    WellnessLegend,
}

impl Badge {
    pub const ALL: [Badge; 6] = [
        Badge::ThreeDayStreak,
        Badge::WeekWarrior,
        Badge::FortnightHero,
        Badge::PositivityMaster,
        Badge::ConsistencyKing,
        Badge::WellnessLegend,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Badge::ThreeDayStreak => "3 Day Streak",
            Badge::WeekWarrior => "Week Warrior",
            Badge::FortnightHero => "Fortnight Hero",
            Badge::PositivityMaster => "Positivity Master",
            Badge::ConsistencyKing => "Consistency King",
            Badge::WellnessLegend => "Wellness Legend",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Badge::ThreeDayStreak => "🔥",
            Badge::WeekWarrior => "🏆",
            Badge::FortnightHero => "⭐",
            Badge::PositivityMaster => "🌟",
            Badge::ConsistencyKing => "👑",
            Badge::WellnessLegend => "🎖️",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Badge::ThreeDayStreak => "Consistent tracking for 3 days!",
            Badge::WeekWarrior => "Amazing 7-day streak!",
            Badge::FortnightHero => "Incredible 2-week dedication!",
            Badge::PositivityMaster => "70%+ positive moods!",
            Badge::ConsistencyKing => "10+ mood entries recorded!",
            Badge::WellnessLegend => "30+ entries - you're a legend!",
        }
    }

    pub fn is_earned(self, inputs: &BadgeInputs) -> bool {
        match self {
            Badge::ThreeDayStreak => inputs.streak >= 3,
            Badge::WeekWarrior => inputs.streak >= 7,
            Badge::FortnightHero => inputs.streak >= 14,
            Badge::PositivityMaster => {
                inputs.total_entries >= POSITIVITY_MIN_ENTRIES && inputs.positive_ratio >= 0.70
            }
            Badge::ConsistencyKing => inputs.total_entries >= 10,
            Badge::WellnessLegend => inputs.total_entries >= 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeInputs {
    pub streak: u32,
    pub total_entries: usize,
    pub positive_ratio: f64,
}

impl BadgeInputs {
    pub fn from_entries(entries: &[MoodEntry], now: DateTime<Utc>) -> Self {
        let total_entries = entries.len();
        let positive = entries
            .iter()
            .filter(|entry| entry.sentiment() == Sentiment::Positive)
            .count();
        let positive_ratio = if total_entries > 0 {
            positive as f64 / total_entries as f64
        } else {
            0.0
        };

        Self {
            streak: compute_streak(entries, now),
            total_entries,
            positive_ratio,
        }
    }
}

/// Walks entries newest first, counting while each step back in time is at
/// most one whole day. A 36 hour gap still counts.
pub fn compute_streak(entries: &[MoodEntry], now: DateTime<Utc>) -> u32 {
    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    let mut cursor = now;
    let mut streak = 0;
    for entry in sorted {
        let diff_days = (cursor - entry.timestamp())
            .num_milliseconds()
            .div_euclid(MILLIS_PER_DAY);
        if diff_days > 1 {
            break;
        }
        streak += 1;
        cursor = entry.timestamp();
    }
    streak
}

pub fn compute_badges(entries: &[MoodEntry], now: DateTime<Utc>) -> Vec<Badge> {
    badges_for(&BadgeInputs::from_entries(entries, now))
}

pub fn badges_for(inputs: &BadgeInputs) -> Vec<Badge> {
    Badge::ALL
        .into_iter()
        .filter(|badge| badge.is_earned(inputs))
        .collect()
}

pub fn journey_message(total_entries: usize) -> &'static str {
    match total_entries {
        0 => "Every journey begins with a single step. Start tracking your mood today!",
        1..=4 => "Great start! Keep building this healthy habit one day at a time.",
        5..=14 => "You're building momentum! Your consistency is paying off.",
        _ => "You're a wellness champion! Your dedication is inspiring.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Mood;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 20, 18, 0, 0).unwrap()
    }

    fn daily(mood: Mood, days: i64) -> Vec<MoodEntry> {
        (0..days)
            .map(|offset| MoodEntry::new(mood, now() - Duration::days(offset)))
            .collect()
    }

    #[test]
    fn empty_streak_is_zero() {
        assert_eq!(compute_streak(&[], now()), 0);
    }

    #[test]
    fn streak_steps_from_previous_entry_not_from_now() {
        // now-50h is only 30h behind the now-20h entry, so it still counts.
        let entries = vec![
            MoodEntry::new(Mood::Happy, now() - Duration::hours(50)),
            MoodEntry::new(Mood::Sad, now()),
            MoodEntry::new(Mood::Neutral, now() - Duration::hours(20)),
        ];
        assert_eq!(compute_streak(&entries, now()), 3);
    }

    #[test]
    fn streak_breaks_on_gap_over_one_day() {
        let entries = vec![
            MoodEntry::new(Mood::Happy, now() - Duration::hours(70)),
            MoodEntry::new(Mood::Sad, now()),
            MoodEntry::new(Mood::Neutral, now() - Duration::hours(20)),
        ];
        assert_eq!(compute_streak(&entries, now()), 2);
    }

    #[test]
    fn streak_tolerates_thirty_six_hour_steps() {
        let entries = vec![
            MoodEntry::new(Mood::Happy, now() - Duration::hours(36)),
            MoodEntry::new(Mood::Happy, now() - Duration::hours(72)),
        ];
        assert_eq!(compute_streak(&entries, now()), 2);
    }

    #[test]
    fn stale_history_has_no_streak() {
        let entries = vec![MoodEntry::new(Mood::Happy, now() - Duration::hours(49))];
        assert_eq!(compute_streak(&entries, now()), 0);
    }

    #[test]
    fn future_entries_still_count() {
        let entries = vec![MoodEntry::new(Mood::Happy, now() + Duration::hours(2))];
        assert_eq!(compute_streak(&entries, now()), 1);
    }

    #[test]
    fn ten_happy_days_earn_expected_badges() {
        let badges = compute_badges(&daily(Mood::Happy, 10), now());
        assert!(badges.contains(&Badge::ThreeDayStreak));
        assert!(badges.contains(&Badge::WeekWarrior));
        assert!(badges.contains(&Badge::ConsistencyKing));
        assert!(badges.contains(&Badge::PositivityMaster));
        assert!(!badges.contains(&Badge::FortnightHero));
        assert!(!badges.contains(&Badge::WellnessLegend));
    }

    #[test]
    fn positivity_requires_minimum_entries() {
        let few = BadgeInputs { streak: 0, total_entries: 4, positive_ratio: 1.0 };
        assert!(!Badge::PositivityMaster.is_earned(&few));
        let enough = BadgeInputs { streak: 0, total_entries: 5, positive_ratio: 0.7 };
        assert!(Badge::PositivityMaster.is_earned(&enough));
    }

    #[test]
    fn all_badges_can_be_earned_together() {
        let inputs = BadgeInputs { streak: 30, total_entries: 30, positive_ratio: 0.9 };
        assert_eq!(badges_for(&inputs), Badge::ALL.to_vec());
    }

    #[test]
    fn no_entries_no_badges() {
        assert!(compute_badges(&[], now()).is_empty());
    }

    #[test]
    fn journey_message_tiers() {
        assert!(journey_message(0).starts_with("Every journey"));
        assert!(journey_message(4).starts_with("Great start"));
        assert!(journey_message(5).starts_with("You're building momentum"));
        assert!(journey_message(15).starts_with("You're a wellness champion"));
    }
}
