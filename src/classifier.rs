use crate::models::{Mood, Sentiment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub recommendation: &'static str,
}

pub const FALLBACK_RECOMMENDATION: &str = "💙 Remember that every emotion is valid and part of your human experience. Take care of yourself and be kind to your feelings.";

pub fn classify(mood: Mood) -> Classification {
    match mood {
        Mood::Happy => Classification {
            sentiment: Sentiment::Positive,
            recommendation: "🌟 Amazing! Your positive energy is contagious. Consider sharing this joy with friends, celebrating your achievements, or using this momentum to tackle a challenging task. Keep shining!",
        },
        Mood::Sad => Classification {
            sentiment: Sentiment::Negative,
            recommendation: "🤗 It's completely normal to feel sad sometimes. Try taking a gentle 10-minute walk outside, listening to your favorite uplifting playlist, or reaching out to a trusted friend. Remember, this feeling will pass.",
        },
        Mood::Stressed => Classification {
            sentiment: Sentiment::Negative,
            recommendation: "🧘‍♂️ Take a deep breath - you've got this! Try the 4-7-8 breathing technique, organize your tasks by priority, or do 5 minutes of stretching. Consider breaking big tasks into smaller, manageable steps.",
        },
        Mood::Neutral => Classification {
            sentiment: Sentiment::Neutral,
            recommendation: "⚖️ You're in a balanced, reflective state - that's valuable! This is a perfect time to plan ahead, try something new that might spark joy, or practice gratitude by listing 3 things you're thankful for today.",
        },
    }
}

/// Total over arbitrary labels: anything outside the four moods gets the
/// neutral fallback.
pub fn classify_label(label: &str) -> Classification {
    match label.parse::<Mood>() {
        Ok(mood) => classify(mood),
        Err(_) => Classification {
            sentiment: Sentiment::Neutral,
            recommendation: FALLBACK_RECOMMENDATION,
        },
    }
}
