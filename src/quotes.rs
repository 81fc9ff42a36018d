use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: [Quote; 10] = [
    Quote {
        text: "The greatest revolution of our generation is the discovery that human beings, by changing the inner attitudes of their minds, can change the outer aspects of their lives.",
        author: "William James",
    },
    Quote {
        text: "Mental health is not a destination, but a process. It's about how you drive, not where you're going.",
        author: "Noam Shpancer",
    },
    Quote {
        text: "You are not your thoughts. You are the observer of your thoughts.",
        author: "Eckhart Tolle",
    },
    Quote {
        text: "The strongest people are not those who show strength in front of the world, but those who fight battles we know nothing about.",
        author: "Unknown",
    },
    Quote {
        text: "Your current situation is not your final destination. The best is yet to come.",
        author: "Unknown",
    },
    Quote {
        text: "Healing isn't about erasing your story, it's about writing a better ending.",
        author: "Unknown",
    },
    Quote {
        text: "Every day is a fresh start. You can always choose to begin again.",
        author: "Unknown",
    },
    Quote {
        text: "Mental health is just as important as physical health. Both deserve care and attention.",
        author: "Unknown",
    },
    Quote {
        text: "Progress, not perfection. Every small step forward counts.",
        author: "Unknown",
    },
    Quote {
        text: "You have been assigned this mountain to show others it can be moved.",
        author: "Mel Robbins",
    },
];

pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> Quote {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
