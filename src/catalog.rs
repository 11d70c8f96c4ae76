//! Static questionnaire data: the four categories, the sixteen questions and
//! the five-point answer scale.
//!
//! Nothing here is mutated at runtime. The order of [`CATEGORY_ORDER`] is part
//! of the share token format (scores are encoded positionally), so any change
//! to it must bump [`CATEGORY_ORDER_VERSION`].

use crate::error::{CheckInError, CiResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    Connection,
    Communication,
    Patterns,
    Vision,
}

/// Fixed enumeration shared by the scorer and the share token codec.
pub const CATEGORY_ORDER: [CategoryKey; 4] = [
    CategoryKey::Connection,
    CategoryKey::Communication,
    CategoryKey::Patterns,
    CategoryKey::Vision,
];

pub const CATEGORY_ORDER_VERSION: u8 = 1;

pub const QUESTIONS_PER_CATEGORY: usize = 4;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub key: CategoryKey,
    pub label: &'static str,
    pub emoji: &'static str,
    pub source: &'static str,
    pub description: &'static str,
    pub conversation_starters: [&'static str; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: u32,
    pub category: CategoryKey,
    pub text: &'static str,
    pub reversed: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScaleOption {
    pub value: u8,
    pub emoji: &'static str,
    pub label: &'static str,
}

// Indexed by position in CATEGORY_ORDER.
pub static CATEGORIES: [Category; 4] = [
    Category {
        key: CategoryKey::Connection,
        label: "Connection",
        emoji: "💛",
        source: "Gottman: Love maps and bids",
        description: "How seen, heard and close you felt this week.",
        conversation_starters: [
            "\"What has been on your mind most this week that I might not know about?\"",
            "\"Is there something you've wanted to tell me but haven't found the moment for?\"",
            "\"What is one thing I could do more of to help you feel close to me?\"",
        ],
    },
    Category {
        key: CategoryKey::Communication,
        label: "Communication",
        emoji: "💬",
        source: "Gottman: The Four Horsemen and their antidotes",
        description: "How you handled disagreement, tension and repair this week.",
        conversation_starters: [
            "\"Was there a moment this week when you felt dismissed or belittled, even a small one?\"",
            "\"When I brought up something hard, how did it land for you?\"",
            "\"What would have made a recent difficult conversation go better?\"",
        ],
    },
    Category {
        key: CategoryKey::Patterns,
        label: "Patterns",
        emoji: "🌀",
        source: "Terry Real: Wise adult / Adaptive child",
        description: "Whether you showed up as your best self or slipped into old reactive habits.",
        conversation_starters: [
            "\"Did you notice me falling into an old pattern this week? It's okay to say so.\"",
            "\"When did I seem most like my best self this week?\"",
            "\"Is there something I do when I'm stressed that makes it harder to reach me?\"",
        ],
    },
    Category {
        key: CategoryKey::Vision,
        label: "Vision",
        emoji: "🌟",
        source: "Gottman: Shared meaning and goals",
        description: "Whether you feel aligned and excited about where you're heading together.",
        conversation_starters: [
            "\"What is something you're looking forward to doing together in the next few months?\"",
            "\"Do you feel I know what matters most to you right now, your goals and your fears?\"",
            "\"Is there anything about our future together that feels uncertain or unspoken?\"",
        ],
    },
];

pub static QUESTIONS: [Question; 16] = [
    // Connection
    Question {
        id: 1,
        category: CategoryKey::Connection,
        text: "This week I felt truly seen by my partner",
        reversed: false,
    },
    Question {
        id: 2,
        category: CategoryKey::Connection,
        text: "When I reached out for connection, they responded warmly",
        reversed: false,
    },
    Question {
        id: 3,
        category: CategoryKey::Connection,
        text: "I know what has been on their mind lately: their worries, hopes and day-to-day",
        reversed: false,
    },
    Question {
        id: 4,
        category: CategoryKey::Connection,
        text: "We had at least one real conversation this week (not just logistics)",
        reversed: false,
    },
    // Communication
    Question {
        id: 5,
        category: CategoryKey::Communication,
        text: "When we disagreed, I spoke up without attacking their character",
        reversed: false,
    },
    Question {
        id: 6,
        category: CategoryKey::Communication,
        text: "I felt respected even when we didn't see things the same way",
        reversed: false,
    },
    Question {
        id: 7,
        category: CategoryKey::Communication,
        text: "When something bothered me, I raised it without blaming",
        reversed: false,
    },
    Question {
        id: 8,
        category: CategoryKey::Communication,
        text: "We were able to repair quickly after any tension",
        reversed: false,
    },
    // Patterns
    Question {
        id: 9,
        category: CategoryKey::Patterns,
        text: "I caught myself shutting down or going cold instead of talking",
        reversed: true,
    },
    Question {
        id: 10,
        category: CategoryKey::Patterns,
        text: "I stayed curious about their perspective instead of defending myself",
        reversed: false,
    },
    Question {
        id: 11,
        category: CategoryKey::Patterns,
        text: "I showed up as my best self, without getting triggered or checking out",
        reversed: false,
    },
    Question {
        id: 12,
        category: CategoryKey::Patterns,
        text: "Old reactive patterns showed up this week (blowing up, withdrawing...)",
        reversed: true,
    },
    // Vision
    Question {
        id: 13,
        category: CategoryKey::Vision,
        text: "We are aligned on what matters most to us right now",
        reversed: false,
    },
    Question {
        id: 14,
        category: CategoryKey::Vision,
        text: "I feel we are building something together, not just living side by side",
        reversed: false,
    },
    Question {
        id: 15,
        category: CategoryKey::Vision,
        text: "I'm excited about where we're heading as a couple",
        reversed: false,
    },
    Question {
        id: 16,
        category: CategoryKey::Vision,
        text: "I feel my partner knows and supports my personal dreams",
        reversed: false,
    },
];

pub static ANSWER_SCALE: [ScaleOption; 5] = [
    ScaleOption {
        value: 1,
        emoji: "😕",
        label: "Not at all",
    },
    ScaleOption {
        value: 2,
        emoji: "😐",
        label: "A little",
    },
    ScaleOption {
        value: 3,
        emoji: "🙂",
        label: "Somewhat",
    },
    ScaleOption {
        value: 4,
        emoji: "😊",
        label: "Mostly",
    },
    ScaleOption {
        value: 5,
        emoji: "🥰",
        label: "Completely",
    },
];

pub const MIN_ANSWER: u8 = 1;
pub const MAX_ANSWER: u8 = 5;

impl CategoryKey {
    /// Position of this key in [`CATEGORY_ORDER`].
    pub fn position(self) -> usize {
        match self {
            Self::Connection => 0,
            Self::Communication => 1,
            Self::Patterns => 2,
            Self::Vision => 3,
        }
    }
}

pub fn category(key: CategoryKey) -> &'static Category {
    &CATEGORIES[key.position()]
}

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

pub fn questions_in(key: CategoryKey) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == key)
}

pub fn scale_option(value: u8) -> Option<&'static ScaleOption> {
    ANSWER_SCALE.iter().find(|o| o.value == value)
}

/// Checks the partition invariant: ids 1..=16 unique, four questions per
/// category, and every category sits in its own slot of [`CATEGORIES`].
pub fn validate_catalog() -> CiResult<()> {
    for (i, key) in CATEGORY_ORDER.iter().enumerate() {
        if CATEGORIES[i].key != *key {
            return Err(CheckInError::Validation(format!(
                "Category slot {} holds '{}', expected '{}'",
                i, CATEGORIES[i].key, key
            )));
        }
        if key.position() != i {
            return Err(CheckInError::Validation(format!(
                "Category '{}' reports position {}, expected {}",
                key,
                key.position(),
                i
            )));
        }
    }

    let mut seen = HashSet::new();
    for q in QUESTIONS.iter() {
        if q.id < 1 || q.id as usize > QUESTIONS.len() {
            return Err(CheckInError::Validation(format!(
                "Question id {} is outside 1..={}",
                q.id,
                QUESTIONS.len()
            )));
        }
        if !seen.insert(q.id) {
            return Err(CheckInError::Validation(format!(
                "Duplicate question id {}",
                q.id
            )));
        }
    }

    for key in CATEGORY_ORDER {
        let count = questions_in(key).count();
        if count != QUESTIONS_PER_CATEGORY {
            return Err(CheckInError::Validation(format!(
                "Category '{}' owns {} questions, expected {}",
                key, count, QUESTIONS_PER_CATEGORY
            )));
        }
    }

    Ok(())
}
