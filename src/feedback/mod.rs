pub mod store;
pub mod summary;

pub use self::store::FeedbackStore;
pub use self::summary::{FeedbackSummary, Suggestion};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// "Did the score feel accurate?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Accuracy {
    Yes,
    Somewhat,
    No,
}

/// "Would you use this again with your partner?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Usefulness {
    Yes,
    Maybe,
    No,
}

impl Accuracy {
    pub fn label(self) -> &'static str {
        match self {
            Accuracy::Yes => "Yes, spot on",
            Accuracy::Somewhat => "Kind of",
            Accuracy::No => "Not really",
        }
    }
}

impl Usefulness {
    pub fn label(self) -> &'static str {
        match self {
            Usefulness::Yes => "Definitely",
            Usefulness::Maybe => "Maybe",
            Usefulness::No => "Probably not",
        }
    }
}

/// A submission after lenient coercion. Never fails to build.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSubmission {
    pub overall_score: f64,
    pub enjoyment: f64,
    pub accurate: String,
    pub useful: String,
    pub suggestion: String,
}

impl FeedbackSubmission {
    /// Absent or unusable numbers become 0, absent or non-string text becomes "".
    pub fn from_json(body: &Value) -> Self {
        Self {
            overall_score: coerce_number(body.get("overallScore")),
            enjoyment: coerce_number(body.get("enjoyment")),
            accurate: coerce_string(body.get("accurate")),
            useful: coerce_string(body.get("useful")),
            suggestion: coerce_string(body.get("suggestion")),
        }
    }
}

fn coerce_number(v: Option<&Value>) -> f64 {
    let n = match v {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    finite_or_zero(n)
}

// JSON has no NaN or infinity; they would be written as null and make the
// whole file unreadable.
fn finite_or_zero(n: f64) -> f64 {
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn coerce_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: String,
    pub overall_score: f64,
    pub enjoyment: f64, // 1-5, 0 when missing
    pub accurate: String,
    pub useful: String,
    pub suggestion: String,
    pub submitted_at: String, // RFC 3339, UTC
}

impl FeedbackEntry {
    pub fn new(submission: FeedbackSubmission) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            overall_score: finite_or_zero(submission.overall_score),
            enjoyment: finite_or_zero(submission.enjoyment),
            accurate: submission.accurate,
            useful: submission.useful,
            suggestion: submission.suggestion,
            submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn accuracy(&self) -> Option<Accuracy> {
        self.accurate.parse().ok()
    }

    pub fn usefulness(&self) -> Option<Usefulness> {
        self.useful.parse().ok()
    }
}
