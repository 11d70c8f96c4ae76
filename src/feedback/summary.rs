use super::{Accuracy, FeedbackEntry, Usefulness};
use chrono::DateTime;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccuracyCounts {
    pub yes: usize,
    pub somewhat: usize,
    pub no: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsefulnessCounts {
    pub yes: usize,
    pub maybe: usize,
    pub no: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub date: String,
    pub score: f64,
}

/// Aggregate view over every stored feedback entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSummary {
    pub total: usize,
    /// Mean usefulness rating, one decimal.
    pub avg_enjoyment: Option<f64>,
    /// Mean submitted overall score, rounded.
    pub avg_score: Option<i64>,
    pub accurate: AccuracyCounts,
    pub useful: UsefulnessCounts,
    pub suggestions: Vec<Suggestion>,
}

impl FeedbackSummary {
    pub fn from_entries(entries: &[FeedbackEntry]) -> Self {
        let total = entries.len();

        let (avg_enjoyment, avg_score) = if total > 0 {
            let n = total as f64;
            let enjoyment = entries.iter().map(|e| e.enjoyment).sum::<f64>() / n;
            let score = entries.iter().map(|e| e.overall_score).sum::<f64>() / n;
            (
                Some((enjoyment * 10.0).round() / 10.0),
                Some((score + 0.5).floor() as i64),
            )
        } else {
            (None, None)
        };

        let mut accurate = AccuracyCounts::default();
        let mut useful = UsefulnessCounts::default();
        for e in entries {
            match e.accuracy() {
                Some(Accuracy::Yes) => accurate.yes += 1,
                Some(Accuracy::Somewhat) => accurate.somewhat += 1,
                Some(Accuracy::No) => accurate.no += 1,
                None => {}
            }
            match e.usefulness() {
                Some(Usefulness::Yes) => useful.yes += 1,
                Some(Usefulness::Maybe) => useful.maybe += 1,
                Some(Usefulness::No) => useful.no += 1,
                None => {}
            }
        }

        let suggestions = entries
            .iter()
            .filter(|e| !e.suggestion.trim().is_empty())
            .map(|e| Suggestion {
                text: e.suggestion.trim().to_string(),
                date: DateTime::parse_from_rfc3339(&e.submitted_at)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|_| e.submitted_at.clone()),
                score: e.overall_score,
            })
            .collect();

        Self {
            total,
            avg_enjoyment,
            avg_score,
            accurate,
            useful,
            suggestions,
        }
    }

    /// `n` as a rounded percentage of all responses, `None` when there are none.
    pub fn pct(&self, n: usize) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        Some(((n as f64 / self.total as f64) * 100.0).round() as u32)
    }
}
