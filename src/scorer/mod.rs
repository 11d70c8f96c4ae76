pub mod types;

pub use self::types::{Answers, CategoryScore, CheckInResult, Tier};

use crate::catalog::{self, CategoryKey, CATEGORY_ORDER, MAX_ANSWER, MIN_ANSWER, QUESTIONS};
use crate::error::{CheckInError, CiResult};

/// Rounds half up, matching the browser `Math.round` the published scores
/// were computed with (2.5 -> 3, -2.5 -> -2).
#[inline]
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

#[inline]
fn effective_value(raw: u8, reversed: bool) -> i64 {
    if reversed {
        6 - raw as i64
    } else {
        raw as i64
    }
}

/// Linear rescale of `[count, count * 5]` onto `[0, 100]`.
/// A category with no answers scores 0.
fn category_percent(total: i64, count: i64) -> u8 {
    if count == 0 {
        return 0;
    }
    let min_possible = count;
    let max_possible = count * 5;
    let pct = (total - min_possible) as f64 / (max_possible - min_possible) as f64 * 100.0;
    round_half_up(pct).clamp(0.0, 100.0) as u8
}

/// Scores a (possibly partial) answer set.
///
/// Missing question ids are left out of both the total and the count of
/// their category. Values are not range-checked here; use
/// [`validate_answers`] first when the input comes from outside. The
/// function is total and has no side effects.
pub fn calculate_result(answers: &Answers) -> CheckInResult {
    let mut totals = [0i64; 4];
    let mut counts = [0i64; 4];

    for q in QUESTIONS.iter() {
        let Some(&raw) = answers.get(&q.id) else {
            continue;
        };
        let slot = q.category.position();
        totals[slot] += effective_value(raw, q.reversed);
        counts[slot] += 1;
    }

    let categories = CATEGORY_ORDER.map(|key| {
        let slot = key.position();
        CategoryScore::new(key, category_percent(totals[slot], counts[slot]))
    });

    let sum: u32 = categories.iter().map(|c| c.score as u32).sum();
    let overall = round_half_up(sum as f64 / categories.len() as f64) as u8;
    let focus = focus_area(&categories);

    CheckInResult {
        overall,
        categories,
        focus_area: focus,
    }
}

/// Lowest score wins; on a tie the earlier category in the fixed order is kept.
pub fn focus_area(categories: &[CategoryScore; 4]) -> CategoryKey {
    let mut min = &categories[0];
    for c in &categories[1..] {
        if c.score < min.score {
            min = c;
        }
    }
    min.category
}

/// Strict input check for answers arriving from a user or the network.
pub fn validate_answers(answers: &Answers) -> CiResult<()> {
    for (&id, &value) in answers {
        if catalog::question(id).is_none() {
            return Err(CheckInError::InvalidAnswer(format!(
                "Unknown question id {}",
                id
            )));
        }
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(CheckInError::InvalidAnswer(format!(
                "Question {} has value {}, expected {}..={}",
                id, value, MIN_ANSWER, MAX_ANSWER
            )));
        }
    }
    Ok(())
}

/// Parses `"1=5,2=4,..."` into an answer set. Later duplicates overwrite earlier ones.
pub fn parse_answer_list(s: &str) -> CiResult<Answers> {
    let mut answers = Answers::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let (id, value) = part.split_once('=').ok_or_else(|| {
            CheckInError::InvalidAnswer(format!("Expected 'id=value', got '{}'", part))
        })?;
        let id: u32 = id
            .trim()
            .parse()
            .map_err(|_| CheckInError::InvalidAnswer(format!("Invalid question id '{}'", id)))?;
        let value: u8 = value
            .trim()
            .parse()
            .map_err(|_| CheckInError::InvalidAnswer(format!("Invalid answer value '{}'", value)))?;
        answers.insert(id, value);
    }
    Ok(answers)
}

pub fn overall_emoji(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "💖",
        60..=79 => "💛",
        40..=59 => "🌸",
        _ => "🤍",
    }
}
