pub mod feedback;
pub mod score;
pub mod serve;
pub mod share;
pub mod take;

use checkin::catalog::QUESTIONS;
use checkin::error::{CheckInError, CiResult};
use checkin::scorer::{self, Answers};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Answers given on the command line or in a JSON file (`{"1": 5, ...}`).
#[derive(Args, Debug, Clone)]
pub struct AnswerInput {
    /// Comma separated `id=value` pairs, e.g. "1=5,2=4"
    #[arg(short, long, conflicts_with = "answers_file")]
    pub answers: Option<String>,

    #[arg(long)]
    pub answers_file: Option<PathBuf>,
}

impl AnswerInput {
    pub fn load(&self) -> CiResult<Answers> {
        let answers = match (&self.answers, &self.answers_file) {
            (Some(list), _) => scorer::parse_answer_list(list)?,
            (None, Some(path)) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            (None, None) => {
                return Err(CheckInError::Config(
                    "Provide answers with --answers or --answers-file".to_string(),
                ))
            }
        };

        scorer::validate_answers(&answers)?;
        if answers.len() < QUESTIONS.len() {
            warn!(
                "Only {} of {} questions answered. Unanswered questions are skipped.",
                answers.len(),
                QUESTIONS.len()
            );
        }
        Ok(answers)
    }
}
