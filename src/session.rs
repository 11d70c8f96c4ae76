//! Check-in session as an explicit state machine.
//!
//! The session owns the UI-facing state; scoring and encoding stay pure and
//! are only called on the transition out of the last question.

use crate::catalog::{Question, MAX_ANSWER, MIN_ANSWER, QUESTIONS};
use crate::codec;
use crate::error::{CheckInError, CiResult};
use crate::scorer::{self, Answers, CheckInResult};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Welcome {
        partner: Option<CheckInResult>,
    },
    InProgress {
        index: usize,
        answers: Answers,
        partner: Option<CheckInResult>,
    },
    Completed {
        result: CheckInResult,
        token: String,
    },
    Comparing {
        result: CheckInResult,
        token: String,
        partner: CheckInResult,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Answer(u8),
    Back,
    LoadPartner(String),
    Restart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: SessionState::Welcome { partner: None },
        }
    }

    /// Starts at the welcome screen with a partner token already applied,
    /// as when the app is opened from a share link.
    pub fn with_partner_token(token: &str) -> Self {
        let mut session = Self::new();
        session.load_partner(token);
        session
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn stage(&self) -> &'static str {
        match self.state {
            SessionState::Welcome { .. } => "welcome",
            SessionState::InProgress { .. } => "in_progress",
            SessionState::Completed { .. } => "completed",
            SessionState::Comparing { .. } => "comparing",
        }
    }

    /// Applies one user action. Errors leave the state untouched.
    /// `LoadPartner` returns `Ok(false)` when the token was rejected.
    pub fn apply(&mut self, action: SessionAction) -> CiResult<bool> {
        match action {
            SessionAction::Start => {
                self.start();
                Ok(true)
            }
            SessionAction::Answer(value) => self.answer(value).map(|_| true),
            SessionAction::Back => self.back(),
            SessionAction::LoadPartner(token) => Ok(self.load_partner(&token)),
            SessionAction::Restart => {
                self.restart();
                Ok(true)
            }
        }
    }

    pub fn start(&mut self) {
        let partner = self.partner().copied();
        debug!("Session: {} -> in_progress", self.stage());
        self.state = SessionState::InProgress {
            index: 0,
            answers: Answers::new(),
            partner,
        };
    }

    /// Records `value` for the current question and advances. Scores the
    /// check-in after the last question.
    pub fn answer(&mut self, value: u8) -> CiResult<()> {
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(CheckInError::InvalidAnswer(format!(
                "Answer {} is outside {}..={}",
                value, MIN_ANSWER, MAX_ANSWER
            )));
        }

        let stage = self.stage();
        let SessionState::InProgress {
            index,
            answers,
            partner,
        } = &mut self.state
        else {
            return Err(CheckInError::InvalidTransition(format!(
                "Cannot answer while {}",
                stage
            )));
        };

        answers.insert(QUESTIONS[*index].id, value);

        if *index + 1 < QUESTIONS.len() {
            *index += 1;
            return Ok(());
        }

        let result = scorer::calculate_result(answers);
        let token = codec::encode_result(&result);
        debug!(
            "Session: check-in complete (overall {}, focus {})",
            result.overall, result.focus_area
        );

        self.state = match partner.take() {
            Some(partner) => SessionState::Comparing {
                result,
                token,
                partner,
            },
            None => SessionState::Completed { result, token },
        };
        Ok(())
    }

    /// Steps back one question. Returns `Ok(false)` on the first question.
    pub fn back(&mut self) -> CiResult<bool> {
        let stage = self.stage();
        match &mut self.state {
            SessionState::InProgress { index, .. } => {
                if *index == 0 {
                    return Ok(false);
                }
                *index -= 1;
                Ok(true)
            }
            _ => Err(CheckInError::InvalidTransition(format!(
                "Cannot go back while {}",
                stage
            ))),
        }
    }

    /// Attaches a partner result from a share token. Malformed tokens are
    /// ignored. The most recently loaded token replaces any earlier one.
    pub fn load_partner(&mut self, token: &str) -> bool {
        let Some(decoded) = codec::decode_scores(codec::token_from_link(token)) else {
            debug!("Session: ignoring malformed partner token");
            return false;
        };

        let state = std::mem::replace(&mut self.state, SessionState::Welcome { partner: None });
        self.state = match state {
            SessionState::Welcome { .. } => SessionState::Welcome {
                partner: Some(decoded),
            },
            SessionState::InProgress { index, answers, .. } => SessionState::InProgress {
                index,
                answers,
                partner: Some(decoded),
            },
            SessionState::Completed { result, token }
            | SessionState::Comparing { result, token, .. } => SessionState::Comparing {
                result,
                token,
                partner: decoded,
            },
        };
        debug!("Session: partner result loaded ({})", self.stage());
        true
    }

    pub fn restart(&mut self) {
        let partner = self.partner().copied();
        debug!("Session: {} -> welcome", self.stage());
        self.state = SessionState::Welcome { partner };
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        match self.state {
            SessionState::InProgress { index, .. } => QUESTIONS.get(index),
            _ => None,
        }
    }

    pub fn current_answer(&self) -> Option<u8> {
        match &self.state {
            SessionState::InProgress { index, answers, .. } => {
                answers.get(&QUESTIONS[*index].id).copied()
            }
            _ => None,
        }
    }

    /// Share of questions already passed, 0-100.
    pub fn progress_percent(&self) -> u8 {
        match self.state {
            SessionState::Welcome { .. } => 0,
            SessionState::InProgress { index, .. } => {
                ((index as f64 / QUESTIONS.len() as f64) * 100.0 + 0.5).floor() as u8
            }
            _ => 100,
        }
    }

    pub fn result(&self) -> Option<&CheckInResult> {
        match &self.state {
            SessionState::Completed { result, .. } | SessionState::Comparing { result, .. } => {
                Some(result)
            }
            _ => None,
        }
    }

    pub fn partner(&self) -> Option<&CheckInResult> {
        match &self.state {
            SessionState::Welcome { partner } | SessionState::InProgress { partner, .. } => {
                partner.as_ref()
            }
            SessionState::Comparing { partner, .. } => Some(partner),
            SessionState::Completed { .. } => None,
        }
    }

    pub fn share_token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Completed { token, .. } | SessionState::Comparing { token, .. } => {
                Some(token)
            }
            _ => None,
        }
    }
}
