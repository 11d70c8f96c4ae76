//! Share tokens.
//!
//! A token carries only aggregate scores: `{"o": overall, "c": [4 scores],
//! "f": focus key, "v": order version}` as JSON, base64 encoded with the
//! URL-safe alphabet and no padding. Raw answers never leave the device.
//! Category scores are positional and follow [`CATEGORY_ORDER`].

use crate::catalog::{CategoryKey, CATEGORY_ORDER, CATEGORY_ORDER_VERSION};
use crate::scorer::{self, Answers, CategoryScore, CheckInResult};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const MAX_SCORE: u8 = 100;

#[derive(Debug, Serialize, Deserialize)]
struct SharePayload {
    o: u8,
    c: Vec<u8>,
    f: CategoryKey,
    // Tokens minted before the version field existed are version 1.
    #[serde(default = "first_version")]
    v: u8,
}

fn first_version() -> u8 {
    1
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token is not valid base64: {0}")]
    Transform(#[from] base64::DecodeError),

    #[error("token payload is not a valid score record: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("token uses category order v{0}, expected v{expected}", expected = CATEGORY_ORDER_VERSION)]
    Version(u8),

    #[error("token payload has {0} category scores, expected 4")]
    Shape(usize),

    #[error("token score {0} is outside 0..=100")]
    Range(u8),
}

/// Scores `answers` and encodes the result.
pub fn encode_scores(answers: &Answers) -> String {
    encode_result(&scorer::calculate_result(answers))
}

pub fn encode_result(result: &CheckInResult) -> String {
    let payload = SharePayload {
        o: result.overall,
        c: result.scores().to_vec(),
        f: result.focus_area,
        v: CATEGORY_ORDER_VERSION,
    };
    let json = serde_json::to_vec(&payload)
        .expect("payload of integers and a unit enum always serializes");
    URL_SAFE_NO_PAD.encode(json)
}

/// Decodes a token, or `None` for anything malformed. Never panics and never
/// returns a partially filled result.
pub fn decode_scores(token: &str) -> Option<CheckInResult> {
    match decode_token(token) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!("Rejected share token: {}", e);
            None
        }
    }
}

/// Like [`decode_scores`] but reports why a token was rejected.
pub fn decode_token(token: &str) -> Result<CheckInResult, TokenError> {
    let normalized = normalize_token(token);
    let bytes = URL_SAFE_NO_PAD.decode(normalized.as_bytes())?;
    let payload: SharePayload = serde_json::from_slice(&bytes)?;

    if payload.v != CATEGORY_ORDER_VERSION {
        return Err(TokenError::Version(payload.v));
    }
    if payload.c.len() != CATEGORY_ORDER.len() {
        return Err(TokenError::Shape(payload.c.len()));
    }
    if let Some(&bad) = std::iter::once(&payload.o)
        .chain(payload.c.iter())
        .find(|&&s| s > MAX_SCORE)
    {
        return Err(TokenError::Range(bad));
    }

    let categories = CATEGORY_ORDER.map(|key| CategoryScore::new(key, payload.c[key.position()]));

    Ok(CheckInResult {
        overall: payload.o,
        categories,
        focus_area: payload.f,
    })
}

/// Accepts standard-alphabet, padded input (browser `btoa` output) as well as
/// our own URL-safe form.
fn normalize_token(token: &str) -> String {
    let token = token.trim();
    let token = token.strip_prefix('#').unwrap_or(token);
    token
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// `<origin><path>#<token>`
pub fn share_link(origin: &str, path: &str, token: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}#{}", origin, path, token)
    } else {
        format!("{}/{}#{}", origin, path, token)
    }
}

/// The fragment of a share link, or the input itself when it has none.
pub fn token_from_link(link: &str) -> &str {
    let link = link.trim();
    match link.split_once('#') {
        Some((_, fragment)) => fragment,
        None => link,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: CategoryKey,
    pub mine: u8,
    pub partner: u8,
    /// mine - partner
    pub difference: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub overall_mine: u8,
    pub overall_partner: u8,
    pub overall_difference: i16,
    pub categories: [CategoryComparison; 4],
}

impl Comparison {
    pub fn new(mine: &CheckInResult, partner: &CheckInResult) -> Self {
        let categories = CATEGORY_ORDER.map(|key| {
            let a = mine.category_score(key).score;
            let b = partner.category_score(key).score;
            CategoryComparison {
                category: key,
                mine: a,
                partner: b,
                difference: a as i16 - b as i16,
            }
        });

        Self {
            overall_mine: mine.overall,
            overall_partner: partner.overall,
            overall_difference: mine.overall as i16 - partner.overall as i16,
            categories,
        }
    }

    /// Category where the two check-ins disagree most (first wins ties).
    pub fn largest_gap(&self) -> &CategoryComparison {
        let mut best = &self.categories[0];
        for c in &self.categories[1..] {
            if c.difference.abs() > best.difference.abs() {
                best = c;
            }
        }
        best
    }
}
