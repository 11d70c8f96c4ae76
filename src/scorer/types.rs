use crate::catalog::{self, Category, CategoryKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumString};

/// Question id -> raw response. Unanswered questions are simply absent.
pub type Answers = BTreeMap<u32, u8>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Thriving,
    Growing,
    Attention,
}

impl Tier {
    pub const THRIVING_MIN: u8 = 80;
    pub const GROWING_MIN: u8 = 55;

    /// Lower bounds are inclusive: 80 is thriving, 55 is growing.
    pub fn from_score(score: u8) -> Self {
        if score >= Self::THRIVING_MIN {
            Tier::Thriving
        } else if score >= Self::GROWING_MIN {
            Tier::Growing
        } else {
            Tier::Attention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Thriving => "Thriving",
            Tier::Growing => "Growing",
            Tier::Attention => "Needs attention",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Thriving => "🌱",
            Tier::Growing => "🌤️",
            Tier::Attention => "🌧️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: CategoryKey,
    pub score: u8, // 0-100
    pub tier: Tier,
}

impl CategoryScore {
    pub fn new(category: CategoryKey, score: u8) -> Self {
        Self {
            category,
            score,
            tier: Tier::from_score(score),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResult {
    pub overall: u8, // 0-100
    // Always in CATEGORY_ORDER
    pub categories: [CategoryScore; 4],
    pub focus_area: CategoryKey,
}

impl CheckInResult {
    pub fn category_score(&self, key: CategoryKey) -> &CategoryScore {
        &self.categories[key.position()]
    }

    pub fn scores(&self) -> [u8; 4] {
        self.categories.map(|c| c.score)
    }

    pub fn focus_category(&self) -> &'static Category {
        catalog::category(self.focus_area)
    }
}
