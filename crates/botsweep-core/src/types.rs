use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SweepError, SweepResult};

/// Cell written for a row whose account could not be scored.
pub const UNAVAILABLE_CELL: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Universal,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Universal => "universal",
        }
    }
}

impl FromStr for Language {
    type Err = SweepError;

    fn from_str(s: &str) -> SweepResult<Self> {
        match s.to_lowercase().as_str() {
            "english" => Ok(Language::English),
            "universal" => Ok(Language::Universal),
            other => Err(SweepError::Config(format!(
                "unknown language: {}. use english or universal",
                other
            ))),
        }
    }
}

/// Nested result structure returned by the scoring service for one account.
/// Display scores run 0-5, raw scores 0-1, CAP is a probability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub cap: CapScores,
    pub display_scores: LanguageScores,
    pub raw_scores: LanguageScores,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapScores {
    pub english: f64,
    pub universal: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageScores {
    pub english: ScoreBreakdown,
    pub universal: ScoreBreakdown,
}

impl LanguageScores {
    pub fn for_language(&self, language: Language) -> &ScoreBreakdown {
        match language {
            Language::English => &self.english,
            Language::Universal => &self.universal,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub astroturf: f64,
    pub fake_follower: f64,
    pub financial: f64,
    pub other: f64,
    pub overall: f64,
    pub self_declared: f64,
    pub spammer: f64,
}

/// Outcome recorded for one roster row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreValue {
    Scored(f64),
    Unavailable,
}

impl ScoreValue {
    pub fn as_cell(&self) -> String {
        match self {
            ScoreValue::Scored(v) => format!("{}", v),
            ScoreValue::Unavailable => UNAVAILABLE_CELL.to_string(),
        }
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_cell())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BotBand {
    LikelyHuman,
    Uncertain,
    LikelyBot,
}

/// Coarse banding of a 0-5 display score. Mid-scale means the classifier
/// itself is uncertain, not that the account is half-automated.
pub fn band_for_display(overall: f64) -> BotBand {
    if overall < 2.0 {
        BotBand::LikelyHuman
    } else if overall <= 3.0 {
        BotBand::Uncertain
    } else {
        BotBand::LikelyBot
    }
}

/// Single-account lookup against a bot-scoring service.
#[async_trait]
pub trait AccountScorer: Send + Sync {
    async fn check_account(&self, screen_name: &str) -> SweepResult<ScoreReport>;
}
