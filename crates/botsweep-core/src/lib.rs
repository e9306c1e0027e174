pub mod error;
pub mod types;

pub use error::{SweepError, SweepResult};
pub use types::{
    band_for_display, AccountScorer, BotBand, CapScores, Language, LanguageScores, ScoreBreakdown,
    ScoreReport, ScoreValue,
};
