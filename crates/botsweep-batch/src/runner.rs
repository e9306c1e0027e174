use botsweep_core::{AccountScorer, Language, ScoreValue, SweepError, SweepResult};
use tracing::{info, warn};

/// Score every account in order, one lookup in flight at a time.
///
/// Produces exactly one value per input name. An unavailable account is
/// recorded as `ScoreValue::Unavailable` and the loop moves on; any other
/// lookup failure aborts the whole batch.
pub async fn score_accounts<S: AccountScorer>(
    scorer: &S,
    language: Language,
    screen_names: &[String],
) -> SweepResult<Vec<ScoreValue>> {
    let mut scores = Vec::with_capacity(screen_names.len());

    for (idx, screen_name) in screen_names.iter().enumerate() {
        match scorer.check_account(screen_name).await {
            Ok(report) => {
                let overall = report.display_scores.for_language(language).overall;
                info!(
                    row = idx + 1,
                    total = screen_names.len(),
                    screen_name = %screen_name,
                    overall,
                    "account scored"
                );
                scores.push(ScoreValue::Scored(overall));
            }
            Err(SweepError::AccountUnavailable { reason, .. }) => {
                warn!(
                    row = idx + 1,
                    screen_name = %screen_name,
                    reason = %reason,
                    "account unavailable, marked and skipped"
                );
                scores.push(ScoreValue::Unavailable);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use botsweep_core::{CapScores, LanguageScores, ScoreBreakdown, ScoreReport};
    use std::collections::HashMap;

    enum Outcome {
        Score(f64),
        Unavailable,
        Fail,
    }

    struct MockScorer {
        outcomes: HashMap<String, Outcome>,
    }

    impl MockScorer {
        fn new(entries: Vec<(&str, Outcome)>) -> Self {
            Self {
                outcomes: entries
                    .into_iter()
                    .map(|(name, outcome)| (name.to_string(), outcome))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl AccountScorer for MockScorer {
        async fn check_account(&self, screen_name: &str) -> SweepResult<ScoreReport> {
            match self.outcomes.get(screen_name) {
                Some(Outcome::Score(v)) => Ok(report(*v)),
                Some(Outcome::Unavailable) => Err(SweepError::AccountUnavailable {
                    screen_name: screen_name.to_string(),
                    reason: "account not found (deleted or renamed)".to_string(),
                }),
                Some(Outcome::Fail) => {
                    Err(SweepError::Api("scoring service returned 500".to_string()))
                }
                None => Err(SweepError::Api(format!(
                    "unexpected lookup: {}",
                    screen_name
                ))),
            }
        }
    }

    fn breakdown(overall: f64) -> ScoreBreakdown {
        ScoreBreakdown {
            astroturf: 0.0,
            fake_follower: 0.0,
            financial: 0.0,
            other: 0.0,
            overall,
            self_declared: 0.0,
            spammer: 0.0,
        }
    }

    // english gets the mock value, universal half of it, so the two
    // categories are distinguishable in tests.
    fn report(english_overall: f64) -> ScoreReport {
        ScoreReport {
            cap: CapScores {
                english: 0.5,
                universal: 0.5,
            },
            display_scores: LanguageScores {
                english: breakdown(english_overall),
                universal: breakdown(english_overall / 2.0),
            },
            raw_scores: LanguageScores {
                english: breakdown(english_overall / 5.0),
                universal: breakdown(english_overall / 10.0),
            },
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn one_score_per_account_in_input_order() {
        let scorer = MockScorer::new(vec![
            ("a", Outcome::Score(1.0)),
            ("b", Outcome::Score(2.5)),
            ("c", Outcome::Score(4.0)),
        ]);
        let scores = score_accounts(&scorer, Language::English, &names(&["a", "b", "c"]))
            .await
            .unwrap();
        assert_eq!(
            scores,
            vec![
                ScoreValue::Scored(1.0),
                ScoreValue::Scored(2.5),
                ScoreValue::Scored(4.0)
            ]
        );
    }

    #[tokio::test]
    async fn empty_input_yields_empty_output() {
        let scorer = MockScorer::new(vec![]);
        let scores = score_accounts(&scorer, Language::English, &[])
            .await
            .unwrap();
        assert!(scores.is_empty());
    }

    #[tokio::test]
    async fn unavailable_account_marked_and_batch_continues() {
        let scorer = MockScorer::new(vec![
            ("alice", Outcome::Score(0.2)),
            ("bob", Outcome::Score(0.7)),
            ("deleted_user", Outcome::Unavailable),
        ]);
        let scores = score_accounts(
            &scorer,
            Language::English,
            &names(&["alice", "bob", "deleted_user"]),
        )
        .await
        .unwrap();

        assert_eq!(
            scores,
            vec![
                ScoreValue::Scored(0.2),
                ScoreValue::Scored(0.7),
                ScoreValue::Unavailable
            ]
        );
        let cells: Vec<String> = scores.iter().map(|s| s.as_cell()).collect();
        assert_eq!(cells, vec!["0.2", "0.7", "error"]);
    }

    #[tokio::test]
    async fn unavailable_mid_batch_does_not_stop_later_rows() {
        let scorer = MockScorer::new(vec![
            ("alice", Outcome::Score(0.2)),
            ("deleted_user", Outcome::Unavailable),
            ("bob", Outcome::Score(0.7)),
        ]);
        let scores = score_accounts(
            &scorer,
            Language::English,
            &names(&["alice", "deleted_user", "bob"]),
        )
        .await
        .unwrap();
        assert_eq!(
            scores,
            vec![
                ScoreValue::Scored(0.2),
                ScoreValue::Unavailable,
                ScoreValue::Scored(0.7)
            ]
        );
    }

    #[tokio::test]
    async fn unexpected_error_aborts_the_batch() {
        let scorer = MockScorer::new(vec![
            ("alice", Outcome::Score(0.2)),
            ("broken", Outcome::Fail),
            ("bob", Outcome::Score(0.7)),
        ]);
        let result = score_accounts(
            &scorer,
            Language::English,
            &names(&["alice", "broken", "bob"]),
        )
        .await;
        assert!(matches!(result, Err(SweepError::Api(_))));
    }

    #[tokio::test]
    async fn rerun_with_same_mock_is_identical() {
        let scorer = MockScorer::new(vec![
            ("alice", Outcome::Score(0.2)),
            ("bob", Outcome::Score(0.7)),
            ("deleted_user", Outcome::Unavailable),
        ]);
        let input = names(&["alice", "bob", "deleted_user"]);

        let first = score_accounts(&scorer, Language::English, &input)
            .await
            .unwrap();
        let second = score_accounts(&scorer, Language::English, &input)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn language_selects_score_category() {
        let scorer = MockScorer::new(vec![("alice", Outcome::Score(3.0))]);
        let input = names(&["alice"]);

        let english = score_accounts(&scorer, Language::English, &input)
            .await
            .unwrap();
        let universal = score_accounts(&scorer, Language::Universal, &input)
            .await
            .unwrap();
        assert_eq!(english, vec![ScoreValue::Scored(3.0)]);
        assert_eq!(universal, vec![ScoreValue::Scored(1.5)]);
    }
}
