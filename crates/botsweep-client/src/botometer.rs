use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use botsweep_core::{AccountScorer, ScoreReport, SweepError, SweepResult};

use crate::credentials::Credentials;

const BOTOMETER_API_URL: &str = "https://botometer-pro.p.rapidapi.com/4/check_account";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wait applied to a 429 response that carries no Retry-After header.
const RATELIMIT_FALLBACK_WAIT: Duration = Duration::from_secs(60);

pub struct BotometerClient {
    client: reqwest::Client,
    api_url: String,
    credentials: Credentials,
    wait_on_ratelimit: bool,
}

impl BotometerClient {
    pub fn new(credentials: Credentials) -> SweepResult<Self> {
        credentials.validate()?;
        Ok(Self {
            client: reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?,
            api_url: BOTOMETER_API_URL.to_string(),
            credentials,
            wait_on_ratelimit: true,
        })
    }

    /// Point the client at a different endpoint (self-hosted deployments).
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// When false, a 429 from the service is a fatal `RateLimited` error
    /// instead of a wait-and-retry.
    pub fn with_wait_on_ratelimit(mut self, wait: bool) -> Self {
        self.wait_on_ratelimit = wait;
        self
    }

    /// Look up one account. Blocks through rate-limit waits; returns
    /// `AccountUnavailable` only for accounts the service cannot score.
    pub async fn check_account(&self, screen_name: &str) -> SweepResult<ScoreReport> {
        loop {
            let resp = self
                .client
                .post(&self.api_url)
                .header("X-RapidAPI-Key", &self.credentials.rapidapi_key)
                .json(&json!({
                    "screen_name": screen_name,
                    "consumer_key": self.credentials.consumer_key,
                    "consumer_secret": self.credentials.consumer_secret,
                    "access_token": self.credentials.access_token,
                    "access_token_secret": self.credentials.access_token_secret,
                }))
                .send()
                .await?;

            if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                if !self.wait_on_ratelimit {
                    return Err(SweepError::RateLimited(format!(
                        "scoring service returned 429 for {}",
                        screen_name
                    )));
                }
                let wait = retry_after(&resp).unwrap_or(RATELIMIT_FALLBACK_WAIT);
                warn!(
                    screen_name = %screen_name,
                    wait_secs = wait.as_secs(),
                    "rate limited, waiting before retry"
                );
                sleep(wait).await;
                continue;
            }

            return self.read_report(screen_name, resp).await;
        }
    }

    async fn read_report(
        &self,
        screen_name: &str,
        resp: reqwest::Response,
    ) -> SweepResult<ScoreReport> {
        let status = resp.status();

        if let Some(reason) = unavailable_reason(status) {
            return Err(SweepError::AccountUnavailable {
                screen_name: screen_name.to_string(),
                reason: reason.to_string(),
            });
        }

        if status == StatusCode::UNAUTHORIZED {
            return Err(SweepError::Credentials(
                "scoring service rejected the configured credentials".to_string(),
            ));
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SweepError::Api(format!(
                "scoring service returned {}: {}",
                status, body
            )));
        }

        let value: Value = resp.json().await?;
        if let Some(err) = value.get("error") {
            return Err(SweepError::Api(format!("scoring service error: {}", err)));
        }

        let report: ScoreReport = serde_json::from_value(value)?;
        debug!(
            screen_name = %screen_name,
            overall = report.display_scores.english.overall,
            "account scored"
        );
        Ok(report)
    }
}

#[async_trait]
impl AccountScorer for BotometerClient {
    async fn check_account(&self, screen_name: &str) -> SweepResult<ScoreReport> {
        BotometerClient::check_account(self, screen_name).await
    }
}

/// Statuses the service uses for accounts it cannot score. 401 is
/// deliberately excluded so bad credentials never read as a per-row skip.
fn unavailable_reason(status: StatusCode) -> Option<&'static str> {
    if status == StatusCode::NOT_FOUND {
        Some("account not found (deleted or renamed)")
    } else if status == StatusCode::FORBIDDEN {
        Some("account suspended or protected")
    } else {
        None
    }
}

fn retry_after(resp: &reqwest::Response) -> Option<Duration> {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
