use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    /// The service cannot score this account (deleted, suspended, or
    /// protected). The only error kind recovered at the row boundary.
    #[error("account unavailable: {screen_name}: {reason}")]
    AccountUnavailable { screen_name: String, reason: String },

    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("table error: {0}")]
    Table(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SweepResult<T> = Result<T, SweepError>;
