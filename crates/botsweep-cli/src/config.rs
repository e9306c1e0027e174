use botsweep_client::Credentials;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SweepConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Deserialize)]
pub struct ApiConfig {
    pub rapidapi_key: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
    pub api_url: Option<String>,
    #[serde(default = "default_wait_on_ratelimit")]
    pub wait_on_ratelimit: bool,
}

#[derive(Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_column")]
    pub column: String,
    #[serde(default = "default_score_column")]
    pub score_column: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            column: default_column(),
            score_column: default_score_column(),
            language: default_language(),
        }
    }
}

fn default_wait_on_ratelimit() -> bool {
    true
}
fn default_column() -> String {
    "screen_name".to_string()
}
fn default_score_column() -> String {
    "score".to_string()
}
fn default_language() -> String {
    "english".to_string()
}

impl SweepConfig {
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            rapidapi_key: self.api.rapidapi_key.clone(),
            consumer_key: self.api.consumer_key.clone(),
            consumer_secret: self.api.consumer_secret.clone(),
            access_token: self.api.access_token.clone(),
            access_token_secret: self.api.access_token_secret.clone(),
        }
    }
}
