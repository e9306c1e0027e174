use botsweep_core::{SweepError, SweepResult};
use serde::Deserialize;

/// RapidAPI key plus the Twitter app OAuth quad the scoring service
/// authenticates with.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub rapidapi_key: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    pub access_token: String,
    pub access_token_secret: String,
}

impl Credentials {
    pub fn validate(&self) -> SweepResult<()> {
        let fields = [
            ("rapidapi_key", &self.rapidapi_key),
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("access_token", &self.access_token),
            ("access_token_secret", &self.access_token_secret),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(SweepError::Credentials(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }
        Ok(())
    }
}
