pub mod botometer;
pub mod credentials;

pub use botometer::BotometerClient;
pub use credentials::Credentials;
