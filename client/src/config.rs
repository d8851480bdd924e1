use log::Level;
use shared::endpoints::{Endpoints, DEFAULT_BASE_URL};

/// Settings baked in at build time through `PARTY_API_URL` and
/// `PARTY_LOG_LEVEL`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub endpoints: Endpoints,
    pub log_level: Level,
}

impl Config {
    pub fn from_build_env() -> Self {
        Config::from_values(option_env!("PARTY_API_URL"), option_env!("PARTY_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        Config {
            endpoints: Endpoints::new(api_url),
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(Level::Info),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_values(None, None)
    }
}
