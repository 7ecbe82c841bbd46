// ⚙️ Tracker Configuration - Process-wide boundary values
//
// Built once at startup and passed explicitly into anything that needs it;
// nothing in the core reads environment state directly.

use chrono::{DateTime, Utc};

/// Environment variable names understood by [`TrackerConfig::from_env`].
pub const ENV_SOURCE_REPOSITORY: &str = "WERO_SOURCE_REPOSITORY";
pub const ENV_CONTRIBUTION_GUIDELINES: &str = "WERO_CONTRIBUTION_GUIDELINES";
pub const ENV_OFFICIAL_WEBSITE: &str = "WERO_OFFICIAL_WEBSITE";
pub const ENV_DATA_URL: &str = "WERO_DATA_URL";

/// External links and the snapshot timestamp the presentation layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Issue tracker / source repository base URL (contributions become
    /// pre-filled issues there)
    pub source_repository: String,
    pub contribution_guidelines: String,
    pub official_wero_website: String,
    /// Where the application shell fetches the dataset JSON from
    pub data_url: String,
    /// "Last updated" display value, fixed at process start
    pub last_updated: DateTime<Utc>,
}

impl TrackerConfig {
    /// Read the configuration from the environment, with `"#"` placeholders
    /// for unset links so the UI renders inert anchors instead of panicking.
    pub fn from_env() -> Self {
        TrackerConfig {
            source_repository: env_or(ENV_SOURCE_REPOSITORY, "#"),
            contribution_guidelines: env_or(ENV_CONTRIBUTION_GUIDELINES, "#"),
            official_wero_website: env_or(ENV_OFFICIAL_WEBSITE, "#"),
            data_url: env_or(ENV_DATA_URL, ""),
            last_updated: Utc::now(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
