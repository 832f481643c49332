/// Relay that forwards lead submissions by email.
const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Placeholder shipped in the repo; replace at build time with
/// `LEAD_RELAY_ACCESS_KEY=... trunk build --release`.
pub const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

/// Where contact forms post to and which inbox the relay routes them to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
        }
    }

    pub fn has_placeholder_key(&self) -> bool {
        self.access_key == PLACEHOLDER_ACCESS_KEY
    }
}

fn from_env(endpoint: Option<&str>, access_key: Option<&str>) -> RelayConfig {
    RelayConfig::new(
        endpoint.filter(|s| !s.is_empty()).unwrap_or(DEFAULT_RELAY_URL),
        access_key.filter(|s| !s.is_empty()).unwrap_or(PLACEHOLDER_ACCESS_KEY),
    )
}

/// Relay settings baked in at compile time.
pub fn relay_config() -> RelayConfig {
    from_env(option_env!("LEAD_RELAY_URL"), option_env!("LEAD_RELAY_ACCESS_KEY"))
}

#[cfg(debug_assertions)]
pub fn warn_on_placeholder(config: &RelayConfig) {
    if config.has_placeholder_key() {
        log::warn!("LEAD_RELAY_ACCESS_KEY not set, contact forms will be rejected by the relay");
    }
}

#[cfg(not(debug_assertions))]
pub fn warn_on_placeholder(_config: &RelayConfig) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_env_falls_back_to_defaults() {
        let config = from_env(None, None);
        assert_eq!(config.endpoint, DEFAULT_RELAY_URL);
        assert!(config.has_placeholder_key());
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let config = from_env(Some(""), Some(""));
        assert_eq!(config, from_env(None, None));
    }

    #[test]
    fn env_values_override_defaults() {
        let config = from_env(Some("http://localhost:8080/submit"), Some("abc-123"));
        assert_eq!(config.endpoint, "http://localhost:8080/submit");
        assert_eq!(config.access_key, "abc-123");
        assert!(!config.has_placeholder_key());
    }
}
