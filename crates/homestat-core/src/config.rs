// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config, with defaults matching the
// dashboard's historical behavior (8-char passwords, 90-day sessions,
// 3-year API keys).

use chrono::Duration;

/// Configuration for the auth core
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Minimum accepted password length for registration
    pub min_password_len: usize,
    /// Session lifetime in days (absolute, never renewed on use)
    pub session_ttl_days: i64,
    /// API key lifetime in days (a safety backstop, not an operational lifecycle)
    pub api_key_ttl_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_len: 8,
            session_ttl_days: 90,
            api_key_ttl_days: 3 * 365,
        }
    }
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let min_password_len = std::env::var("AUTH_MIN_PASSWORD_LEN")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.min_password_len);

        let session_ttl_days = std::env::var("AUTH_SESSION_TTL_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.session_ttl_days);

        let api_key_ttl_days = std::env::var("AUTH_API_KEY_TTL_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.api_key_ttl_days);

        Self {
            min_password_len,
            session_ttl_days,
            api_key_ttl_days,
        }
    }

    /// Session lifetime as a duration
    pub fn session_ttl(&self) -> Duration {
        Duration::days(self.session_ttl_days)
    }

    /// API key lifetime as a duration
    pub fn api_key_ttl(&self) -> Duration {
        Duration::days(self.api_key_ttl_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.min_password_len, 8);
        assert_eq!(config.session_ttl(), Duration::days(90));
        assert_eq!(config.api_key_ttl(), Duration::days(1095));
    }
}
