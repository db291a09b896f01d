use std::time::Duration;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Longest accepted session TTL, in days. Larger values are clamped.
pub const MAX_SESSION_TTL_DAYS: u64 = 365;

/// Auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub session_ttl: Duration,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(7 * SECONDS_PER_DAY),
            cookie_name: "session".to_string(),
            cookie_secure: true,
        }
    }
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SESSION_TTL_DAYS`: Session TTL in days (default: 7, at most 365)
    /// - `COOKIE_SECURE`: Whether to set secure flag on cookies (default: true)
    /// - `AUTH_COOKIE_NAME`: Session cookie name (default: `session`)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let session_ttl = std::env::var("SESSION_TTL_DAYS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(session_ttl_from_days)
            .unwrap_or(defaults.session_ttl);

        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(defaults.cookie_secure);

        let cookie_name = std::env::var("AUTH_COOKIE_NAME").unwrap_or(defaults.cookie_name);

        Self {
            session_ttl,
            cookie_name,
            cookie_secure,
        }
    }

    /// Session TTL as a chrono duration, for expiry arithmetic.
    ///
    /// Saturates instead of panicking when the TTL was set out of range in code.
    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::MAX)
    }
}

/// Converts a day count into a TTL, clamped to [`MAX_SESSION_TTL_DAYS`].
fn session_ttl_from_days(days: u64) -> Duration {
    let clamped = days.min(MAX_SESSION_TTL_DAYS);
    if clamped < days {
        tracing::warn!(
            requested = days,
            max = MAX_SESSION_TTL_DAYS,
            "SESSION_TTL_DAYS out of range, clamping"
        );
    }
    Duration::from_secs(clamped * SECONDS_PER_DAY)
}
