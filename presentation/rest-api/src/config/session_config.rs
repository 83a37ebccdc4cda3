use std::time::Duration;

use anyhow::bail;
use poem::session::{CookieConfig, MemoryStorage, ServerSession};
use poem::web::cookie::CookieKey;

const SESSION_COOKIE_NAME: &str = "shop-session";
const MIN_SECRET_LEN: usize = 32;
/// Idle baskets are forgotten after two weeks.
const SESSION_TTL: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Session settings. Session data, including anonymous baskets, stays on the
/// server; the private (encrypted) cookie only carries the session id, so
/// basket size is not bounded by the browser's cookie limit.
///
/// Environment variables:
/// - SESSION_SECRET: Cookie key material, at least 32 bytes (required)
/// - SESSION_COOKIE_SECURE: Send the cookie over HTTPS only (default: false)
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub secure: bool,
}

impl SessionConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var("SESSION_SECRET").ok(),
            std::env::var("SESSION_COOKIE_SECURE").ok(),
        )
    }

    fn from_values(secret: Option<String>, secure: Option<String>) -> anyhow::Result<Self> {
        let Some(secret) = secret else {
            bail!("SESSION_SECRET must be set");
        };
        if secret.len() < MIN_SECRET_LEN {
            bail!("SESSION_SECRET must be at least {MIN_SECRET_LEN} bytes");
        }
        let secure = secure
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self { secret, secure })
    }

    /// In-process session storage: sessions do not survive a restart and are
    /// not shared between replicas.
    pub fn middleware(&self) -> ServerSession<MemoryStorage> {
        let key = CookieKey::derive_from(self.secret.as_bytes());
        ServerSession::new(
            CookieConfig::private(key)
                .name(SESSION_COOKIE_NAME)
                .http_only(true)
                .secure(self.secure)
                .max_age(SESSION_TTL),
            MemoryStorage::new(),
        )
    }
}
