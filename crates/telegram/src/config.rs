use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, Secret};

use crate::error::{Error, Result};

/// Fixed session artifact name inside the data directory.
const SESSION_FILE: &str = "pulse.session";

/// Transient pending-verification artifact, removed once sign-in succeeds.
const PENDING_FILE: &str = "pulse.pending.json";

/// Credentials and fetch settings for one run.
///
/// Everything is optional at construction time; the session manager decides
/// what is actually required for the authentication transition it attempts.
#[derive(Clone)]
pub struct TelegramConfig {
    /// API key pair from <https://my.telegram.org>.
    pub api_id: Option<i32>,
    pub api_hash: Option<Secret<String>>,

    /// Phone identifier with country code, used to request a login code.
    pub phone: Option<String>,
    /// One-time verification code from the Telegram app.
    pub code: Option<String>,

    /// Durable grammers session blob, reused verbatim across runs.
    pub session_file: PathBuf,
    /// Pending `phone_code_hash` from an unfinished sign-in.
    pub pending_file: PathBuf,
}

impl TelegramConfig {
    /// Read credentials from the environment, with state files rooted at
    /// `data_dir`.
    ///
    /// Unset and empty variables are treated as absent; a set but
    /// non-numeric `TELEGRAM_API_ID` is a hard failure, not silently
    /// ignored.
    pub fn from_env(data_dir: &Path) -> Result<Self> {
        let api_id = match non_empty(std::env::var("TELEGRAM_API_ID").ok()) {
            Some(raw) => Some(parse_api_id(&raw)?),
            None => None,
        };
        Ok(Self {
            api_id,
            api_hash: std::env::var("TELEGRAM_API_HASH").ok().map(Secret::new),
            phone: non_empty(std::env::var("TELEGRAM_PHONE").ok()),
            code: non_empty(std::env::var("TELEGRAM_CODE").ok()),
            session_file: data_dir.join(SESSION_FILE),
            pending_file: data_dir.join(PENDING_FILE),
        })
    }

    /// The API key pair, or `AuthFailed` if either half is missing.
    ///
    /// Connecting to MTProto needs the pair even when a stored session
    /// exists, so absence is always a hard stop.
    pub fn require_keys(&self) -> Result<(i32, String)> {
        match (&self.api_id, &self.api_hash) {
            (Some(id), Some(hash)) => Ok((*id, hash.expose_secret().clone())),
            _ => Err(Error::auth_failed(
                "TELEGRAM_API_ID and TELEGRAM_API_HASH must be set",
            )),
        }
    }
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_id", &self.api_id)
            .field("api_hash", &self.api_hash.as_ref().map(|_| "[REDACTED]"))
            .field("phone", &self.phone)
            .field("session_file", &self.session_file)
            .finish_non_exhaustive()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_api_id(raw: &str) -> Result<i32> {
    raw.trim().parse().map_err(|_| {
        Error::auth_failed(format!("TELEGRAM_API_ID must be an integer, got {raw:?}"))
    })
}
