//! Authentication state machine over the transport seam.
//!
//! Sign-in with a user account is a two-step exchange that may span two
//! process invocations: run one requests a login code and persists the
//! returned `phone_code_hash`; run two presents the code from the Telegram
//! app together with the stored hash. The grammers session blob itself is
//! saved by the transport; this module owns only the transitions and the
//! transient pending file.

use std::path::Path;

use {
    serde::{Deserialize, Serialize},
    tracing::{info, warn},
};

use crate::{
    config::TelegramConfig,
    error::{Error, Result},
    transport::Transport,
};

/// Where the session stands, derived fresh each run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    /// A login code is in flight; `pending_hash` must accompany it.
    CodeRequested { pending_hash: String },
    Authenticated,
}

/// Contents of the transient pending-verification file.
#[derive(Debug, Serialize, Deserialize)]
struct PendingLogin {
    phone_code_hash: String,
}

/// Drives authentication for the single session of a run.
pub struct SessionManager<'a, T: Transport> {
    transport: &'a T,
    config: &'a TelegramConfig,
    state: SessionState,
}

impl<'a, T: Transport> SessionManager<'a, T> {
    #[must_use]
    pub fn new(transport: &'a T, config: &'a TelegramConfig) -> Self {
        Self {
            transport,
            config,
            state: SessionState::Unauthenticated,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Reach `Authenticated` or fail with the taxonomy of the run:
    ///
    /// - a stored session that is still valid authenticates with no
    ///   interaction and no transition fired;
    /// - `AuthPending` after requesting a code when none was supplied — the
    ///   pending hash is persisted for the follow-up run;
    /// - `AuthFailed` when required credentials are absent, or when the code
    ///   exchange rejects the code (pending state is kept for a retry).
    pub async fn ensure_authenticated(&mut self) -> Result<()> {
        if self.transport.is_authorized().await? {
            info!("reusing stored session");
            self.state = SessionState::Authenticated;
            return Ok(());
        }

        let phone = self.config.phone.as_deref().ok_or_else(|| {
            Error::auth_failed("no stored session; set TELEGRAM_PHONE to begin sign-in")
        })?;

        if let Some(pending) = load_pending(&self.config.pending_file)? {
            self.state = SessionState::CodeRequested {
                pending_hash: pending.phone_code_hash.clone(),
            };

            let Some(code) = self.config.code.as_deref() else {
                return Err(Error::AuthPending);
            };

            match self
                .transport
                .sign_in(phone, code, &pending.phone_code_hash)
                .await
            {
                Ok(()) => {
                    self.transport.save_session().await?;
                    clear_pending(&self.config.pending_file)?;
                    info!("signed in; session saved");
                    self.state = SessionState::Authenticated;
                    Ok(())
                },
                Err(e) => {
                    // Pending file stays for another attempt with a new code.
                    warn!(error = %e, "code exchange failed");
                    Err(e)
                },
            }
        } else {
            if self.config.code.is_some() {
                return Err(Error::auth_failed(
                    "TELEGRAM_CODE set but no code was requested; unset it and run again",
                ));
            }

            let pending_hash = self.transport.request_login_code(phone).await?;
            store_pending(&self.config.pending_file, &PendingLogin {
                phone_code_hash: pending_hash.clone(),
            })?;
            // Save the session blob now: the auth key negotiated during this
            // run must be the one that presents the code next run.
            self.transport.save_session().await?;
            info!(phone, "login code requested");
            self.state = SessionState::CodeRequested { pending_hash };
            Err(Error::AuthPending)
        }
    }
}

fn load_pending(path: &Path) -> Result<Option<PendingLogin>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&raw)?))
}

fn store_pending(path: &Path, pending: &PendingLogin) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string(pending)?)?;
    Ok(())
}

fn clear_pending(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}
