use std::error::Error as StdError;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed errors for the fetch pipeline.
///
/// `AuthFailed` and `AuthPending` are fatal for the current run; per-channel
/// variants (`ChannelNotFound`, transport failures) are caught by the fetcher
/// and never abort the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No valid session and the credentials needed to create one are absent
    /// or unusable. Hard stop, never retried automatically.
    #[error("not authorized: {message}")]
    AuthFailed { message: String },

    /// A verification code was requested but not yet supplied. The pending
    /// state is persisted so a follow-up run with `TELEGRAM_CODE` set can
    /// complete sign-in.
    #[error("verification code sent; re-run with TELEGRAM_CODE set to complete sign-in")]
    AuthPending,

    /// The channel handle could not be resolved to a source entity.
    #[error("channel not found: @{handle}")]
    ChannelNotFound { handle: String },

    /// An MTProto request failed.
    #[error(transparent)]
    Transport(#[from] grammers_client::InvocationError),

    /// Session or pending-state file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// Wrapped source error from an external dependency.
    #[error("{context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn auth_failed(message: impl Into<String>) -> Self {
        Self::AuthFailed {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn channel_not_found(handle: impl Into<String>) -> Self {
        Self::ChannelNotFound {
            handle: handle.into(),
        }
    }

    #[must_use]
    pub fn external(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
