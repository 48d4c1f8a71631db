//! Transport seam between the pipeline and the MTProto client.
//!
//! The session manager and fetcher are written against this trait so the
//! authentication state machine and the window/isolation logic are testable
//! without a live connection. [`crate::client::TelegramTransport`] is the one
//! real implementation; exactly one lives for the whole run.

use {
    async_trait::async_trait,
    chrono::{DateTime, Utc},
};

use crate::error::Result;

/// Transport-level message, consumed immediately by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    /// Unique within its channel.
    pub id: i32,
    pub timestamp: DateTime<Utc>,
    /// Empty when the message has no textual body (media-only posts).
    pub text: String,
}

#[async_trait]
pub trait Transport {
    /// Whether the connected session already carries a valid authorization.
    async fn is_authorized(&self) -> Result<bool>;

    /// Ask the service to send a one-time login code to `phone`.
    ///
    /// Returns the verification handle (`phone_code_hash`) that a later
    /// [`Transport::sign_in`] must present together with the code.
    async fn request_login_code(&self, phone: &str) -> Result<String>;

    /// Exchange `(phone, code, phone_code_hash)` for an authorization.
    async fn sign_in(&self, phone: &str, code: &str, phone_code_hash: &str) -> Result<()>;

    /// Persist the session blob to the durable store (whole-file replace).
    async fn save_session(&self) -> Result<()>;

    /// Resolve `handle` and return up to `limit` of its most recent
    /// messages, newest first.
    ///
    /// Fails with [`crate::Error::ChannelNotFound`] when resolution fails;
    /// callers isolate that failure per channel.
    async fn recent_messages(&self, handle: &str, limit: usize) -> Result<Vec<RawMessage>>;
}
