//! Telegram fetch pipeline for pulse.
//!
//! Implements the MTProto side of the run: an authenticated session reused
//! across invocations via a durable session file, time-windowed retrieval of
//! recent messages per channel with per-channel failure isolation, and
//! normalization of raw messages into the canonical post schema.

pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod normalize;
pub mod session;
pub mod transport;

pub use {
    client::TelegramTransport,
    config::TelegramConfig,
    error::{Error, Result},
    fetch::{FetchOptions, fetch_all},
    session::{SessionManager, SessionState},
    transport::{RawMessage, Transport},
};
