//! Per-channel message retrieval with failure isolation.
//!
//! Channels are fetched strictly one after another on the single session.
//! One unreachable, banned, or malformed channel must never abort the run:
//! its error is logged with the handle attached and the remaining channels
//! proceed.

use {
    chrono::{DateTime, Duration, Utc},
    pulse_channels::{ChannelDescriptor, Post},
    tracing::warn,
};

use crate::{error::Result, normalize::normalize, transport::Transport};

/// Immutable fetch settings for a run.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Maximum messages examined per channel.
    pub limit: usize,
    /// Maximum message age relative to run start.
    pub window: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            window: Duration::hours(24),
        }
    }
}

/// Fetch one channel: recent messages newest first, cut off at the window,
/// empty bodies discarded, the rest normalized.
///
/// The cutoff uses `take_while` on the newest-first stream, so iteration
/// stops at the first message older than the window instead of scanning the
/// full history.
pub async fn fetch_channel<T: Transport>(
    transport: &T,
    descriptor: &ChannelDescriptor,
    cutoff: DateTime<Utc>,
    limit: usize,
) -> Result<Vec<Post>> {
    let raw = transport.recent_messages(&descriptor.handle, limit).await?;
    Ok(raw
        .into_iter()
        .take_while(|m| m.timestamp >= cutoff)
        .filter(|m| !m.text.is_empty())
        .map(|m| normalize(descriptor, &m))
        .collect())
}

/// Fetch all channels sequentially, isolating failures per channel.
///
/// Returns every post collected; failed channels contribute zero posts and a
/// diagnostic line on the error stream.
pub async fn fetch_all<T: Transport>(
    transport: &T,
    descriptors: &[ChannelDescriptor],
    options: FetchOptions,
    now: DateTime<Utc>,
) -> Vec<Post> {
    let cutoff = now - options.window;
    let mut posts = Vec::new();

    for descriptor in descriptors {
        match fetch_channel(transport, descriptor, cutoff, options.limit).await {
            Ok(channel_posts) => posts.extend(channel_posts),
            Err(e) => {
                warn!(handle = %descriptor.handle, error = %e, "error fetching channel");
            },
        }
    }

    posts
}
