//! Flatten per-channel posts into the final output document.

use chrono::{DateTime, Utc};

use crate::post::{FetchResult, Post, iso_timestamp};

/// Build the output document from all posts collected this run.
///
/// `channel_count` is the number of descriptors attempted, including channels
/// that failed and contributed nothing. The sort is stable (`slice::sort_by`),
/// so posts with equal timestamps keep their input order — per-channel fetch
/// order, which is newest-first.
#[must_use]
pub fn aggregate(channel_count: usize, mut posts: Vec<Post>, fetched_at: DateTime<Utc>) -> FetchResult {
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    FetchResult {
        fetched_at: iso_timestamp(fetched_at),
        channel_count,
        post_count: posts.len(),
        posts,
    }
}
