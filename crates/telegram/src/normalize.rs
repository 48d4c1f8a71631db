//! Map raw transport messages into the canonical post schema.

use pulse_channels::{ChannelDescriptor, Post, iso_timestamp};

use crate::transport::RawMessage;

/// Source system identifier stamped on every post.
pub const PLATFORM: &str = "telegram";

/// Build a [`Post`] from a raw message.
///
/// Pure and total for messages with a textual body; callers must discard
/// empty-text messages first. The body is preserved verbatim — no
/// truncation or sanitization.
#[must_use]
pub fn normalize(descriptor: &ChannelDescriptor, raw: &RawMessage) -> Post {
    Post {
        id: format!("{PLATFORM}-{}-{}", descriptor.handle, raw.id),
        platform: PLATFORM.to_string(),
        handle: descriptor.handle.clone(),
        region: descriptor.region.clone(),
        confidence: descriptor.confidence,
        tier: descriptor.tier,
        text: raw.text.clone(),
        timestamp: iso_timestamp(raw.timestamp),
        url: format!("https://t.me/{}/{}", descriptor.handle, raw.id),
    }
}

#[cfg(test)]
mod tests {
    use {
        chrono::{TimeZone, Utc},
        pulse_channels::Tier,
    };

    use super::*;

    #[test]
    fn copies_descriptor_tags_and_builds_id_and_url() {
        let descriptor = ChannelDescriptor::new("X", "r", 90, Tier::Osint);
        let raw = RawMessage {
            id: 1,
            timestamp: Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
            text: "a".into(),
        };

        let post = normalize(&descriptor, &raw);
        assert_eq!(post.id, "telegram-X-1");
        assert_eq!(post.platform, "telegram");
        assert_eq!(post.handle, "X");
        assert_eq!(post.region, "r");
        assert_eq!(post.confidence, 90);
        assert_eq!(post.tier, Tier::Osint);
        assert_eq!(post.text, "a");
        assert_eq!(post.timestamp, "2026-02-01T12:00:00Z");
        assert_eq!(post.url, "https://t.me/X/1");
    }

    #[test]
    fn text_is_preserved_verbatim() {
        let descriptor = ChannelDescriptor::caller_supplied("chan");
        let text = "  multi\nline with *markdown*, <tags> and trailing spaces  ";
        let raw = RawMessage {
            id: 7,
            timestamp: Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
            text: text.into(),
        };

        assert_eq!(normalize(&descriptor, &raw).text, text);
    }
}
