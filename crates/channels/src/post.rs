use {
    chrono::{DateTime, SecondsFormat, Utc},
    serde::{Deserialize, Serialize},
};

use crate::descriptor::Tier;

/// One normalized post in the output document.
///
/// Never constructed with empty `text` and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Globally unique within a run: `{platform}-{handle}-{raw id}`.
    pub id: String,
    /// Source system identifier (`"telegram"`).
    pub platform: String,
    pub handle: String,
    pub region: String,
    pub confidence: u8,
    pub tier: Tier,
    /// Full message body, verbatim.
    pub text: String,
    /// Source message time, ISO-8601.
    pub timestamp: String,
    /// Canonical permalink.
    pub url: String,
}

/// The aggregated output document for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    /// Run completion time, ISO-8601.
    pub fetched_at: String,
    /// Descriptors attempted, including channels that failed.
    pub channel_count: usize,
    /// Always equals `posts.len()`.
    pub post_count: usize,
    /// Descending by `timestamp`.
    pub posts: Vec<Post>,
}

/// Format a timestamp the way every timestamp in the output is formatted.
///
/// Fixed precision and UTC offset keep string comparison consistent with
/// chronological ordering, which the aggregator's sort relies on.
#[must_use]
pub fn iso_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn iso_timestamp_is_second_precision_utc() {
        let t = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(iso_timestamp(t), "2026-02-03T04:05:06Z");
    }

    #[test]
    fn iso_timestamps_compare_lexicographically() {
        let earlier = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 7).unwrap();
        assert!(iso_timestamp(earlier) < iso_timestamp(later));
    }

    #[test]
    fn post_serializes_expected_fields() {
        let post = Post {
            id: "telegram-DeepStateUA-42".into(),
            platform: "telegram".into(),
            handle: "DeepStateUA".into(),
            region: "europe-russia".into(),
            confidence: 92,
            tier: Tier::Official,
            text: "situation update".into(),
            timestamp: "2026-02-03T04:05:06Z".into(),
            url: "https://t.me/DeepStateUA/42".into(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["id"], "telegram-DeepStateUA-42");
        assert_eq!(value["platform"], "telegram");
        assert_eq!(value["tier"], "official");
        assert_eq!(value["confidence"], 92);
        assert_eq!(value["url"], "https://t.me/DeepStateUA/42");
    }
}
