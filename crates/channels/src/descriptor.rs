use serde::{Deserialize, Serialize};

/// Provenance class of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Government or military account.
    Official,
    /// Open-source intelligence aggregator.
    Osint,
    /// Established news organization.
    NewsOrg,
}

/// Configuration record for a single channel to poll.
///
/// Immutable once built; the classification tags are copied verbatim onto
/// every post fetched from the channel. Handle syntax is not validated here —
/// an unreachable or non-existent handle is a fetch-time failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelDescriptor {
    /// Public channel username, without the leading `@`.
    pub handle: String,
    /// Free-form geographic/topical tag.
    pub region: String,
    /// Source reliability score, 0–100.
    pub confidence: u8,
    /// Provenance class.
    pub tier: Tier,
}

impl ChannelDescriptor {
    /// Build a curated descriptor with explicit classification tags.
    #[must_use]
    pub fn new(handle: &str, region: &str, confidence: u8, tier: Tier) -> Self {
        Self {
            handle: handle.to_string(),
            region: region.to_string(),
            confidence,
            tier,
        }
    }

    /// Build a descriptor for a caller-supplied handle with default tags
    /// (`region="all"`, `confidence=80`, `tier=osint`).
    #[must_use]
    pub fn caller_supplied(handle: &str) -> Self {
        Self::new(handle, "all", 80, Tier::Osint)
    }
}
