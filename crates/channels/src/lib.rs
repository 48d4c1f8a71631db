//! Channel descriptors and the canonical post schema for pulse.
//!
//! A channel is a named public message source; its descriptor carries the
//! classification tags (region, confidence, tier) that are copied onto every
//! post fetched from it. The aggregate module builds the final time-sorted
//! output document.

pub mod aggregate;
pub mod descriptor;
pub mod post;
pub mod registry;

pub use {
    aggregate::aggregate,
    descriptor::{ChannelDescriptor, Tier},
    post::{FetchResult, Post, iso_timestamp},
    registry::resolve,
};
