//! Built-in channel registry.
//!
//! The curated list is ordered and immutable; callers override it by passing
//! explicit handles, which become descriptors with default tags.

use crate::descriptor::{ChannelDescriptor, Tier};

/// Curated high-value channels, in fetch order.
#[must_use]
pub fn default_channels() -> Vec<ChannelDescriptor> {
    vec![
        // Europe-Russia
        ChannelDescriptor::new("DeepStateUA", "europe-russia", 92, Tier::Official),
        ChannelDescriptor::new("DeepStateEN", "europe-russia", 92, Tier::Official),
        ChannelDescriptor::new("wartranslated", "europe-russia", 90, Tier::Osint),
        ChannelDescriptor::new("DIUkraine", "europe-russia", 95, Tier::Official),
        // Middle East
        ChannelDescriptor::new("idfofficial", "middle-east", 95, Tier::Official),
        ChannelDescriptor::new("englishabuali", "middle-east", 82, Tier::Osint),
        ChannelDescriptor::new("IranIntl_En", "middle-east", 85, Tier::NewsOrg),
    ]
}

/// Resolve the set of channels to fetch.
///
/// Explicit handles win, in the order given, with caller defaults; an empty
/// slice selects the built-in curated list unmodified.
#[must_use]
pub fn resolve(handles: &[String]) -> Vec<ChannelDescriptor> {
    if handles.is_empty() {
        default_channels()
    } else {
        handles
            .iter()
            .map(|h| ChannelDescriptor::caller_supplied(h))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_use_builtin_list() {
        let channels = resolve(&[]);
        assert_eq!(channels, default_channels());
        assert_eq!(channels.len(), 7);
        assert_eq!(channels[0].handle, "DeepStateUA");
    }

    #[test]
    fn explicit_handles_preserve_order() {
        let handles = vec!["IranIntl_En".to_string(), "DeepStateUA".to_string()];
        let channels = resolve(&handles);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].handle, "IranIntl_En");
        assert_eq!(channels[1].handle, "DeepStateUA");
        // Explicit handles always get caller defaults, never curated tags.
        assert_eq!(channels[0].region, "all");
        assert_eq!(channels[0].confidence, 80);
        assert_eq!(channels[0].tier, Tier::Osint);
    }

    #[test]
    fn no_handle_validation_at_resolve_time() {
        let handles = vec!["definitely not a handle".to_string()];
        let channels = resolve(&handles);
        assert_eq!(channels[0].handle, "definitely not a handle");
    }
}
