//! The `built-on-friday` predicate
//!
//! The predicate records the build time and whether that time fell on a
//! Friday. The flag is always derived from the timestamp.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::core::services::is_it_friday;

/// Predicate type URI for the Friday predicate
pub const FRIDAY_PREDICATE_TYPE: &str = "https://carabiner.dev/built-on-friday/v1";

/// Payload of the `built-on-friday` predicate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FridayPredicate {
    /// Whether `build_time` falls on a Friday in its own offset
    pub built_on_friday: bool,

    /// When the build happened
    #[serde(with = "rfc3339")]
    pub build_time: DateTime<FixedOffset>,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl FridayPredicate {
    /// Build a predicate for `build_time`
    ///
    /// Empty notes are treated as absent so they never reach the JSON.
    #[must_use]
    pub fn new(build_time: DateTime<FixedOffset>, notes: Option<String>) -> Self {
        Self {
            built_on_friday: is_it_friday(&build_time),
            build_time,
            notes: notes.filter(|n| !n.is_empty()),
        }
    }

    /// Whether the stored flag agrees with the stored timestamp
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.built_on_friday == is_it_friday(&self.build_time)
    }
}

/// RFC 3339 with `Z` for UTC and sub-second digits only when present
pub mod rfc3339 {
    use chrono::{DateTime, FixedOffset, SecondsFormat};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Render a timestamp the way `--time` accepts it
    #[must_use]
    pub fn format(time: &DateTime<FixedOffset>) -> String {
        time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    /// Serialize as an RFC 3339 string
    pub fn serialize<S: Serializer>(
        time: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    /// Deserialize from an RFC 3339 string
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
