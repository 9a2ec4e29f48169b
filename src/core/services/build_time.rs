//! Build time resolution
//!
//! Turns the optional `--time` argument into a concrete timestamp.

use chrono::{DateTime, FixedOffset, Local, SubsecRound};

use crate::error::{FritotoError, Result};

/// Current local time, truncated to whole seconds
///
/// This is the default build time, read once when a run starts.
#[must_use]
pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset().trunc_subsecs(0)
}

/// Resolve the build time
///
/// A supplied value must be RFC 3339 exactly as given; only an empty value
/// falls back to `now`.
pub fn resolve_build_time(
    input: Option<&str>,
    now: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    match input {
        None | Some("") => Ok(now),
        Some(raw) => {
            DateTime::parse_from_rfc3339(raw).map_err(|source| FritotoError::InvalidTime {
                input: raw.to_string(),
                source,
            })
        },
    }
}
