//! Business logic services
//!
//! Pure orchestration logic that operates on domain models.
//! I/O is reached only through the port traits handed in.
//!
//! - [`weekday`] - Is it Friday?
//! - [`build_time`] - Resolve `--time` or the run's clock reading
//! - [`attestor`] - The hashing → predicate → statement pipeline

pub mod attestor;
pub mod build_time;
pub mod weekday;

pub use attestor::{AttestRequest, Attestor};
pub use build_time::{local_now, resolve_build_time};
pub use weekday::is_it_friday;
