//! Core domain logic for fritoto
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ResourceDescriptor`, `FridayPredicate`, `Statement`)
//! - `services/` - Weekday evaluation, time resolution, attestation pipeline
//! - `ports/` - Trait definitions for hashing and statement assembly

pub mod models;
pub mod ports;
pub mod services;
