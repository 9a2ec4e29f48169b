//! Command implementations

mod generate;

pub use generate::{GenerateArgs, generate};
