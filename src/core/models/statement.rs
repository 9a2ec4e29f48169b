//! in-toto v1 statement envelope
//!
//! See <https://github.com/in-toto/attestation/blob/main/spec/v1/statement.md>

use serde::{Deserialize, Serialize};

use super::{FRIDAY_PREDICATE_TYPE, FridayPredicate, ResourceDescriptor};

/// Statement type URI for in-toto v1
pub const STATEMENT_TYPE_V1: &str = "https://in-toto.io/Statement/v1";

/// An in-toto statement binding the Friday predicate to its subjects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Always [`STATEMENT_TYPE_V1`]
    #[serde(rename = "_type")]
    pub statement_type: String,

    /// Files the statement is about
    pub subject: Vec<ResourceDescriptor>,

    /// Always [`FRIDAY_PREDICATE_TYPE`]
    #[serde(rename = "predicateType")]
    pub predicate_type: String,

    /// The claim itself
    pub predicate: FridayPredicate,
}

impl Statement {
    /// Wrap `predicate` around `subject`
    #[must_use]
    pub fn new(subject: Vec<ResourceDescriptor>, predicate: FridayPredicate) -> Self {
        Self {
            statement_type: STATEMENT_TYPE_V1.to_string(),
            subject,
            predicate_type: FRIDAY_PREDICATE_TYPE.to_string(),
            predicate,
        }
    }

    /// Render as two-space indented JSON with a trailing newline
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
