//! Wire DTOs for the login and summary endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the upstream JSON (`camelCase`) so the host can forward
//! bodies untouched and the client decodes them directly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Username/password pair posted to the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login endpoint response. A missing or empty `token` means the credentials
/// were rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// The issued token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}

/// A goal completion listed under a day in the summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedGoal {
    pub id: String,
    pub title: String,
    /// ISO-8601 timestamp of the completion.
    pub completed_at: String,
}

/// Aggregate goal counts for the current user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of goal completions expected in the period.
    #[serde(default)]
    pub total: i64,
    /// Number of goal completions recorded so far.
    #[serde(default)]
    pub completed: i64,
    /// Completions keyed by `YYYY-MM-DD`. `null` when nothing was completed.
    #[serde(default)]
    pub goals_per_day: Option<BTreeMap<String, Vec<CompletedGoal>>>,
}
