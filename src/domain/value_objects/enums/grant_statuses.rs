use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome record shared by the subscription upsert and the Discord role
/// grant. A row stays `Pending` between the upsert and the grant attempt.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GrantStatus {
    #[default]
    Pending,
    Granted,
    GrantFailed,
}

impl GrantStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantStatus::Pending => "pending",
            GrantStatus::Granted => "granted",
            GrantStatus::GrantFailed => "grant_failed",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "granted" => GrantStatus::Granted,
            "grant_failed" => GrantStatus::GrantFailed,
            _ => GrantStatus::Pending,
        }
    }
}

impl Display for GrantStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
