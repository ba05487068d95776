//! Account role

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role attached to a guide account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Guide,
    Admin,
}

impl Role {
    /// Check whether this role grants administrative access
    #[inline]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Stable string form used in storage and tokens
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guide => "guide",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guide" => Ok(Self::Guide),
            "admin" => Ok(Self::Admin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized role string
#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);
