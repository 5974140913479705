//! Immutable session context.
//!
//! A [`Session`] is never mutated in place: every transition returns a new
//! value, and callers thread the current value through each render.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::location::{LocationRecord, resolve};

/// Maximum characters kept from postal-code input.
pub const POSTAL_CODE_MAX_CHARS: usize = 6;

/// Which dashboard a user sees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Buys energy from the marketplace.
    #[default]
    Consumer,
    /// Generates and sells surplus energy.
    Prosumer,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Consumer => "consumer",
            Self::Prosumer => "prosumer",
        })
    }
}

/// Error returned when parsing an unknown [`UserType`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown user type \"{input}\", expected \"consumer\" or \"prosumer\"")]
pub struct ParseUserTypeError {
    pub input: String,
}

impl FromStr for UserType {
    type Err = ParseUserTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "consumer" => Ok(Self::Consumer),
            "prosumer" => Ok(Self::Prosumer),
            other => Err(ParseUserTypeError {
                input: other.to_string(),
            }),
        }
    }
}

/// Per-user session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_type: UserType,
    pub postal_code: String,
    pub is_logged_in: bool,
    pub user_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

impl Session {
    /// Fresh, logged-in session seeded from configuration.
    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self {
            user_type: cfg.user_type,
            postal_code: truncate_postal_code(&cfg.postal_code),
            is_logged_in: true,
            user_name: cfg.user_name.clone(),
        }
    }

    /// Demo login; always succeeds.
    #[must_use]
    pub fn login(self) -> Self {
        Self {
            is_logged_in: true,
            ..self
        }
    }

    #[must_use]
    pub fn logout(self) -> Self {
        Self {
            is_logged_in: false,
            ..self
        }
    }

    #[must_use]
    pub fn with_user_type(self, user_type: UserType) -> Self {
        Self { user_type, ..self }
    }

    /// Replaces the postal code, keeping at most six characters.
    #[must_use]
    pub fn with_postal_code(self, postal_code: &str) -> Self {
        Self {
            postal_code: truncate_postal_code(postal_code),
            ..self
        }
    }

    /// First word of the user name, for the greeting.
    pub fn first_name(&self) -> &str {
        self.user_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.user_name)
    }

    /// Location record for the session's postal code.
    pub fn location(&self) -> LocationRecord {
        resolve(&self.postal_code)
    }
}

fn truncate_postal_code(input: &str) -> String {
    input.chars().take(POSTAL_CODE_MAX_CHARS).collect()
}
