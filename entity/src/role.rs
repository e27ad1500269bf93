use std::fmt;

use serde::{Deserialize, Serialize};

/// A named job category.
///
/// Plain text. Nothing ties an employee's `role` field to the role list the
/// store serves, and the store never checks it. Serializes as a bare string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(pub String);

impl Role {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role(value.to_string())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role(value)
    }
}
