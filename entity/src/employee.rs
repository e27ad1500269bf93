use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Integer identifier for a directory entry.
///
/// Seed rows occupy 1–3; ids assigned at runtime are wall-clock derived and
/// strictly monotonic, so no two entries ever share one.
pub type EmployeeId = i64;

/// A single directory entry, exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: Role,
}

/// Insert payload: everything but the id, which the store assigns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub role: Role,
}

impl NewEmployee {
    pub fn new(name: impl Into<String>, role: impl Into<Role>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}
