use async_trait::async_trait;
use entity::{Employee, NewEmployee, Role};

use crate::error::DirectoryResult;

/// Async boundary over the employee and role collections.
///
/// Implementations simulate (or really pay) a remote round-trip, so every
/// method suspends. Guarantees shared by all implementations:
///
/// - `roles` returns the same ordered list on every call; nothing mutates it.
/// - `employees` returns records in insertion order.
/// - `add_employee` appends exactly one record per call — identical input
///   twice means two records — assigns it a fresh id no earlier record
///   carries, and returns the record as stored.
/// - Nothing is validated: empty names, duplicate names, and roles absent
///   from the role list are stored unchanged.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// The ordered list of known role names.
    async fn roles(&self) -> DirectoryResult<Vec<Role>>;

    /// Every employee record, oldest first.
    async fn employees(&self) -> DirectoryResult<Vec<Employee>>;

    /// Append a new record and return it, generated id included.
    async fn add_employee(&self, new: NewEmployee) -> DirectoryResult<Employee>;
}
