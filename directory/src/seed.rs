//! Fixture rows every fresh store starts with.

use entity::{Employee, Role};

/// Roles known at process start. The list never changes afterwards.
pub fn roles() -> Vec<Role> {
    vec![
        Role::from("Frontend"),
        Role::from("Backend"),
        Role::from("DevOps"),
    ]
}

/// The three employees seeded into a new store, in insertion order.
pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "John".to_string(),
            role: Role::from("Frontend"),
        },
        Employee {
            id: 2,
            name: "Mary".to_string(),
            role: Role::from("Backend"),
        },
        Employee {
            id: 3,
            name: "Peter".to_string(),
            role: Role::from("DevOps"),
        },
    ]
}
