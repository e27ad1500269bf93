use std::time::Duration;

use async_trait::async_trait;
use entity::{Employee, EmployeeId, NewEmployee, Role};
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::DirectoryResult;
use crate::store::EmployeeStore;
use crate::{ids, seed};

/// Mutable half of the store. `last_id` is the allocation high-water mark
/// and only moves forward.
struct Inner {
    employees: Vec<Employee>,
    last_id: EmployeeId,
}

/// In-memory [`EmployeeStore`] seeded with the fixture rows.
///
/// Reads take the shared lock, writes the exclusive one, so an add is an
/// atomic read-modify-append and concurrent callers interleave at whole
/// operations. The simulated latency runs before the lock is touched;
/// slow "remote" calls never serialize readers.
pub struct MemoryStore {
    roles: Vec<Role>,
    inner: RwLock<Inner>,
    latency: Duration,
}

impl MemoryStore {
    /// A store holding the seed employees and roles.
    pub fn new(config: StoreConfig) -> Self {
        let employees = seed::employees();
        let last_id = employees.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            roles: seed::roles(),
            inner: RwLock::new(Inner { employees, last_id }),
            latency: config.simulated_latency,
        }
    }

    /// Stand-in for the network hop a remote backend would cost.
    async fn remote_hop(&self) {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    #[instrument(name = "store.roles", skip_all)]
    async fn roles(&self) -> DirectoryResult<Vec<Role>> {
        self.remote_hop().await;
        Ok(self.roles.clone())
    }

    #[instrument(name = "store.employees", skip_all)]
    async fn employees(&self) -> DirectoryResult<Vec<Employee>> {
        self.remote_hop().await;
        let inner = self.inner.read().await;
        Ok(inner.employees.clone())
    }

    #[instrument(name = "store.add_employee", skip_all)]
    async fn add_employee(&self, new: NewEmployee) -> DirectoryResult<Employee> {
        self.remote_hop().await;
        let mut inner = self.inner.write().await;
        let id = ids::next_id(inner.last_id);
        inner.last_id = id;
        let employee = Employee {
            id,
            name: new.name,
            role: new.role,
        };
        inner.employees.push(employee.clone());
        debug!(id, total = inner.employees.len(), "employee appended");
        Ok(employee)
    }
}
