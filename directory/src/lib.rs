//! Employee directory store.
//!
//! Two in-memory collections — employees and roles — served through the
//! async [`EmployeeStore`] boundary. The bundled [`MemoryStore`] seeds the
//! fixture rows at construction, simulates remote latency before each
//! operation, and keeps mutation behind an exclusive lock so concurrent
//! callers interleave at whole operations. Swapping in a persistent backend
//! means implementing [`EmployeeStore`]; callers never change.

pub mod config;
pub mod error;
pub mod ids;
pub mod memory;
pub mod seed;
pub mod store;

pub use config::StoreConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use memory::MemoryStore;
pub use store::EmployeeStore;
