//! Data structures for collected facts

pub mod storage;
pub mod system;

pub use storage::{DiskUsage, ServiceState, ServiceStatus};
pub use system::{LastLogin, MemoryUsage, NetworkSummary};
