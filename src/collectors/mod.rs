//! Fact collectors
//!
//! Each collector shells out to one system utility (or reads one file) and
//! parses its text. None of them fail: a missing binary, non-zero exit or
//! odd output turns into a neutral value and a debug log line.

pub mod identity;
pub mod network;
pub mod services;
pub mod storage;
pub mod system;

use crate::data::{DiskUsage, LastLogin, MemoryUsage, NetworkSummary, ServiceStatus};

/// Source of every fact the report shows
pub trait FactSource {
    fn username(&self) -> String;
    fn fqdn(&self) -> String;
    fn last_login(&self, username: &str) -> LastLogin;
    fn os_name(&self) -> String;
    fn uptime(&self) -> String;
    fn cpu_cores(&self) -> String;
    fn cpu_usage(&self) -> f64;
    fn memory(&self) -> MemoryUsage;
    fn network(&self) -> NetworkSummary;
    fn disk_usage(&self, path: &str) -> DiskUsage;
    fn is_mount_point(&self, path: &str) -> bool;
    /// Mounted directories under the mount root minus `exclude`
    fn auto_detect_mounts(&self, exclude: &[String]) -> Vec<String>;
    fn service_status(&self, name: &str) -> ServiceStatus;
}

/// Facts gathered from the running host
#[derive(Debug, Default, Clone, Copy)]
pub struct HostFacts;

impl FactSource for HostFacts {
    fn username(&self) -> String {
        identity::get_username()
    }

    fn fqdn(&self) -> String {
        identity::get_fqdn()
    }

    fn last_login(&self, username: &str) -> LastLogin {
        identity::get_last_login(username)
    }

    fn os_name(&self) -> String {
        system::get_os_name()
    }

    fn uptime(&self) -> String {
        system::get_uptime()
    }

    fn cpu_cores(&self) -> String {
        system::get_cpu_cores()
    }

    fn cpu_usage(&self) -> f64 {
        system::get_cpu_usage()
    }

    fn memory(&self) -> MemoryUsage {
        system::get_memory_usage()
    }

    fn network(&self) -> NetworkSummary {
        network::collect_network()
    }

    fn disk_usage(&self, path: &str) -> DiskUsage {
        storage::get_disk_usage(path)
    }

    fn is_mount_point(&self, path: &str) -> bool {
        storage::is_mount_point(path)
    }

    fn auto_detect_mounts(&self, exclude: &[String]) -> Vec<String> {
        storage::auto_detect_mounts(exclude)
    }

    fn service_status(&self, name: &str) -> ServiceStatus {
        services::get_service_status(name)
    }
}
