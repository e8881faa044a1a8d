//! systemd unit status

use crate::data::{ServiceState, ServiceStatus};
use crate::utils::command::run_command_lossy;
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

pub fn get_service_status(name: &str) -> ServiceStatus {
    let state = run_command_lossy("systemctl", &["is-active", name]).unwrap_or_else(|err| {
        debug!(service = name, error = %err, "systemctl is-active failed");
        String::new()
    });
    let status = run_command_lossy("systemctl", &["status", name]).unwrap_or_else(|err| {
        debug!(service = name, error = %err, "systemctl status failed");
        String::new()
    });

    service_status_from(name, &state, &status)
}

/// Combine `systemctl is-active` and `systemctl status` output; the state
/// stands on its own when the status text has no since clause
pub fn service_status_from(name: &str, state: &str, status: &str) -> ServiceStatus {
    ServiceStatus {
        name: name.to_string(),
        state: ServiceState::parse(state),
        since: parse_active_since(status),
    }
}

/// Pull `since <relative time>` out of the `Active:` row of `systemctl
/// status`, e.g. `Active: active (running) since Mon 2024-01-01 10:00:00
/// UTC; 3 days ago` gives `since 3 days ago`.
///
/// This is tied to systemctl's English output; keep all knowledge of that
/// format in here.
pub fn parse_active_since(status: &str) -> Option<String> {
    static ACTIVE_RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = ACTIVE_RE
        .get_or_init(|| Regex::new(r"Active: (\S+) \(([^)]+)\) since [^;]+; (.+)").ok())
        .as_ref()?;

    let caps = re.captures(status)?;
    let relative = caps.get(3)?.as_str().trim();
    if relative.is_empty() {
        return None;
    }
    Some(format!("since {}", relative))
}
