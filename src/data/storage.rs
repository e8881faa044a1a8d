//! Filesystem and service facts

/// One `df` sample
#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub path: String,
    pub used: String,
    pub total: String,
    /// Percent text as `df` prints it, e.g. `"42%"`
    pub percent: String,
}

impl DiskUsage {
    pub fn empty(path: &str) -> Self {
        DiskUsage {
            path: path.to_string(),
            used: "0".to_string(),
            total: "0".to_string(),
            percent: "0%".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceState {
    Active,
    Inactive,
    /// failed, activating, unknown, or empty when systemctl gave nothing
    Other(String),
}

impl ServiceState {
    pub fn parse(state: &str) -> Self {
        match state.trim() {
            "active" => ServiceState::Active,
            "inactive" => ServiceState::Inactive,
            other => ServiceState::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ServiceState::Active => "active",
            ServiceState::Inactive => "inactive",
            ServiceState::Other(state) => state,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceStatus {
    pub name: String,
    pub state: ServiceState,
    /// `"since 3 days ago"`
    pub since: Option<String>,
}
