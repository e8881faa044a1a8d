//! Host identity, resource and network facts

/// Previous login as reported by the login history
#[derive(Debug, Clone, PartialEq)]
pub struct LastLogin {
    pub date: String,
    /// Remote address or hostname, when the session had one
    pub from: Option<String>,
}

impl LastLogin {
    pub fn unknown() -> Self {
        LastLogin {
            date: "Unknown".to_string(),
            from: None,
        }
    }
}

/// Memory usage: display strings from `free -h`, percentage from byte counts
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryUsage {
    pub used: String,
    pub total: String,
    pub percent: f64,
}

impl Default for MemoryUsage {
    fn default() -> Self {
        MemoryUsage {
            used: "0".to_string(),
            total: "0".to_string(),
            percent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkSummary {
    pub interface: Option<String>,
    /// IPv4 address in CIDR notation
    pub address: Option<String>,
    pub gateway: Option<String>,
    pub dns_servers: Vec<String>,
}

impl NetworkSummary {
    pub fn dns_display(&self) -> String {
        self.dns_servers.join(" ")
    }
}
