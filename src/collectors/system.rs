//! System information collection (OS, uptime, CPU, memory)

use crate::data::MemoryUsage;
use crate::utils::command::run_command;
use crate::utils::file::read_file_safe;
use crate::utils::parsing::{assignment_value, extract_after_colon};
use tracing::debug;

pub fn get_os_name() -> String {
    read_file_safe("/etc/os-release")
        .ok()
        .and_then(|content| assignment_value(&content, "PRETTY_NAME"))
        .unwrap_or_else(|| {
            debug!("PRETTY_NAME not found in /etc/os-release");
            "Unknown".to_string()
        })
}

/// `uptime -p` without the leading "up "
pub fn get_uptime() -> String {
    match run_command("uptime", &["-p"]) {
        Ok(out) => parse_uptime_pretty(&out),
        Err(err) => {
            debug!(error = %err, "uptime failed");
            String::new()
        }
    }
}

pub fn parse_uptime_pretty(output: &str) -> String {
    let trimmed = output.trim();
    trimmed.strip_prefix("up ").unwrap_or(trimmed).to_string()
}

pub fn get_cpu_cores() -> String {
    match run_command("lscpu", &[]) {
        Ok(out) => parse_lscpu_cpus(&out).unwrap_or_default(),
        Err(err) => {
            debug!(error = %err, "lscpu failed");
            String::new()
        }
    }
}

/// Value of the `CPU(s):` row
pub fn parse_lscpu_cpus(output: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.starts_with("CPU(s):"))
        .and_then(extract_after_colon)
}

/// Busy CPU percentage (user + system) from one batch iteration of `top`
pub fn get_cpu_usage() -> f64 {
    match run_command("top", &["-bn1"]) {
        Ok(out) => parse_top_cpu(&out).unwrap_or(0.0),
        Err(err) => {
            debug!(error = %err, "top failed");
            0.0
        }
    }
}

/// `%Cpu(s):  2.3 us,  0.8 sy, ...` -> 3.1
pub fn parse_top_cpu(output: &str) -> Option<f64> {
    let line = output.lines().find(|line| line.contains("Cpu(s)"))?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    let user: f64 = fields.get(1)?.parse().ok()?;
    let system: f64 = fields.get(3)?.parse().ok()?;
    Some(user + system)
}

pub fn get_memory_usage() -> MemoryUsage {
    let human = match run_command("free", &["-h"]) {
        Ok(out) => out,
        Err(err) => {
            debug!(error = %err, "free -h failed");
            return MemoryUsage::default();
        }
    };
    let bytes = match run_command("free", &["-b"]) {
        Ok(out) => out,
        Err(err) => {
            debug!(error = %err, "free -b failed");
            return MemoryUsage::default();
        }
    };
    parse_memory(&human, &bytes)
}

/// Combine the human-readable and byte-exact `free` listings.
///
/// Display strings come from the first, the percentage from the second so
/// threshold checks are not thrown off by rounding like "3.2G".
pub fn parse_memory(human: &str, bytes: &str) -> MemoryUsage {
    let Some((total, used)) = mem_row(human) else {
        return MemoryUsage::default();
    };
    let Some((total_b, used_b)) = mem_row(bytes) else {
        return MemoryUsage::default();
    };

    let percent = match (total_b.parse::<f64>(), used_b.parse::<f64>()) {
        (Ok(total_b), Ok(used_b)) if total_b > 0.0 => used_b / total_b * 100.0,
        _ => 0.0,
    };

    MemoryUsage {
        used: used.to_string(),
        total: total.to_string(),
        percent,
    }
}

/// (total, used) columns of the `Mem:` row
fn mem_row(output: &str) -> Option<(&str, &str)> {
    let line = output.lines().find(|line| line.starts_with("Mem:"))?;
    let mut fields = line.split_whitespace().skip(1);
    Some((fields.next()?, fields.next()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FREE_H: &str = "               total        used        free      shared  buff/cache   available
Mem:            15Gi       3.2Gi       8.1Gi       412Mi       4.3Gi        11Gi
Swap:          4.0Gi          0B       4.0Gi";

    const FREE_B: &str = "               total        used        free      shared  buff/cache   available
Mem:     16000000000  4000000000  8000000000   400000000  4000000000 12000000000
Swap:     4294967296           0  4294967296";

    #[test]
    fn memory_percent_comes_from_bytes() {
        let mem = parse_memory(FREE_H, FREE_B);
        assert_eq!(mem.used, "3.2Gi");
        assert_eq!(mem.total, "15Gi");
        assert!((mem.percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn memory_falls_back_when_rows_missing() {
        assert_eq!(parse_memory("garbage", FREE_B), MemoryUsage::default());
        assert_eq!(parse_memory(FREE_H, ""), MemoryUsage::default());

        let zero = "Mem: 0 0 0";
        assert_eq!(parse_memory(FREE_H, zero).percent, 0.0);
    }

    #[test]
    fn top_cpu_sums_user_and_system() {
        let top = "top - 10:00:00 up 3 days,  1 user,  load average: 0.10, 0.20, 0.30\n\
                   Tasks: 200 total,   1 running, 199 sleeping,   0 stopped,   0 zombie\n\
                   %Cpu(s):  2.3 us,  0.8 sy,  0.0 ni, 96.7 id,  0.2 wa,  0.0 hi,  0.0 si,  0.0 st\n";
        let usage = parse_top_cpu(top).unwrap();
        assert!((usage - 3.1).abs() < 1e-9);
        assert_eq!(parse_top_cpu("no cpu line"), None);
        assert_eq!(parse_top_cpu("%Cpu(s): n/a"), None);
    }

    #[test]
    fn lscpu_cpu_count() {
        let out = "Architecture:            x86_64\n\
                   CPU op-mode(s):          32-bit, 64-bit\n\
                   CPU(s):                  16\n\
                   On-line CPU(s) list:     0-15\n";
        assert_eq!(parse_lscpu_cpus(out).as_deref(), Some("16"));
        assert_eq!(parse_lscpu_cpus("Architecture: arm64"), None);
    }

    #[test]
    fn uptime_prefix_is_removed() {
        assert_eq!(parse_uptime_pretty("up 3 days, 2 hours\n"), "3 days, 2 hours");
        assert_eq!(parse_uptime_pretty("5 minutes"), "5 minutes");
    }
}
