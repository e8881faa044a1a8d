//! Disk usage and mount discovery

use crate::data::DiskUsage;
use crate::utils::command::{command_succeeds, run_command};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Directory whose immediate children are scanned for extra mounts
pub const MOUNT_ROOT: &str = "/mnt";

pub fn get_disk_usage(path: &str) -> DiskUsage {
    match run_command("df", &["-h", "-P", path]) {
        Ok(out) => parse_df(path, &out),
        Err(err) => {
            debug!(path, error = %err, "df failed");
            DiskUsage::empty(path)
        }
    }
}

/// Read (size, used, use%) from the single data row following the header
pub fn parse_df(path: &str, output: &str) -> DiskUsage {
    let row: Vec<&str> = match output.lines().nth(1) {
        Some(line) => line.split_whitespace().collect(),
        None => return DiskUsage::empty(path),
    };
    if row.len() < 5 {
        return DiskUsage::empty(path);
    }

    DiskUsage {
        path: path.to_string(),
        used: row[2].to_string(),
        total: row[1].to_string(),
        percent: row[4].to_string(),
    }
}

/// `mountpoint -q` rather than a directory check
pub fn is_mount_point(path: &str) -> bool {
    command_succeeds("mountpoint", &["-q", path])
}

/// Mounted subdirectories of [`MOUNT_ROOT`] not already listed in `exclude`
pub fn auto_detect_mounts(exclude: &[String]) -> Vec<String> {
    detect_mounts_under(Path::new(MOUNT_ROOT), exclude, is_mount_point)
}

/// Immediate subdirectories of `root` that pass `is_mount`, sorted, minus
/// exact string matches in `exclude`
pub fn detect_mounts_under<F>(root: &Path, exclude: &[String], is_mount: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(root = %root.display(), error = %err, "cannot list mount root");
            return Vec::new();
        }
    };

    let mut mounts: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
        .map(|entry| entry.path().to_string_lossy().into_owned())
        .filter(|path| !exclude.contains(path))
        .filter(|path| is_mount(path.as_str()))
        .collect();
    mounts.sort();
    mounts
}
