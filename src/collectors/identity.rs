//! Who is logged in, on which host, and when they were last here

use crate::data::LastLogin;
use crate::utils::{command::run_command, file::read_first_line};
use std::ffi::CStr;
use tracing::debug;

/// Name of the effective user from the passwd database, then `$USER`
pub fn get_username() -> String {
    // SAFETY: getpwuid returns a pointer into static storage or null; the name
    // is copied out before any other passwd call can overwrite it
    let from_passwd = unsafe {
        let pw = libc::getpwuid(libc::geteuid());
        if pw.is_null() || (*pw).pw_name.is_null() {
            None
        } else {
            Some(CStr::from_ptr((*pw).pw_name).to_string_lossy().into_owned())
        }
    };

    from_passwd
        .filter(|name| !name.is_empty())
        .or_else(|| std::env::var("USER").ok())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Fully qualified host name, falling back to the kernel host name
pub fn get_fqdn() -> String {
    match run_command("hostname", &["-f"]) {
        Ok(fqdn) if !fqdn.is_empty() => fqdn,
        result => {
            if let Err(err) = result {
                debug!(error = %err, "hostname -f failed");
            }
            read_first_line("/proc/sys/kernel/hostname").unwrap_or_default()
        }
    }
}

pub fn get_last_login(username: &str) -> LastLogin {
    match run_command("last", &["-n", "2", "-w", username]) {
        Ok(output) => parse_last_output(&output),
        Err(err) => {
            debug!(error = %err, "last failed");
            LastLogin::unknown()
        }
    }
}

/// The first row of `last -n 2` is the current session; the second is the
/// previous login
pub fn parse_last_output(output: &str) -> LastLogin {
    output
        .lines()
        .nth(1)
        .and_then(parse_last_line)
        .unwrap_or_else(LastLogin::unknown)
}

/// Parse one `last -w` row: `user tty [host] date... (still|-) ...`
pub fn parse_last_line(line: &str) -> Option<LastLogin> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }

    let (from, date_start) = if fields[2].contains('.') || fields[2].contains(':') {
        (Some(fields[2].to_string()), 3)
    } else {
        (None, 2)
    };

    let date: Vec<&str> = fields[date_start..]
        .iter()
        .take_while(|f| **f != "still" && **f != "-")
        .copied()
        .collect();

    if date.is_empty() {
        return None;
    }

    Some(LastLogin {
        date: date.join(" "),
        from,
    })
}
