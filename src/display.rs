//! Report rendering
//!
//! Sections are printed in a fixed order: header box, System, Storage,
//! Services (only when some are configured), closing rule. Facts are pulled
//! from the [`FactSource`] as each section is written.

use crate::collectors::storage::MOUNT_ROOT;
use crate::collectors::FactSource;
use crate::colorize::{colorize_percent, colorize_percent_str, Thresholds};
use crate::config::Config;
use crate::data::{DiskUsage, ServiceState};
use crate::style::{Role, StyleSet};
use crate::utils::parsing::pad_to_width;
use std::io::{self, Write};

const MARKER: &str = "▸";
const RULE_WIDTH: usize = 50;

/// Renders one report for a config, a style set and a fact source
pub struct Report<'a, F: FactSource> {
    config: &'a Config,
    styles: &'a StyleSet,
    facts: &'a F,
    label_width: usize,
    thresholds: Thresholds,
}

impl<'a, F: FactSource> Report<'a, F> {
    pub fn new(config: &'a Config, styles: &'a StyleSet, facts: &'a F) -> Self {
        Report {
            config,
            styles,
            facts,
            label_width: config.label_width(),
            thresholds: config.thresholds(),
        }
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.render_header(out)?;
        writeln!(out)?;
        self.render_system(out)?;
        self.render_storage(out)?;
        self.render_services(out)?;
        writeln!(out, "{}", self.styles.paint(Role::Dim, &"─".repeat(RULE_WIDTH)))
    }

    fn render_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let username = self.facts.username();
        let fqdn = self.facts.fqdn();
        let login = self.facts.last_login(&username);

        let mut lines = vec![
            format!(
                "{}@{}",
                self.styles.paint(Role::User, &username),
                self.styles.paint(Role::Fqdn, &fqdn)
            ),
            self.styles.paint(Role::Dim, &format!("Last login: {}", login.date)),
        ];
        if let Some(from) = login.from.as_deref().filter(|f| !f.is_empty()) {
            lines.push(self.styles.paint(Role::Dim, &format!("From: {}", from)));
        }

        writeln!(out, "{}", self.styles.boxed(Role::Header, &lines))
    }

    fn render_system<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.styles.paint(Role::Title, "System"))?;

        self.row(out, "OS", &self.facts.os_name())?;
        self.row(out, "Uptime", &self.facts.uptime())?;

        let cores = self.facts.cpu_cores();
        let load = colorize_percent(self.facts.cpu_usage(), &self.thresholds, self.styles);
        self.row(out, "CPU", &format!("{} {}", cores, load))?;

        let mem = self.facts.memory();
        let mem_percent = colorize_percent(mem.percent, &self.thresholds, self.styles);
        self.row(out, "RAM", &format!("{}/{} {}", mem.used, mem.total, mem_percent))?;

        let net = self.facts.network();
        let address = net.address.as_deref().unwrap_or("Unknown");
        let interface = net.interface.as_deref().unwrap_or("Unknown");
        self.row(out, "IP Address", &format!("{} ({})", address, interface))?;
        self.row(out, "Gateway", net.gateway.as_deref().unwrap_or("Unknown"))?;
        self.row(out, "DNS", &net.dns_display())?;

        writeln!(out)
    }

    fn render_storage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.styles.paint(Role::Title, "Storage"))?;

        self.disk_row(out, &self.facts.disk_usage("/"))?;

        let extra = &self.config.disks.paths;
        for path in extra {
            if self.facts.is_mount_point(path) {
                self.disk_row(out, &self.facts.disk_usage(path))?;
            }
        }

        let detected = self.facts.auto_detect_mounts(extra);
        if !detected.is_empty() {
            writeln!(out)?;
            let title = format!("Storage ({})", MOUNT_ROOT);
            writeln!(out, "{}", self.styles.paint(Role::Title, &title))?;
            for path in &detected {
                self.disk_row(out, &self.facts.disk_usage(path))?;
            }
        }

        writeln!(out)
    }

    fn render_services<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let services = &self.config.services.monitored;
        if services.is_empty() {
            return Ok(());
        }

        writeln!(out, "{}", self.styles.paint(Role::Title, "Services"))?;
        for name in services {
            let status = self.facts.service_status(name);
            let (marker, show_since) = match status.state {
                ServiceState::Active => (self.styles.paint(Role::Active, "●"), true),
                ServiceState::Inactive => (self.styles.paint(Role::Inactive, "○"), false),
                ServiceState::Other(_) => (self.styles.paint(Role::Failed, "✗"), true),
            };

            match status.since.as_deref().filter(|_| show_since) {
                Some(since) => writeln!(
                    out,
                    "  {} {} {}",
                    marker,
                    status.name,
                    self.styles.paint(Role::Dim, since)
                )?,
                None => writeln!(out, "  {} {}", marker, status.name)?,
            }
        }

        writeln!(out)
    }

    fn disk_row<W: Write>(&self, out: &mut W, usage: &DiskUsage) -> io::Result<()> {
        let percent = colorize_percent_str(&usage.percent, &self.thresholds, self.styles);
        self.row(
            out,
            &usage.path,
            &format!("{}/{} {}", usage.used, usage.total, percent),
        )
    }

    /// `  ▸ <label padded to label_width> <value>`
    fn row<W: Write>(&self, out: &mut W, label: &str, value: &str) -> io::Result<()> {
        writeln!(
            out,
            "  {} {} {}",
            self.styles.paint(Role::Label, MARKER),
            pad_to_width(label, self.label_width),
            value
        )
    }
}
