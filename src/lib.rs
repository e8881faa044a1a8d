//! logindash library
//!
//! Gathers host, resource, storage and service facts at login and prints
//! them as a styled terminal report.

pub mod collectors;
pub mod colorize;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod style;
pub mod utils;

pub use collectors::{FactSource, HostFacts};
pub use config::{load_config, Config};
pub use display::Report;
pub use error::{LogindashError, Result};
pub use style::{Palette, StyleSet};

use std::io::Write;

/// Load config, resolve styles once and write the report to `out`
pub fn run<W: Write>(config_path: Option<&str>, color: bool, out: &mut W) -> Result<()> {
    let config = load_config(config_path);
    let styles = StyleSet::new(Palette::from_config(&config.colors)).with_color(color);
    Report::new(&config, &styles, &HostFacts).render(out)?;
    Ok(())
}
