// Config loading from disk and the swallow-and-default policy

use logindash::colorize::Thresholds;
use logindash::config::{load_config, Config};
use logindash::style::{Palette, Role, StyleSet};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_explicit_file() {
    let file = write_config(
        r##"
[display]
label_width = 12
orange_until = 90

[colors]
title = "#112233"

[disks]
paths = ["/srv"]

[services]
monitored = ["sshd"]
"##,
    );
    let config = load_config(file.path().to_str());

    assert_eq!(config.label_width(), 12);
    assert_eq!(config.thresholds(), Thresholds { low: 65.0, high: 90.0 });
    assert_eq!(config.disks.paths, vec!["/srv"]);
    assert_eq!(config.services.monitored, vec!["sshd"]);

    let palette = Palette::from_config(&config.colors);
    assert_eq!(palette.color(Role::Title), "#112233");
    assert_eq!(palette.color(Role::Label), Role::Label.default_color());
}

#[test]
fn malformed_file_is_same_as_missing() {
    let file = write_config("[display]\nlabel_width = \"wide\"\n[[[");
    assert_eq!(load_config(file.path().to_str()), Config::default());
    assert_eq!(load_config(Some("/no/such/dir/config.toml")), Config::default());
}

#[test]
fn wrong_types_are_treated_as_malformed() {
    let file = write_config("[services]\nmonitored = \"sshd\"\n");
    assert_eq!(load_config(file.path().to_str()), Config::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let file = write_config("[display]\nlabel_width = 9\nfancy = true\n\n[extra]\nx = 1\n");
    let config = load_config(file.path().to_str());
    assert_eq!(config.label_width(), 9);
}

#[test]
fn empty_config_resolves_every_style() {
    let file = write_config("");
    let config = load_config(file.path().to_str());
    let styles = StyleSet::new(Palette::from_config(&config.colors));

    for role in Role::ALL {
        assert!(!styles.palette().color(role).is_empty());
        assert_ne!(styles.paint(role, "x"), "x", "{} rendered unstyled", role.name());
    }
}

#[test]
fn shipped_sample_config_parses() {
    let config = Config::from_toml_str(include_str!("../config/config.toml")).unwrap();
    assert_eq!(config.label_width(), 15);
    assert_eq!(config.thresholds(), Thresholds::default());
    assert_eq!(config.services.monitored, vec!["sshd"]);
    assert_eq!(
        Palette::from_config(&config.colors),
        Palette::from_config(&Default::default())
    );
}
