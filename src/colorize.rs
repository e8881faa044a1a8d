//! Threshold-based coloring of percentages

use crate::style::{Role, StyleSet};

/// Two ascending cutoffs splitting 0..=100 into severity bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds { low: 65.0, high: 85.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    Caution,
    Critical,
}

impl Severity {
    pub fn role(self) -> Role {
        match self {
            Severity::Normal => Role::Green,
            Severity::Caution => Role::Orange,
            Severity::Critical => Role::Red,
        }
    }
}

impl Thresholds {
    /// Both cutoffs are inclusive on their upper side
    pub fn severity(&self, percent: f64) -> Severity {
        if percent <= self.low {
            Severity::Normal
        } else if percent <= self.high {
            Severity::Caution
        } else {
            Severity::Critical
        }
    }
}

/// `(12.3%)` painted by severity
pub fn colorize_percent(percent: f64, thresholds: &Thresholds, styles: &StyleSet) -> String {
    let text = format!("({:.1}%)", percent);
    styles.paint(thresholds.severity(percent).role(), &text)
}

/// Same as [`colorize_percent`] for `df`-style `"42%"` text; the original
/// string is returned untouched when it does not hold a number
pub fn colorize_percent_str(percent: &str, thresholds: &Thresholds, styles: &StyleSet) -> String {
    let number = percent.trim().trim_end_matches('%');
    match number.parse::<f64>() {
        Ok(value) => {
            let text = format!("({})", percent);
            styles.paint(thresholds.severity(value).role(), &text)
        }
        Err(_) => percent.to_string(),
    }
}
