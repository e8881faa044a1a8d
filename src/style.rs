//! Color palette and terminal styles
//!
//! The palette is resolved once from config overrides and built-in defaults
//! (Catppuccin Macchiato), then frozen into a [`StyleSet`] that the renderer
//! borrows for the whole run.

use crate::config::ColorsConfig;
use crate::utils::parsing::{pad_to_width, visible_width};
use tracing::warn;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Semantic styling roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Header,
    Title,
    Label,
    User,
    Fqdn,
    Dim,
    Active,
    Inactive,
    Failed,
    Green,
    Orange,
    Red,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::Header,
        Role::Title,
        Role::Label,
        Role::User,
        Role::Fqdn,
        Role::Dim,
        Role::Active,
        Role::Inactive,
        Role::Failed,
        Role::Green,
        Role::Orange,
        Role::Red,
    ];

    fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Header => "header",
            Role::Title => "title",
            Role::Label => "label",
            Role::User => "user",
            Role::Fqdn => "fqdn",
            Role::Dim => "dim",
            Role::Active => "active",
            Role::Inactive => "inactive",
            Role::Failed => "failed",
            Role::Green => "green",
            Role::Orange => "orange",
            Role::Red => "red",
        }
    }

    /// Built-in color for this role
    pub fn default_color(self) -> &'static str {
        match self {
            Role::Header => "#ea76cb",   // latte pink
            Role::Title => "#8bd5ca",    // teal
            Role::Label => "#c6a0f6",    // mauve
            Role::User => "#f5a97f",     // peach
            Role::Fqdn => "#eed49f",     // yellow
            Role::Dim => "#494d64",      // surface 1
            Role::Active => "#a6da95",   // green
            Role::Inactive => "#ee99a0", // maroon
            Role::Failed => "#ed8796",   // red
            Role::Green => "#a6da95",
            Role::Orange => "#f5a97f",
            Role::Red => "#ed8796",
        }
    }

    fn configured(self, colors: &ColorsConfig) -> Option<&str> {
        let value = match self {
            Role::Header => &colors.header,
            Role::Title => &colors.title,
            Role::Label => &colors.label,
            Role::User => &colors.user,
            Role::Fqdn => &colors.fqdn,
            Role::Dim => &colors.dim,
            Role::Active => &colors.active,
            Role::Inactive => &colors.inactive,
            Role::Failed => &colors.failed,
            Role::Green => &colors.green,
            Role::Orange => &colors.orange,
            Role::Red => &colors.red,
        };
        value.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

/// Fully resolved color value per role
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [String; 12],
}

impl Palette {
    /// Overlay configured colors on the defaults
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Palette {
            colors: Role::ALL.map(|role| {
                role.configured(colors)
                    .unwrap_or_else(|| role.default_color())
                    .to_string()
            }),
        }
    }

    pub fn color(&self, role: Role) -> &str {
        &self.colors[role.index()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from_config(&ColorsConfig::default())
    }
}

/// Rounded border drawn around a block
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub color: String,
}

/// Rendering attributes for one role
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub bold: bool,
    pub foreground: String,
    pub border: Option<Border>,
    /// (vertical, horizontal) padding inside the border
    pub padding: (usize, usize),
    prefix: String,
}

impl Style {
    fn new(role: Role, color: &str) -> Self {
        let bold = matches!(
            role,
            Role::Header | Role::Title | Role::Label | Role::User | Role::Fqdn
        );
        let (border, padding) = if role == Role::Header {
            (Some(Border { color: color.to_string() }), (0, 1))
        } else {
            (None, (0, 0))
        };

        let fg = color_to_ansi(color).unwrap_or_else(|| {
            warn!(role = role.name(), color, "unknown color, rendering unstyled");
            String::new()
        });
        let prefix = if bold { format!("{}{}", BOLD, fg) } else { fg.clone() };

        Style {
            bold,
            foreground: color.to_string(),
            border,
            padding,
            prefix,
        }
    }
}

/// Immutable set of styles keyed by role
#[derive(Debug, Clone)]
pub struct StyleSet {
    palette: Palette,
    styles: [Style; 12],
    enabled: bool,
}

impl StyleSet {
    pub fn new(palette: Palette) -> Self {
        let styles = Role::ALL.map(|role| Style::new(role, palette.color(role)));
        StyleSet {
            palette,
            styles,
            enabled: true,
        }
    }

    /// Turn escape codes off while keeping the resolved palette
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn style(&self, role: Role) -> &Style {
        &self.styles[role.index()]
    }

    /// Wrap `text` in the role's escape codes
    pub fn paint(&self, role: Role, text: &str) -> String {
        let style = self.style(role);
        if !self.enabled || style.prefix.is_empty() {
            return text.to_string();
        }
        format!("{}{}{}", style.prefix, text, RESET)
    }

    /// Render `lines` inside the role's rounded border with its padding.
    /// Roles without a border get their lines painted and joined.
    pub fn boxed(&self, role: Role, lines: &[String]) -> String {
        let style = self.style(role);
        let Some(border) = &style.border else {
            let painted: Vec<String> = lines.iter().map(|l| self.paint(role, l)).collect();
            return painted.join("\n");
        };

        let (vpad, hpad) = style.padding;
        let inner = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let span = inner + 2 * hpad;

        let border_code = color_to_ansi(&border.color).filter(|_| self.enabled);
        let edge = |s: String| -> String {
            match &border_code {
                Some(code) => format!("{}{}{}", code, s, RESET),
                None => s,
            }
        };

        let blank = " ".repeat(span);
        let mut rows = Vec::with_capacity(lines.len() + 2 + 2 * vpad);
        rows.push(edge(format!("╭{}╮", "─".repeat(span))));
        for _ in 0..vpad {
            rows.push(format!("{}{}{}", edge("│".into()), blank, edge("│".into())));
        }
        for line in lines {
            let body = self.paint(role, &pad_to_width(line, inner));
            let pad = " ".repeat(hpad);
            let (left, right) = (edge("│".into()), edge("│".into()));
            rows.push(format!("{}{}{}{}{}", left, pad, body, pad, right));
        }
        for _ in 0..vpad {
            rows.push(format!("{}{}{}", edge("│".into()), blank, edge("│".into())));
        }
        rows.push(edge(format!("╰{}╯", "─".repeat(span))));
        rows.join("\n")
    }
}

/// Translate a color value into a foreground escape sequence.
///
/// Accepts `#rrggbb`, an ANSI 256 index (`"205"`) or a basic color name.
pub fn color_to_ansi(color: &str) -> Option<String> {
    if let Some(code) = named_color_code(color) {
        return Some(code.to_string());
    }

    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Some(format!("\x1b[38;2;{};{};{}m", r, g, b));
            }
        }
        return None;
    }

    color.parse::<u8>().ok().map(|n| format!("\x1b[38;5;{}m", n))
}

fn named_color_code(color_name: &str) -> Option<&'static str> {
    match color_name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => Some("\x1b[30m"),
        "red" => Some("\x1b[31m"),
        "green" => Some("\x1b[32m"),
        "yellow" => Some("\x1b[33m"),
        "blue" => Some("\x1b[34m"),
        "magenta" => Some("\x1b[35m"),
        "cyan" => Some("\x1b[36m"),
        "white" => Some("\x1b[37m"),

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => Some("\x1b[90m"),
        "bright_red" => Some("\x1b[91m"),
        "bright_green" => Some("\x1b[92m"),
        "bright_yellow" => Some("\x1b[93m"),
        "bright_blue" => Some("\x1b[94m"),
        "bright_magenta" => Some("\x1b[95m"),
        "bright_cyan" => Some("\x1b[96m"),
        "bright_white" => Some("\x1b[97m"),

        "orange" => Some("\x1b[91m"),
        "purple" => Some("\x1b[35m"),
        "violet" => Some("\x1b[95m"),
        _ => None,
    }
}
