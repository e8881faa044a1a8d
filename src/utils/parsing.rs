//! String parsing utilities

use unicode_width::UnicodeWidthStr;

/// Extract value after a colon and space
pub fn extract_after_colon(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Return the whitespace-delimited token following `keyword` in `line`
pub fn token_after<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let mut tokens = line.split_whitespace();
    tokens.by_ref().find(|t| *t == keyword)?;
    tokens.next()
}

/// Look up `KEY=value` in shell-style assignment files such as /etc/os-release
pub fn assignment_value(content: &str, key: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|v| !v.is_empty())
}

/// Drop ANSI SGR escape sequences
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip `[` ... final byte in `@`..=`~`
            for esc in chars.by_ref() {
                if ('@'..='~').contains(&esc) && esc != '[' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Terminal column width of a possibly styled string
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Right-pad `s` with spaces to `width` terminal columns
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}
