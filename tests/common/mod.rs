#![allow(dead_code)]

pub mod command;

/// Drop SGR escape sequences from prompt output
pub fn strip_ansi(text: &str) -> String {
    regex::Regex::new(r"\x1b\[[0-9;]*m")
        .expect("Failed to compile escape sequence regex")
        .replace_all(text, "")
        .into_owned()
}
