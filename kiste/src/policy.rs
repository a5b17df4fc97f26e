//! Escaping policies
//!
//!     A policy decides, character by character, what the escaped form of a value looks like.
//!     A policy that has no opinion about a character returns `None`; the character is then
//!     offered to the next policy of a [Chain], and written unchanged when nobody claims it.

use std::fmt::{self, Write};

pub trait Policy {
    /// Write the escaped form of `c`, or return `None` to leave it alone.
    fn escape_char(&self, c: char, out: &mut dyn Write) -> Option<fmt::Result>;

    fn escape_str(&self, text: &str, out: &mut dyn Write) -> fmt::Result {
        for c in text.chars() {
            match self.escape_char(c, out) {
                Some(result) => result?,
                None => out.write_char(c)?,
            }
        }
        Ok(())
    }
}

/// HTML text and attribute escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPolicy;

impl Policy for HtmlPolicy {
    fn escape_char(&self, c: char, out: &mut dyn Write) -> Option<fmt::Result> {
        let entity = match c {
            '<' => "&lt;",
            '>' => "&gt;",
            '\'' => "&#39;",
            '"' => "&quot;",
            '&' => "&amp;",
            _ => return None,
        };
        Some(out.write_str(entity))
    }
}

/// Escaping for the inside of a double-quoted string literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustStringPolicy;

impl Policy for RustStringPolicy {
    fn escape_char(&self, c: char, out: &mut dyn Write) -> Option<fmt::Result> {
        let escaped = match c {
            '\\' => "\\\\",
            '"' => "\\\"",
            '\n' => "\\n",
            _ => return None,
        };
        Some(out.write_str(escaped))
    }
}

/// Writes every character unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEscape;

impl Policy for NoEscape {
    fn escape_char(&self, _c: char, _out: &mut dyn Write) -> Option<fmt::Result> {
        None
    }
}

/// Two policies applied in order; the first one claiming a character wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<A, B>(pub A, pub B);

impl<A: Policy, B: Policy> Policy for Chain<A, B> {
    fn escape_char(&self, c: char, out: &mut dyn Write) -> Option<fmt::Result> {
        self.0
            .escape_char(c, out)
            .or_else(|| self.1.escape_char(c, out))
    }
}
