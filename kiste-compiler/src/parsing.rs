//! Template parsing
//!
//!     The parser is a single pass over the physical lines of a template. Each line is
//!     classified against the state left by the lines before it, and no line needs to look
//!     ahead. The result is the complete list of [Line]s, ready for the emitter.
//!
//!         source ─ lines() ─▶ ParseState::next_line ─▶ Vec<Line> ─▶ codegen
//!                                  │
//!                                  ├─ classify      (line category, directives, scope checks)
//!                                  ├─ tokenize      (segments of text lines)
//!                                  └─ track braces  (passthrough code)
//!
//!     The first failure aborts the pass.

pub mod classify;
pub mod directives;
pub mod line;
pub mod segments;
pub mod state;

pub use line::{ClassDescriptor, Line, LineKind, LineType, MemberDescriptor};
pub use segments::{tokenize, Segment};
pub use state::{ClassScope, ParseState};

use crate::error::ParseError;

/// Parse a whole template into classified lines.
pub fn parse(source: &str, filename: &str) -> Result<Vec<Line>, ParseError> {
    let mut state = ParseState::new(filename);
    let mut lines = Vec::new();

    for raw in source.lines() {
        let (line, next) = state.next_line(raw)?;
        lines.push(line);
        state = next;
    }

    let last_line = lines.last().map_or("", |line| line.source.as_str());
    state.finish(last_line)?;

    Ok(lines)
}
