//! Line classification
//!
//!     The category of a line depends on its first non-blank character and on the state
//!     accumulated from the preceding lines:
//!
//!         (none)      Blank, or an empty Text line inside a render body
//!         %           Code, the rest of the line is copied verbatim
//!         $class      ClassBegin
//!         $endclass   ClassEnd
//!         $member     Member
//!         $|          Text, with everything up to and including the marker removed (left trim)
//!         other       Text, the whole line including its indentation
//!
//!     Text is only legal inside a render body, i.e. when a class is open and the brace depth
//!     exceeds the depth captured by the class.

use log::warn;

use super::directives::{parse_class, parse_endclass, parse_member, strip_keyword};
use super::line::LineKind;
use super::segments::tokenize;
use super::state::ParseState;
use crate::error::SyntaxError;

/// Classify one raw line against the state in effect before it.
pub fn classify(raw: &str, state: &ParseState) -> Result<LineKind, SyntaxError> {
    let content = raw.trim_start_matches([' ', '\t']);
    let indent = &raw[..raw.len() - content.len()];

    let Some(first) = content.chars().next() else {
        if state.in_render_body() {
            return Ok(LineKind::Text(Vec::new()));
        }
        return Ok(LineKind::Blank);
    };

    match first {
        '%' => Ok(LineKind::Code(format!("{}{}", indent, &content[1..]))),
        '$' => {
            let rest = &content[1..];
            if let Some(args) = strip_keyword(rest, "class") {
                parse_class(args, state).map(LineKind::ClassBegin)
            } else if let Some(args) = strip_keyword(rest, "endclass") {
                parse_endclass(args, state).map(|()| LineKind::ClassEnd)
            } else if let Some(args) = strip_keyword(rest, "member") {
                parse_member(args, state).map(LineKind::Member)
            } else if let Some(remainder) = rest.strip_prefix('|') {
                if remainder.trim_matches([' ', '\t']).is_empty() {
                    warn!(
                        "{}:{}: no non-space characters after trim left ($|)",
                        state.filename,
                        state.line_no + 1
                    );
                }
                text(remainder, state)
            } else {
                text(raw, state)
            }
        }
        _ => text(raw, state),
    }
}

fn text(content: &str, state: &ParseState) -> Result<LineKind, SyntaxError> {
    if !state.in_render_body() {
        return Err(SyntaxError::scope("Unexpected text outside of function"));
    }
    tokenize(content).map(LineKind::Text)
}
