//! In-line command tokenizer
//!
//!     A text line is a run of literal characters interrupted by commands. Every command starts
//!     with the directive character `$`:
//!
//!         $$              a literal `$`
//!         $%              a literal `%`
//!         ${expr}         `expr`, escaped by the serializer
//!         $raw{expr}      `expr`, written unescaped
//!         $call{expr}     `expr` evaluated as a statement, nothing is written by the template
//!         $|              only as the last two characters: drop the line's trailing newline
//!
//!     Anything else after a `$` is an "Unknown command".
//!
//!     Expressions end at the `}` balancing the opening `{`, so braces inside the expression
//!     (struct literals, closures, blocks) are kept verbatim. The delimiting braces themselves
//!     are not part of the expression text.

use crate::error::SyntaxError;

/// One lexical unit of a text line, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text written as is
    Literal(String),
    /// Expression written through the serializer's escaping
    Escape(String),
    /// Expression written without escaping
    Raw(String),
    /// Statement-expression evaluated for its side effects
    Call(String),
    /// `$|` at the end of the line
    TrimTrailingNewline,
}

impl Segment {
    pub fn is_literal(&self) -> bool {
        matches!(self, Segment::Literal(_))
    }

    /// The verbatim expression text of a command segment.
    pub fn expression(&self) -> Option<&str> {
        match self {
            Segment::Escape(expr) | Segment::Raw(expr) | Segment::Call(expr) => Some(expr),
            Segment::Literal(_) | Segment::TrimTrailingNewline => None,
        }
    }
}

/// Keyword prefixes of the expression commands, checked in order.
const EXPRESSION_COMMANDS: [(&str, fn(String) -> Segment); 3] = [
    ("{", Segment::Escape),
    ("raw{", Segment::Raw),
    ("call{", Segment::Call),
];

/// Split a text line into segments.
///
/// Adjacent literal characters (including `$$` and `$%`) are merged into a single
/// [Segment::Literal].
pub fn tokenize(line: &str) -> Result<Vec<Segment>, SyntaxError> {
    let mut segments = Vec::new();
    let mut rest = line;

    while let Some(dollar) = rest.find('$') {
        push_literal(&mut segments, &rest[..dollar]);
        let command = &rest[dollar + 1..];
        let (segment, consumed) = parse_command(command)?;
        match segment {
            Segment::Literal(text) => push_literal(&mut segments, &text),
            other => segments.push(other),
        }
        rest = &command[consumed..];
    }
    push_literal(&mut segments, rest);

    Ok(segments)
}

/// Resolve the command following a `$`. Returns the segment and the number of bytes consumed
/// after the `$`.
fn parse_command(command: &str) -> Result<(Segment, usize), SyntaxError> {
    if command.starts_with('$') {
        return Ok((Segment::Literal("$".to_string()), 1));
    }
    if command.starts_with('%') {
        return Ok((Segment::Literal("%".to_string()), 1));
    }
    if command.starts_with('|') {
        if command.len() > 1 {
            return Err(SyntaxError::lexical(
                "Trailing characters after trim-right ($|)",
            ));
        }
        return Ok((Segment::TrimTrailingNewline, 1));
    }

    for (keyword, build) in EXPRESSION_COMMANDS {
        if let Some(body) = command.strip_prefix(keyword) {
            let (expression, consumed) = scan_expression(body)?;
            return Ok((build(expression.to_string()), keyword.len() + consumed));
        }
    }

    Err(SyntaxError::lexical("Unknown command"))
}

/// Scan an expression body starting right after its opening `{`.
///
/// Returns the expression text (without the closing brace) and the number of bytes consumed,
/// closing brace included.
pub fn scan_expression(body: &str) -> Result<(&str, usize), SyntaxError> {
    let mut depth = 1usize;
    for (index, c) in body.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&body[..index], index + 1));
                }
            }
            _ => {}
        }
    }
    Err(SyntaxError::lexical("missing closing brace"))
}

fn push_literal(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Literal(last)) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Literal(text.to_string()));
    }
}
