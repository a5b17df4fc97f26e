//! Classified template lines
//!
//!     Every physical line of a template becomes exactly one [Line]. Its [LineKind] is decided by
//!     the first non-blank character and the nesting state in effect before the line:
//!
//!         - Blank: nothing but spaces/tabs, outside a render body
//!         - Code: `%` prefix, copied verbatim (minus the marker) into the generated code
//!         - Text: literal text and in-line commands, only inside a render body
//!         - ClassBegin / ClassEnd / Member: the `$class`, `$endclass` and `$member` directives
//!
//!     A line is created once by the classifier and read once by the emitter. The only
//!     adjustment happens at construction: a trailing `$|` is removed and, when it is absent,
//!     the implicit newline is appended to the trailing literal.

use std::fmt;

use super::segments::Segment;

/// A `$class NAME[ : PARENT]` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    /// Parent view type, copied verbatim. Its existence is checked by rustc, not by us.
    pub parent: Option<String>,
}

/// A `$member TYPE NAME` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
    /// The composed view type, copied verbatim
    pub class_name: String,
    pub name: String,
}

/// The tag of a [LineKind], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Blank,
    CodePassthrough,
    Text,
    ClassBegin,
    ClassEnd,
    Member,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Blank => "BLANK",
            LineType::CodePassthrough => "CODE",
            LineType::Text => "TEXT",
            LineType::ClassBegin => "CLASS_BEGIN",
            LineType::ClassEnd => "CLASS_END",
            LineType::Member => "MEMBER",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    /// Passthrough code with the `%` marker removed and leading indentation kept
    Code(String),
    Text(Vec<Segment>),
    ClassBegin(ClassDescriptor),
    ClassEnd,
    Member(MemberDescriptor),
}

impl LineKind {
    pub fn line_type(&self) -> LineType {
        match self {
            LineKind::Blank => LineType::Blank,
            LineKind::Code(_) => LineType::CodePassthrough,
            LineKind::Text(_) => LineType::Text,
            LineKind::ClassBegin(_) => LineType::ClassBegin,
            LineKind::ClassEnd => LineType::ClassEnd,
            LineKind::Member(_) => LineType::Member,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the template
    pub number: usize,
    /// Raw text of the line, for diagnostics
    pub source: String,
    pub kind: LineKind,
    /// Brace depth in effect when the line starts
    pub curly_level: usize,
    /// Brace depth captured by the open class, if any
    pub class_curly_level: Option<usize>,
    /// Whether an implicit newline was appended to the text
    pub trailing_newline: bool,
}

impl Line {
    /// Build a line, applying the trailing-segment adjustment to text lines.
    pub fn new(
        number: usize,
        source: &str,
        kind: LineKind,
        curly_level: usize,
        class_curly_level: Option<usize>,
    ) -> Self {
        let (kind, trailing_newline) = match kind {
            LineKind::Text(segments) => {
                let (segments, trailing_newline) = finish_text(segments);
                (LineKind::Text(segments), trailing_newline)
            }
            other => (other, false),
        };
        Self {
            number,
            source: source.to_string(),
            kind,
            curly_level,
            class_curly_level,
            trailing_newline,
        }
    }

    pub fn line_type(&self) -> LineType {
        self.kind.line_type()
    }

    /// Segments of a text line; empty for every other kind.
    pub fn segments(&self) -> &[Segment] {
        match &self.kind {
            LineKind::Text(segments) => segments,
            _ => &[],
        }
    }

    /// A text line whose first segment is literal text.
    pub fn starts_with_text(&self) -> bool {
        self.segments().first().is_some_and(Segment::is_literal)
    }

    /// A text line whose last segment is literal text.
    pub fn ends_with_text(&self) -> bool {
        self.segments().last().is_some_and(Segment::is_literal)
    }
}

/// Drop a trailing `$|`, or append the implicit newline when there is none.
fn finish_text(mut segments: Vec<Segment>) -> (Vec<Segment>, bool) {
    if segments.last() == Some(&Segment::TrimTrailingNewline) {
        segments.pop();
        return (segments, false);
    }
    match segments.last_mut() {
        Some(Segment::Literal(text)) => text.push('\n'),
        _ => segments.push(Segment::Literal("\n".to_string())),
    }
    (segments, true)
}
