//! Testing utilities
//!
//!     Templates are small, but a parsed template is a flat list of lines whose interesting
//!     properties (category, depth, segments) are tedious to check field by field. The fluent
//!     assertions here keep tests focused on what a line means:
//!
//!     ```rust,ignore
//!     use kiste_compiler::testing::assert_lines;
//!
//!     let lines = parse(source, "page.kiste").unwrap();
//!     assert_lines(&lines)
//!         .count(5)
//!         .line(1, |line| {
//!             line.class_begin("Page").parent("Base");
//!         })
//!         .line(3, |line| {
//!             line.text().depth(1).literal(0, "Hello ").escape(1, "name");
//!         });
//!     ```
//!
//!     Golden templates live in `tests/fixtures` as `NAME.kiste` with the expected output next
//!     to them as `NAME.rs`. Use [Fixture] to load them instead of inlining large templates.

use std::fs;
use std::path::PathBuf;

use crate::parsing::{Line, LineKind, LineType, Segment};

// ============================================================================
// Fixtures
// ============================================================================

/// A golden template pair under `tests/fixtures`.
pub struct Fixture {
    pub name: String,
}

impl Fixture {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    /// File name of the template, as passed to the compiler.
    pub fn template_name(&self) -> String {
        format!("{}.kiste", self.name)
    }

    pub fn template_path(&self) -> PathBuf {
        Self::dir().join(self.template_name())
    }

    pub fn source(&self) -> String {
        read(self.template_path())
    }

    pub fn expected(&self) -> String {
        read(Self::dir().join(format!("{}.rs", self.name)))
    }
}

fn read(path: PathBuf) -> String {
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read fixture {}: {}", path.display(), err))
}

// ============================================================================
// Line assertions
// ============================================================================

/// Create an assertion builder over parsed lines.
pub fn assert_lines(lines: &[Line]) -> LinesAssertion<'_> {
    LinesAssertion { lines }
}

pub struct LinesAssertion<'a> {
    lines: &'a [Line],
}

impl<'a> LinesAssertion<'a> {
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.lines.len(),
            expected,
            "expected {} lines, found {}",
            expected,
            self.lines.len()
        );
        self
    }

    pub fn types(self, expected: &[LineType]) -> Self {
        let actual: Vec<LineType> = self.lines.iter().map(Line::line_type).collect();
        assert_eq!(actual, expected, "line types differ");
        self
    }

    /// Run assertions on the line at `index` (0-based).
    pub fn line<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(LineAssertion<'a>),
    {
        let line = self
            .lines
            .get(index)
            .unwrap_or_else(|| panic!("no line at index {}", index));
        check(LineAssertion { line });
        self
    }
}

pub struct LineAssertion<'a> {
    line: &'a Line,
}

impl<'a> LineAssertion<'a> {
    fn context(&self) -> String {
        format!("line {} ({:?})", self.line.number, self.line.source)
    }

    pub fn is(self, expected: LineType) -> Self {
        assert_eq!(self.line.line_type(), expected, "{}", self.context());
        self
    }

    pub fn blank(self) -> Self {
        self.is(LineType::Blank)
    }

    pub fn text(self) -> Self {
        self.is(LineType::Text)
    }

    pub fn code(self, expected: &str) -> Self {
        match &self.line.kind {
            LineKind::Code(code) => assert_eq!(code, expected, "{}", self.context()),
            other => panic!("{}: expected code, found {:?}", self.context(), other),
        }
        self
    }

    pub fn class_begin(self, name: &str) -> Self {
        match &self.line.kind {
            LineKind::ClassBegin(class) => assert_eq!(class.name, name, "{}", self.context()),
            other => panic!("{}: expected class begin, found {:?}", self.context(), other),
        }
        self
    }

    pub fn parent(self, expected: &str) -> Self {
        match &self.line.kind {
            LineKind::ClassBegin(class) => {
                assert_eq!(class.parent.as_deref(), Some(expected), "{}", self.context())
            }
            other => panic!("{}: expected class begin, found {:?}", self.context(), other),
        }
        self
    }

    pub fn member(self, class_name: &str, name: &str) -> Self {
        match &self.line.kind {
            LineKind::Member(member) => {
                assert_eq!(member.class_name, class_name, "{}", self.context());
                assert_eq!(member.name, name, "{}", self.context());
            }
            other => panic!("{}: expected member, found {:?}", self.context(), other),
        }
        self
    }

    pub fn depth(self, expected: usize) -> Self {
        assert_eq!(self.line.curly_level, expected, "{}", self.context());
        self
    }

    pub fn class_depth(self, expected: Option<usize>) -> Self {
        assert_eq!(self.line.class_curly_level, expected, "{}", self.context());
        self
    }

    pub fn trailing_newline(self, expected: bool) -> Self {
        assert_eq!(self.line.trailing_newline, expected, "{}", self.context());
        self
    }

    pub fn segments(self, expected: &[Segment]) -> Self {
        assert_eq!(self.line.segments(), expected, "{}", self.context());
        self
    }

    pub fn literal(self, index: usize, expected: &str) -> Self {
        let segment = self.segment(index);
        assert_eq!(segment, &Segment::Literal(expected.to_string()), "{}", self.context());
        self
    }

    pub fn escape(self, index: usize, expected: &str) -> Self {
        let segment = self.segment(index);
        assert_eq!(segment, &Segment::Escape(expected.to_string()), "{}", self.context());
        self
    }

    pub fn raw(self, index: usize, expected: &str) -> Self {
        let segment = self.segment(index);
        assert_eq!(segment, &Segment::Raw(expected.to_string()), "{}", self.context());
        self
    }

    pub fn call(self, index: usize, expected: &str) -> Self {
        let segment = self.segment(index);
        assert_eq!(segment, &Segment::Call(expected.to_string()), "{}", self.context());
        self
    }

    fn segment(&self, index: usize) -> &'a Segment {
        self.line
            .segments()
            .get(index)
            .unwrap_or_else(|| panic!("{}: no segment at index {}", self.context(), index))
    }
}
