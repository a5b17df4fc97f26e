//! Nesting and scope tracking
//!
//!     Two nesting levels interact in a template:
//!
//!         - the brace depth (`curly_level`), moved only by `{` and `}` on passthrough lines
//!         - the class scope, opened by `$class` and closed by `$endclass`, which remembers the
//!           brace depth at which it was opened
//!
//!     Text is legal only inside a render body: a class is open and the brace depth is strictly
//!     greater than the depth captured by the class. The open class is tracked as an explicit
//!     `Option`, so a class opened at depth 0 is distinguishable from no class at all.
//!
//!     [ParseState] is a value. Each line is consumed with [ParseState::next_line], which returns
//!     the classified line together with the updated state; the previous state is untouched.

use std::rc::Rc;

use log::debug;

use super::classify::classify;
use super::line::{ClassDescriptor, Line, LineKind};
use crate::error::{ParseError, SyntaxError};

/// The class currently open and the brace depth it was opened at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassScope {
    pub class: ClassDescriptor,
    pub curly_level: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseState {
    pub filename: Rc<str>,
    /// Number of the last consumed line (0 before the first line)
    pub line_no: usize,
    pub curly_level: usize,
    pub class_scope: Option<ClassScope>,
    /// Whether the last consumed line carried an implicit trailing newline
    pub trailing_newline: bool,
}

impl ParseState {
    pub fn new(filename: &str) -> Self {
        Self {
            filename: Rc::from(filename),
            line_no: 0,
            curly_level: 0,
            class_scope: None,
            trailing_newline: true,
        }
    }

    pub fn class_curly_level(&self) -> Option<usize> {
        self.class_scope.as_ref().map(|scope| scope.curly_level)
    }

    /// Inside an open class and below the class's own brace depth.
    pub fn in_render_body(&self) -> bool {
        self.class_curly_level()
            .is_some_and(|class_level| self.curly_level > class_level)
    }

    /// Classify the next physical line and compute the state after it.
    pub fn next_line(&self, raw: &str) -> Result<(Line, ParseState), ParseError> {
        let line_no = self.line_no + 1;
        let fail = |error: SyntaxError| ParseError::new(&self.filename, line_no, raw, error);

        let kind = classify(raw, self).map_err(fail)?;
        let mut next = self.clone();
        next.line_no = line_no;

        match &kind {
            LineKind::Code(_) => {
                next.curly_level = track_braces(raw, self.curly_level).map_err(fail)?;
            }
            LineKind::ClassBegin(class) => {
                next.class_scope = Some(ClassScope {
                    class: class.clone(),
                    curly_level: self.curly_level,
                });
            }
            LineKind::ClassEnd => next.class_scope = None,
            LineKind::Blank | LineKind::Text(_) | LineKind::Member(_) => {}
        }

        let line = Line::new(
            line_no,
            raw,
            kind,
            self.curly_level,
            self.class_curly_level(),
        );
        next.trailing_newline = line.trailing_newline;
        debug!(
            "{}:{} {} depth={} class={:?}",
            self.filename,
            line_no,
            line.line_type(),
            line.curly_level,
            line.class_curly_level
        );

        Ok((line, next))
    }

    /// End-of-input checks. `last_line` is the raw text of the final line, for diagnostics.
    pub fn finish(&self, last_line: &str) -> Result<(), ParseError> {
        let fail = |error: SyntaxError| ParseError::new(&self.filename, self.line_no, last_line, error);

        if self.curly_level != 0 {
            return Err(fail(SyntaxError::end_of_input(
                "not enough closing curly braces",
            )));
        }
        if let Some(scope) = &self.class_scope {
            return Err(fail(SyntaxError::end_of_input(format!(
                "class {} not ended at the end of the file, did you forget $endclass?",
                scope.class.name
            ))));
        }
        Ok(())
    }
}

/// Apply the braces of a passthrough line to the current depth.
fn track_braces(raw: &str, mut level: usize) -> Result<usize, SyntaxError> {
    for c in raw.chars() {
        match c {
            '{' => level += 1,
            '}' => {
                level = level.checked_sub(1).ok_or_else(|| {
                    SyntaxError::lexical("Too many closing curly braces in passthrough code")
                })?;
            }
            _ => {}
        }
    }
    Ok(level)
}
