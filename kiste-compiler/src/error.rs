//! Compilation failures
//!
//!     Every failure is fatal. There is no recovery and no batching: the first failure aborts
//!     the compilation and is the only one reported.
//!
//!     Parse failures fall into four groups (see [ErrorKind]) and always carry the file name,
//!     the 1-based line number and the raw text of the offending line, so the driver can print
//!     them uniformly. I/O failures only happen around the parser, in [CompileError].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Category of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown command, unmatched expression brace, unbalanced passthrough braces,
    /// characters after a trailing `$|`.
    Lexical,
    /// Text outside a render body, nested classes, directives with no open class.
    Scope,
    /// Malformed `$class` / `$member` / `$endclass` lines.
    Directive,
    /// A class or a brace left open at the end of the template.
    EndOfInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Lexical => "lexical error",
            ErrorKind::Scope => "scope error",
            ErrorKind::Directive => "directive error",
            ErrorKind::EndOfInput => "end of input error",
        };
        write!(f, "{}", name)
    }
}

/// A failure raised by the line-level parsers before the line context is known.
///
/// [ParseState](crate::parsing::ParseState) turns it into a [ParseError] by attaching the file
/// name, line number and line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    pub message: String,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lexical, message)
    }

    pub fn scope(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Scope, message)
    }

    pub fn directive(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Directive, message)
    }

    pub fn end_of_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EndOfInput, message)
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// A fatal template error with its source context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub filename: String,
    /// 1-based line number.
    pub line_no: usize,
    /// Raw text of the offending line.
    pub line: String,
    pub message: String,
}

impl ParseError {
    pub fn new(filename: &str, line_no: usize, line: &str, error: SyntaxError) -> Self {
        Self {
            kind: error.kind,
            filename: filename.to_string(),
            line_no,
            line: line.to_string(),
            message: error.message,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parse error in file: {}", self.filename)?;
        writeln!(f, "Line number: {}", self.line_no)?;
        writeln!(f, "Message: {}", self.message)?;
        write!(f, "Line: {}", self.line)
    }
}

impl std::error::Error for ParseError {}

/// Error returned by the file-level entry points.
#[derive(Debug)]
pub enum CompileError {
    /// The template could not be read
    Io { path: PathBuf, source: io::Error },
    /// The template is malformed
    Parse(ParseError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Io { path, source } => {
                write!(f, "Could not open {}: {}", path.display(), source)
            }
            CompileError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Io { source, .. } => Some(source),
            CompileError::Parse(err) => Some(err),
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(err: ParseError) -> Self {
        CompileError::Parse(err)
    }
}
