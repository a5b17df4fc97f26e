//! # kiste-compiler
//!
//! Compiles kiste templates into Rust source code.
//!
//! A template is a text file where every line is one of: passthrough Rust code (`%`), a class
//! directive (`$class`, `$member`, `$endclass`) or text with embedded expressions (`${..}`,
//! `$raw{..}`, `$call{..}`). Each class becomes a view type bound to a data reference and a
//! serializer reference; text lines become calls on the serializer. The generated code depends
//! only on the small `kiste` runtime crate.
//!
//!     ```text
//!     $class Hello
//!     %    pub fn render(&self) where DataT: ::core::fmt::Display {
//!     Hello ${self.data}!
//!     %    }
//!     $endclass
//!     ```
//!
//! Layout
//!
//!     parsing   single pass line classifier producing [parsing::Line]s
//!     codegen   emitter turning lines into Rust code plus a [codegen::SourceMap]
//!     error     [ParseError] and [CompileError]
//!     options   [CompileOptions]
//!     testing   fluent line assertions and golden fixtures

pub mod codegen;
pub mod error;
pub mod options;
pub mod parsing;
pub mod testing;

use std::fs;
use std::path::Path;

use log::debug;

pub use codegen::{Compilation, SourceMap};
pub use error::{CompileError, ErrorKind, ParseError};
pub use options::{CompileOptions, DEFAULT_RUNTIME_PATH};

/// Compile template source. `filename` is used in diagnostics and line markers.
pub fn compile(
    source: &str,
    filename: &str,
    options: &CompileOptions,
) -> Result<Compilation, ParseError> {
    let lines = parsing::parse(source, filename)?;
    debug!("{}: parsed {} lines", filename, lines.len());
    codegen::generate(&lines, filename, options)
}

/// Read and compile a template file.
pub fn compile_file(path: &Path, options: &CompileOptions) -> Result<Compilation, CompileError> {
    let source = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path.to_string_lossy();
    Ok(compile(&source, &filename, options)?)
}
