//! Rust code generation
//!
//!     The emitter walks the classified lines once and writes one or more output lines per
//!     template line:
//!
//!         Blank        an empty line
//!         Code         the code, verbatim
//!         Text         one statement per segment, joined on a single indented line
//!         ClassBegin   the view struct, its `View` impl, `Deref` to the parent, the impl opening
//!         Member       an accessor returning the composed view
//!         ClassEnd     the impl closing and the entry point function
//!
//!     Literal text is written with `text(concat!(...))`. A literal run that reaches the end of a
//!     line stays open when the next line starts with literal text, so consecutive lines of
//!     markup become a single serializer call.
//!
//!     Scaffolding lines are followed by a `//@line` marker (when enabled) so that the marker
//!     stream and the [SourceMap] stay in sync with the template.

pub mod literal;
pub mod scaffold;
pub mod source_map;

use log::debug;

pub use literal::string_literal;
pub use source_map::{Mapping, SourceMap};

use crate::error::{ParseError, SyntaxError};
use crate::options::CompileOptions;
use crate::parsing::{ClassDescriptor, Line, LineKind, MemberDescriptor, Segment};

/// The receiver of every serializer call in generated code.
const SERIALIZER: &str = "self._serialize";

/// Generated code and its mapping back to the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    pub code: String,
    pub source_map: SourceMap,
}

/// Generate Rust code for already parsed lines.
pub fn generate(
    lines: &[Line],
    filename: &str,
    options: &CompileOptions,
) -> Result<Compilation, ParseError> {
    Emitter::new(filename, options).emit(lines)
}

fn indent(level: usize) -> String {
    "    ".repeat(level)
}

pub struct Emitter<'a> {
    filename: &'a str,
    options: &'a CompileOptions,
    code: String,
    /// Lines written so far
    written: usize,
    class: Option<ClassDescriptor>,
    text_run_open: bool,
    source_map: SourceMap,
}

impl<'a> Emitter<'a> {
    pub fn new(filename: &'a str, options: &'a CompileOptions) -> Self {
        Self {
            filename,
            options,
            code: String::new(),
            written: 0,
            class: None,
            text_run_open: false,
            source_map: SourceMap::new(filename),
        }
    }

    pub fn emit(mut self, lines: &[Line]) -> Result<Compilation, ParseError> {
        self.write_header();

        for (index, line) in lines.iter().enumerate() {
            self.source_map.record(self.written + 1, line.number);
            let next = lines.get(index + 1);
            self.emit_line(line, next)?;
        }

        if let Some(class) = &self.class {
            let (number, source) = lines
                .last()
                .map_or((0, ""), |line| (line.number, line.source.as_str()));
            return Err(ParseError::new(
                self.filename,
                number,
                source,
                SyntaxError::end_of_input(format!(
                    "class {} not ended at the end of the file, did you forget $endclass?",
                    class.name
                )),
            ));
        }

        Ok(Compilation {
            code: self.code,
            source_map: self.source_map,
        })
    }

    fn emit_line(&mut self, line: &Line, next: Option<&Line>) -> Result<(), ParseError> {
        match &line.kind {
            LineKind::Blank => self.push(""),
            LineKind::Code(code) => self.push(code),
            LineKind::Text(segments) => self.emit_text(line, segments, next),
            LineKind::ClassBegin(class) => self.open_class(line, class),
            LineKind::Member(member) => self.emit_member(line, member),
            LineKind::ClassEnd => return self.close_class(line),
        }
        Ok(())
    }

    fn write_header(&mut self) {
        let banner = format!(
            "// Generated by kiste from {}. Do not edit.",
            string_literal(self.filename)
        );
        self.push(&banner);
        self.push("#[allow(unused_imports)]");
        let import = format!(
            "use {}::{{Serializer as _, View as _}};",
            self.options.runtime_path
        );
        self.push(&import);
        self.write_marker(1);
    }

    fn open_class(&mut self, line: &Line, class: &ClassDescriptor) {
        debug!("{}:{} opening class {}", self.filename, line.number, class.name);
        let prefix = indent(line.curly_level);
        for scaffold in scaffold::class_opening(class, &self.options.runtime_path) {
            self.push_indented(&prefix, &scaffold);
        }
        self.write_marker(line.number + 1);
        self.class = Some(class.clone());
    }

    fn emit_member(&mut self, line: &Line, member: &MemberDescriptor) {
        let accessor = scaffold::member_accessor(member, &self.options.runtime_path);
        self.push_indented(&indent(line.curly_level + 1), &accessor);
    }

    fn close_class(&mut self, line: &Line) -> Result<(), ParseError> {
        let class = self.class.take().ok_or_else(|| {
            ParseError::new(
                self.filename,
                line.number,
                &line.source,
                SyntaxError::scope("No class to end here"),
            )
        })?;
        debug!("{}:{} closing class {}", self.filename, line.number, class.name);
        let prefix = indent(line.curly_level);
        for scaffold in scaffold::class_closing(&class, &self.options.runtime_path) {
            self.push_indented(&prefix, &scaffold);
        }
        self.write_marker(line.number + 1);
        Ok(())
    }

    fn emit_text(&mut self, line: &Line, segments: &[Segment], next: Option<&Line>) {
        let mut pieces: Vec<String> = Vec::new();

        for segment in segments {
            match segment {
                Segment::Literal(text) => {
                    let literal = string_literal(text);
                    if self.text_run_open {
                        pieces.push(literal);
                    } else {
                        pieces.push(format!("{}.text(concat!({}", SERIALIZER, literal));
                        self.text_run_open = true;
                    }
                }
                Segment::Escape(expr) => {
                    self.close_text_run(&mut pieces);
                    let call = format!("{}.escape(&({}));", SERIALIZER, expr);
                    pieces.push(self.guarded(call, line.number, expr));
                }
                Segment::Raw(expr) => {
                    self.close_text_run(&mut pieces);
                    let call = format!("{}.raw(&({}));", SERIALIZER, expr);
                    pieces.push(self.guarded(call, line.number, expr));
                }
                Segment::Call(expr) => {
                    self.close_text_run(&mut pieces);
                    let call = format!("let () = {{{}}};", expr);
                    pieces.push(self.guarded(call, line.number, expr));
                }
                // Consumed when the line was built
                Segment::TrimTrailingNewline => {}
            }
        }

        if self.text_run_open {
            if next.is_some_and(Line::starts_with_text) {
                if let Some(last) = pieces.last_mut() {
                    last.push(',');
                }
            } else {
                self.close_text_run(&mut pieces);
            }
        }

        if pieces.is_empty() {
            self.push("");
        } else {
            let statement = format!("{}{}", indent(line.curly_level + 1), pieces.join(" "));
            self.push(&statement);
        }
    }

    fn close_text_run(&mut self, pieces: &mut [String]) {
        if !self.text_run_open {
            return;
        }
        if let Some(last) = pieces.last_mut() {
            last.push_str("));");
        }
        self.text_run_open = false;
    }

    /// Wrap a statement so a panic is reported to the serializer instead of unwinding further.
    fn guarded(&self, statement: String, line_no: usize, expression: &str) -> String {
        if !self.options.report_exceptions {
            return statement;
        }
        format!(
            "if let Err(error) = ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| {{ {} }})) {{ {}.report_exception({}, {}, error); }}",
            statement,
            SERIALIZER,
            line_no,
            string_literal(expression)
        )
    }

    fn write_marker(&mut self, template_line: usize) {
        if !self.options.line_directives {
            return;
        }
        let marker = format!(
            "//@line {} {}",
            template_line,
            string_literal(self.filename)
        );
        self.push(&marker);
    }

    fn push_indented(&mut self, prefix: &str, line: &str) {
        if line.is_empty() {
            self.push("");
        } else {
            let indented = format!("{}{}", prefix, line);
            self.push(&indented);
        }
    }

    fn push(&mut self, line: &str) {
        self.code.push_str(line);
        self.code.push('\n');
        self.written += 1;
    }
}
