//! Compiler switches

/// Path of the runtime crate referenced by generated code unless configured otherwise.
pub const DEFAULT_RUNTIME_PATH: &str = "::kiste";

/// Knobs that change the generated code, not the template language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Wrap every embedded expression so a panic is forwarded to the serializer's
    /// `report_exception` and rendering continues.
    pub report_exceptions: bool,
    /// Emit `//@line` markers pointing back into the template.
    pub line_directives: bool,
    /// Path under which generated code reaches `View`, `Serializer` and `Terminal`.
    pub runtime_path: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            report_exceptions: false,
            line_directives: true,
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
        }
    }
}

impl CompileOptions {
    pub fn with_report_exceptions(mut self, enabled: bool) -> Self {
        self.report_exceptions = enabled;
        self
    }

    pub fn with_line_directives(mut self, enabled: bool) -> Self {
        self.line_directives = enabled;
        self
    }

    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }
}
