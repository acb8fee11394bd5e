//! Indent-aware text buffer.

/// Line-oriented writer that prefixes every non-empty line with the current
/// indentation.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    output: String,
    indent_unit: String,
    indent_level: usize,
}

impl CodeWriter {
    /// Create a writer using `indent_unit` for each indentation level.
    pub fn new(indent_unit: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            indent_unit: indent_unit.into(),
            indent_level: 0,
        }
    }

    /// Increase the indentation level.
    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease the indentation level.
    pub fn outdent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Write one indented line.
    pub fn write_line(&mut self, text: &str) {
        if text.is_empty() {
            self.write_blank_line();
            return;
        }
        for _ in 0..self.indent_level {
            self.output.push_str(&self.indent_unit);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Write an empty line (never indented).
    pub fn write_blank_line(&mut self) {
        self.output.push('\n');
    }

    /// Consume the writer and return its text.
    pub fn finish(self) -> String {
        self.output
    }
}
