//! Indentation-tracking text buffer.

/// Accumulates emitted lines at the current block depth.
#[derive(Debug)]
pub struct CodeWriter {
    output: String,
    indent_unit: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent_unit: " ".repeat(indent_width),
            depth: 0,
        }
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Write one line at the current depth. Empty input writes a bare newline.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.output.push_str(&self.indent_unit);
            }
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    /// Write `{` and indent.
    pub fn open_block(&mut self) {
        self.line("{");
        self.depth += 1;
    }

    /// Dedent and write `}`.
    pub fn close_block(&mut self) {
        self.close_block_with("");
    }

    /// Dedent and write `}` followed by `suffix`, e.g. `;` after an initializer.
    pub fn close_block_with(&mut self, suffix: &str) {
        debug_assert!(self.depth > 0, "close_block without matching open_block");
        self.depth = self.depth.saturating_sub(1);
        self.line(&format!("}}{suffix}"));
    }

    /// Consume the writer and return its text.
    pub fn finish(self) -> String {
        self.output
    }
}
