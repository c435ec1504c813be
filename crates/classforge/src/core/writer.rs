//! Indentation-aware text buffer shared by the emitters

/// Line-oriented output buffer
///
/// Lines are indented by `level * indent_width` spaces. Empty lines never
/// carry trailing whitespace. [`CodeWriter::gap`] separates sibling blocks
/// with exactly one blank line and never puts one right after an opening
/// line or another blank.
#[derive(Debug, Clone)]
pub struct CodeWriter {
    buf: String,
    indent_width: usize,
    level: usize,
    needs_gap: bool,
}

impl CodeWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            buf: String::new(),
            indent_width,
            level: 0,
            needs_gap: false,
        }
    }

    /// Write one line at the current indentation level
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            self.buf
                .extend(std::iter::repeat(' ').take(self.level * self.indent_width));
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self.needs_gap = true;
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.buf.push('\n');
        self.needs_gap = false;
    }

    /// Blank line before the next sibling block, if one is due
    pub fn gap(&mut self) {
        if self.needs_gap {
            self.blank();
        }
    }

    /// Write an opening line and indent
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.indent();
        self.needs_gap = false;
    }

    /// Dedent and write a closing line
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.dedent();
        self.line(text);
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Current indentation level
    pub fn level(&self) -> usize {
        self.level
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
