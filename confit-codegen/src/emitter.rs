//! Formatting emitter.
//!
//! An append-only text builder that produces Go source already in gofmt
//! layout: tab indentation, balanced blocks, at most one blank line between
//! declarations and column-aligned struct fields.

use crate::error::CodegenError;
use std::fmt;

/// Append-only builder for formatted source text.
#[derive(Debug, Clone, Default)]
pub struct FormattingBuilder {
    buf: String,
    /// Closing delimiters of the currently open blocks.
    open: Vec<char>,
}

impl FormattingBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Returns true if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Writes one line at the current indentation. An empty line is written
    /// without indentation.
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            self.indent();
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Requests a blank line. Does nothing at the start of the buffer, right
    /// after an opening delimiter, or after another blank line.
    pub fn blank_line(&mut self) -> &mut Self {
        if self.buf.is_empty()
            || self.buf.ends_with("\n\n")
            || self.buf.ends_with("{\n")
            || self.buf.ends_with("(\n")
        {
            return self;
        }
        self.buf.push('\n');
        self
    }

    /// Writes `header {` and indents until the matching [`close`](Self::close).
    pub fn open_block(&mut self, header: &str) -> &mut Self {
        self.open_with(header, '{', '}')
    }

    /// Writes `header (` and indents until the matching [`close`](Self::close).
    pub fn open_group(&mut self, header: &str) -> &mut Self {
        self.open_with(header, '(', ')')
    }

    /// Closes the innermost open block.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if no block is open.
    pub fn close(&mut self) -> Result<&mut Self, CodegenError> {
        let closer = self
            .open
            .pop()
            .ok_or_else(|| CodegenError::generation("close without a matching open block"))?;
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        self.indent();
        self.buf.push(closer);
        self.buf.push('\n');
        Ok(self)
    }

    /// Writes rows of cells with every column but the last padded to its
    /// widest cell plus one space.
    pub fn aligned<R, C>(&mut self, rows: &[R]) -> &mut Self
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let mut widths: Vec<usize> = Vec::new();
        for row in rows {
            let cells = row.as_ref();
            let padded = cells.len().saturating_sub(1);
            for (i, cell) in cells[..padded].iter().enumerate() {
                let width = cell.as_ref().chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }

        for row in rows {
            let cells = row.as_ref();
            let mut text = String::new();
            for (i, cell) in cells.iter().enumerate() {
                let cell = cell.as_ref();
                if i + 1 == cells.len() {
                    text.push_str(cell);
                } else {
                    text.push_str(&format!("{cell:<width$} ", width = widths[i]));
                }
            }
            self.line(text.trim_end());
        }
        self
    }

    /// Finishes the document.
    ///
    /// # Errors
    /// Returns `CodegenError::Generation` if a block was left open.
    pub fn finish(mut self) -> Result<String, CodegenError> {
        if let Some(closer) = self.open.last() {
            return Err(CodegenError::generation(format!(
                "{} block(s) left open, innermost expects `{closer}`",
                self.open.len()
            )));
        }
        while self.buf.ends_with("\n\n") {
            self.buf.pop();
        }
        Ok(self.buf)
    }

    fn open_with(&mut self, header: &str, opener: char, closer: char) -> &mut Self {
        self.line(format!("{header} {opener}"));
        self.open.push(closer);
        self
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.buf.push('\t');
        }
    }
}

impl fmt::Display for FormattingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
