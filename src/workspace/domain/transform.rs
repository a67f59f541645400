//! Streaming transform-and-invert editor.
//!
//! [`TextTransformer`] applies a batch of non-overlapping [`TextEdit`]s to a
//! text stream in one pass and, while doing so, records the inverse edits
//! that restore the original text. Edit ranges address the source text;
//! inverse ranges address the transformed text.

use super::{Position, Range, TextEdit, TransformError};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Validated, document-ordered batch of edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextTransformer {
    edits: Vec<TextEdit>,
}

impl TextTransformer {
    /// Validates `edits` and orders them by range.
    ///
    /// The sort is stable, so several insertions at the same position keep
    /// the caller's order. Adjacent ranges such as `[0,5)` and `[5,8)` do not
    /// overlap.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MalformedRange`] when a range ends before it
    /// starts, or [`TransformError::OverlappingEdits`] when two ranges share
    /// any text.
    pub fn new(edits: impl IntoIterator<Item = TextEdit>) -> Result<Self, TransformError> {
        let mut ordered: Vec<TextEdit> = edits.into_iter().collect();
        if let Some(malformed) = ordered.iter().find(|edit| !edit.range.is_well_formed()) {
            return Err(TransformError::MalformedRange(malformed.range));
        }

        ordered.sort_by(|left, right| {
            left.range
                .start
                .cmp(&right.range.start)
                .then_with(|| left.range.end.cmp(&right.range.end))
        });

        for pair in ordered.windows(2) {
            if let [first, second] = pair
                && first.range.end > second.range.start
            {
                return Err(TransformError::OverlappingEdits {
                    first: first.range,
                    second: second.range,
                });
            }
        }

        Ok(Self { edits: ordered })
    }

    /// Returns the edits in document order.
    #[must_use]
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Streams `reader` into `writer` with the edits applied.
    ///
    /// Returns the inverse edits in document order. Edits that replace text
    /// with identical text have no inverse.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::RangeOutOfBounds`] when an edit addresses a
    /// position past the end of its line or of the document, and
    /// [`TransformError::Io`] for read failures (including non-UTF-8 input)
    /// and write failures. Output written before an error is incomplete.
    pub fn transform<R, W>(&self, reader: R, writer: W) -> Result<Vec<TextEdit>, TransformError>
    where
        R: BufRead,
        W: Write,
    {
        let mut source = SourceCursor::new(reader);
        let mut output = OutputCursor::new(writer);
        let mut inverse = Vec::with_capacity(self.edits.len());

        for edit in &self.edits {
            source.advance_to(edit.range.start, |ch| output.push(ch))?;

            let mut removed = String::new();
            source.advance_to(edit.range.end, |ch| {
                removed.push(ch);
                Ok(())
            })?;

            let undo_start = output.position();
            output.push_str(&edit.new_text)?;
            if removed != edit.new_text {
                let undo = Range::new(undo_start, output.position());
                inverse.push(TextEdit::new(undo, removed));
            }
        }

        source.drain(|ch| output.push(ch))?;
        output.flush()?;
        Ok(inverse)
    }

    /// Applies the edits to an in-memory string.
    ///
    /// Returns the transformed text and the inverse edits.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`TextTransformer::transform`].
    pub fn apply_to_str(&self, text: &str) -> Result<(String, Vec<TextEdit>), TransformError> {
        let mut buffer = Vec::with_capacity(text.len());
        let inverse = self.transform(text.as_bytes(), &mut buffer)?;
        let transformed = String::from_utf8(buffer)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        Ok((transformed, inverse))
    }
}

/// Reads the source one line at a time while tracking the current position.
struct SourceCursor<R> {
    reader: R,
    line_buffer: String,
    pending: VecDeque<char>,
    position: Position,
    exhausted: bool,
}

impl<R: BufRead> SourceCursor<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
            pending: VecDeque::new(),
            position: Position::new(0, 0),
            exhausted: false,
        }
    }

    fn peek(&mut self) -> Result<Option<char>, TransformError> {
        if self.pending.is_empty() && !self.exhausted {
            self.line_buffer.clear();
            if self.reader.read_line(&mut self.line_buffer)? == 0 {
                self.exhausted = true;
            } else {
                self.pending.extend(self.line_buffer.chars());
            }
        }
        Ok(self.pending.front().copied())
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.pending.pop_front()?;
        if ch == '\n' {
            self.position = Position::new(self.position.line + 1, 0);
        } else {
            self.position.character += 1;
        }
        Some(ch)
    }

    /// Moves to `target`, handing every passed character to `sink`.
    fn advance_to<F>(&mut self, target: Position, mut sink: F) -> Result<(), TransformError>
    where
        F: FnMut(char) -> Result<(), TransformError>,
    {
        while self.position < target {
            match self.peek()? {
                None => return Err(TransformError::RangeOutOfBounds(target)),
                Some('\n') if self.position.line == target.line => {
                    return Err(TransformError::RangeOutOfBounds(target));
                }
                Some(_) => {
                    if let Some(ch) = self.bump() {
                        sink(ch)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn drain<F>(&mut self, mut sink: F) -> Result<(), TransformError>
    where
        F: FnMut(char) -> Result<(), TransformError>,
    {
        while self.peek()?.is_some() {
            if let Some(ch) = self.bump() {
                sink(ch)?;
            }
        }
        Ok(())
    }
}

/// Writes transformed text while tracking the output position.
struct OutputCursor<W> {
    writer: W,
    position: Position,
}

impl<W: Write> OutputCursor<W> {
    const fn new(writer: W) -> Self {
        Self {
            writer,
            position: Position::new(0, 0),
        }
    }

    const fn position(&self) -> Position {
        self.position
    }

    fn push(&mut self, ch: char) -> Result<(), TransformError> {
        let mut encoded = [0_u8; 4];
        let bytes = ch.encode_utf8(&mut encoded).as_bytes();
        self.writer.write_all(bytes)?;
        self.track(ch);
        Ok(())
    }

    fn push_str(&mut self, text: &str) -> Result<(), TransformError> {
        self.writer.write_all(text.as_bytes())?;
        text.chars().for_each(|ch| self.track(ch));
        Ok(())
    }

    fn track(&mut self, ch: char) {
        if ch == '\n' {
            self.position = Position::new(self.position.line + 1, 0);
        } else {
            self.position.character += 1;
        }
    }

    fn flush(&mut self) -> Result<(), TransformError> {
        self.writer.flush()?;
        Ok(())
    }
}
