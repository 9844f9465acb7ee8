//! Grouping of input lines into 3-line records.
use std::slice::ChunksExact;

use crate::{Error, Result};

/// Number of lines in a record: the name line and the two element lines.
pub const LINES_PER_RECORD: usize = 3;

/// The lines of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Zero-based record index within the input.
    pub index: usize,
    pub lines: [&'a str; LINES_PER_RECORD],
}

impl Block<'_> {
    /// Zero-based index of the block's name line within the input.
    #[must_use]
    pub fn first_line(&self) -> usize {
        self.index * LINES_PER_RECORD
    }
}

/// Iterator of [Block]s created by [segment].
#[derive(Debug, Clone)]
pub struct Segments<'a, S> {
    chunks: ChunksExact<'a, S>,
    index: usize,
}

impl<S> Segments<'_, S> {
    /// Number of trailing lines that do not form a complete record and will not be produced.
    #[must_use]
    pub fn remainder(&self) -> usize {
        self.chunks.remainder().len()
    }
}

impl<'a, S: AsRef<str>> Iterator for Segments<'a, S> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let block = Block {
            index: self.index,
            lines: [chunk[0].as_ref(), chunk[1].as_ref(), chunk[2].as_ref()],
        };
        self.index += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<S: AsRef<str>> ExactSizeIterator for Segments<'_, S> {}

/// Split `lines` into consecutive 3-line blocks.
///
/// A trailing 1 or 2 lines that do not make up a full block are ignored, which tolerates
/// inputs such as a final empty line.
///
/// # Errors
/// [Error::EmptyInput] if `lines` is empty.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Result<Segments<'_, S>> {
    if lines.is_empty() {
        return Err(Error::empty_input());
    }
    Ok(Segments {
        chunks: lines.chunks_exact(LINES_PER_RECORD),
        index: 0,
    })
}
