//! Character offsets of fields within a record, for error reporting.

/// Offset of `column` on line `line` relative to the first character of `lines[0]`.
///
/// Full lengths, in characters, of the lines preceding `line` are summed and `column` is
/// added. Line terminators are not counted.
#[must_use]
pub fn record_offset<S: AsRef<str>>(lines: &[S], line: usize, column: usize) -> usize {
    lines
        .iter()
        .take(line)
        .map(|l| l.as_ref().chars().count())
        .sum::<usize>()
        + column
}
