/// Category of a decode failure, independent of its message and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    TruncatedLine,
    FieldFormat,
    InvalidEpoch,
    InvariantViolation,
}

/// Error decoding TLE records.
///
/// Every variant carries a human readable `message` and the character `offset` of the
/// offending field, counted from the first character of the record's name line.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// There were no lines at all.
    #[error("{message}")]
    EmptyInput { message: String, offset: usize },

    /// A line ends before a field's column range does.
    #[error("{message} (offset {offset})")]
    TruncatedLine { message: String, offset: usize },

    /// Field content could not be decoded by its decoder.
    #[error("{message} (offset {offset})")]
    FieldFormat { message: String, offset: usize },

    /// The epoch day field has no fractional separator.
    #[error("{message} (offset {offset})")]
    InvalidEpoch { message: String, offset: usize },

    /// A decoded value violates a record invariant, e.g., a negative catalog number.
    #[error("{message} (offset {offset})")]
    InvariantViolation { message: String, offset: usize },
}

impl Error {
    pub(crate) fn empty_input() -> Self {
        Error::EmptyInput {
            message: "Empty input".to_string(),
            offset: 0,
        }
    }

    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>, offset: usize) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::EmptyInput => Error::EmptyInput { message, offset },
            ErrorKind::TruncatedLine => Error::TruncatedLine { message, offset },
            ErrorKind::FieldFormat => Error::FieldFormat { message, offset },
            ErrorKind::InvalidEpoch => Error::InvalidEpoch { message, offset },
            ErrorKind::InvariantViolation => Error::InvariantViolation { message, offset },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput { .. } => ErrorKind::EmptyInput,
            Error::TruncatedLine { .. } => ErrorKind::TruncatedLine,
            Error::FieldFormat { .. } => ErrorKind::FieldFormat,
            Error::InvalidEpoch { .. } => ErrorKind::InvalidEpoch,
            Error::InvariantViolation { .. } => ErrorKind::InvariantViolation,
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Error::EmptyInput { message, .. }
            | Error::TruncatedLine { message, .. }
            | Error::FieldFormat { message, .. }
            | Error::InvalidEpoch { message, .. }
            | Error::InvariantViolation { message, .. } => message,
        }
    }

    /// Character offset of the failing field relative to the start of its record.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Error::EmptyInput { offset, .. }
            | Error::TruncatedLine { offset, .. }
            | Error::FieldFormat { offset, .. }
            | Error::InvalidEpoch { offset, .. }
            | Error::InvariantViolation { offset, .. } => *offset,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_maps_kind_to_variant() {
        let err = Error::new(ErrorKind::InvariantViolation, "Negative satellite number", 26);

        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.message(), "Negative satellite number");
        assert_eq!(err.offset(), 26);
        assert_eq!(err.to_string(), "Negative satellite number (offset 26)");
    }

    #[test]
    fn empty_input() {
        let err = Error::empty_input();

        assert_eq!(err.kind(), ErrorKind::EmptyInput);
        assert_eq!(err.offset(), 0);
        assert_eq!(err.to_string(), "Empty input");
    }
}
