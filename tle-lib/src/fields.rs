//! Column layout of the three lines of a TLE record.
//!
//! Each [Field] binds a character column range on one line to a [Decoder] and to the
//! validator of its [FieldId]. Columns are 0-indexed character positions with an exclusive
//! end, e.g., the catalog number of element line 1 is `2..7`.
//!
//! Fields are listed in decode order: left to right within a line, lines top to bottom.
use std::ops::Range;

use crate::decode::{self, DecodeError};

/// Position of a line within a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Name,
    Elements1,
    Elements2,
}

impl LineKind {
    /// Index of the line within its 3-line block.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            LineKind::Name => 0,
            LineKind::Elements1 => 1,
            LineKind::Elements2 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    CatalogNumber,
    Classification,
    LaunchYear,
    LaunchNumber,
    LaunchPiece,
    EpochYear,
    EpochDay,
    MeanMotionDot2,
    MeanMotionDot6,
    DragTerm,
    EphemerisType,
    Inclination,
    RightAscension,
    Eccentricity,
    PerigeeArgument,
    MeanAnomaly,
    MeanMotion,
    RevolutionsAtEpoch,
}

impl FieldId {
    /// Check a decoded value against the record invariants for this field.
    ///
    /// # Errors
    /// The invariant message if `value` is not acceptable.
    pub fn validate(self, value: &Value) -> Result<(), &'static str> {
        match (self, value) {
            (FieldId::CatalogNumber, Value::Integer(v)) if *v < 0 => {
                Err("Negative satellite number")
            }
            (FieldId::LaunchNumber, Value::Integer(v)) if *v < 1 => {
                Err("Non-positive launch number")
            }
            (FieldId::LaunchPiece, Value::Integer(v)) if *v < 1 => {
                Err("Non-positive launch piece")
            }
            (FieldId::RevolutionsAtEpoch, Value::Integer(v)) if *v < 0 => {
                Err("Negative revolutions at epoch")
            }
            (FieldId::Eccentricity, Value::Decimal(v)) if !(0.0..1.0).contains(v) => {
                Err("Eccentricity out of range")
            }
            _ => Ok(()),
        }
    }

    /// The [Field] decoding this id.
    #[must_use]
    pub fn field(self) -> Option<&'static Field> {
        LINES
            .iter()
            .flat_map(|fields| fields.iter())
            .find(|f| f.id == self)
    }
}

/// A decoded field value prior to record assembly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Year(i32),
    Day(u32),
}

/// Decoders for each of the formats found in a TLE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoder {
    Text,
    Integer,
    Decimal,
    LaunchYear,
    LaunchPiece,
    EpochYear,
    EpochDay,
    HyphenatedDecimal,
    Eccentricity,
}

impl Decoder {
    /// Decode column text. `current_year` is only used by [Decoder::LaunchYear].
    ///
    /// # Errors
    /// [DecodeError] from the underlying [decode] function.
    pub fn decode(self, text: &str, current_year: i32) -> Result<Value, DecodeError> {
        Ok(match self {
            Decoder::Text => Value::Text(text.to_string()),
            Decoder::Integer => Value::Integer(decode::integer(text)?),
            Decoder::Decimal => Value::Decimal(decode::decimal(text)?),
            Decoder::LaunchYear => Value::Year(decode::launch_year(text, current_year)?),
            Decoder::LaunchPiece => Value::Integer(decode::launch_piece(text)?),
            Decoder::EpochYear => Value::Year(decode::epoch_year(text)?),
            Decoder::EpochDay => Value::Day(decode::epoch_day(text)?),
            Decoder::HyphenatedDecimal => Value::Decimal(decode::hyphenated_decimal(text)?),
            Decoder::Eccentricity => Value::Decimal(decode::eccentricity(text)?),
        })
    }
}

/// Column text extracted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extract<'a> {
    pub text: &'a str,
    /// Number of leading whitespace characters removed by trimming.
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub line: LineKind,
    pub columns: Range<usize>,
    /// Whether surrounding whitespace is removed before decoding.
    pub trim: bool,
    pub decoder: Decoder,
    /// Message reported when the column text cannot be decoded.
    pub message: &'static str,
}

impl Field {
    /// Extract this field's column text from `line`.
    ///
    /// Returns `None` if `line` has fewer characters than the end of the column range.
    #[must_use]
    pub fn extract<'a>(&self, line: &'a str) -> Option<Extract<'a>> {
        let raw = columns(line, &self.columns)?;
        if !self.trim {
            return Some(Extract {
                text: raw,
                skipped: 0,
            });
        }
        Some(Extract {
            text: raw.trim(),
            skipped: raw.chars().take_while(|c| c.is_whitespace()).count(),
        })
    }
}

/// Slice `line` by character positions rather than bytes.
fn columns<'a>(line: &'a str, range: &Range<usize>) -> Option<&'a str> {
    if range.end <= range.start {
        return None;
    }
    let mut bounds = line
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()));
    let start = bounds.nth(range.start)?;
    let end = bounds.nth(range.end - range.start - 1)?;
    Some(&line[start..end])
}

const fn field(
    id: FieldId,
    line: LineKind,
    columns: Range<usize>,
    decoder: Decoder,
    message: &'static str,
) -> Field {
    Field {
        id,
        line,
        columns,
        trim: true,
        decoder,
        message,
    }
}

const fn untrimmed(
    id: FieldId,
    line: LineKind,
    columns: Range<usize>,
    decoder: Decoder,
    message: &'static str,
) -> Field {
    Field {
        id,
        line,
        columns,
        trim: false,
        decoder,
        message,
    }
}

pub static NAME_LINE: [Field; 1] = [field(
    FieldId::Name,
    LineKind::Name,
    0..23,
    Decoder::Text,
    "Invalid satellite name",
)];

pub static ELEMENT_LINE_1: [Field; 11] = [
    field(
        FieldId::CatalogNumber,
        LineKind::Elements1,
        2..7,
        Decoder::Integer,
        "Invalid satellite number",
    ),
    field(
        FieldId::Classification,
        LineKind::Elements1,
        7..8,
        Decoder::Text,
        "Invalid classification",
    ),
    field(
        FieldId::LaunchYear,
        LineKind::Elements1,
        9..11,
        Decoder::LaunchYear,
        "Invalid launch year",
    ),
    field(
        FieldId::LaunchNumber,
        LineKind::Elements1,
        11..14,
        Decoder::Integer,
        "Invalid launch number",
    ),
    field(
        FieldId::LaunchPiece,
        LineKind::Elements1,
        14..16,
        Decoder::LaunchPiece,
        "Invalid launch piece",
    ),
    field(
        FieldId::EpochYear,
        LineKind::Elements1,
        17..20,
        Decoder::EpochYear,
        "Invalid epoch",
    ),
    field(
        FieldId::EpochDay,
        LineKind::Elements1,
        20..31,
        Decoder::EpochDay,
        "Invalid epoch",
    ),
    field(
        FieldId::MeanMotionDot2,
        LineKind::Elements1,
        33..43,
        Decoder::Decimal,
        "Invalid first time derivative of mean motion",
    ),
    field(
        FieldId::MeanMotionDot6,
        LineKind::Elements1,
        45..51,
        Decoder::HyphenatedDecimal,
        "Invalid second time derivative of mean motion",
    ),
    field(
        FieldId::DragTerm,
        LineKind::Elements1,
        53..61,
        Decoder::HyphenatedDecimal,
        "Invalid BSTAR drag term",
    ),
    field(
        FieldId::EphemerisType,
        LineKind::Elements1,
        62..63,
        Decoder::Integer,
        "Invalid ephemeris type",
    ),
];

pub static ELEMENT_LINE_2: [Field; 7] = [
    field(
        FieldId::Inclination,
        LineKind::Elements2,
        8..17,
        Decoder::Decimal,
        "Invalid inclination",
    ),
    untrimmed(
        FieldId::RightAscension,
        LineKind::Elements2,
        17..25,
        Decoder::Decimal,
        "Invalid right ascension of the ascending node",
    ),
    untrimmed(
        FieldId::Eccentricity,
        LineKind::Elements2,
        26..33,
        Decoder::Eccentricity,
        "Invalid eccentricity",
    ),
    field(
        FieldId::PerigeeArgument,
        LineKind::Elements2,
        34..43,
        Decoder::Decimal,
        "Invalid argument of perigee",
    ),
    field(
        FieldId::MeanAnomaly,
        LineKind::Elements2,
        43..51,
        Decoder::Decimal,
        "Invalid mean anomaly",
    ),
    field(
        FieldId::MeanMotion,
        LineKind::Elements2,
        52..62,
        Decoder::Decimal,
        "Invalid mean motion",
    ),
    field(
        FieldId::RevolutionsAtEpoch,
        LineKind::Elements2,
        64..69,
        Decoder::Integer,
        "Invalid number of revolutions at epoch",
    ),
];

/// Field tables indexed by [LineKind::index].
pub static LINES: [&[Field]; 3] = [&NAME_LINE, &ELEMENT_LINE_1, &ELEMENT_LINE_2];
