//! Decoding of whole TLE catalogs and single records.
//!
//! Decoding is fail-fast: the first invalid field of any record aborts the decode and no
//! records are returned. Error offsets are relative to the start of the failing record.
use tracing::{debug, trace, warn};
use typed_builder::TypedBuilder;

use crate::{
    decode::DecodeError,
    fields::{Field, Value, LINES},
    offset::record_offset,
    record::{OrbitalRecord, RecordFields},
    segment::{segment, LINES_PER_RECORD},
    Error, ErrorKind, Result,
};

/// Year used for the launch year century pivot when the system clock is unusable.
const FALLBACK_YEAR: i32 = 2000;

fn clock_year() -> i32 {
    match hifitime::Epoch::now() {
        Ok(now) => now.to_gregorian_utc().0,
        Err(err) => {
            warn!("cannot determine current year, using {FALLBACK_YEAR}: {err}");
            FALLBACK_YEAR
        }
    }
}

/// Decodes TLE records.
///
/// # Examples
/// Decode with a fixed pivot year for two digit launch years.
/// ```
/// use tle::Reader;
///
/// let lines = [
///     "ISS (ZARYA)             ",
///     "1 25544U 98067A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
///     "2 25544  51.6401 245.6477 0005666 129.9909  47.4633 15.53976999 55286",
/// ];
/// let records = Reader::builder()
///     .reference_year(2017)
///     .build()
///     .decode_catalog(&lines)
///     .unwrap();
/// assert_eq!(records[0].launch_year(), 1998);
/// ```
#[derive(TypedBuilder, Debug, Clone, Default)]
pub struct Reader {
    /// Current year used to expand two digit launch years. When not set the year is read
    /// from the system clock at decode time, so the same input may decode differently
    /// depending on when it is decoded.
    #[builder(default, setter(strip_option))]
    reference_year: Option<i32>,
}

impl Reader {
    fn current_year(&self) -> i32 {
        self.reference_year.unwrap_or_else(clock_year)
    }

    /// Decode all complete 3-line records in `lines`, in input order.
    ///
    /// Trailing lines that do not make up a complete record are ignored.
    ///
    /// # Errors
    /// [Error::EmptyInput] if there are no lines, otherwise the first error of the first
    /// invalid record. Its offset is relative to that record's name line.
    pub fn decode_catalog<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<OrbitalRecord>> {
        let blocks = segment(lines)?;
        debug!(
            lines = lines.len(),
            records = blocks.len(),
            dropped = blocks.remainder(),
            "decoding catalog"
        );

        let current_year = self.current_year();
        let mut records = Vec::with_capacity(blocks.len());
        for block in blocks {
            let record = build(&block.lines, current_year).inspect_err(|err| {
                debug!(
                    record = block.index,
                    line = block.first_line(),
                    "invalid record: {err}"
                );
            })?;
            trace!(
                record = block.index,
                catalog_number = record.catalog_number(),
                "decoded"
            );
            records.push(record);
        }
        Ok(records)
    }

    /// Decode a single record from its name line and two element lines.
    ///
    /// # Errors
    /// The first invalid field, with its offset relative to the start of `lines[0]`.
    pub fn decode_record<S: AsRef<str>>(
        &self,
        lines: &[S; LINES_PER_RECORD],
    ) -> Result<OrbitalRecord> {
        let block = [lines[0].as_ref(), lines[1].as_ref(), lines[2].as_ref()];
        build(&block, self.current_year())
    }
}

/// Decode all records in `lines` using the current year for launch years.
///
/// See [Reader::decode_catalog].
///
/// # Errors
/// See [Reader::decode_catalog].
pub fn decode_catalog<S: AsRef<str>>(lines: &[S]) -> Result<Vec<OrbitalRecord>> {
    Reader::default().decode_catalog(lines)
}

/// Decode a single record using the current year for launch years.
///
/// See [Reader::decode_record].
///
/// # Errors
/// See [Reader::decode_record].
pub fn decode_record<S: AsRef<str>>(lines: &[S; LINES_PER_RECORD]) -> Result<OrbitalRecord> {
    Reader::default().decode_record(lines)
}

/// Apply every field of the field tables to `block`, failing on the first invalid field.
fn build(block: &[&str; LINES_PER_RECORD], current_year: i32) -> Result<OrbitalRecord> {
    let mut fields = RecordFields::default();
    for table in &LINES {
        for field in table.iter() {
            let value = decode_field(field, block, current_year)?;
            if fields.set(field.id, value).is_err() {
                return Err(Error::new(
                    ErrorKind::FieldFormat,
                    field.message,
                    field_offset(field, block, 0),
                ));
            }
        }
    }

    OrbitalRecord::try_from(fields).map_err(|err| {
        let offset = err
            .field
            .field()
            .map_or(0, |field| field_offset(field, block, 0));
        Error::new(ErrorKind::InvariantViolation, err.message, offset)
    })
}

fn field_offset(field: &Field, block: &[&str; LINES_PER_RECORD], skipped: usize) -> usize {
    record_offset(block, field.line.index(), field.columns.start + skipped)
}

fn decode_field(
    field: &Field,
    block: &[&str; LINES_PER_RECORD],
    current_year: i32,
) -> Result<Value> {
    let line = block[field.line.index()];
    let Some(extract) = field.extract(line) else {
        return Err(Error::new(
            ErrorKind::TruncatedLine,
            format!(
                "Line {} has {} characters, {:?} requires columns {}..{}",
                field.line.index() + 1,
                line.chars().count(),
                field.id,
                field.columns.start,
                field.columns.end
            ),
            field_offset(field, block, 0),
        ));
    };

    let offset = field_offset(field, block, extract.skipped);
    let value = field
        .decoder
        .decode(extract.text, current_year)
        .map_err(|err| {
            trace!(field = ?field.id, offset, "{err}");
            match err {
                DecodeError::MissingFraction(_) => {
                    Error::new(ErrorKind::InvalidEpoch, field.message, offset)
                }
                _ => Error::new(ErrorKind::FieldFormat, field.message, offset),
            }
        })?;

    field
        .id
        .validate(&value)
        .map_err(|message| Error::new(ErrorKind::InvariantViolation, message, offset))?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Epoch;

    const ISS: [&str; 3] = [
        "ISS (ZARYA)             ",
        "1 25544U 98067A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
        "2 25544  51.6401 245.6477 0005666 129.9909  47.4633 15.53976999 55286",
    ];

    fn reader() -> Reader {
        Reader::builder().reference_year(2017).build()
    }

    fn with_line(line: usize, text: &str) -> [&str; 3] {
        let mut block = ISS;
        block[line] = text;
        block
    }

    #[test]
    fn decode_iss() {
        let record = reader().decode_record(&ISS).unwrap();

        assert_eq!(record.name(), "ISS (ZARYA)");
        assert_eq!(record.catalog_number(), 25544);
        assert_eq!(record.classification(), "U");
        assert_eq!(record.launch_year(), 1998);
        assert_eq!(record.launch_number(), 67);
        assert_eq!(record.launch_piece(), 1);
        assert_eq!(record.epoch(), Epoch::new(2017, 126));
        assert_eq!(record.mean_motion_dot2(), 0.0000278);
        assert_eq!(record.mean_motion_dot6(), 0.0);
        assert_eq!(record.drag_term(), 49495.4);
        assert_eq!(record.ephemeris_type(), 0);
        assert_eq!(record.inclination(), 51.6401);
        assert_eq!(record.right_ascension(), 245.6477);
        assert_eq!(record.eccentricity(), 0.0005666);
        assert_eq!(record.perigee_argument(), 129.9909);
        assert_eq!(record.mean_anomaly(), 47.4633);
        assert_eq!(record.mean_motion(), 15.5397699);
        assert_eq!(record.revolutions_at_epoch(), 55286);
    }

    #[test]
    fn decode_is_deterministic() {
        let a = reader().decode_record(&ISS).unwrap();
        let b = reader().decode_record(&ISS).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn default_reader_uses_clock_year() {
        // 98 stays in the 1900s for any clock year before 2098
        let record = decode_record(&ISS).unwrap();
        assert_eq!(record.launch_year(), 1998);
    }

    #[test]
    fn negative_catalog_number() {
        let block = with_line(
            1,
            "1 -0544U 98067A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.message(), "Negative satellite number");
        assert_eq!(err.offset(), 24 + 2);
    }

    #[test]
    fn unparseable_catalog_number() {
        let block = with_line(
            1,
            "1 25X44U 98067A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FieldFormat);
        assert_eq!(err.message(), "Invalid satellite number");
        assert_eq!(err.offset(), 26);
    }

    #[test]
    fn zero_launch_number() {
        let block = with_line(
            1,
            "1 25544U 98000A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.message(), "Non-positive launch number");
        assert_eq!(err.offset(), 24 + 11);
    }

    #[test]
    fn offset_skips_leading_whitespace() {
        let block = with_line(
            2,
            "2 25544  51.6401 245.6477 0005666 129.9909  47.46x3 15.53976999 55286",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.message(), "Invalid mean anomaly");
        assert_eq!(err.offset(), 24 + 69 + 44);
    }

    #[test]
    fn epoch_without_fraction() {
        let block = with_line(
            1,
            "1 25544U 98067A   17126054791667  .00002780  00000-0  49495-4 0  9993",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidEpoch);
        assert_eq!(err.message(), "Invalid epoch");
        assert_eq!(err.offset(), 24 + 20);
    }

    #[test]
    fn eccentricity_is_not_trimmed() {
        let block = with_line(
            2,
            "2 25544  51.6401 245.6477  005666 129.9909  47.4633 15.53976999 55286",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FieldFormat);
        assert_eq!(err.message(), "Invalid eccentricity");
        assert_eq!(err.offset(), 24 + 69 + 26);
    }

    #[test]
    fn blank_launch_piece() {
        let block = with_line(
            1,
            "1 25544U 98067    17126.54791667  .00002780  00000-0  49495-4 0  9993",
        );
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FieldFormat);
        assert_eq!(err.message(), "Invalid launch piece");
    }

    #[test]
    fn truncated_element_line() {
        let block = with_line(2, "2 25544  51.6401 245.6477 0005666 129.9909  47.4633");
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TruncatedLine);
        assert_eq!(err.offset(), 24 + 69 + 52);
    }

    #[test]
    fn truncated_name_line() {
        let block = with_line(0, "ISS");
        let err = reader().decode_record(&block).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::TruncatedLine);
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn first_failing_field_wins() {
        // both the catalog number and revolutions are invalid
        let block = [
            ISS[0],
            "1 -0544U 98067A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
            "2 25544  51.6401 245.6477 0005666 129.9909  47.4633 15.53976999 -5286",
        ];
        let err = reader().decode_record(&block).unwrap_err();
        assert_eq!(err.message(), "Negative satellite number");
    }

    #[test]
    fn catalog_offsets_are_record_relative() {
        let mut lines: Vec<&str> = ISS.to_vec();
        lines.extend(with_line(
            1,
            "1 25544U 98000A   17126.54791667  .00002780  00000-0  49495-4 0  9993",
        ));
        let err = reader().decode_catalog(&lines).unwrap_err();

        assert_eq!(err.message(), "Non-positive launch number");
        assert_eq!(err.offset(), 35);
    }

    #[test]
    fn catalog_of_str_and_string() {
        let owned: Vec<String> = ISS.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            reader().decode_catalog(&owned).unwrap(),
            reader().decode_catalog(&ISS).unwrap()
        );
    }
}
