mod common;

use tle::{
    decode_catalog,
    source::{read_lines, SourceError},
    Epoch, ErrorKind, OrbitalRecord, Reader,
};

use common::fixture_path;

fn reader() -> Reader {
    Reader::builder().reference_year(2017).build()
}

fn decode_fixture(name: &str) -> tle::Result<Vec<OrbitalRecord>> {
    let lines = read_lines(fixture_path(name)).unwrap();
    reader().decode_catalog(&lines)
}

#[test]
fn decode_valid_catalog() {
    let records = decode_fixture("valid01.tle").unwrap();

    assert_eq!(records.len(), 2);

    let iss = &records[0];
    assert_eq!(iss.name(), "ISS (ZARYA)");
    assert_eq!(iss.catalog_number(), 25544);
    assert_eq!(iss.classification(), "U");
    assert_eq!(iss.launch_year(), 1998);
    assert_eq!(iss.launch_number(), 67);
    assert_eq!(iss.launch_piece(), 1);
    assert_eq!(iss.epoch(), Epoch::new(2017, 126));
    assert_eq!(iss.mean_motion_dot2(), 0.0000278);
    assert_eq!(iss.mean_motion_dot6(), 0.0);
    assert_eq!(iss.drag_term(), 49495.4);
    assert_eq!(iss.ephemeris_type(), 0);
    assert_eq!(iss.inclination(), 51.6401);
    assert_eq!(iss.right_ascension(), 245.6477);
    assert_eq!(iss.eccentricity(), 0.0005666);
    assert_eq!(iss.perigee_argument(), 129.9909);
    assert_eq!(iss.mean_anomaly(), 47.4633);
    assert_eq!(iss.mean_motion(), 15.5397699);
    assert_eq!(iss.revolutions_at_epoch(), 55286);

    let tiangong = &records[1];
    assert_eq!(tiangong.name(), "TIANGONG 1");
    assert_eq!(tiangong.launch_year(), 2011);
    assert_eq!(tiangong.right_ascension(), 83.7323);
    assert_eq!(tiangong.epoch(), Epoch::new(2017, 128));
}

#[test]
fn decode_without_final_newline() {
    let records = decode_fixture("valid02_no_newline.tle").unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "MOLNIYA 2-9");
    assert_eq!(records[0].catalog_number(), 7276);
    assert_eq!(records[0].launch_year(), 1974);
    assert_eq!(records[0].eccentricity(), 0.686588);
    assert_eq!(records[1].name(), "MOLNIYA 2-10");
    assert_eq!(records[1].mean_motion_dot2(), -0.00001767);
    assert_eq!(records[1].drag_term(), -26226.3);
    assert_eq!(records[1].revolutions_at_epoch(), 12833);
}

#[test]
fn decode_crlf_matches_lf() {
    let crlf = decode_fixture("valid03_crlf.tle").unwrap();
    let lf = decode_fixture("valid01.tle").unwrap();

    assert_eq!(crlf.len(), 1);
    assert_eq!(crlf[0], lf[0]);
}

#[test]
fn decode_is_deterministic() {
    let first = decode_fixture("valid01.tle").unwrap();
    let second = decode_fixture("valid01.tle").unwrap();

    assert_eq!(first, second);
}

#[test]
fn partial_trailing_record_is_dropped() {
    let records = decode_fixture("partial_record.tle").unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name(), "TIANGONG 1");
}

#[test]
fn empty_file() {
    let err = decode_fixture("empty.tle").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyInput);
    assert_eq!(err.offset(), 0);
}

#[test]
fn negative_satellite_number() {
    let err = decode_fixture("invalid_negative_satellite_number.tle").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert_eq!(err.message(), "Negative satellite number");
    assert_eq!(err.offset(), 26);
}

#[test]
fn negative_launch_number() {
    let err = decode_fixture("invalid_negative_launch_number.tle").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert_eq!(err.message(), "Non-positive launch number");
    assert_eq!(err.offset(), 35);
}

#[test]
fn zero_launch_number_in_second_record() {
    // offsets are relative to the failing record, not the file
    let err = decode_fixture("invalid_zero_launch_number.tle").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert_eq!(err.message(), "Non-positive launch number");
    assert_eq!(err.offset(), 35);
}

#[test]
fn negative_launch_piece() {
    let err = decode_fixture("invalid_negative_launch_piece.tle").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    assert_eq!(err.message(), "Non-positive launch piece");
    assert_eq!(err.offset(), 38);
}

#[test]
fn default_reader_uses_clock_year() {
    // Launch year 98 is in the 1900s for any current year before 2098.
    let lines = read_lines(fixture_path("valid01.tle")).unwrap();
    let records = decode_catalog(&lines).unwrap();

    assert_eq!(records[0].launch_year(), 1998);
}

#[test]
fn missing_fixture() {
    let result = read_lines(fixture_path("does_not_exist.tle"));

    assert!(matches!(result, Err(SourceError::NotFound(_))));
}

#[cfg(feature = "serde")]
#[test]
fn serialize_record() {
    let records = decode_fixture("valid01.tle").unwrap();
    let value = serde_json::to_value(&records[0]).unwrap();

    assert_eq!(value["name"], "ISS (ZARYA)");
    assert_eq!(value["catalogNumber"], 25544);
    assert_eq!(value["launchYear"], 1998);
    assert_eq!(value["epoch"]["year"], 2017);
    assert_eq!(value["epoch"]["day"], 126);
    assert_eq!(value["revolutionsAtEpoch"], 55286);
}
