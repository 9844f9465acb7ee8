//! Decoded satellite orbital elements.
use std::fmt::Display;

use hifitime::Unit;

use crate::fields::{FieldId, Value};

/// Element set reference time as a year and day of year.
///
/// The fractional part of the day is not retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Epoch {
    pub year: i32,
    /// Day of year, 1-based.
    pub day: u32,
}

impl Epoch {
    #[must_use]
    pub fn new(year: i32, day: u32) -> Self {
        Self { year, day }
    }

    /// Midnight UTC of this epoch's day. Days past the end of the year roll over into the
    /// next, and day 0 is the last day of the previous year.
    #[must_use]
    pub fn to_hifitime(&self) -> hifitime::Epoch {
        hifitime::Epoch::from_gregorian_utc_at_midnight(self.year, 1, 1)
            + Unit::Day * (i64::from(self.day) - 1)
    }
}

impl Display for Epoch {
    /// Calendar date, e.g., `2017-05-06`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, month, day, ..) = self.to_hifitime().to_gregorian_utc();
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

/// Unvalidated field values for an [OrbitalRecord].
///
/// Values are held in their decoded representation; converting to an [OrbitalRecord] with
/// [TryFrom] checks every invariant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFields {
    pub name: String,
    pub catalog_number: i64,
    pub classification: String,
    pub launch_year: i32,
    pub launch_number: i64,
    pub launch_piece: i64,
    pub epoch_year: i32,
    pub epoch_day: u32,
    pub mean_motion_dot2: f64,
    pub mean_motion_dot6: f64,
    pub drag_term: f64,
    pub ephemeris_type: i64,
    pub inclination: f64,
    pub right_ascension: f64,
    pub eccentricity: f64,
    pub perigee_argument: f64,
    pub mean_anomaly: f64,
    pub mean_motion: f64,
    pub revolutions_at_epoch: i64,
}

impl RecordFields {
    /// Value of a single field.
    #[must_use]
    pub fn get(&self, id: FieldId) -> Value {
        match id {
            FieldId::Name => Value::Text(self.name.clone()),
            FieldId::CatalogNumber => Value::Integer(self.catalog_number),
            FieldId::Classification => Value::Text(self.classification.clone()),
            FieldId::LaunchYear => Value::Year(self.launch_year),
            FieldId::LaunchNumber => Value::Integer(self.launch_number),
            FieldId::LaunchPiece => Value::Integer(self.launch_piece),
            FieldId::EpochYear => Value::Year(self.epoch_year),
            FieldId::EpochDay => Value::Day(self.epoch_day),
            FieldId::MeanMotionDot2 => Value::Decimal(self.mean_motion_dot2),
            FieldId::MeanMotionDot6 => Value::Decimal(self.mean_motion_dot6),
            FieldId::DragTerm => Value::Decimal(self.drag_term),
            FieldId::EphemerisType => Value::Integer(self.ephemeris_type),
            FieldId::Inclination => Value::Decimal(self.inclination),
            FieldId::RightAscension => Value::Decimal(self.right_ascension),
            FieldId::Eccentricity => Value::Decimal(self.eccentricity),
            FieldId::PerigeeArgument => Value::Decimal(self.perigee_argument),
            FieldId::MeanAnomaly => Value::Decimal(self.mean_anomaly),
            FieldId::MeanMotion => Value::Decimal(self.mean_motion),
            FieldId::RevolutionsAtEpoch => Value::Integer(self.revolutions_at_epoch),
        }
    }

    /// Set a single field.
    ///
    /// # Errors
    /// The rejected value if its variant does not match the field's type.
    pub fn set(&mut self, id: FieldId, value: Value) -> Result<(), Value> {
        match (id, value) {
            (FieldId::Name, Value::Text(v)) => self.name = v,
            (FieldId::CatalogNumber, Value::Integer(v)) => self.catalog_number = v,
            (FieldId::Classification, Value::Text(v)) => self.classification = v,
            (FieldId::LaunchYear, Value::Year(v)) => self.launch_year = v,
            (FieldId::LaunchNumber, Value::Integer(v)) => self.launch_number = v,
            (FieldId::LaunchPiece, Value::Integer(v)) => self.launch_piece = v,
            (FieldId::EpochYear, Value::Year(v)) => self.epoch_year = v,
            (FieldId::EpochDay, Value::Day(v)) => self.epoch_day = v,
            (FieldId::MeanMotionDot2, Value::Decimal(v)) => self.mean_motion_dot2 = v,
            (FieldId::MeanMotionDot6, Value::Decimal(v)) => self.mean_motion_dot6 = v,
            (FieldId::DragTerm, Value::Decimal(v)) => self.drag_term = v,
            (FieldId::EphemerisType, Value::Integer(v)) => self.ephemeris_type = v,
            (FieldId::Inclination, Value::Decimal(v)) => self.inclination = v,
            (FieldId::RightAscension, Value::Decimal(v)) => self.right_ascension = v,
            (FieldId::Eccentricity, Value::Decimal(v)) => self.eccentricity = v,
            (FieldId::PerigeeArgument, Value::Decimal(v)) => self.perigee_argument = v,
            (FieldId::MeanAnomaly, Value::Decimal(v)) => self.mean_anomaly = v,
            (FieldId::MeanMotion, Value::Decimal(v)) => self.mean_motion = v,
            (FieldId::RevolutionsAtEpoch, Value::Integer(v)) => self.revolutions_at_epoch = v,
            (_, value) => return Err(value),
        }
        Ok(())
    }
}

/// A [RecordFields] value that does not satisfy the record invariants.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct InvariantError {
    pub field: FieldId,
    pub message: &'static str,
}

const ALL_FIELDS: [FieldId; 19] = [
    FieldId::Name,
    FieldId::CatalogNumber,
    FieldId::Classification,
    FieldId::LaunchYear,
    FieldId::LaunchNumber,
    FieldId::LaunchPiece,
    FieldId::EpochYear,
    FieldId::EpochDay,
    FieldId::MeanMotionDot2,
    FieldId::MeanMotionDot6,
    FieldId::DragTerm,
    FieldId::EphemerisType,
    FieldId::Inclination,
    FieldId::RightAscension,
    FieldId::Eccentricity,
    FieldId::PerigeeArgument,
    FieldId::MeanAnomaly,
    FieldId::MeanMotion,
    FieldId::RevolutionsAtEpoch,
];

fn narrow<T: TryFrom<i64>>(field: FieldId, v: i64) -> Result<T, InvariantError> {
    T::try_from(v).map_err(|_| InvariantError {
        field,
        message: "Value out of range",
    })
}

/// The orbital elements of a single satellite.
///
/// Records are immutable and can only be constructed from [RecordFields] that satisfy every
/// invariant, e.g., a non-negative catalog number and a launch number of at least 1.
/// Equality compares every field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct OrbitalRecord {
    name: String,
    catalog_number: u32,
    classification: String,
    launch_year: i32,
    launch_number: u32,
    launch_piece: u32,
    epoch: Epoch,
    mean_motion_dot2: f64,
    mean_motion_dot6: f64,
    drag_term: f64,
    ephemeris_type: i32,
    inclination: f64,
    right_ascension: f64,
    eccentricity: f64,
    perigee_argument: f64,
    mean_anomaly: f64,
    mean_motion: f64,
    revolutions_at_epoch: u32,
}

impl TryFrom<RecordFields> for OrbitalRecord {
    type Error = InvariantError;

    fn try_from(fields: RecordFields) -> Result<Self, Self::Error> {
        for id in ALL_FIELDS {
            id.validate(&fields.get(id))
                .map_err(|message| InvariantError { field: id, message })?;
        }

        Ok(OrbitalRecord {
            catalog_number: narrow(FieldId::CatalogNumber, fields.catalog_number)?,
            launch_number: narrow(FieldId::LaunchNumber, fields.launch_number)?,
            launch_piece: narrow(FieldId::LaunchPiece, fields.launch_piece)?,
            ephemeris_type: narrow(FieldId::EphemerisType, fields.ephemeris_type)?,
            revolutions_at_epoch: narrow(
                FieldId::RevolutionsAtEpoch,
                fields.revolutions_at_epoch,
            )?,
            epoch: Epoch::new(fields.epoch_year, fields.epoch_day),
            name: fields.name,
            classification: fields.classification,
            launch_year: fields.launch_year,
            mean_motion_dot2: fields.mean_motion_dot2,
            mean_motion_dot6: fields.mean_motion_dot6,
            drag_term: fields.drag_term,
            inclination: fields.inclination,
            right_ascension: fields.right_ascension,
            eccentricity: fields.eccentricity,
            perigee_argument: fields.perigee_argument,
            mean_anomaly: fields.mean_anomaly,
            mean_motion: fields.mean_motion,
        })
    }
}

impl OrbitalRecord {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// NORAD catalog number.
    #[must_use]
    pub fn catalog_number(&self) -> u32 {
        self.catalog_number
    }

    #[must_use]
    pub fn classification(&self) -> &str {
        &self.classification
    }

    #[must_use]
    pub fn launch_year(&self) -> i32 {
        self.launch_year
    }

    /// Launch number of the year.
    #[must_use]
    pub fn launch_number(&self) -> u32 {
        self.launch_number
    }

    /// Sum of the launch piece letter values, see [crate::decode::launch_piece].
    #[must_use]
    pub fn launch_piece(&self) -> u32 {
        self.launch_piece
    }

    #[must_use]
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// First time derivative of mean motion divided by 2.
    #[must_use]
    pub fn mean_motion_dot2(&self) -> f64 {
        self.mean_motion_dot2
    }

    /// Second time derivative of mean motion divided by 6.
    #[must_use]
    pub fn mean_motion_dot6(&self) -> f64 {
        self.mean_motion_dot6
    }

    /// BSTAR drag term.
    #[must_use]
    pub fn drag_term(&self) -> f64 {
        self.drag_term
    }

    #[must_use]
    pub fn ephemeris_type(&self) -> i32 {
        self.ephemeris_type
    }

    /// Degrees.
    #[must_use]
    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    /// Right ascension of the ascending node in degrees.
    #[must_use]
    pub fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Argument of perigee in degrees.
    #[must_use]
    pub fn perigee_argument(&self) -> f64 {
        self.perigee_argument
    }

    /// Degrees.
    #[must_use]
    pub fn mean_anomaly(&self) -> f64 {
        self.mean_anomaly
    }

    /// Revolutions per day.
    #[must_use]
    pub fn mean_motion(&self) -> f64 {
        self.mean_motion
    }

    #[must_use]
    pub fn revolutions_at_epoch(&self) -> u32 {
        self.revolutions_at_epoch
    }

    /// Field names and formatted values, in a fixed order, for display.
    ///
    /// The launch year is formatted as `yyyy` and the epoch as its calendar date.
    #[must_use]
    pub fn description(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("CatalogNumber", self.catalog_number.to_string()),
            ("Classification", self.classification.clone()),
            ("LaunchYear", format!("{:04}", self.launch_year)),
            ("LaunchNumber", self.launch_number.to_string()),
            ("LaunchPiece", self.launch_piece.to_string()),
            ("Epoch", self.epoch.to_string()),
            ("MeanMotionDot2", self.mean_motion_dot2.to_string()),
            ("MeanMotionDot6", self.mean_motion_dot6.to_string()),
            ("DragTerm", self.drag_term.to_string()),
            ("EphemerisType", self.ephemeris_type.to_string()),
            ("Inclination", self.inclination.to_string()),
            ("RightAscension", self.right_ascension.to_string()),
            ("Eccentricity", self.eccentricity.to_string()),
            ("PerigeeArgument", self.perigee_argument.to_string()),
            ("MeanAnomaly", self.mean_anomaly.to_string()),
            ("MeanMotion", self.mean_motion.to_string()),
            ("RevolutionsAtEpoch", self.revolutions_at_epoch.to_string()),
        ]
    }
}
