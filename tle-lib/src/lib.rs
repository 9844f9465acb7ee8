#![doc = include_str!("../README.md")]

mod error;

pub mod catalog;
pub mod decode;
pub mod fields;
pub mod offset;
pub mod record;
pub mod segment;
pub mod source;

pub use catalog::{decode_catalog, decode_record, Reader};
pub use error::{Error, ErrorKind, Result};
pub use record::{Epoch, OrbitalRecord, RecordFields};
