//! Row records, normalization and aggregation.
//!
//! This module turns a raw range-query body into the flat
//! `timestamp,instance,value` table that is saved to disk and plotted.

mod aggregate;
mod normalize;
mod row;
mod table;
pub mod time;

pub use aggregate::{aggregate, dedup};
pub use normalize::{normalize, rows_from_response};
pub use row::{from_epoch_seconds, timestamp_format, Row};
pub use table::{read_csv, save_response, write_csv, COLUMNS};
pub use time::TimeSpec;
