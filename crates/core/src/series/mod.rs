//! Time-series data structures: samples, series and change events

mod classification;
mod date;
mod event;
mod sample;
mod timeseries;

pub use classification::Classification;
pub use date::{days_between, parse_date, parse_date_range};
pub use event::{ChangeEvent, ChangeType, Severity};
pub use sample::{Sample, CONFIDENCE_MAX, CONFIDENCE_MIN, INDEX_MAX, INDEX_MIN};
pub use timeseries::TimeSeries;
