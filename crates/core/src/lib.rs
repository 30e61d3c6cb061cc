//! # FRA Atlas Core
//!
//! Core types, thresholds and I/O for FRA Atlas vegetation analysis.
//!
//! This crate provides:
//! - `Sample` / `TimeSeries`: dated vegetation-index measurements
//! - `ChangeEvent`: a detected degradation event
//! - `Classification` and `Thresholds`: discrete health categories
//! - Algorithm traits for consistent API
//! - JSON / TOML helpers

pub mod error;
pub mod io;
pub mod series;
pub mod thresholds;

pub use error::{Error, Result};
pub use series::{ChangeEvent, ChangeType, Classification, Sample, Severity, TimeSeries};
pub use thresholds::Thresholds;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::series::{
        ChangeEvent, ChangeType, Classification, Sample, Severity, TimeSeries,
    };
    pub use crate::thresholds::Thresholds;
    pub use crate::Algorithm;
}

/// Core trait for all analysis algorithms.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
