//! Time-series synthesis
//!
//! - Random: injectable uniform sources (seeded, entropy, constant)
//! - Generator: degrading, seasonal, noisy index series

mod generator;
mod random;

pub use generator::{
    generate, GenerationWindow, GeneratorParams, SeriesGeneration, SeriesGenerator,
    CONFIDENCE_MAX, CONFIDENCE_MIN, INDEX_MAX, INDEX_MIN,
};
pub use random::{ConstantSource, EntropySource, RandomSource, SeededSource};
