//! Analysis export
//!
//! Aggregates a series and its detected changes into an [`AnalysisBundle`],
//! optionally serialized as a downloadable JSON payload.

mod bundle;

pub use bundle::{
    build_bundle, build_bundle_at, export_analysis, AnalysisBundle, DateRange, Download, Export,
    ExportOptions, IndexRange, Metadata, Summary, ANALYSIS_TYPE, BUNDLE_SOURCE, BUNDLE_VERSION,
    DEFAULT_FILENAME,
};
