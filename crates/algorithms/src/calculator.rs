//! Calculator facade over the whole pipeline
//!
//! Owns the thresholds and parameters for one analysis context. Nothing is
//! shared between instances.

use fratlas_core::series::parse_date_range;
use fratlas_core::{ChangeEvent, Classification, Result, Thresholds, TimeSeries};

use crate::analysis::{analyze_series, recommend, Recommendation, TrendReport};
use crate::change::{detect_changes, deforestation_alert, ChangeDetectionParams, DeforestationAlert};
use crate::config::AnalysisConfig;
use crate::export::{build_bundle, export_analysis, AnalysisBundle, Export, ExportOptions};
use crate::imagery::{assess_health, classify_with, compute_index, HealthAssessment};
use crate::timeseries::{GeneratorParams, RandomSource, SeriesGenerator};

#[derive(Debug, Clone, Default)]
pub struct NdviCalculator {
    thresholds: Thresholds,
    generator: GeneratorParams,
    detection: ChangeDetectionParams,
}

impl NdviCalculator {
    /// Calculator with custom thresholds and default parameters.
    ///
    /// Thresholds that are not finite and strictly ordered
    /// `critical < alert < healthy` are `Error::InvalidParameter`.
    pub fn new(thresholds: Thresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self {
            thresholds,
            ..Self::default()
        })
    }

    /// Calculator for a loaded configuration; the whole config is validated.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            thresholds: config.thresholds,
            generator: config.generator.clone(),
            detection: config.detection.clone(),
        })
    }

    pub fn with_generator(mut self, params: GeneratorParams) -> Self {
        self.generator = params;
        self
    }

    pub fn with_detection(mut self, params: ChangeDetectionParams) -> Self {
        self.detection = params;
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn compute_index(&self, nir: f64, red: f64) -> f64 {
        compute_index(nir, red)
    }

    pub fn classify(&self, index: f64) -> Classification {
        classify_with(index, &self.thresholds)
    }

    pub fn color_for(&self, index: f64) -> &'static str {
        fratlas_colormap::color_for(index)
    }

    pub fn assess(&self, index: f64) -> HealthAssessment {
        assess_health(index, &self.thresholds)
    }

    /// Generate a series between two ISO dates at the given monthly
    /// degradation rate; other generator parameters come from `self`.
    pub fn generate<R: RandomSource>(
        &self,
        start: &str,
        end: &str,
        degradation_rate: f64,
        rng: R,
    ) -> Result<TimeSeries> {
        let (start, end) = parse_date_range(start, end)?;
        let params = GeneratorParams {
            degradation_rate,
            ..self.generator.clone()
        };
        SeriesGenerator::new(params).generate(start, end, rng)
    }

    pub fn detect_changes(&self, series: &TimeSeries) -> Result<Vec<ChangeEvent>> {
        self.detection.validate()?;
        detect_changes(series, self.detection.alert_threshold)
    }

    pub fn deforestation_alert(&self, series: &TimeSeries) -> Option<DeforestationAlert> {
        deforestation_alert(series, &self.thresholds)
    }

    pub fn build_bundle(&self, series: &TimeSeries, changes: &[ChangeEvent]) -> Result<AnalysisBundle> {
        build_bundle(series, changes, &self.thresholds)
    }

    pub fn export(
        &self,
        series: &TimeSeries,
        changes: &[ChangeEvent],
        options: &ExportOptions,
    ) -> Result<Export> {
        export_analysis(series, changes, &self.thresholds, options)
    }

    /// Trend report and the recommendation derived from it.
    pub fn analyze(&self, series: &TimeSeries) -> Result<(TrendReport, Recommendation)> {
        let report = analyze_series(series, &self.thresholds)?;
        let recommendation = recommend(&report);
        Ok((report, recommendation))
    }
}
