//! Analysis configuration file
//!
//! Groups thresholds and every algorithm's parameters so one TOML file can
//! drive a whole run. Missing sections and keys fall back to defaults.
//!
//! ```toml
//! [thresholds]
//! healthy = 0.6
//! alert = 0.3
//! critical = 0.1
//!
//! [generator]
//! degradation_rate = 0.02
//!
//! [detection]
//! alert_threshold = 0.15
//!
//! [export]
//! download = true
//! filename = "claim_42.json"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use fratlas_core::io::read_toml;
use fratlas_core::{Result, Thresholds};

use crate::change::ChangeDetectionParams;
use crate::export::ExportOptions;
use crate::timeseries::GeneratorParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub thresholds: Thresholds,
    pub generator: GeneratorParams,
    pub detection: ChangeDetectionParams,
    pub export: ExportOptions,
}

impl AnalysisConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = read_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        self.generator.validate()?;
        self.detection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fratlas_core::Error;
    use std::io::Write;

    fn write(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let f = write("[generator]\ndegradation_rate = 0.05\n\n[export]\ndownload = true\n");
        let cfg = AnalysisConfig::load(f.path()).unwrap();
        assert_eq!(cfg.generator.degradation_rate, 0.05);
        assert_eq!(cfg.generator.step_days, 10);
        assert!(cfg.export.download);
        assert_eq!(cfg.export.filename, "ndvi_analysis.json");
        assert_eq!(cfg.thresholds, Thresholds::default());
        assert_eq!(cfg.detection.alert_threshold, 0.15);
    }

    #[test]
    fn misordered_thresholds_rejected() {
        let f = write("[thresholds]\nhealthy = 0.2\nalert = 0.3\n");
        let err = AnalysisConfig::load(f.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { .. }));
    }

    #[test]
    fn negative_alert_threshold_rejected() {
        let f = write("[detection]\nalert_threshold = -0.1\n");
        assert!(AnalysisConfig::load(f.path()).is_err());
    }

    #[test]
    fn empty_file_is_default() {
        let f = write("");
        assert_eq!(AnalysisConfig::load(f.path()).unwrap(), AnalysisConfig::default());
    }
}
