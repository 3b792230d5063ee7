//! Pipeline configuration.
//!
//! RULE: No component resolves paths relative to the working directory
//! on its own. Everything it touches on disk comes from a PipelineConfig
//! (or the DatasetPaths derived from it) passed in at construction.

use crate::error::{PipelineError, PipelineResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub data_dir: PathBuf,
    pub seed: u64,
    pub generator: GeneratorConfig,
}

/// Sizes and date ranges for the synthetic datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub supplier_count: usize,
    pub product_count: usize,
    /// First day of the demand history (inclusive).
    pub demand_start: NaiveDate,
    /// Last day of the demand history (inclusive).
    pub demand_end: NaiveDate,
    /// Inventory snapshots cover the trailing N days of the demand range.
    pub inventory_days: usize,
    pub shipment_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            supplier_count: 200,
            product_count: 100,
            demand_start: ymd(2023, 1, 1),
            demand_end: ymd(2024, 12, 31),
            inventory_days: 120,
            shipment_count: 2000,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed: DEFAULT_SEED,
            generator: GeneratorConfig::default(),
        }
    }
}

impl PipelineConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load from a JSON file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", path.display()))?;
        let config: PipelineConfig = serde_json::from_str(&content)?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Small datasets for use in tests.
    pub fn default_test(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            seed: 1234,
            generator: GeneratorConfig {
                supplier_count: 20,
                product_count: 5,
                demand_start: ymd(2024, 1, 1),
                demand_end: ymd(2024, 3, 31),
                inventory_days: 10,
                shipment_count: 50,
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths::from_data_dir(&self.data_dir)
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> PipelineResult<()> {
        let counts = [
            ("supplier_count", self.supplier_count),
            ("product_count", self.product_count),
            ("inventory_days", self.inventory_days),
            ("shipment_count", self.shipment_count),
        ];
        for (name, value) in counts {
            if value == 0 {
                return Err(PipelineError::invalid("config", name, "must be greater than zero"));
            }
        }
        if self.demand_end < self.demand_start {
            return Err(PipelineError::invalid(
                "config",
                "demand_end",
                format!("{} is before demand_start {}", self.demand_end, self.demand_start),
            ));
        }
        Ok(())
    }

    /// Every day of the demand history, in order.
    pub fn demand_dates(&self) -> Vec<NaiveDate> {
        self.demand_start
            .iter_days()
            .take_while(|d| *d <= self.demand_end)
            .collect()
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static calendar date")
}

/// Resolved on-disk locations for every raw and processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub suppliers: PathBuf,
    pub inventory: PathBuf,
    pub demand: PathBuf,
    pub logistics: PathBuf,
    pub processed_dir: PathBuf,
}

impl DatasetPaths {
    pub fn from_data_dir(data_dir: &Path) -> Self {
        let raw = data_dir.join("raw");
        Self {
            suppliers: raw.join("suppliers").join("suppliers.csv"),
            inventory: raw.join("inventory").join("inventory.csv"),
            demand: raw.join("demand").join("demand.csv"),
            logistics: raw.join("logistics").join("logistics.csv"),
            processed_dir: data_dir.join("processed"),
        }
    }

    /// The four raw inputs keyed by dataset name.
    pub fn raw_files(&self) -> [(&'static str, &Path); 4] {
        [
            ("suppliers", self.suppliers.as_path()),
            ("inventory", self.inventory.as_path()),
            ("demand", self.demand.as_path()),
            ("logistics", self.logistics.as_path()),
        ]
    }

    pub fn processed_file(&self, name: &str) -> PathBuf {
        self.processed_dir.join(name)
    }

    /// Create every raw dataset directory and the processed directory.
    pub fn ensure_dirs(&self) -> PipelineResult<()> {
        for (_, file) in self.raw_files() {
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::create_dir_all(&self.processed_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_raw_and_processed_layout() {
        let paths = DatasetPaths::from_data_dir(Path::new("/tmp/sc"));
        assert_eq!(paths.demand, PathBuf::from("/tmp/sc/raw/demand/demand.csv"));
        assert_eq!(
            paths.processed_file("executive_summary.json"),
            PathBuf::from("/tmp/sc/processed/executive_summary.json")
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{ "seed": 7, "generator": { "shipment_count": 10 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.generator.shipment_count, 10);
        assert_eq!(config.generator.supplier_count, 200);
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn default_demand_range_spans_two_years() {
        let dates = GeneratorConfig::default().demand_dates();
        assert_eq!(dates.len(), 731);
    }

    #[test]
    fn zero_counts_are_rejected() {
        let mut gen = GeneratorConfig::default();
        gen.shipment_count = 0;
        let err = gen.validate().unwrap_err();
        assert!(err.to_string().contains("shipment_count"));
    }
}
