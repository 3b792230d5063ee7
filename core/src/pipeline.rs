//! The ETL pipeline driver.
//!
//! EXECUTION ORDER (fixed, linear, never reordered):
//!   1. Extract    (regenerates sources once if any is missing)
//!   2. Transform
//!   3. Analytics
//!   4. Load       (only reached when every prior stage succeeded)
//!
//! RULES:
//!   - Stage N completes before stage N+1 starts.
//!   - Each stage consumes the previous stage's output read-only.
//!   - Errors propagate as PipelineError; nothing is caught and printed here.

use crate::{
    analytics::{self, AnalyticsReport, ExecutiveSummary, SupplyChainMetrics},
    config::PipelineConfig,
    error::PipelineResult,
    extract::Extractor,
    generator::DatasetGenerator,
    load::{LoadSummary, Loader},
    transform,
    types::RunId,
};
use uuid::Uuid;

pub struct Pipeline {
    pub run_id: RunId,
    extractor: Extractor,
    loader: Loader,
}

/// Everything a caller needs to summarize a finished run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub run_id: RunId,
    pub metrics: SupplyChainMetrics,
    pub analytics: AnalyticsReport,
    pub load: LoadSummary,
}

impl Pipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        let paths = config.paths();
        Self {
            run_id: Uuid::new_v4().to_string(),
            extractor: Extractor::new(paths.clone()),
            loader: Loader::new(paths),
        }
    }

    pub fn run(&self, generator: &mut dyn DatasetGenerator) -> PipelineResult<PipelineReport> {
        log::info!("pipeline {}: starting", self.run_id);

        let raw = self.extractor.extract_or_generate(generator)?;
        let tables = transform::transform(&raw)?;

        let metrics = analytics::calculate(&tables);
        metrics.log_summary();
        let report = metrics.report();

        let load = self
            .loader
            .load(&tables, &report, &ExecutiveSummary::default())?;

        log::info!("pipeline {}: completed", self.run_id);
        Ok(PipelineReport {
            run_id: self.run_id.clone(),
            metrics,
            analytics: report,
            load,
        })
    }
}
