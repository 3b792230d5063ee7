//! Extractor: reads the four raw datasets.
//!
//! Recovery policy: if any source file is missing, the generator is
//! invoked exactly once and extraction is retried. A second failure
//! propagates; there is no retry loop.

use crate::{
    config::DatasetPaths,
    error::PipelineResult,
    generator::DatasetGenerator,
    model::RawTables,
    table::read_table,
};

pub struct Extractor {
    paths: DatasetPaths,
}

impl Extractor {
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &DatasetPaths {
        &self.paths
    }

    /// Read all four tables. Fails with MissingInput on the first absent file.
    pub fn extract(&self) -> PipelineResult<RawTables> {
        let tables = RawTables {
            suppliers: read_table(&self.paths.suppliers)?,
            inventory: read_table(&self.paths.inventory)?,
            demand: read_table(&self.paths.demand)?,
            logistics: read_table(&self.paths.logistics)?,
        };
        log::info!(
            "extract: {} suppliers, {} inventory, {} demand, {} logistics",
            tables.suppliers.len(),
            tables.inventory.len(),
            tables.demand.len(),
            tables.logistics.len()
        );
        Ok(tables)
    }

    /// Read all four tables, regenerating the sources once if any is missing.
    pub fn extract_or_generate(
        &self,
        generator: &mut dyn DatasetGenerator,
    ) -> PipelineResult<RawTables> {
        match self.extract() {
            Err(e) if e.is_missing_input() => {
                log::warn!("extract: {e}; generating synthetic data and retrying once");
                generator.generate(&self.paths)?;
                self.extract()
            }
            other => other,
        }
    }
}
