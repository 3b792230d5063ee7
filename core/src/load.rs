//! Loader: persists the transformed tables and both JSON documents.
//!
//! Writes are buffer-then-commit: every output is serialized in memory,
//! written to a sibling `.tmp` file, and only once all temp files exist
//! are they renamed over their destinations. A failure before the commit
//! leaves the previous run's outputs untouched.
//!
//! The commit is atomic per file, not across the set: if a rename fails
//! partway, earlier outputs are already replaced. The remaining temp files
//! are removed either way.

use crate::{
    analytics::{AnalyticsReport, ExecutiveSummary},
    config::DatasetPaths,
    error::PipelineResult,
    model::TransformedTables,
    table::{encode_table, Table},
};
use std::path::PathBuf;

pub const ANALYTICS_FILE: &str = "supply_chain_analytics.json";
pub const EXECUTIVE_SUMMARY_FILE: &str = "executive_summary.json";

/// What the loader wrote, in commit order.
#[derive(Debug, Clone, Default)]
pub struct LoadSummary {
    pub files: Vec<PathBuf>,
}

pub struct Loader {
    paths: DatasetPaths,
}

struct PendingWrite {
    target: PathBuf,
    bytes: Vec<u8>,
}

impl Loader {
    pub fn new(paths: DatasetPaths) -> Self {
        Self { paths }
    }

    /// Output file name for a processed table, e.g. `suppliers_processed.csv`.
    pub fn processed_name<T: Table>() -> String {
        format!("{}_processed.csv", T::NAME)
    }

    pub fn load(
        &self,
        tables: &TransformedTables,
        report: &AnalyticsReport,
        summary: &ExecutiveSummary,
    ) -> PipelineResult<LoadSummary> {
        let pending = vec![
            self.table_write(&tables.suppliers)?,
            self.table_write(&tables.inventory)?,
            self.table_write(&tables.demand)?,
            self.table_write(&tables.logistics)?,
            self.table_write(&tables.demand_monthly)?,
            PendingWrite {
                target: self.paths.processed_file(ANALYTICS_FILE),
                bytes: serde_json::to_vec_pretty(report)?,
            },
            PendingWrite {
                target: self.paths.processed_file(EXECUTIVE_SUMMARY_FILE),
                bytes: serde_json::to_vec_pretty(summary)?,
            },
        ];

        std::fs::create_dir_all(&self.paths.processed_dir)?;
        let staged = stage(&pending)?;
        commit(&staged)?;

        let files: Vec<PathBuf> = pending.into_iter().map(|p| p.target).collect();
        log::info!(
            "load: committed {} files to {}",
            files.len(),
            self.paths.processed_dir.display()
        );
        Ok(LoadSummary { files })
    }

    fn table_write<T: Table>(&self, rows: &[T]) -> PipelineResult<PendingWrite> {
        Ok(PendingWrite {
            target: self.paths.processed_file(&Self::processed_name::<T>()),
            bytes: encode_table(rows)?,
        })
    }
}

/// Write every pending output to `<target>.tmp`. On failure, remove the
/// temp files written so far.
fn stage(pending: &[PendingWrite]) -> PipelineResult<Vec<(PathBuf, PathBuf)>> {
    let mut staged = Vec::with_capacity(pending.len());
    for write in pending {
        let tmp = tmp_path(&write.target);
        if let Err(e) = std::fs::write(&tmp, &write.bytes) {
            for (tmp, _) in &staged {
                let _ = std::fs::remove_file(tmp);
            }
            return Err(e.into());
        }
        log::debug!("load: staged {} ({} bytes)", tmp.display(), write.bytes.len());
        staged.push((tmp, write.target.clone()));
    }
    Ok(staged)
}

/// Rename each temp file over its target. On failure, remove the temp
/// files not yet renamed.
fn commit(staged: &[(PathBuf, PathBuf)]) -> PipelineResult<()> {
    for (done, (tmp, target)) in staged.iter().enumerate() {
        if let Err(e) = std::fs::rename(tmp, target) {
            log::error!("load: commit stopped at {}: {e}", target.display());
            for (tmp, _) in &staged[done..] {
                let _ = std::fs::remove_file(tmp);
            }
            return Err(e.into());
        }
    }
    Ok(())
}

fn tmp_path(target: &std::path::Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    target.with_file_name(name)
}
