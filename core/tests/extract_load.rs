//! Extractor retry policy, loader commit behavior, and a full pipeline run
//! against a scratch data directory.

mod common;

use std::path::Path;
use supplychain_core::{
    analytics::{calculate, ExecutiveSummary},
    config::{DatasetPaths, PipelineConfig},
    error::{PipelineError, PipelineResult},
    extract::Extractor,
    generator::{DatasetGenerator, SyntheticGenerator},
    load::{Loader, ANALYTICS_FILE, EXECUTIVE_SUMMARY_FILE},
    model::SupplierAnalysis,
    pipeline::Pipeline,
    table::{read_table, Table},
    transform::transform,
};

/// Wraps a real generator and counts invocations.
struct CountingGenerator {
    inner: SyntheticGenerator,
    calls: usize,
}

impl DatasetGenerator for CountingGenerator {
    fn generate(&mut self, paths: &DatasetPaths) -> PipelineResult<()> {
        self.calls += 1;
        self.inner.generate(paths)
    }
}

/// A generator that claims success but writes nothing.
struct NoopGenerator {
    calls: usize,
}

impl DatasetGenerator for NoopGenerator {
    fn generate(&mut self, _paths: &DatasetPaths) -> PipelineResult<()> {
        self.calls += 1;
        Ok(())
    }
}

fn test_config(dir: &Path) -> PipelineConfig {
    let _ = env_logger::builder().is_test(true).try_init();
    PipelineConfig::default_test(dir)
}

#[test]
fn missing_sources_trigger_exactly_one_generation() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let extractor = Extractor::new(config.paths());

    assert!(extractor.extract().unwrap_err().is_missing_input());

    let mut generator = CountingGenerator {
        inner: SyntheticGenerator::from_config(&config),
        calls: 0,
    };
    let tables = extractor.extract_or_generate(&mut generator).unwrap();
    assert_eq!(generator.calls, 1);
    assert_eq!(tables.suppliers.len(), config.generator.supplier_count);
    assert_eq!(tables.logistics.len(), config.generator.shipment_count);

    // Sources now exist: a second call reads them without regenerating.
    let again = extractor.extract_or_generate(&mut generator).unwrap();
    assert_eq!(generator.calls, 1);
    assert_eq!(tables, again);
}

#[test]
fn second_missing_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let extractor = Extractor::new(test_config(dir.path()).paths());

    let mut generator = NoopGenerator { calls: 0 };
    let err = extractor.extract_or_generate(&mut generator).unwrap_err();

    assert_eq!(generator.calls, 1);
    assert!(matches!(err, PipelineError::MissingInput { dataset: "suppliers", .. }));
}

#[test]
fn one_missing_file_is_enough_to_regenerate() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let paths = config.paths();
    SyntheticGenerator::from_config(&config).generate(&paths).unwrap();
    std::fs::remove_file(&paths.logistics).unwrap();

    let mut generator = CountingGenerator {
        inner: SyntheticGenerator::from_config(&config),
        calls: 0,
    };
    let tables = Extractor::new(paths)
        .extract_or_generate(&mut generator)
        .unwrap();
    assert_eq!(generator.calls, 1);
    assert_eq!(tables.logistics.len(), config.generator.shipment_count);
}

#[test]
fn loader_writes_every_output_and_leaves_no_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let raw = SyntheticGenerator::from_config(&config)
        .generate_tables()
        .unwrap();
    let tables = transform(&raw).unwrap();
    let report = calculate(&tables).report();

    let summary = Loader::new(config.paths())
        .load(&tables, &report, &ExecutiveSummary::default())
        .unwrap();

    let processed = config.paths().processed_dir;
    let mut names: Vec<String> = std::fs::read_dir(&processed)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "demand_monthly_processed.csv",
            "demand_processed.csv",
            EXECUTIVE_SUMMARY_FILE,
            "inventory_processed.csv",
            "logistics_processed.csv",
            "suppliers_processed.csv",
            ANALYTICS_FILE,
        ]
    );
    assert_eq!(summary.files.len(), 7);

    let suppliers: Vec<SupplierAnalysis> =
        read_table(&processed.join("suppliers_processed.csv")).unwrap();
    assert_eq!(suppliers, tables.suppliers);
}

fn processed_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn blocked_staging_removes_temp_files_and_keeps_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut generator = SyntheticGenerator::from_config(&config);
    let first = Pipeline::new(&config).run(&mut generator).unwrap();

    let processed = config.paths().processed_dir;
    let analytics_path = processed.join(ANALYTICS_FILE);
    let before = std::fs::read_to_string(&analytics_path).unwrap();

    // A directory where the fifth temp file belongs makes staging fail.
    let blocker = processed.join("demand_monthly_processed.csv.tmp");
    std::fs::create_dir(&blocker).unwrap();

    let raw = SyntheticGenerator::from_config(&config.clone().with_seed(99))
        .generate_tables()
        .unwrap();
    let tables = transform(&raw).unwrap();
    let result = Loader::new(config.paths()).load(
        &tables,
        &calculate(&tables).report(),
        &ExecutiveSummary::default(),
    );
    assert!(result.is_err());

    let stray: Vec<String> = processed_entries(&processed)
        .into_iter()
        .filter(|n| n.ends_with(".tmp") && n != "demand_monthly_processed.csv.tmp")
        .collect();
    assert!(stray.is_empty(), "leftover temp files: {stray:?}");
    assert_eq!(std::fs::read_to_string(&analytics_path).unwrap(), before);
    assert_eq!(first.load.files.len(), 7);
}

#[test]
fn failed_commit_removes_remaining_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let paths = config.paths();
    std::fs::create_dir_all(&paths.processed_dir).unwrap();

    // A non-empty directory at the fifth target makes its rename fail.
    let blocked = paths.processed_dir.join("demand_monthly_processed.csv");
    std::fs::create_dir(&blocked).unwrap();
    std::fs::write(blocked.join("keep"), "x").unwrap();

    let raw = SyntheticGenerator::from_config(&config)
        .generate_tables()
        .unwrap();
    let tables = transform(&raw).unwrap();
    let err = Loader::new(paths.clone())
        .load(&tables, &calculate(&tables).report(), &ExecutiveSummary::default())
        .unwrap_err();
    assert!(matches!(err, PipelineError::Io(_)), "got {err}");

    let names = processed_entries(&paths.processed_dir);
    assert!(names.iter().all(|n| !n.ends_with(".tmp")), "leftover temp files: {names:?}");
    assert!(names.contains(&"suppliers_processed.csv".to_string()));
    assert!(!names.contains(&ANALYTICS_FILE.to_string()));
}

#[test]
fn loader_overwrites_previous_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let paths = config.paths();
    std::fs::create_dir_all(&paths.processed_dir).unwrap();
    std::fs::write(paths.processed_file(ANALYTICS_FILE), "stale").unwrap();

    let tables = transform(&common::small_raw_tables()).unwrap();
    let report = calculate(&tables).report();
    Loader::new(paths.clone())
        .load(&tables, &report, &ExecutiveSummary::default())
        .unwrap();

    let written = std::fs::read_to_string(paths.processed_file(ANALYTICS_FILE)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["total_revenue"], "$1,721.00");
    assert_eq!(value["high_risk_suppliers"], 1);

    // Keys keep declaration order in the written document.
    let first_key = written.find("\"total_inventory_value\"").unwrap();
    let last_key = written.find("\"roi_timeline\"").unwrap();
    assert!(first_key < last_key);
}

#[test]
fn processed_header_appends_derived_columns() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let tables = transform(&common::small_raw_tables()).unwrap();
    let report = calculate(&tables).report();
    Loader::new(config.paths())
        .load(&tables, &report, &ExecutiveSummary::default())
        .unwrap();

    let csv = std::fs::read_to_string(config.paths().processed_file("suppliers_processed.csv"))
        .unwrap();
    let header = csv.lines().next().unwrap();
    assert_eq!(header, SupplierAnalysis::COLUMNS.join(","));
    assert!(header.ends_with("overall_score,risk_category"));
    assert!(csv.contains(",High"));
}

#[test]
fn pipeline_runs_end_to_end_from_an_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let mut generator = CountingGenerator {
        inner: SyntheticGenerator::from_config(&config),
        calls: 0,
    };
    let report = Pipeline::new(&config).run(&mut generator).unwrap();

    assert_eq!(generator.calls, 1);
    assert_eq!(report.load.files.len(), 7);
    assert!(report.metrics.total_inventory_value > 0.0);
    assert!(report.metrics.total_revenue > 0.0);
    assert!(!report.run_id.is_empty());
    for file in &report.load.files {
        assert!(file.exists(), "{} missing", file.display());
    }
}

#[test]
fn failed_transform_leaves_previous_outputs_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let mut generator = SyntheticGenerator::from_config(&config);
    Pipeline::new(&config).run(&mut generator).unwrap();

    let analytics_path = config.paths().processed_file(ANALYTICS_FILE);
    let before = std::fs::read_to_string(&analytics_path).unwrap();

    // Corrupt one shipment so the transformer rejects it.
    let logistics_path = config.paths().logistics;
    let csv = std::fs::read_to_string(&logistics_path).unwrap();
    let mut lines: Vec<String> = csv.lines().map(String::from).collect();
    let mut fields: Vec<String> = lines[1].split(',').map(String::from).collect();
    fields[4] = "0".into();
    lines[1] = fields.join(",");
    std::fs::write(&logistics_path, lines.join("\n") + "\n").unwrap();

    let err = Pipeline::new(&config).run(&mut generator).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidInput { table: "logistics", .. }));
    assert_eq!(std::fs::read_to_string(&analytics_path).unwrap(), before);
}
