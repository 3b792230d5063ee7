//! CSV table I/O.
//!
//! RULE: Only table.rs talks to CSV files.
//! Stages call read_table/encode_table; they never build readers directly.

use crate::error::{PipelineError, PipelineResult};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// A row type that maps onto one flat file.
pub trait Table: Serialize + DeserializeOwned {
    /// Dataset name used in logs and error messages.
    const NAME: &'static str;
    /// Column names in field order.
    const COLUMNS: &'static [&'static str];
}

/// Read every row of `path`. A missing file is reported as MissingInput,
/// a missing column as InvalidInput naming that column.
pub fn read_table<T: Table>(path: &Path) -> PipelineResult<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PipelineError::MissingInput {
                dataset: T::NAME,
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers()?.clone();
    if let Some(absent) = T::COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|h| h == **column))
    {
        return Err(PipelineError::invalid(T::NAME, *absent, "required column absent"));
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result?);
    }
    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Serialize rows to CSV bytes. The header is always written, so an
/// empty table still produces a well-formed file.
pub fn encode_table<T: Table>(rows: &[T]) -> PipelineResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| PipelineError::Io(e.into_error()))
}

/// Encode and write rows to `path`, replacing any existing file.
pub fn write_table<T: Table>(path: &Path, rows: &[T]) -> PipelineResult<()> {
    let bytes = encode_table(rows)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} {} rows to {}", rows.len(), T::NAME, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DemandRecord, Supplier};

    #[test]
    fn absent_file_is_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table::<Supplier>(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::MissingInput { dataset: "suppliers", .. }));
    }

    #[test]
    fn absent_column_names_table_and_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suppliers.csv");
        std::fs::write(
            &path,
            "supplier_id,supplier_name,country,category,performance_score,lead_time_days,\
             cost_per_unit,capacity_utilization,quality_rating,financial_stability\n",
        )
        .unwrap();

        match read_table::<Supplier>(&path).unwrap_err() {
            PipelineError::InvalidInput { table, column, .. } => {
                assert_eq!(table, "suppliers");
                assert_eq!(column, "risk_score");
            }
            other => panic!("expected InvalidInput, got {other}"),
        }
    }

    #[test]
    fn flags_accept_words_and_digits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demand.csv");
        std::fs::write(
            &path,
            "date,product_id,product_category,demand_quantity,unit_price,customer_segment,\
             sales_channel,promotion_flag,market_condition\n\
             2024-01-01,PROD_0001,Electronics,100,10.0,SMB,Online,True,Normal\n\
             2024-01-02,PROD_0001,Electronics,90,10.0,SMB,Online,0,Normal\n",
        )
        .unwrap();

        let rows = read_table::<DemandRecord>(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].promotion_flag);
        assert!(!rows[1].promotion_flag);

        let encoded = String::from_utf8(encode_table(&rows).unwrap()).unwrap();
        let first_row = encoded.lines().nth(1).unwrap();
        assert!(first_row.contains(",1,Normal"), "row was {first_row}");
    }

    #[test]
    fn empty_table_still_has_header() {
        let encoded = encode_table::<Supplier>(&[]).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap().trim_end(),
            Supplier::COLUMNS.join(",")
        );
    }
}
