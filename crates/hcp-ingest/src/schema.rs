//! Conversion of source tables into typed provider records.

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{info, warn};

use hcp_common::{any_to_f64, cell_string, find_column, normalize_header};
use hcp_model::columns::{NPI_ID, RX_VALUE, SOURCE_COLUMNS, SPECIALTY, STATE_CODE, WRITING_BEHAVIOR};
use hcp_model::{HcpRecord, PipelineOptions, SchemaError, UnknownBehaviorPolicy, WritingBehavior};

use crate::error::Result;

/// Returns the required source columns absent from `headers`, in schema order.
pub fn missing_columns(headers: &[String]) -> Vec<&'static str> {
    let present: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    SOURCE_COLUMNS
        .into_iter()
        .filter(|required| !present.iter().any(|h| h == required))
        .collect()
}

fn required_column<'a>(df: &'a DataFrame, name: &str) -> std::result::Result<&'a Column, SchemaError> {
    find_column(df, name).ok_or_else(|| SchemaError::MissingColumn {
        column: name.to_string(),
    })
}

fn rx_value_at(column: &Column, idx: usize, row: usize) -> std::result::Result<f64, SchemaError> {
    let raw = column.get(idx).unwrap_or(AnyValue::Null);
    let text = cell_string(column, idx);
    if text.is_empty() {
        return Err(SchemaError::MissingValue {
            column: RX_VALUE.to_string(),
            row,
        });
    }
    let value = match any_to_f64(raw) {
        Some(value) if value.is_finite() => value,
        _ => {
            return Err(SchemaError::InvalidNumber {
                column: RX_VALUE.to_string(),
                row,
                value: text,
            });
        }
    };
    if value < 0.0 {
        return Err(SchemaError::NegativeValue {
            column: RX_VALUE.to_string(),
            row,
            value,
        });
    }
    // "-0" passes the sign check; store it as 0.0.
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Converts a provider table into records, validating the schema.
///
/// Column headers are matched after normalization; extra columns are ignored.
/// `writing_behavior` values outside High/Medium/Low are handled according to
/// [`PipelineOptions::unknown_behavior`].
pub fn records_from_frame(df: &DataFrame, options: &PipelineOptions) -> Result<Vec<HcpRecord>> {
    let npi = required_column(df, NPI_ID)?;
    let specialty = required_column(df, SPECIALTY)?;
    let rx_value = required_column(df, RX_VALUE)?;
    let state = required_column(df, STATE_CODE)?;
    let behavior = required_column(df, WRITING_BEHAVIOR)?;

    let mut records = Vec::with_capacity(df.height());
    let mut excluded = 0usize;
    for idx in 0..df.height() {
        let row = idx + 1;
        let npi_id = cell_string(npi, idx);
        if npi_id.is_empty() {
            return Err(SchemaError::MissingValue {
                column: NPI_ID.to_string(),
                row,
            }
            .into());
        }
        let rx = rx_value_at(rx_value, idx, row)?;
        let raw_behavior = cell_string(behavior, idx);
        let writing_behavior = match raw_behavior.parse::<WritingBehavior>() {
            Ok(parsed) => parsed,
            Err(_) => match options.unknown_behavior {
                UnknownBehaviorPolicy::Reject => {
                    return Err(SchemaError::UnknownBehavior {
                        row,
                        value: raw_behavior,
                    }
                    .into());
                }
                UnknownBehaviorPolicy::TreatAsLow => {
                    warn!(row, value = %raw_behavior, "unknown writing_behavior scored as Low");
                    WritingBehavior::Low
                }
                UnknownBehaviorPolicy::Exclude => {
                    warn!(row, value = %raw_behavior, "unknown writing_behavior, row excluded");
                    excluded += 1;
                    continue;
                }
            },
        };
        records.push(HcpRecord {
            npi_id,
            specialty: cell_string(specialty, idx),
            rx_value: rx,
            state_code: cell_string(state, idx),
            writing_behavior,
        });
    }

    info!(records = records.len(), excluded, "validated provider records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn frame(rows: &[(&str, &str, &str, &str, &str)]) -> DataFrame {
        let mut columns: [Vec<String>; 5] = Default::default();
        for row in rows {
            columns[0].push(row.0.to_string());
            columns[1].push(row.1.to_string());
            columns[2].push(row.2.to_string());
            columns[3].push(row.3.to_string());
            columns[4].push(row.4.to_string());
        }
        let [npi, specialty, rx, state, behavior] = columns;
        DataFrame::new(vec![
            Series::new(NPI_ID.into(), npi).into_column(),
            Series::new(SPECIALTY.into(), specialty).into_column(),
            Series::new(RX_VALUE.into(), rx).into_column(),
            Series::new(STATE_CODE.into(), state).into_column(),
            Series::new(WRITING_BEHAVIOR.into(), behavior).into_column(),
        ])
        .unwrap()
    }

    #[test]
    fn converts_valid_rows() {
        let df = frame(&[
            ("1000000001", "Oncology", "1200", "CA", "High"),
            ("1000000002", "Surgery", "87.5", "NY", " low "),
        ]);
        let records = records_from_frame(&df, &PipelineOptions::default()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].npi_id, "1000000001");
        assert_eq!(records[0].rx_value, 1200.0);
        assert_eq!(records[1].writing_behavior, WritingBehavior::Low);
        assert_eq!(records[1].rx_value, 87.5);
    }

    #[test]
    fn accepts_numeric_columns() {
        let df = DataFrame::new(vec![
            Series::new(NPI_ID.into(), vec![1000000001i64]).into_column(),
            Series::new(SPECIALTY.into(), vec!["Neurology"]).into_column(),
            Series::new(RX_VALUE.into(), vec![4200i64]).into_column(),
            Series::new(STATE_CODE.into(), vec!["OH"]).into_column(),
            Series::new(WRITING_BEHAVIOR.into(), vec!["Medium"]).into_column(),
        ])
        .unwrap();
        let records = records_from_frame(&df, &PipelineOptions::default()).unwrap();
        assert_eq!(records[0].npi_id, "1000000001");
        assert_eq!(records[0].rx_value, 4200.0);
    }

    #[test]
    fn rejects_unknown_behavior_by_default() {
        let df = frame(&[
            ("1", "Oncology", "10", "CA", "High"),
            ("2", "Oncology", "10", "CA", "Sometimes"),
        ]);
        let err = records_from_frame(&df, &PipelineOptions::default()).unwrap_err();
        assert_eq!(
            err.as_schema(),
            Some(&SchemaError::UnknownBehavior {
                row: 2,
                value: "Sometimes".to_string()
            })
        );
    }

    #[test]
    fn unknown_behavior_policies() {
        let df = frame(&[
            ("1", "Oncology", "10", "CA", "High"),
            ("2", "Oncology", "10", "CA", "Sometimes"),
        ]);
        let as_low = PipelineOptions::new().with_unknown_behavior(UnknownBehaviorPolicy::TreatAsLow);
        let records = records_from_frame(&df, &as_low).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].writing_behavior, WritingBehavior::Low);

        let exclude = PipelineOptions::new().with_unknown_behavior(UnknownBehaviorPolicy::Exclude);
        let records = records_from_frame(&df, &exclude).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].npi_id, "1");
    }

    #[test]
    fn reports_invalid_rx_values() {
        let df = frame(&[("1", "Oncology", "lots", "CA", "High")]);
        let err = records_from_frame(&df, &PipelineOptions::default()).unwrap_err();
        assert!(matches!(
            err.as_schema(),
            Some(SchemaError::InvalidNumber { row: 1, .. })
        ));

        let df = frame(&[("1", "Oncology", "-5", "CA", "High")]);
        let err = records_from_frame(&df, &PipelineOptions::default()).unwrap_err();
        assert!(matches!(
            err.as_schema(),
            Some(SchemaError::NegativeValue { row: 1, .. })
        ));

        let df = frame(&[("1", "Oncology", "", "CA", "High")]);
        let err = records_from_frame(&df, &PipelineOptions::default()).unwrap_err();
        assert!(matches!(
            err.as_schema(),
            Some(SchemaError::MissingValue { row: 1, .. })
        ));
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let df = frame(&[("1", "Oncology", "-0", "CA", "Low"), ("2", "Oncology", "-0.0", "CA", "Low")]);
        let records = records_from_frame(&df, &PipelineOptions::default()).unwrap();
        for record in &records {
            assert_eq!(record.rx_value, 0.0);
            assert!(record.rx_value.is_sign_positive());
        }
    }

    #[test]
    fn reports_missing_column() {
        let df = DataFrame::new(vec![
            Series::new(NPI_ID.into(), vec!["1"]).into_column(),
        ])
        .unwrap();
        let err = records_from_frame(&df, &PipelineOptions::default()).unwrap_err();
        assert_eq!(err.as_schema().map(SchemaError::column), Some(SPECIALTY));
    }

    #[test]
    fn empty_frame_yields_no_records() {
        let df = frame(&[]);
        let records = records_from_frame(&df, &PipelineOptions::default()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_columns_in_schema_order() {
        let headers = vec!["NPI Id".to_string(), " state_code ".to_string()];
        assert_eq!(
            missing_columns(&headers),
            vec![SPECIALTY, RX_VALUE, WRITING_BEHAVIOR]
        );
    }
}
