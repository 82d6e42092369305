//! DataFrame construction for pipeline tables.
//!
//! Column names and order follow [`hcp_model::columns`].

use polars::prelude::{Column, DataFrame, NamedFrom, PolarsError, PolarsResult, Series};

use hcp_model::columns::{
    CHANNEL_AFFINITY, NPI_ID, PRIORITY_RANK, RX_VALUE, SCORE, SEGMENT, SPECIALTY, STATE_CODE,
    WRITING_BEHAVIOR,
};
use hcp_model::{ChannelAssignment, HcpRecord, SegmentedHcp};

/// A numeric column that is `i64` when every value is whole, `f64` otherwise.
///
/// Whole values then serialize without a trailing `.0`.
fn numeric_series(name: &str, values: Vec<f64>) -> Series {
    let whole = values
        .iter()
        .all(|v| v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64);
    if whole {
        let ints: Vec<i64> = values.iter().map(|v| *v as i64).collect();
        Series::new(name.into(), ints)
    } else {
        Series::new(name.into(), values)
    }
}

fn record_columns<'a, I>(records: I) -> Vec<Column>
where
    I: IntoIterator<Item = &'a HcpRecord>,
{
    let mut npi: Vec<String> = Vec::new();
    let mut specialty: Vec<String> = Vec::new();
    let mut rx: Vec<f64> = Vec::new();
    let mut state: Vec<String> = Vec::new();
    let mut behavior: Vec<&str> = Vec::new();
    for record in records {
        npi.push(record.npi_id.clone());
        specialty.push(record.specialty.clone());
        rx.push(record.rx_value);
        state.push(record.state_code.clone());
        behavior.push(record.writing_behavior.as_str());
    }
    vec![
        Series::new(NPI_ID.into(), npi).into(),
        Series::new(SPECIALTY.into(), specialty).into(),
        numeric_series(RX_VALUE, rx).into(),
        Series::new(STATE_CODE.into(), state).into(),
        Series::new(WRITING_BEHAVIOR.into(), behavior).into(),
    ]
}

/// The five source columns, as written by the synthetic generator.
pub fn source_frame(records: &[HcpRecord]) -> PolarsResult<DataFrame> {
    DataFrame::new(record_columns(records))
}

/// The ranked and segmented table in rank order.
pub fn ranked_frame(rows: &[SegmentedHcp]) -> PolarsResult<DataFrame> {
    let mut columns = record_columns(rows.iter().map(|row| &row.record));
    let scores: Vec<f64> = rows.iter().map(|row| row.score).collect();
    let ranks = rows
        .iter()
        .map(|row| u64::try_from(row.priority_rank))
        .collect::<Result<Vec<u64>, _>>()
        .map_err(|e| PolarsError::ComputeError(format!("{PRIORITY_RANK}: {e}").into()))?;
    let segments: Vec<&str> = rows.iter().map(|row| row.segment.label()).collect();
    columns.push(numeric_series(SCORE, scores).into());
    columns.push(Series::new(PRIORITY_RANK.into(), ranks).into());
    columns.push(Series::new(SEGMENT.into(), segments).into());
    DataFrame::new(columns)
}

/// The two-column channel table.
pub fn affinity_frame(assignments: &[ChannelAssignment]) -> PolarsResult<DataFrame> {
    let ids: Vec<&str> = assignments.iter().map(|a| a.npi_id.as_str()).collect();
    let channels: Vec<&str> = assignments
        .iter()
        .map(|a| a.channel_affinity.label())
        .collect();
    DataFrame::new(vec![
        Series::new(NPI_ID.into(), ids).into(),
        Series::new(CHANNEL_AFFINITY.into(), channels).into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcp_model::columns::{AFFINITY_COLUMNS, RANKED_COLUMNS, SOURCE_COLUMNS};
    use hcp_model::{ChannelAffinity, Segment, WritingBehavior};
    use polars::prelude::DataType;

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn ranked_frame_layout() {
        let rows = vec![SegmentedHcp {
            record: HcpRecord::new("1000000001", "Oncology", 1200.0, "CA", WritingBehavior::High),
            score: 3600.0,
            priority_rank: 1,
            segment: Segment::Top,
        }];
        let df = ranked_frame(&rows).unwrap();
        assert_eq!(names(&df), RANKED_COLUMNS);
        assert_eq!(df.height(), 1);
        let rank = df.column(PRIORITY_RANK).unwrap().u64().unwrap().get(0);
        assert_eq!(rank, Some(1));
        let score = df.column(SCORE).unwrap().i64().unwrap().get(0);
        assert_eq!(score, Some(3600));
        let segment = df.column(SEGMENT).unwrap().str().unwrap().get(0);
        assert_eq!(segment, Some("Top 20%"));
        let behavior = df.column(WRITING_BEHAVIOR).unwrap().str().unwrap().get(0);
        assert_eq!(behavior, Some("High"));
    }

    #[test]
    fn whole_numbers_become_integer_columns() {
        let whole = numeric_series(RX_VALUE, vec![9281.0, 0.0, -0.0]);
        assert_eq!(whole.dtype(), &DataType::Int64);
        assert_eq!(whole.i64().unwrap().get(0), Some(9281));

        let fractional = numeric_series(SCORE, vec![9281.0, 87.5]);
        assert_eq!(fractional.dtype(), &DataType::Float64);

        let huge = numeric_series(SCORE, vec![1e300]);
        assert_eq!(huge.dtype(), &DataType::Float64);
    }

    #[test]
    fn affinity_and_source_layout() {
        let assignments = vec![ChannelAssignment {
            npi_id: "1000000001".to_string(),
            channel_affinity: ChannelAffinity::InPerson,
        }];
        let df = affinity_frame(&assignments).unwrap();
        assert_eq!(names(&df), AFFINITY_COLUMNS);
        let channel = df.column(CHANNEL_AFFINITY).unwrap().str().unwrap().get(0);
        assert_eq!(channel, Some("In-person"));

        let df = source_frame(&[]).unwrap();
        assert_eq!(names(&df), SOURCE_COLUMNS);
        assert_eq!(df.height(), 0);
    }
}
