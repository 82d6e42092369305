//! Load, run, and filter: the computation behind `hcp rank`.

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use hcp_ingest::DataSource;
use hcp_model::PipelineOptions;
use hcp_transform::{FilterOptions, filter_affinity, filter_ranked, run_pipeline};

use crate::logging::redact_value;
use crate::types::RankResult;

/// Runs the full pipeline on `source` and applies `filter` to the outputs.
///
/// Filtering selects rows only; ranks and tiers come from the full table.
pub fn execute(
    source: &DataSource,
    options: &PipelineOptions,
    filter: &FilterOptions,
) -> Result<RankResult> {
    let span = info_span!("run");
    let _guard = span.enter();

    let records = source
        .load(options)
        .with_context(|| format!("load providers from {source}"))?;
    let output = run_pipeline(records);

    if let Some(leader) = output.ranked.first() {
        debug!(
            npi = redact_value(&leader.record.npi_id),
            score = leader.score,
            "top ranked provider"
        );
    }

    let (view, view_affinity) = if filter.is_empty() {
        (output.ranked.clone(), output.affinity.clone())
    } else {
        let view = filter_ranked(&output.ranked, filter);
        let view_affinity = filter_affinity(&output.ranked, &output.affinity, filter);
        info!(kept = view.len(), total = output.ranked.len(), "filter applied");
        (view, view_affinity)
    };

    Ok(RankResult {
        source: source.to_string(),
        output,
        view,
        view_affinity,
        exports: Vec::new(),
    })
}
