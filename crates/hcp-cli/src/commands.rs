use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info_span;

use hcp_ingest::{DataSource, SPECIALTIES, STATE_CODES, generate_hcp_data};
use hcp_model::{HcpRecord, PipelineOptions, SyntheticOptions};
use hcp_report::{ExportFormat, export_affinity, export_ranked, export_source};
use hcp_transform::{FilterOptions, IN_PERSON_SPECIALTIES};

use crate::cli::{GenerateArgs, RankArgs, SourceArgs};
use crate::summary::{apply_table_style, header_cell};
use hcp_cli::pipeline::execute;
use hcp_cli::types::{ExportSummary, RankResult};

pub fn run_specialties() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Specialty"), header_cell("Channel rule")]);
    apply_table_style(&mut table);
    for specialty in SPECIALTIES {
        let rule = if IN_PERSON_SPECIALTIES.contains(&specialty) {
            "always In-person"
        } else {
            "In-person when High, else Email"
        };
        table.add_row(vec![specialty, rule]);
    }
    println!("{table}");

    let mut states = Table::new();
    states.set_header(vec![header_cell("State codes")]);
    apply_table_style(&mut states);
    states.add_row(vec![STATE_CODES.join(", ")]);
    println!("{states}");
    Ok(())
}

pub fn run_rank(args: &RankArgs) -> Result<RankResult> {
    let source = data_source(&args.source);
    let options = PipelineOptions::new().with_unknown_behavior(args.source.unknown_behavior.into());
    let filter = filter_options(args);

    let mut result = execute(&source, &options, &filter)?;

    let format = args.format.map(ExportFormat::from);
    if let Some(path) = &args.export {
        let _span = info_span!("export", table = "ranked").entered();
        export_ranked(path, &result.view, format)
            .with_context(|| format!("export ranked table to {}", path.display()))?;
        result.exports.push(ExportSummary {
            table: "ranked",
            path: path.clone(),
            rows: result.view.len(),
        });
    }
    if let Some(path) = &args.export_affinity {
        let _span = info_span!("export", table = "affinity").entered();
        export_affinity(path, &result.view_affinity, format)
            .with_context(|| format!("export affinity table to {}", path.display()))?;
        result.exports.push(ExportSummary {
            table: "affinity",
            path: path.clone(),
            rows: result.view_affinity.len(),
        });
    }
    Ok(result)
}

pub fn run_generate(args: &GenerateArgs) -> Result<ExportSummary> {
    let options = SyntheticOptions::new(args.seed, args.count);
    let records = generate_hcp_data(&options).context("generate synthetic providers")?;
    write_source(&args.output, &records, args.format.map(ExportFormat::from))?;
    Ok(ExportSummary {
        table: "source",
        path: args.output.clone(),
        rows: records.len(),
    })
}

fn write_source(
    path: &Path,
    records: &[HcpRecord],
    format: Option<ExportFormat>,
) -> Result<()> {
    let _span = info_span!("export", table = "source").entered();
    export_source(path, records, format)
        .with_context(|| format!("write synthetic table to {}", path.display()))
}

fn data_source(args: &SourceArgs) -> DataSource {
    match &args.input {
        Some(path) => DataSource::Csv(path.clone()),
        None => DataSource::Synthetic(SyntheticOptions::new(args.seed, args.count)),
    }
}

fn filter_options(args: &RankArgs) -> FilterOptions {
    FilterOptions::new()
        .with_states(args.states.iter().map(|s| s.trim().to_string()))
        .with_specialties(args.specialties.iter().map(|s| s.trim().to_string()))
        .with_npi_search(args.search_npi.clone().unwrap_or_default())
        .with_specialty_search(args.search_specialty.clone().unwrap_or_default())
}
