use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hcp_common::format_numeric;
use hcp_model::{ChannelAffinity, Segment};
use hcp_report::{
    Distribution, channel_distribution, segment_distribution, specialty_distribution,
    state_distribution,
};

use hcp_cli::types::{ExportSummary, RankResult};

const BAR_WIDTH: usize = 30;

/// What `print_rank_summary` prints besides the header.
pub struct SummaryOptions {
    pub limit: usize,
    pub charts: bool,
}

pub fn print_rank_summary(result: &RankResult, options: &SummaryOptions) {
    println!("Source: {}", result.source);
    println!("Providers: {}", result.output.ranked.len());
    if result.is_filtered() {
        println!("Shown after filters: {}", result.view.len());
    }

    if options.charts {
        let distributions = [
            segment_distribution(&result.view),
            channel_distribution(&result.view_affinity),
            specialty_distribution(&result.view),
            state_distribution(&result.view),
        ];
        for distribution in &distributions {
            print_distribution(distribution);
        }
    }

    print_priority_table(result, options.limit);
    print_affinity_table(result, options.limit);
    print_exports(&result.exports);
}

pub fn print_generated(summary: &ExportSummary) {
    println!(
        "Wrote {} synthetic providers to {}",
        summary.rows,
        summary.path.display()
    );
}

fn print_distribution(distribution: &Distribution) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&distribution.title),
        header_cell("Count"),
        header_cell("Share"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let max = distribution.max_count();
    for bucket in &distribution.buckets {
        table.add_row(vec![
            Cell::new(&bucket.label),
            Cell::new(bucket.count),
            dim_cell(format!("{:.1}%", distribution.share(bucket))),
            Cell::new(bar(bucket.count, max, BAR_WIDTH)).fg(Color::Cyan),
        ]);
    }
    println!("{table}");
}

fn print_priority_table(result: &RankResult, limit: usize) {
    if result.view.is_empty() {
        println!("No providers match.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rank"),
        header_cell("NPI Id"),
        header_cell("Specialty"),
        header_cell("State"),
        header_cell("Behavior"),
        header_cell("Rx value"),
        header_cell("Score"),
        header_cell("Segment"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    for row in result.view.iter().take(limit) {
        table.add_row(vec![
            Cell::new(row.priority_rank),
            Cell::new(&row.record.npi_id),
            Cell::new(&row.record.specialty),
            Cell::new(&row.record.state_code),
            Cell::new(row.record.writing_behavior),
            Cell::new(format_numeric(row.record.rx_value)),
            Cell::new(format_numeric(row.score)).add_attribute(Attribute::Bold),
            segment_cell(row.segment),
        ]);
    }
    println!("{table}");
    print_truncation(result.view.len(), limit);
}

fn print_affinity_table(result: &RankResult, limit: usize) {
    if result.view_affinity.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("NPI Id"), header_cell("Channel affinity")]);
    apply_table_style(&mut table);
    for assignment in result.view_affinity.iter().take(limit) {
        table.add_row(vec![
            Cell::new(&assignment.npi_id),
            channel_cell(assignment.channel_affinity),
        ]);
    }
    println!("{table}");
    print_truncation(result.view_affinity.len(), limit);
}

fn print_exports(exports: &[ExportSummary]) {
    for export in exports {
        println!(
            "Exported {} table ({} rows): {}",
            export.table,
            export.rows,
            export.path.display()
        );
    }
}

fn print_truncation(total: usize, limit: usize) {
    if total > limit {
        println!("... {} more rows (use --limit to show more)", total - limit);
    }
}

/// Horizontal bar scaled so `max` fills `width` cells.
pub fn bar(count: usize, max: usize, width: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let cells = (count * width).div_ceil(max).min(width);
    "█".repeat(cells)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn segment_cell(segment: Segment) -> Cell {
    let color = match segment {
        Segment::Top => Color::Green,
        Segment::Middle => Color::Yellow,
        Segment::Bottom => Color::DarkGrey,
    };
    Cell::new(segment.label()).fg(color)
}

fn channel_cell(channel: ChannelAffinity) -> Cell {
    match channel {
        ChannelAffinity::InPerson => Cell::new(channel.label())
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ChannelAffinity::Email => Cell::new(channel.label()),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_scales_to_width() {
        assert_eq!(bar(10, 10, 30).chars().count(), 30);
        assert_eq!(bar(5, 10, 30).chars().count(), 15);
        assert_eq!(bar(1, 100, 30).chars().count(), 1);
        assert_eq!(bar(0, 10, 30), "");
        assert_eq!(bar(0, 0, 30), "");
    }
}
