use anyhow::Result;
use std::time::Instant;
use tracing::info;

use crate::aggregate::aggregate_with_stats;
use crate::io::{read_lines, write_domains};
use crate::options::AggregateOptions;
use crate::stats::AggregationStats;

pub fn run(options: &AggregateOptions) -> Result<AggregationStats> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "aggregation",
        min_labels = options.min_labels,
        filter_count = options.filter_labels.len(),
        "Starting subdomain aggregation"
    );

    let subdomains = read_lines(&options.input_path)?;

    let processing_start = Instant::now();
    let stats = aggregate_with_stats(&subdomains, options.min_labels, &options.filter_labels);
    info!(
        action = "aggregate",
        component = "aggregation",
        parent_count = stats.parent_counts.len(),
        retained = stats.retained.len(),
        discarded = stats.lines_discarded,
        duration_ms = processing_start.elapsed().as_millis(),
        "Parent domains counted"
    );

    write_domains(&stats.retained, options.output_path.as_deref())?;

    info!(
        action = "complete",
        component = "aggregation",
        duration_ms = total_start_time.elapsed().as_millis(),
        "Aggregation completed successfully"
    );
    Ok(stats)
}
