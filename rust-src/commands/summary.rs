//! Summary command - print the per-category statistics.

use std::path::Path;

use anyhow::{Context, Result};

use super::input::{read_payload_file, runtime};
use crate::aggregation::{aggregate, CategorySummary};
use crate::api::{load_payload, HttpDataSource};
use crate::visualization::scale::group_thousands;


/// Run the summary command.
pub fn run(api_url: &str, input: Option<&Path>, json: bool) -> Result<()> {
    let payload = match input {
        Some(path) => read_payload_file(path)?,
        None => {
            let source = HttpDataSource::new(api_url);
            runtime()?
                .block_on(load_payload(&source))
                .context("Failed to load chart data")?
        }
    };

    let summary = aggregate(&payload.categories, &payload.records);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("No categories found.");
        return Ok(());
    }

    print_table(&summary, payload.records.len());
    Ok(())
}


fn print_table(summary: &[CategorySummary], total_records: usize) {
    let matched: usize = summary.iter().map(|s| s.count).sum();

    println!("\n{}", "=".repeat(86));
    println!("{:^86}", "Category Summary");
    println!("{}\n", "=".repeat(86));

    println!(
        "{:<20} {:>9} {:>10} {:>10} {:>10} {:>10}  {}",
        "Category", "Records", "Avg", "Min", "Max", "Locations", "Top location"
    );
    println!("{}", "-".repeat(86));

    for item in summary {
        println!(
            "{:<20} {:>9} {:>10} {:>10} {:>10} {:>10}  {} ({})",
            truncate(&item.label, 20),
            format_number(item.count),
            item.average_value,
            item.min_value,
            item.max_value,
            format_number(item.distinct_locations),
            item.top_location_name,
            item.top_location_count
        );
    }

    println!("{}", "-".repeat(86));
    println!(
        "  {} of {} records matched a category",
        format_number(matched),
        format_number(total_records)
    );
}


fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}


/// Format number with thousands separators.
fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}
