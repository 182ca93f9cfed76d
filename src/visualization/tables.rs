use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use crate::analysis::{CollectionStats, StructureReport};
use crate::processing::{JoinReport, SplitReport};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn section(output: &mut String, title: &str) {
    output.push_str(&format!("\n{}\n", title.bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(50)));
}

fn pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<unprintable: {e}>"))
}

fn format_collection_stats(output: &mut String, stats: &CollectionStats) {
    output.push_str(&format!("  Features:       {}\n", stats.feature_count));

    let Some(first_properties) = &stats.first_properties else {
        output.push_str(&format!("  {}\n", "No features in the file.".yellow()));
        return;
    };

    section(output, "First Feature Properties");
    output.push_str(&pretty_json(first_properties));
    output.push('\n');

    section(output, "Geometry Types");
    let mut table = new_table(vec!["Type", "Count"]);
    for (geometry, count) in &stats.geometry_types {
        table.add_row(vec![Cell::new(geometry), Cell::new(count)]);
    }
    output.push_str(&format!("{table}\n"));

    section(output, "Property Keys");
    for key in &stats.property_keys {
        output.push_str(&format!("  - {key}\n"));
    }

    if let Some(first_feature) = &stats.first_feature {
        section(output, "First Feature");
        output.push_str(&pretty_json(first_feature));
        output.push('\n');
    }

    section(output, &format!("Distinct Values of '{}'", stats.value_key));
    if stats.distinct_values.is_empty() {
        output.push_str(&format!(
            "  {}\n",
            format!("No value found for key '{}'.", stats.value_key).yellow()
        ));
    }
    for value in &stats.distinct_values {
        output.push_str(&format!("  - {value}\n"));
    }
}

/// Format a structure report as a string.
pub fn format_structure_report(report: &StructureReport) -> String {
    let mut output = String::new();
    section(&mut output, "GeoJSON Structure");
    output.push_str(&format!("  Root type:      {}\n", report.root_type));

    match &report.collection {
        Some(stats) => format_collection_stats(&mut output, stats),
        None => output.push_str(&format!(
            "  {}\n",
            "This GeoJSON file is not a FeatureCollection.".yellow()
        )),
    }
    output
}

/// Print a structure report.
pub fn print_structure_report(report: &StructureReport) {
    print!("{}", format_structure_report(report));
}

/// Format the outcome of a name split as a string.
pub fn format_split_summary(report: &SplitReport) -> String {
    let mut output = String::new();
    section(&mut output, "Name Split");
    let mut table = new_table(vec!["Metric", "Count"]);
    table.add_row(vec![Cell::new("Features"), Cell::new(report.features)]);
    table.add_row(vec![Cell::new("With genus"), Cell::new(report.with_genus)]);
    table.add_row(vec![Cell::new("With species"), Cell::new(report.with_species)]);
    table.add_row(vec![Cell::new("Unparsed"), Cell::new(report.unparsed())]);
    output.push_str(&format!("{table}\n"));
    output
}

/// Print the outcome of a name split.
pub fn print_split_summary(report: &SplitReport) {
    print!("{}", format_split_summary(report));
}

/// Format the outcome of a translation join as a string.
pub fn format_join_summary(report: &JoinReport) -> String {
    let mut output = String::new();
    section(&mut output, "Translation Join");
    let mut table = new_table(vec!["Outcome", "Features"]);
    table.add_row(vec![Cell::new("Input"), Cell::new(report.input)]);
    table.add_row(vec![Cell::new("Kept"), Cell::new(report.kept)]);
    table.add_row(vec![Cell::new("Untranslated"), Cell::new(report.untranslated)]);
    table.add_row(vec![Cell::new("Not edible"), Cell::new(report.not_edible)]);
    table.add_row(vec![
        Cell::new("Edibility unknown"),
        Cell::new(report.unresolved.len()),
    ]);
    output.push_str(&format!("{table}\n"));
    output
}

/// Print the outcome of a translation join.
pub fn print_join_summary(report: &JoinReport) {
    print!("{}", format_join_summary(report));
}
