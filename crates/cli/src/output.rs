//! Output formatting for CLI

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use shotview_report::RunSummary;

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Plain text format
    Plain,
}

fn summary_rows(summary: &RunSummary) -> Vec<(&'static str, String)> {
    let stats = &summary.stats;
    vec![
        ("Document", summary.document.display().to_string()),
        ("Suites", stats.suites.to_string()),
        ("Tests", stats.tests().to_string()),
        ("Passed", stats.passed.to_string()),
        ("Failed", stats.failed.to_string()),
        ("Gallery sections", stats.sections.to_string()),
        ("Missing screenshots", stats.missing_screenshots.to_string()),
    ]
}

/// Print the summary of a finished run
pub fn print_summary(summary: &RunSummary, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec!["Field", "Value"]);
            for (field, value) in summary_rows(summary) {
                table.add_row(vec![field.to_string(), value]);
            }

            println!("{table}");
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary).unwrap_or_default());
        }
        OutputFormat::Plain => {
            for (field, value) in summary_rows(summary) {
                println!("{}: {}", field, value);
            }
        }
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("✅ {}", message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("⚠️  {}", message);
}
