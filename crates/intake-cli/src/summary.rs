use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use intake_validate::ValidationReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Print a dirty validation report as a table, one row per finding.
pub fn print_issue_table(report: &ValidationReport) {
    println!(
        "{}: {} issue{}",
        report.questionnaire_id,
        report.len(),
        if report.len() == 1 { "" } else { "s" }
    );
    let mut table = Table::new();
    table.set_header(vec!["Question", "Reason", "Message"]);
    apply_table_style(&mut table);
    for issue in &report.issues {
        table.add_row(vec![
            Cell::new(&issue.question_id),
            Cell::new(issue.reason.as_str())
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            Cell::new(issue.reason.message()),
        ]);
    }
    println!("{table}");
}
