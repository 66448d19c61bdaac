// report crate

use models::{ValidationResult, ValidationSummary, VatStatus};

pub const SUMMARY_HEADING: &str = "VAT Validation Results";

const TABLE_HEADER: &str = "| VAT Number | Country | Format | VAT Valid | Company |";
const TABLE_SEPARATOR: &str = "|------------|---------|--------|-----------|---------|";
const MISSING_COMPANY: &str = "—";

fn format_cell(format_valid: bool) -> &'static str {
    if format_valid {
        "Valid"
    } else {
        "Invalid"
    }
}

fn vat_cell(vat_valid: VatStatus) -> &'static str {
    match vat_valid {
        VatStatus::Valid => "Valid",
        VatStatus::Invalid => "Invalid",
        VatStatus::Unknown => "N/A",
    }
}

/// Escape pipes so a value always stays within its table cell
fn text_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

fn company_cell(company_name: Option<&str>) -> String {
    match company_name {
        Some(name) if !name.is_empty() => text_cell(name),
        _ => MISSING_COMPANY.to_string(),
    }
}

/// Render results as a markdown table, one row per result in input order.
///
/// The output has no trailing newline.
pub fn build_summary_table(results: &[ValidationResult]) -> String {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_SEPARATOR.to_string());

    for result in results {
        lines.push(format!(
            "| {} | {} | {} | {} | {} |",
            text_cell(&result.tax_id),
            text_cell(&result.country),
            format_cell(result.format_valid),
            vat_cell(result.vat_valid),
            company_cell(result.company_name.as_deref())
        ));
    }

    lines.join("\n")
}

pub fn summary_line(summary: &ValidationSummary) -> String {
    format!(
        "{} valid, {} invalid out of {} checked.",
        summary.valid_count, summary.invalid_count, summary.total
    )
}

/// Markdown written to the job summary: heading, table and bolded counts.
pub fn job_summary_markdown(results: &[ValidationResult], summary: &ValidationSummary) -> String {
    format!(
        "## {}\n\n{}\n\n**{} valid**, **{} invalid** out of {} checked.\n",
        SUMMARY_HEADING,
        build_summary_table(results),
        summary.valid_count,
        summary.invalid_count,
        summary.total
    )
}
