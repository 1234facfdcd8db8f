//! Whole-report parsers for the "tables" style of Vivado report, such as
//! utilization and power reports.

use tracing::{debug, warn};

use crate::error::Result;
use crate::metadata::parse_metadata;
use crate::model::{ParseOptions, Report};
use crate::sections::scan_sections;
use crate::table::parse_table;

/// Parses every section of the report that carries a table.
///
/// The section hierarchy is flattened: `1. Settings` and `2.1 Environment`
/// both become top-level keys. When titles repeat, the later section wins.
/// The metadata header is ignored.
pub fn parse_tables_report(report_text: &str, options: &ParseOptions) -> Result<Report> {
    let mut report = Report::default();

    for section in scan_sections(report_text) {
        let table = parse_table(section.block, options.ambiguous_parse_strategy).inspect_err(
            |err| warn!(title = section.title, error = %err, "failed to parse section table"),
        )?;

        debug!(
            title = section.title,
            kind = table.kind().as_str(),
            entries = table.len(),
            "parsed section table"
        );
        if report.insert_section(section.title, table).is_some() {
            debug!(title = section.title, "replaced earlier section with same title");
        }
    }

    Ok(report)
}

/// Like [`parse_tables_report`], with the metadata header attached under
/// [`crate::METADATA_KEY`].
pub fn parse_utilization_report(report_text: &str, options: &ParseOptions) -> Result<Report> {
    let mut report = parse_tables_report(report_text, options)?;
    report.metadata = Some(parse_metadata(report_text)?);
    Ok(report)
}
