use anyhow::Result;
use tracing::info;
use vivado_report::scan_sections;

use crate::cli::SectionsArgs;
use crate::util::{read_report_text, write_output};

pub fn run(args: SectionsArgs) -> Result<()> {
    let report_text = read_report_text(args.input.file.as_deref())?;

    let mut listing = String::new();
    let mut count = 0usize;
    for section in scan_sections(&report_text) {
        listing.push_str(section.title);
        listing.push('\n');
        count += 1;
    }

    info!(sections = count, "scanned report sections");
    write_output(None, listing.as_bytes())
}
