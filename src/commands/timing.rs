use anyhow::{Context, Result};
use tracing::{info, warn};
use vivado_report::parse_data_path_delays;

use crate::cli::TimingArgs;
use crate::util::{read_report_text, write_json};

pub fn run(args: TimingArgs) -> Result<()> {
    let report_text = read_report_text(args.input.file.as_deref())?;

    let delays = parse_data_path_delays(&report_text).context("failed to scan timing paths")?;
    if delays.is_empty() {
        warn!("no data path delay lines found");
    } else {
        info!(paths = delays.len(), "extracted data path delays");
    }

    write_json(args.output.dest.as_deref(), &delays, args.output.pretty)
}
