use anyhow::{Context, Result};
use tracing::info;
use vivado_report::MetadataParser;

use crate::cli::MetadataArgs;
use crate::util::{read_report_text, write_json, write_output};

pub fn run(args: MetadataArgs) -> Result<()> {
    let report_text = read_report_text(args.input.file.as_deref())?;
    let parser = MetadataParser::new()?;

    if args.command_only {
        let command = parser
            .generating_command(&report_text)
            .context("failed to read generating command")?;
        info!(command = %command, "resolved generating command");
        return write_output(args.output.dest.as_deref(), format!("{command}\n").as_bytes());
    }

    let metadata = parser
        .parse(&report_text)
        .context("failed to parse metadata header")?;
    info!(entries = metadata.len(), "parsed metadata header");

    write_json(args.output.dest.as_deref(), &metadata, args.output.pretty)
}
