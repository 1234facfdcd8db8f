use anyhow::{Context, Result};
use tracing::info;
use vivado_report::{ParseOptions, ParserRegistry, ReportKind};

use crate::cli::ParseArgs;
use crate::util::{read_report_text, write_json};

pub fn run(args: ParseArgs) -> Result<()> {
    let report_text = read_report_text(args.input.file.as_deref())?;
    let options =
        ParseOptions::default().with_ambiguous_parse_strategy(args.ambiguous_as.into());

    let kind = match args.kind {
        Some(kind) => ReportKind::from(kind),
        None => ParserRegistry::default()
            .resolve(&report_text)
            .context("failed to select a report parser")?,
    };

    let report = kind
        .parse(&report_text, &options)
        .with_context(|| format!("failed to parse {} report", kind.as_str()))?;

    info!(
        kind = kind.as_str(),
        sections = report.len(),
        metadata = report.metadata.is_some(),
        "parsed report"
    );

    write_json(args.output.dest.as_deref(), &report, args.output.pretty)
}
