//! The metadata header found at the top of Vivado report files:
//!
//! ```text
//! ---------------------------------------------
//! | Tool Version : Vivado v.2022.2 (lin64)
//! | Date         : Wed Jul 10 12:18:20 2024
//! | Command      : report_utilization -file top_utilization.rpt
//! ---------------------------------------------
//! ```

use regex::Regex;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::model::Metadata;

const COMMAND_KEY: &str = "Command";

#[derive(Debug, Clone)]
pub struct MetadataParser {
    header: Regex,
}

impl MetadataParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            header: Regex::new(r"-+\r?\n(?P<metadata>(?:\|.*\r?\n)*)-+")?,
        })
    }

    /// Splits every `| key : value` line of the header at its first `:`.
    pub fn parse(&self, report_text: &str) -> Result<Metadata> {
        let captures = self
            .header
            .captures(report_text)
            .ok_or(ReportError::MissingMetadata)?;
        let body = captures
            .name("metadata")
            .map(|value| value.as_str())
            .unwrap_or_default();

        let mut metadata = Metadata::new();
        for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let Some((key, value)) = line.split_once(':') else {
                return Err(ReportError::MalformedMetadata {
                    line: line.to_string(),
                });
            };
            metadata.insert(
                key.trim_matches([' ', '|']).to_string(),
                value.trim().to_string(),
            );
        }

        debug!(entries = metadata.len(), "parsed report metadata");
        Ok(metadata)
    }

    /// Name of the Tcl command that generated the report, such as
    /// `report_utilization`.
    pub fn generating_command(&self, report_text: &str) -> Result<String> {
        let metadata = self.parse(report_text)?;
        command_name(&metadata)
    }
}

pub fn parse_metadata(report_text: &str) -> Result<Metadata> {
    MetadataParser::new()?.parse(report_text)
}

pub fn generating_command(report_text: &str) -> Result<String> {
    MetadataParser::new()?.generating_command(report_text)
}

pub(crate) fn command_name(metadata: &Metadata) -> Result<String> {
    metadata
        .get(COMMAND_KEY)
        .and_then(|command| command.split_whitespace().next())
        .map(ToOwned::to_owned)
        .ok_or_else(|| ReportError::MissingMetadataField(COMMAND_KEY.to_string()))
}
