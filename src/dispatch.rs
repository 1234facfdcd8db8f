//! Chooses a report parser from the command that generated the report.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::metadata::{MetadataParser, command_name};
use crate::model::{ParseOptions, Report};
use crate::report::{parse_tables_report, parse_utilization_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Utilization,
    Power,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utilization => "utilization",
            Self::Power => "power",
        }
    }

    /// Whether parsed reports of this kind carry the metadata header.
    pub fn includes_metadata(self) -> bool {
        match self {
            Self::Utilization => true,
            Self::Power => false,
        }
    }

    pub fn parse(self, report_text: &str, options: &ParseOptions) -> Result<Report> {
        if self.includes_metadata() {
            parse_utilization_report(report_text, options)
        } else {
            parse_tables_report(report_text, options)
        }
    }
}

/// Immutable lookup from generating Tcl command to report kind.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    kinds: HashMap<String, ReportKind>,
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::from_entries([
            ("report_utilization", ReportKind::Utilization),
            ("report_power", ReportKind::Power),
        ])
    }
}

impl ParserRegistry {
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ReportKind)>,
        S: Into<String>,
    {
        Self {
            kinds: entries
                .into_iter()
                .map(|(command, kind)| (command.into(), kind))
                .collect(),
        }
    }

    pub fn get(&self, command: &str) -> Option<ReportKind> {
        self.kinds.get(command).copied()
    }

    /// Reads the generating command from the report header and looks up its
    /// kind, failing with [`ReportError::UnsupportedReportKind`] when none is
    /// registered.
    pub fn resolve(&self, report_text: &str) -> Result<ReportKind> {
        let metadata = MetadataParser::new()?.parse(report_text)?;
        let command = command_name(&metadata)?;

        let kind = self
            .get(&command)
            .ok_or_else(|| ReportError::UnsupportedReportKind(command.clone()))?;
        debug!(command = %command, kind = kind.as_str(), "selected report parser");

        Ok(kind)
    }

    pub fn parse(&self, report_text: &str, options: &ParseOptions) -> Result<Report> {
        self.resolve(report_text)?.parse(report_text, options)
    }
}

/// Parses any supported report, picking the parser from the report header.
pub fn parse_vivado_report(report_text: &str, options: &ParseOptions) -> Result<Report> {
    ParserRegistry::default().parse(report_text, options)
}
