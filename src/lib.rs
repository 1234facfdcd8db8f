//! Structured extraction of the bordered ASCII tables found in Vivado
//! report files.
//!
//! A report is scanned for titled sections that carry a table; each table is
//! classified as a record table or a dictionary table and converted into
//! [`ParsedTable`]. The resulting [`Report`] maps section titles to tables.

pub mod dispatch;
pub mod error;
pub mod metadata;
pub mod model;
pub mod report;
pub mod sections;
pub mod table;
pub mod timing;

pub use dispatch::{ParserRegistry, ReportKind, parse_vivado_report};
pub use error::{ReportError, Result};
pub use metadata::{MetadataParser, generating_command, parse_metadata};
pub use model::{FieldMap, METADATA_KEY, Metadata, ParseOptions, ParsedTable, Report, TableKind};
pub use report::{parse_tables_report, parse_utilization_report};
pub use sections::{RawSection, SectionScanner, scan_sections};
pub use table::{CellGrid, assemble, parse_table, resolve_kind};
pub use timing::{DataPathDelay, parse_data_path_delay, parse_data_path_delays};
