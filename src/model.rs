use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reserved report key under which header metadata is stored. Section titles
/// never start with an underscore in Vivado reports.
pub const METADATA_KEY: &str = "_meta";

/// One table row (or a whole dictionary table), in column order.
pub type FieldMap = IndexMap<String, String>;

/// Flat key/value view of a report's metadata header.
pub type Metadata = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Rows share the column names given by the first row.
    Record,
    /// Two columns, left is the key and right is the value.
    #[default]
    Dictionary,
}

impl TableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Record => "record",
            Self::Dictionary => "dictionary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParsedTable {
    Records(Vec<FieldMap>),
    Dictionary(FieldMap),
}

impl ParsedTable {
    pub fn kind(&self) -> TableKind {
        match self {
            Self::Records(_) => TableKind::Record,
            Self::Dictionary(_) => TableKind::Dictionary,
        }
    }

    pub fn as_records(&self) -> Option<&[FieldMap]> {
        match self {
            Self::Records(records) => Some(records),
            Self::Dictionary(_) => None,
        }
    }

    pub fn as_dictionary(&self) -> Option<&FieldMap> {
        match self {
            Self::Records(_) => None,
            Self::Dictionary(entries) => Some(entries),
        }
    }

    /// Number of records, or number of entries for a dictionary table.
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Dictionary(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Section title to table mapping, plus the metadata header for report kinds
/// that carry it.
///
/// Serializes as a single JSON object; the metadata, when present, sits under
/// [`METADATA_KEY`] after the sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub sections: IndexMap<String, ParsedTable>,

    #[serde(rename = "_meta", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Report {
    pub fn get(&self, title: &str) -> Option<&ParsedTable> {
        self.sections.get(title)
    }

    /// Inserts a section table, replacing any earlier section with the same
    /// title. The replaced table is returned.
    pub fn insert_section(
        &mut self,
        title: impl Into<String>,
        table: ParsedTable,
    ) -> Option<ParsedTable> {
        self.sections.insert(title.into(), table)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Kind used for tables whose structure cannot decide between record and
    /// dictionary: two columns and a single content row.
    pub ambiguous_parse_strategy: TableKind,
}

impl ParseOptions {
    pub fn with_ambiguous_parse_strategy(mut self, strategy: TableKind) -> Self {
        self.ambiguous_parse_strategy = strategy;
        self
    }
}
