// Import sources and their parsing into raw records.
//
// Purpose
// - Turn a delimited text (CSV) or hierarchical (XML) document into RawRecords.
//
// Boundaries
// - A source parses completely or not at all. Any problem found here is a
//   file-level error and no record of that source reaches the reconciler.
// - Field names are matched case-insensitively; values are trimmed.

use crate::shared::core::config::ImportConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub const PERSONNEL_NUMBER: &str = "personnelNumber";
pub const ABSENCE_DATE: &str = "absenceDate";
pub const FULL_DAY: &str = "fullDay";
pub const REASON: &str = "reason";
pub const START_TIME: &str = "startTime";
pub const END_TIME: &str = "endTime";

pub const REQUIRED_FIELDS: [&str; 4] = [PERSONNEL_NUMBER, ABSENCE_DATE, FULL_DAY, REASON];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("{name}: cannot read source: {reason}")]
    Unreadable { name: String, reason: String },

    #[error("{name}: cannot tell the format from the file name")]
    UnknownFormat { name: String },

    #[error("{name}: malformed content: {reason}")]
    Malformed { name: String, reason: String },

    #[error("{name}: missing required columns {columns:?}")]
    MissingColumns { name: String, columns: Vec<String> },

    #[error("{name}: expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        name: String,
        expected: String,
        found: String,
    },
}

impl SourceError {
    pub fn source_name(&self) -> &str {
        match self {
            SourceError::Unreadable { name, .. }
            | SourceError::UnknownFormat { name }
            | SourceError::Malformed { name, .. }
            | SourceError::MissingColumns { name, .. }
            | SourceError::UnexpectedRoot { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Xml,
}

impl SourceFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        let extension = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "csv" => Some(SourceFormat::Csv),
            "xml" => Some(SourceFormat::Xml),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportSource {
    pub name: String,
    /// Detected from the extension of `name` when absent.
    #[serde(default)]
    pub format: Option<SourceFormat>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    /// Where the record came from, e.g. `absences.csv:line 3`.
    pub origin: String,
    fields: HashMap<String, String>,
}

impl RawRecord {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields
            .insert(name.trim().to_lowercase(), value.trim().to_string());
    }

    /// The trimmed value of a field, `None` when absent or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_lowercase())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl ImportSource {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: None,
            content: content.into(),
        }
    }

    pub async fn read(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::Unreadable {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(name, content))
    }

    pub fn resolved_format(&self) -> Result<SourceFormat, SourceError> {
        self.format
            .or_else(|| SourceFormat::from_name(&self.name))
            .ok_or_else(|| SourceError::UnknownFormat {
                name: self.name.clone(),
            })
    }

    pub fn records(&self, config: &ImportConfig) -> Result<Vec<RawRecord>, SourceError> {
        match self.resolved_format()? {
            SourceFormat::Csv => self.csv_records(),
            SourceFormat::Xml => self.xml_records(config),
        }
    }

    fn malformed(&self, reason: impl ToString) -> SourceError {
        SourceError::Malformed {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }

    fn csv_records(&self) -> Result<Vec<RawRecord>, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(self.content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| self.malformed(format!("failed to read CSV headers: {e}")))?
            .iter()
            .map(|header| header.trim().to_lowercase())
            .collect();

        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !headers.contains(&field.to_lowercase()))
            .map(|field| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(SourceError::MissingColumns {
                name: self.name.clone(),
                columns: missing,
            });
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| self.malformed(format!("failed to read CSV record: {e}")))?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let mut record = RawRecord::new(format!("{}:line {line}", self.name));
            for (header, value) in headers.iter().zip(row.iter()) {
                record.set(header, value);
            }
            records.push(record);
        }
        Ok(records)
    }

    fn xml_records(&self, config: &ImportConfig) -> Result<Vec<RawRecord>, SourceError> {
        let document = roxmltree::Document::parse(&self.content).map_err(|e| self.malformed(e))?;
        let root = document.root_element();
        let found = root.tag_name().name();
        if !found.eq_ignore_ascii_case(&config.xml_root) {
            return Err(SourceError::UnexpectedRoot {
                name: self.name.clone(),
                expected: config.xml_root.clone(),
                found: found.to_string(),
            });
        }

        let records = root
            .children()
            .filter(|node| node.is_element())
            .enumerate()
            .map(|(index, element)| {
                let mut record = RawRecord::new(format!("{}:record {}", self.name, index + 1));
                for field in element.children().filter(|node| node.is_element()) {
                    record.set(field.tag_name().name(), field.text().unwrap_or_default());
                }
                record
            })
            .collect();
        Ok(records)
    }
}
