//! Vendor-file declarations and entry parsing.
//!
//! An app declares its remote assets in `vendor.toml` under a `files`
//! key. Each element is either a 3-element array `[tag, file_name, url]`
//! or a table `{ name, file_name, url }`; both normalize to `VendorFile`.

use std::path::Path;
use thiserror::Error;

/// One declared remote asset: lookup tag, relative static path, source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorFile {
    /// Logical name used to reference the asset (unique per configuration).
    pub tag: String,
    /// Relative path used as the static-file key, e.g. `js/bootstrap.min.js`.
    pub file_name: String,
    /// Absolute source URL the asset is downloaded from.
    pub url: String,
}

impl VendorFile {
    pub fn new(
        tag: impl Into<String>,
        file_name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            file_name: file_name.into(),
            url: url.into(),
        }
    }

    /// True if `path` is the relative static path this entry provides.
    pub fn matches(&self, path: &str) -> bool {
        self.file_name == path
    }

    /// Base name of `file_name`, used as the download destination name.
    ///
    /// `None` when the declared path has no final component (e.g. `..`).
    pub fn base_name(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .file_name()
            .and_then(|name| name.to_str())
    }
}

/// Shape error found while parsing a `files` declaration list.
///
/// Parsing rejects malformed entries up front instead of letting them
/// crash a later unpacking step; URL syntax stays a `check` concern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("the `files` value is not a list")]
    NotAList,
    #[error("entry {index} has {found} elements, expected 3")]
    WrongArity { index: usize, found: usize },
    #[error("entry {index} is missing or has an empty `{field}` field")]
    MissingField { index: usize, field: &'static str },
    #[error("entry {index} is neither a list nor a table")]
    InvalidEntry { index: usize },
}

/// Parses one app's raw `files` value into `VendorFile`s, accepting both
/// declaration shapes per element.
pub fn parse_entries(files: &toml::Value) -> Result<Vec<VendorFile>, ParseError> {
    let items = files.as_array().ok_or(ParseError::NotAList)?;

    let mut entries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if let Some(seq) = item.as_array() {
            entries.push(parse_seq(index, seq)?);
        } else if let Some(table) = item.as_table() {
            entries.push(parse_table(index, table)?);
        } else {
            return Err(ParseError::InvalidEntry { index });
        }
    }
    Ok(entries)
}

fn parse_seq(index: usize, seq: &[toml::Value]) -> Result<VendorFile, ParseError> {
    if seq.len() != 3 {
        return Err(ParseError::WrongArity {
            index,
            found: seq.len(),
        });
    }
    let tag = string_field(index, &seq[0], "tag")?;
    let file_name = string_field(index, &seq[1], "file_name")?;
    let url = string_field(index, &seq[2], "url")?;
    Ok(VendorFile::new(tag, file_name, url))
}

fn parse_table(
    index: usize,
    table: &toml::map::Map<String, toml::Value>,
) -> Result<VendorFile, ParseError> {
    let tag = table_field(index, table, "name")?;
    let file_name = table_field(index, table, "file_name")?;
    let url = table_field(index, table, "url")?;
    Ok(VendorFile::new(tag, file_name, url))
}

fn table_field<'a>(
    index: usize,
    table: &'a toml::map::Map<String, toml::Value>,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    table
        .get(field)
        .ok_or(ParseError::MissingField { index, field })
        .and_then(|value| string_field(index, value, field))
}

fn string_field<'a>(
    index: usize,
    value: &'a toml::Value,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    match value.as_str() {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ParseError::MissingField { index, field }),
    }
}
