//! Declaration validation with stable diagnostic codes.
//!
//! `check` never aborts the process: every problem comes back as a
//! `Diagnostic` value for the host to report through its own channel.

use url::Url;

use crate::registry::AppManifest;

/// Stable identifier for one class of declaration problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCode {
    /// `files` is not an array.
    NotAList,
    /// Array entry does not have exactly three elements.
    WrongArity,
    /// URL does not parse as an absolute URL with a supported scheme and host.
    InvalidUrl,
    /// Table entry is missing `name`, `file_name`, or `url`.
    TableMissingKeys,
    /// Array entry has an empty tag, file name, or URL.
    EmptyField,
    /// Entry is neither an array nor a table.
    InvalidEntryType,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::NotAList => "vendo.E001",
            DiagnosticCode::WrongArity => "vendo.E002",
            DiagnosticCode::InvalidUrl => "vendo.E003",
            DiagnosticCode::TableMissingKeys => "vendo.E004",
            DiagnosticCode::EmptyField => "vendo.E005",
            DiagnosticCode::InvalidEntryType => "vendo.E006",
        }
    }
}

/// One validation failure: stable code, affected app, message, and a
/// remediation hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub app: String,
    pub message: String,
    pub hint: &'static str,
}

/// Schemes accepted for vendor URLs.
const ALLOWED_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

/// Absolute URL with a supported scheme and a host.
pub fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => ALLOWED_SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}

/// Validates one app's raw `files` value.
///
/// Returns the first problem found as a single-element list, or an empty
/// list when the manifest is well-formed.
pub fn check_manifest(manifest: &AppManifest) -> Vec<Diagnostic> {
    let fail = |code: DiagnosticCode, message: String, hint: &'static str| {
        vec![Diagnostic {
            code,
            app: manifest.app.clone(),
            message,
            hint,
        }]
    };

    let items = match manifest.files.as_array() {
        Some(items) => items,
        None => {
            return fail(
                DiagnosticCode::NotAList,
                "The `files` value in vendor.toml is not a list.".to_string(),
                "Declare `files` as an array of entries.",
            )
        }
    };

    for item in items {
        if let Some(seq) = item.as_array() {
            if seq.len() != 3 {
                return fail(
                    DiagnosticCode::WrongArity,
                    format!(
                        "The vendor files entry {} should have exactly three elements.",
                        render(item)
                    ),
                    "Use [tag, file_name, url].",
                );
            }
            let tag = seq[0].as_str().unwrap_or("");
            let file_name = seq[1].as_str().unwrap_or("");
            let url = seq[2].as_str().unwrap_or("");
            if tag.is_empty() || file_name.is_empty() || url.is_empty() {
                return fail(
                    DiagnosticCode::EmptyField,
                    format!(
                        "The vendor files entry {} has an empty or non-string tag, file_name or url.",
                        render(item)
                    ),
                    "Fill in tag, file_name and url.",
                );
            }
            if !is_valid_url(url) {
                return fail(
                    DiagnosticCode::InvalidUrl,
                    format!("The url is invalid for vendor files entry: {url}."),
                    "Check the url scheme and host.",
                );
            }
        } else if let Some(table) = item.as_table() {
            let field = |key: &str| table.get(key).and_then(|v| v.as_str()).unwrap_or("");
            let tag = field("name");
            let file_name = field("file_name");
            let url = field("url");
            if tag.is_empty() || file_name.is_empty() || url.is_empty() {
                return fail(
                    DiagnosticCode::TableMissingKeys,
                    format!(
                        "The vendor files entry {} should have name, file_name and url keys.",
                        render(item)
                    ),
                    "Add name, file_name and url keys.",
                );
            }
            if !is_valid_url(url) {
                return fail(
                    DiagnosticCode::InvalidUrl,
                    format!("The url is invalid for vendor files entry: {url}."),
                    "Check the url scheme and host.",
                );
            }
        } else {
            return fail(
                DiagnosticCode::InvalidEntryType,
                format!("The vendor files entry {} has an invalid type.", render(item)),
                "Declare entries as arrays or tables.",
            );
        }
    }

    Vec::new()
}

/// Entry rendered inline for a diagnostic message.
fn render(value: &toml::Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
}
