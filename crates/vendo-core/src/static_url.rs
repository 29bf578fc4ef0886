//! Static URL resolution for templates.

use crate::finder::{FinderError, RemoteFileFinder};
use crate::registry::VendorRegistry;

/// Resolves `tag` to the URL the static-file server will expose its file
/// under: `<static_url><file_name>`. No download happens.
///
/// An unknown tag is an error so that rendering fails loudly instead of
/// emitting a dead link.
pub fn vendor_remote_url<R: VendorRegistry>(
    finder: &RemoteFileFinder<R>,
    static_url: &str,
    tag: &str,
) -> Result<String, FinderError> {
    match finder.by_tag(tag)? {
        Some(entry) => Ok(format!("{}{}", static_url, entry.file_name)),
        None => Err(FinderError::UnknownTag(tag.to_string())),
    }
}
