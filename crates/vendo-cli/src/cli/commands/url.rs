//! `vendo url <tag>` – resolve a tag to its static URL.

use anyhow::Result;
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::VendorRegistry;
use vendo_core::static_url::vendor_remote_url;

pub fn run_url<R: VendorRegistry>(
    finder: &RemoteFileFinder<R>,
    static_url: &str,
    tag: &str,
) -> Result<()> {
    let url = vendor_remote_url(finder, static_url, tag)?;
    println!("{url}");
    Ok(())
}
