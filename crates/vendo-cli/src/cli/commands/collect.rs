//! `vendo collect` – download every declared vendor file.

use anyhow::Result;
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::VendorRegistry;

pub fn run_collect<R: VendorRegistry>(finder: &RemoteFileFinder<R>) -> Result<()> {
    let entries = finder.list(&[])?;
    if entries.is_empty() {
        println!("No vendor files declared.");
        return Ok(());
    }

    for (file_name, entry) in entries {
        let dest = finder.download(&entry)?;
        println!("{} -> {}", file_name, dest.display());
    }
    Ok(())
}
