//! `vendo check` – validate the vendor declarations of all apps.

use anyhow::{bail, Result};
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::VendorRegistry;

pub fn run_check<R: VendorRegistry>(finder: &RemoteFileFinder<R>) -> Result<()> {
    let diagnostics = finder.check()?;
    if diagnostics.is_empty() {
        println!("All vendor declarations are well-formed.");
        return Ok(());
    }

    for d in &diagnostics {
        println!("{} [{}]: {}", d.code.as_str(), d.app, d.message);
        println!("  hint: {}", d.hint);
    }
    bail!("found {} problem(s) in vendor declarations", diagnostics.len());
}
