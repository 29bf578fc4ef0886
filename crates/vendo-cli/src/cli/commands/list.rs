//! `vendo list` – print every declared vendor file.

use anyhow::Result;
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::VendorRegistry;

pub fn run_list<R: VendorRegistry>(finder: &RemoteFileFinder<R>) -> Result<()> {
    let apps = finder.app_entries()?;
    let total: usize = apps.iter().map(|(_, entries)| entries.len()).sum();
    if total == 0 {
        println!("No vendor files declared.");
        return Ok(());
    }

    println!("{:<16} {:<16} {:<32} {}", "APP", "TAG", "FILE", "URL");
    for (app, entries) in apps {
        for entry in entries {
            println!(
                "{:<16} {:<16} {:<32} {}",
                app, entry.tag, entry.file_name, entry.url
            );
        }
    }
    Ok(())
}
