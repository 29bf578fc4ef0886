//! `vendo fetch <path>` – download the vendor file(s) declared for a path.

use anyhow::{bail, Result};
use vendo_core::finder::RemoteFileFinder;
use vendo_core::registry::VendorRegistry;

pub fn run_fetch<R: VendorRegistry>(
    finder: &RemoteFileFinder<R>,
    path: &str,
    all: bool,
) -> Result<()> {
    if all {
        let paths = finder.find_all(path)?;
        if paths.is_empty() {
            bail!("no vendor file declared for {path}");
        }
        for p in paths {
            println!("{}", p.display());
        }
    } else {
        match finder.find_first(path)? {
            Some(p) => println!("{}", p.display()),
            None => bail!("no vendor file declared for {path}"),
        }
    }
    Ok(())
}
