//! Logging init: file under the XDG state dir, stderr fallback.

use anyhow::Result;
use std::fs;
use std::io;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,vendo_core=debug,vendo_cli=debug";

/// Writer that is either the log file or stderr (used when the file
/// handle cannot be cloned).
enum FileOrStderr {
    File(fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Initializes structured logging to `~/.local/state/vendo/vendo.log`,
/// falling back to stderr when the log file cannot be opened.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    match file_writer() {
        Ok(writer) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            tracing::debug!("vendo logging initialized");
        }
        Err(err) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .with_ansi(false)
                .init();
            tracing::warn!("log file unavailable ({err:#}), logging to stderr");
        }
    }
}

fn file_writer() -> Result<BoxMakeWriter> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vendo")?;
    let path = xdg_dirs.place_state_file("vendo.log")?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok(BoxMakeWriter::new(FileMakeWriter(file)))
}
