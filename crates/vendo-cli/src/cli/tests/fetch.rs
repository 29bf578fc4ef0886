//! Tests for the fetch subcommand.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_fetch() {
    match parse(&["vendo", "fetch", "js/bootstrap.min.js"]) {
        CliCommand::Fetch { path, all } => {
            assert_eq!(path, "js/bootstrap.min.js");
            assert!(!all);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_all() {
    match parse(&["vendo", "fetch", "file.js", "--all"]) {
        CliCommand::Fetch { path, all } => {
            assert_eq!(path, "file.js");
            assert!(all);
        }
        _ => panic!("expected Fetch with --all"),
    }
}

#[test]
fn cli_parse_fetch_requires_a_path() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["vendo", "fetch"]).is_err());
}
