//! Argument parsing for every subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_verify_paths() {
    match parse(&["sfv", "verify", "a.bin", "set.sfv", "b.bin"]) {
        CliCommand::Verify { paths, jobs, json } => {
            assert_eq!(
                paths,
                vec![
                    PathBuf::from("a.bin"),
                    PathBuf::from("set.sfv"),
                    PathBuf::from("b.bin")
                ]
            );
            assert!(jobs.is_none());
            assert!(!json);
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_jobs_json() {
    match parse(&["sfv", "verify", "--jobs", "4", "--json", "x"]) {
        CliCommand::Verify { jobs, json, .. } => {
            assert_eq!(jobs, Some(4));
            assert!(json);
        }
        _ => panic!("expected Verify with --jobs"),
    }
}

#[test]
fn cli_verify_requires_paths() {
    assert!(Cli::try_parse_from(["sfv", "verify"]).is_err());
}

#[test]
fn cli_parse_check() {
    match parse(&["sfv", "check", "album.sfv", "-j", "2"]) {
        CliCommand::Check {
            manifest,
            jobs,
            json,
        } => {
            assert_eq!(manifest, PathBuf::from("album.sfv"));
            assert_eq!(jobs, Some(2));
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_create() {
    match parse(&["sfv", "create", "a", "b", "--output", "out.sfv"]) {
        CliCommand::Create {
            paths,
            output,
            jobs,
        } => {
            assert_eq!(paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
            assert_eq!(output, PathBuf::from("out.sfv"));
            assert!(jobs.is_none());
        }
        _ => panic!("expected Create"),
    }
}

#[test]
fn cli_create_requires_output() {
    assert!(Cli::try_parse_from(["sfv", "create", "a"]).is_err());
}

#[test]
fn cli_parse_crc() {
    match parse(&["sfv", "crc", "/tmp/file.iso"]) {
        CliCommand::Crc { path } => assert_eq!(path, PathBuf::from("/tmp/file.iso")),
        _ => panic!("expected Crc"),
    }
}

#[test]
fn cli_parse_completions_and_man() {
    match parse(&["sfv", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
    assert!(matches!(parse(&["sfv", "man"]), CliCommand::Man));
}

#[test]
fn cli_command_is_well_formed() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
