//! Tests for the extract, relabel, and score subcommands.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_extract() {
    match parse(&["petprep", "extract", "images.tar.gz"]) {
        CliCommand::Extract {
            archive,
            dest_dir,
            preserve_ownership,
        } => {
            assert_eq!(archive, Path::new("images.tar.gz"));
            assert!(dest_dir.is_none());
            assert!(!preserve_ownership);
        }
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_extract_flags() {
    match parse(&[
        "petprep",
        "extract",
        "images.tar.gz",
        "--dest-dir",
        "/data/pets",
        "--preserve-ownership",
    ]) {
        CliCommand::Extract {
            dest_dir,
            preserve_ownership,
            ..
        } => {
            assert_eq!(dest_dir.as_deref(), Some(Path::new("/data/pets")));
            assert!(preserve_ownership);
        }
        _ => panic!("expected Extract with flags"),
    }
}

#[test]
fn cli_parse_relabel() {
    match parse(&["petprep", "relabel", "images", "images"]) {
        CliCommand::Relabel {
            image_root,
            flat_dir,
            strict,
        } => {
            assert_eq!(image_root, Path::new("images"));
            assert_eq!(flat_dir, Path::new("images"));
            assert!(!strict);
        }
        _ => panic!("expected Relabel"),
    }
}

#[test]
fn cli_parse_relabel_requires_flat_dir() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["petprep", "relabel", "images"]).is_err());
}

#[test]
fn cli_parse_score() {
    match parse(&["petprep", "score", "pet.jpg", "--endpoint", "http://svc/score"]) {
        CliCommand::Score { image, endpoint } => {
            assert_eq!(image, Path::new("pet.jpg"));
            assert_eq!(endpoint.as_deref(), Some("http://svc/score"));
        }
        _ => panic!("expected Score"),
    }
}
