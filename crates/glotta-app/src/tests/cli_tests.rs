use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Commands};

#[test]
fn test_parse_detect_with_profiles() {
    let cli = Cli::try_parse_from([
        "glotta", "detect", "--text", "hello", "-p", "en.json", "-p", "de.json", "--top", "1",
    ])
    .unwrap();

    assert_eq!(cli.config, PathBuf::from("config.json"));
    assert!(!cli.json);
    match cli.command {
        Commands::Detect {
            input,
            profiles,
            profiles_dir,
            top,
        } => {
            assert_eq!(input.text.as_deref(), Some("hello"));
            assert_eq!(profiles, [PathBuf::from("en.json"), PathBuf::from("de.json")]);
            assert_eq!(profiles_dir, None);
            assert_eq!(top, Some(1));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_text_and_file_together() {
    let result = Cli::try_parse_from([
        "glotta", "profile", "-n", "en", "--text", "hi", "--file", "a.txt",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_requires_input() {
    assert!(Cli::try_parse_from(["glotta", "detect", "-p", "en.json"]).is_err());
}

#[test]
fn test_parse_compare_requires_profiles() {
    assert!(Cli::try_parse_from(["glotta", "compare", "--text", "hi"]).is_err());
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "glotta", "profile", "-n", "en", "-t", "hi", "--json", "--config", "custom.json",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, PathBuf::from("custom.json"));
}
