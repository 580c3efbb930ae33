use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Cmd};

#[test]
fn test_import_command_parsing() {
    let cli = Cli::try_parse_from(["carnet", "import", "words.csv"]).unwrap();
    assert_eq!(
        cli.cmd,
        Cmd::Import {
            file: PathBuf::from("words.csv")
        }
    );
}

#[test]
fn test_add_command_parsing() {
    let cli = Cli::try_parse_from(["carnet", "add", "cat", "chat", "-e", "The cat sleeps."]).unwrap();
    assert_eq!(
        cli.cmd,
        Cmd::Add {
            source: "cat".into(),
            target: "chat".into(),
            example: Some("The cat sleeps.".into()),
        }
    );
}

#[test]
fn test_export_flags() {
    let cli = Cli::try_parse_from(["carnet", "export", "--stdout", "--reset"]).unwrap();
    assert_eq!(
        cli.cmd,
        Cmd::Export {
            output: None,
            stdout: true,
            reset: true,
        }
    );

    let conflicting = Cli::try_parse_from(["carnet", "export", "--stdout", "-o", "out.csv"]);
    assert!(conflicting.is_err());
}

#[test]
fn test_test_command_parsing() {
    let cli = Cli::try_parse_from(["carnet", "test", "--reverse", "--size", "5"]).unwrap();
    assert_eq!(
        cli.cmd,
        Cmd::Test {
            reverse: true,
            size: Some(5),
        }
    );
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from(["carnet", "list", "--config", "carnet.json"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("carnet.json")));
    assert_eq!(cli.cmd, Cmd::List);
}

#[test]
fn test_missing_subcommand_fails() {
    assert!(Cli::try_parse_from(["carnet"]).is_err());
}
