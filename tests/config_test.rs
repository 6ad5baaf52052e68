//! Tests for loading match configuration files.

use clap::Parser;
use heuristic_games::cli::Cli;
use heuristic_games::{AgentKind, MatchConfig, Orchestrator, build_agent};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
seed = 2017
shuffle_marks = false
max_invalid_moves = 5
verbose = true
x = "random"
o = "computer"
"#,
    );

    let config = MatchConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.seed(), Some(2017));
    assert!(!*config.shuffle_marks());
    assert_eq!(*config.max_invalid_moves(), 5);
    assert!(*config.verbose());
    assert_eq!(*config.x(), AgentKind::Random);
    assert_eq!(*config.o(), AgentKind::Computer);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    assert_eq!(MatchConfig::from_file(file.path()).unwrap(), MatchConfig::default());
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MatchConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file() {
    let file = write_config("seed = \"soon\"");
    let err = MatchConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_flags_override_file() {
    let file = write_config("seed = 1\nx = \"random\"\no = \"random\"\n");
    let path = file.path().to_str().unwrap();
    let cli = Cli::parse_from(["heuristic_games", "watch", "--config", path, "--x", "computer"]);

    let base = MatchConfig::from_file(cli.config.as_ref().unwrap()).unwrap();
    let config = cli.command.apply_to(base);
    assert_eq!(*config.seed(), Some(1));
    assert_eq!(*config.x(), AgentKind::Computer);
    assert_eq!(*config.o(), AgentKind::Random);
}

#[test]
fn test_configured_match_is_reproducible() {
    let file = write_config("seed = 99\nx = \"random\"\no = \"random\"\n");
    let config = MatchConfig::from_file(file.path()).unwrap();

    let play = || {
        let [(a_kind, a_mark), (b_kind, b_mark)] = config.assign_marks();
        Orchestrator::new(
            build_agent(a_kind, a_mark, *config.seed()),
            build_agent(b_kind, b_mark, *config.seed()),
        )
        .unwrap()
        .with_max_invalid_moves(*config.max_invalid_moves())
        .run()
        .unwrap()
    };
    assert_eq!(play(), play());
}
