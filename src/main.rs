//! Heuristic Games - command-line tic-tac-toe
//!
//! Play against the rule-based computer, or watch agents play each other.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use heuristic_games::cli::{Cli, Command};
use heuristic_games::{AgentKind, MatchConfig, MatchOutcome, Orchestrator, build_agent};
use heuristic_tictactoe::Mark;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,heuristic_games=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let base = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("Failed to load match config from {}", path.display()))?,
        None => MatchConfig::default(),
    };
    let config = cli.command.apply_to(base);

    match cli.command {
        Command::Play { mark, opponent, .. } => run_play(&config, mark, opponent),
        Command::Watch { json, .. } => run_watch(&config, json),
    }
}

/// Human on stdin/stdout against an agent.
#[instrument(skip(config))]
fn run_play(config: &MatchConfig, mark: Mark, opponent: AgentKind) -> Result<()> {
    info!("Starting human match");
    let human = build_agent(AgentKind::Human, mark, *config.seed());
    let other = build_agent(opponent, mark.opponent(), *config.seed());

    let outcome = play(config, human, other)?;
    print!("{}", outcome.summary());
    Ok(())
}

/// Agent against agent.
#[instrument(skip(config))]
fn run_watch(config: &MatchConfig, json: bool) -> Result<()> {
    let [(first_kind, first_mark), (second_kind, second_mark)] = config.assign_marks();
    info!(%first_kind, %first_mark, %second_kind, %second_mark, "Starting agent match");

    let first = build_agent(first_kind, first_mark, *config.seed());
    let second = build_agent(second_kind, second_mark, *config.seed());

    let outcome = play(config, first, second)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to serialize outcome")?
        );
    } else {
        if *config.verbose() || first_kind == AgentKind::Human || second_kind == AgentKind::Human {
            print!("{}", outcome.summary());
        }
        for record in &outcome.history {
            println!("{}", record);
        }
        println!("{}", verdict(&outcome));
    }
    Ok(())
}

fn play(
    config: &MatchConfig,
    first: Box<dyn heuristic_games::Agent>,
    second: Box<dyn heuristic_games::Agent>,
) -> Result<MatchOutcome> {
    let outcome = Orchestrator::new(first, second)?
        .with_max_invalid_moves(*config.max_invalid_moves())
        .run()
        .context("Match aborted")?;
    Ok(outcome)
}

fn verdict(outcome: &MatchOutcome) -> String {
    match outcome.winner {
        Some(Mark::X) => format!("X ({}) wins", outcome.player_x),
        Some(Mark::O) => format!("O ({}) wins", outcome.player_o),
        None => "draw".to_string(),
    }
}
