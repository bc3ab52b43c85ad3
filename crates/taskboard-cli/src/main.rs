mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use taskboard_core::AppConfig;
use taskboard_engine::BoardEngine;
use taskboard_persistence::JsonKvStore;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let dir = cli
        .dir
        .unwrap_or_else(|| AppConfig::load().effective_data_dir());
    let mut engine = BoardEngine::load(JsonKvStore::new(dir));

    match cli.command {
        Commands::Task(task_cmd) => handlers::task::handle(&mut engine, task_cmd.action)?,
        Commands::Column(column_cmd) => handlers::column::handle(&mut engine, column_cmd.action)?,
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
