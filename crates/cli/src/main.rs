//! Doodle developer CLI.
//!
//! Replays scripted paint-board sessions and vote requests against the core
//! crates, for inspecting their behaviour outside the web application.

mod cli;
mod paint;
mod vote;
#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use doodle_canvas::Board;
use doodle_config::DoodleConfig;
use doodle_votes::VoteLedger;
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = DoodleConfig::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

	match cli.command {
		Command::Paint { script, output } => run_paint(&config, &script, output.as_deref()),
		Command::Vote { script } => run_vote(&script),
	}
}

fn run_paint(config: &DoodleConfig, script: &Path, output: Option<&Path>) -> anyhow::Result<()> {
	let actions = paint::parse_script(&read_script(script)?)?;
	let mut board = Board::new(config.board_settings());
	paint::replay(&mut board, &actions)?;

	match output {
		Some(path) => {
			let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
			paint::write_ppm(board.buffer(), &mut BufWriter::new(file))?;
			info!(path = %path.display(), size = %board.buffer().size(), "canvas written");
		}
		None => paint::write_ppm(board.buffer(), &mut BufWriter::new(io::stdout().lock()))?,
	}
	Ok(())
}

fn run_vote(script: &Path) -> anyhow::Result<()> {
	let requests = vote::parse_script(&read_script(script)?)?;
	let mut ledger = VoteLedger::new();
	let summary = vote::replay(&mut ledger, &requests);
	println!("{}", serde_json::to_string_pretty(&summary)?);
	Ok(())
}

fn read_script(path: &Path) -> anyhow::Result<String> {
	std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("DOODLE_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("doodle_cli=debug,doodle_canvas=debug,doodle_votes=debug,doodle_config=debug")
		} else {
			EnvFilter::new("warn,doodle_cli=info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(true)
		.init();
}
