use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "doodle")]
#[command(about = "Replay paint board and vote scripts")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to the user config directory)
	#[arg(long, short = 'c', global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short = 'v', global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Replay a JSON list of board actions and write the canvas as PPM
	Paint {
		/// Script of board actions
		script: PathBuf,

		/// Output image (stdout if omitted)
		#[arg(long, short = 'o', value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Replay a JSON list of votes and print the resulting tallies
	Vote {
		/// Script of vote requests
		script: PathBuf,
	},
}
