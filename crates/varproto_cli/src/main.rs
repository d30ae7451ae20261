#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "varproto", about = "Value-tree struct protocol tools")]
struct Cli {
	/// Default log filter when `RUST_LOG` is unset.
	#[arg(long, global = true, default_value = "warn")]
	log_level: String,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode raw bytes as base 64 text.
	Encode {
		#[arg(long)]
		input: Option<PathBuf>,
	},
	/// Decode base 64 text to raw bytes.
	Decode {
		text: Option<String>,
		#[arg(long)]
		hex: bool,
	},
	/// Walk the top-level struct of a JSON document.
	Inspect(cmd::inspect::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();
	init_tracing(&cli.log_level);

	match cli.command {
		Commands::Encode { input } => cmd::encode::run(input),
		Commands::Decode { text, hex } => cmd::decode::run(text, hex),
		Commands::Inspect(args) => cmd::inspect::run(args),
	}
}

fn init_tracing(log_level: &str) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
