//! `glide`: replays a key script against a file and prints every label frame.

mod cli;
mod replay;
mod tokens;

use anyhow::{Context, Result};
use clap::Parser;
use glide_config::JumpConfig;
use glide_jump::{JumpController, MemoryHost, TokenSupply};
use glide_primitives::Key;
use tracing::{info, warn};

use crate::cli::Cli;

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.log_filter());

	let text = std::fs::read_to_string(&cli.file).with_context(|| format!("reading {}", cli.file.display()))?;
	let config = match &cli.config {
		Some(path) => JumpConfig::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => JumpConfig::default(),
	};
	for warning in config.warnings() {
		warn!(%warning, "Questionable jump configuration");
	}
	let keys = Key::parse_script(&cli.keys).map_err(|bad| anyhow::anyhow!("unknown key {bad} in --keys"))?;

	let supply = match &cli.tokens {
		Some(path) => TokenSupply::Tokens(tokens::load(path)?),
		None => TokenSupply::Unsupported,
	};
	let mut host = MemoryHost::new(&text).with_cursor(cli.cursor).with_tokens(supply);
	if !cli.view.is_empty() {
		host = host.with_visible(cli.view.clone());
	}
	info!(file = %cli.file.display(), mode = %cli.mode, keys = keys.len(), "Replaying");

	let mut controller = JumpController::new(config);
	let report = replay::replay(&mut host, &mut controller, cli.mode, &keys);
	if cli.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
	} else {
		println!("{report}");
	}
	Ok(())
}

fn setup_tracing(default_filter: &str) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("GLIDE_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
