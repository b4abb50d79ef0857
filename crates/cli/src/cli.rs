use std::path::PathBuf;

use clap::Parser;
use glide_jump::JumpMode;
use glide_primitives::{LineRange, Position};

#[derive(Parser, Debug)]
#[command(name = "glide")]
#[command(about = "Replay a label-jump key script against a file")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// File to search
	pub file: PathBuf,

	/// Cursor position as LINE:COL, both 1-based
	#[arg(long, short = 'c', value_name = "LINE:COL", value_parser = parse_position, default_value = "1:1")]
	pub cursor: Position,

	/// Visible lines as FIRST:LAST, 1-based and inclusive; repeatable
	#[arg(long, value_name = "FIRST:LAST", value_parser = parse_line_range)]
	pub view: Vec<LineRange>,

	/// Jump configuration file (TOML)
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Target provider
	#[arg(long, short = 'm', default_value_t = JumpMode::Literal)]
	pub mode: JumpMode,

	/// Semantic tokens as JSON (`legend`, flat `data`, optional `encoding`)
	#[arg(long, value_name = "PATH")]
	pub tokens: Option<PathBuf>,

	/// Keys to replay, e.g. `fo<bs>o<cr>`
	#[arg(long, short = 'k', default_value = "")]
	pub keys: String,

	/// Print the report as JSON
	#[arg(long)]
	pub json: bool,

	/// Log filter used when GLIDE_LOG is unset
	#[arg(long, value_name = "FILTER", default_value = "warn")]
	pub log_level: String,

	/// Raise log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	/// Log filter from `-v` flags, falling back to `--log-level`.
	pub fn log_filter(&self) -> &str {
		match self.verbose {
			0 => &self.log_level,
			1 => "debug",
			_ => "trace",
		}
	}
}

fn parse_pair(s: &str) -> Result<(usize, usize), String> {
	let (a, b) = s.split_once(':').ok_or_else(|| format!("expected two numbers separated by ':', got {s:?}"))?;
	let number = |part: &str| match part.trim().parse::<usize>() {
		Ok(0) | Err(_) => Err(format!("expected a 1-based number, got {part:?}")),
		Ok(n) => Ok(n),
	};
	Ok((number(a)?, number(b)?))
}

pub fn parse_position(s: &str) -> Result<Position, String> {
	let (line, col) = parse_pair(s)?;
	Ok(Position::new(line - 1, col - 1))
}

pub fn parse_line_range(s: &str) -> Result<LineRange, String> {
	let (first, last) = parse_pair(s)?;
	if last < first {
		return Err(format!("last line {last} is before first line {first}"));
	}
	Ok(LineRange::new(first - 1, last))
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("1:1", Position::new(0, 0))]
	#[case("12:7", Position::new(11, 6))]
	#[case(" 3 : 4 ", Position::new(2, 3))]
	fn positions_are_one_based(#[case] input: &str, #[case] expected: Position) {
		assert_eq!(parse_position(input), Ok(expected));
	}

	#[rstest]
	#[case("")]
	#[case("5")]
	#[case("0:1")]
	#[case("a:b")]
	fn malformed_positions_are_rejected(#[case] input: &str) {
		assert!(parse_position(input).is_err());
	}

	#[test]
	fn view_is_inclusive() {
		assert_eq!(parse_line_range("3:5"), Ok(LineRange::new(2, 5)));
		assert_eq!(parse_line_range("4:4"), Ok(LineRange::new(3, 4)));
		assert!(parse_line_range("5:3").is_err());
	}

	#[test]
	fn arguments_parse() {
		let cli = Cli::try_parse_from([
			"glide", "src/main.rs", "--cursor", "2:3", "--view", "1:10", "--view", "20:30", "--mode", "hybrid", "--keys", "fo<cr>", "-vv",
		])
		.unwrap();
		assert_eq!(cli.cursor, Position::new(1, 2));
		assert_eq!(cli.view, vec![LineRange::new(0, 10), LineRange::new(19, 30)]);
		assert_eq!(cli.mode, JumpMode::Hybrid);
		assert_eq!(cli.log_filter(), "trace");
	}
}
