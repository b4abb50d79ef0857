use std::io::Write;
use std::process::Command;

fn write_temp(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
	file.write_all(contents.as_bytes()).unwrap();
	file
}

fn glide(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_glide")).args(args).env_remove("GLIDE_LOG").output().unwrap()
}

#[test]
fn prints_frames_and_jump() {
	let source = write_temp("fn main() {\n\tlet foo = 1;\n\tlet bar = foo;\n}\n", ".rs");
	let path = source.path().to_str().unwrap();
	let output = glide(&[path, "--cursor", "2:1", "--keys", "foa"]);

	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.contains("[target-selection]"), "{stdout}");
	assert!(stdout.contains("jumped to 2:6 (minimal)"), "{stdout}");
}

#[test]
fn json_report_and_config_file() {
	let source = write_temp("x1 x2\n", ".txt");
	let config = write_temp("alphabet = \"fjk\"\nhome-row = \"jk\"\nmin-pattern-length = 1\n\n[density]\nlow = 0\nhigh = 0\n", ".toml");
	let output = glide(&[
		source.path().to_str().unwrap(),
		"--config",
		config.path().to_str().unwrap(),
		"--keys",
		"xfk",
		"--json",
	]);

	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
	assert_eq!(report["steps"][1]["frame"]["state"], "awaiting-second");
	assert_eq!(report["outcome"]["outcome"], "jumped");
	assert_eq!(report["outcome"]["position"]["col"], 3);
}

#[test]
fn invalid_config_is_reported() {
	let source = write_temp("abc\n", ".txt");
	let config = write_temp("alphabet = \"\"\n", ".toml");
	let output = glide(&[source.path().to_str().unwrap(), "--config", config.path().to_str().unwrap()]);

	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("loading config"), "{stderr}");
}
