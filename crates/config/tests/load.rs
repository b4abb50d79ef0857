use std::io::Write;

use glide_config::{ConfigError, JumpConfig};

#[test]
fn load_reads_file_from_disk() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "max-candidates = 42\ncluster-gap = 2").unwrap();

	let config = JumpConfig::load(file.path()).unwrap();
	assert_eq!(config.max_candidates, 42);
	assert_eq!(config.cluster_gap, 2);
}

#[test]
fn load_reports_missing_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");

	match JumpConfig::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected Io error, got {other:?}"),
	}
}
