//! Fixture lookup for workspace tests.
//!
//! Fixtures are JSON documents under `<workspace>/fixtures`. The workspace is
//! found by walking up from this crate until a directory holding `fixtures/`
//! appears.

use std::path::{Path, PathBuf};

const FIXTURE_DIR: &str = "fixtures";

/// Directory holding the shared fixtures.
pub fn fixtures_dir() -> PathBuf {
	workspace_root().join(FIXTURE_DIR)
}

/// Workspace root: the nearest ancestor of this crate with a `fixtures/` directory.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.ancestors()
		.find(|dir| dir.join(FIXTURE_DIR).is_dir())
		.map(Path::to_path_buf)
		.unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Path of one named fixture.
pub fn fixture_path(name: &str) -> PathBuf {
	fixtures_dir().join(name)
}

/// Parsed contents of one JSON fixture. Panics with the offending path on failure.
pub fn load_json_fixture(name: &str) -> serde_json::Value {
	let path = fixture_path(name);
	let text = match std::fs::read_to_string(&path) {
		Ok(text) => text,
		Err(err) => panic!("cannot read fixture {}: {err}", path.display()),
	};
	match serde_json::from_str(&text) {
		Ok(value) => value,
		Err(err) => panic!("fixture {} is not json: {err}", path.display()),
	}
}

/// Cargo target directory, honoring `CARGO_TARGET_DIR`.
pub fn target_dir() -> PathBuf {
	match std::env::var_os("CARGO_TARGET_DIR") {
		Some(dir) => PathBuf::from(dir),
		None => workspace_root().join("target"),
	}
}
