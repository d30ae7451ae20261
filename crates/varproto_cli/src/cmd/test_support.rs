use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

pub(crate) use varproto_testkit::fixture_path;

const BIN_NAME: &str = "varproto";

/// One invocation of the built `varproto` binary.
pub(crate) struct Invocation {
	args: Vec<String>,
	stdin: Vec<u8>,
}

pub(crate) fn varproto<I, S>(args: I) -> Invocation
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	Invocation {
		args: args.into_iter().map(Into::into).collect(),
		stdin: Vec::new(),
	}
}

impl Invocation {
	pub(crate) fn stdin(mut self, bytes: &[u8]) -> Self {
		self.stdin = bytes.to_vec();
		self
	}

	pub(crate) fn output(self) -> Output {
		let mut child = Command::new(binary())
			.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.spawn()
			.unwrap_or_else(|err| panic!("cannot spawn {BIN_NAME} {:?}: {err}", self.args));
		if let Some(mut pipe) = child.stdin.take() {
			pipe.write_all(&self.stdin).expect("stdin accepts input");
		}
		child.wait_with_output().expect("command completes")
	}

	/// Stdout of a successful run.
	pub(crate) fn stdout(self) -> Vec<u8> {
		let output = self.output();
		assert!(
			output.status.success(),
			"{BIN_NAME} exited with {}: {}",
			output.status,
			String::from_utf8_lossy(&output.stderr)
		);
		output.stdout
	}

	/// Stdout of a successful run parsed as JSON.
	pub(crate) fn json(self) -> serde_json::Value {
		serde_json::from_slice(&self.stdout()).expect("stdout should be valid json")
	}

	/// Stderr of a run that must fail.
	pub(crate) fn failure(self) -> String {
		let output = self.output();
		assert!(!output.status.success(), "{BIN_NAME} unexpectedly succeeded");
		String::from_utf8_lossy(&output.stderr).into_owned()
	}
}

fn binary() -> &'static PathBuf {
	static BIN: OnceLock<PathBuf> = OnceLock::new();
	BIN.get_or_init(locate_binary)
}

/// Prefer the path cargo hands integration tests, then the binary next to
/// this test executable, and build it as a last resort.
fn locate_binary() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_varproto") {
		return PathBuf::from(path);
	}

	let file_name = format!("{BIN_NAME}{}", std::env::consts::EXE_SUFFIX);
	let beside_tests = std::env::current_exe()
		.ok()
		.and_then(|exe| exe.parent().and_then(|deps| deps.parent()).map(|dir| dir.join(&file_name)));
	if let Some(path) = beside_tests.filter(|path| path.is_file()) {
		return path;
	}

	let status = Command::new(env!("CARGO"))
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--bin", BIN_NAME])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "cargo build --bin {BIN_NAME} failed");
	varproto_testkit::target_dir().join("debug").join(file_name)
}
