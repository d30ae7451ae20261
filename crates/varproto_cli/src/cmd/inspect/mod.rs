use std::path::PathBuf;

use tracing::debug;
use varproto::proto::{InputProtocol, ProtocolOptions, Var, VarProtocol};

use crate::cmd::Result;
use crate::cmd::util::{emit_json, read_json};

#[derive(clap::Args)]
pub struct Args {
	pub file: PathBuf,
	#[arg(long)]
	pub json: bool,
	/// Context nesting limit for the walk.
	#[arg(long)]
	pub max_depth: Option<usize>,
}

/// One field reported by the struct walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry {
	/// Dictionary key of the field.
	pub name: String,
	/// Kind label of the stored value.
	pub kind: &'static str,
}

/// Result of walking the top-level struct of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Walk {
	/// Fields with non-null values, in key order.
	pub fields: Vec<FieldEntry>,
	/// Fields whose value is null.
	pub skipped: usize,
}

/// Walk the top-level struct of a JSON document and report its fields.
pub fn run(args: Args) -> Result<()> {
	let Args { file: path, json, max_depth } = args;

	let document = read_json(&path)?;
	let options = max_depth.map(|max_depth| ProtocolOptions { max_depth }).unwrap_or_default();
	let walk = walk_struct(Var::from_json(&document), options)?;

	if json {
		let payload = InspectJson {
			path: path.display().to_string(),
			field_count: walk.fields.len(),
			skipped: walk.skipped,
			fields: walk
				.fields
				.iter()
				.map(|field| FieldJson {
					name: field.name.clone(),
					kind: field.kind.to_owned(),
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("fields: {}", walk.fields.len());
	println!("skipped: {}", walk.skipped);
	println!();
	println!("name\tkind");
	for field in &walk.fields {
		println!("{}\t{}", field.name, field.kind);
	}
	Ok(())
}

/// Read the field headers of the struct rooted at `root`, skipping every value.
pub fn walk_struct(root: Var, options: ProtocolOptions) -> Result<Walk> {
	let kinds = root.as_dictionary().cloned();
	let mut protocol = VarProtocol::with_options(options);
	protocol.set_var(root);

	let mut walk = Walk::default();
	protocol.read_struct_begin()?;
	loop {
		let field = protocol.read_field_begin()?;
		if field.is_stop() {
			break;
		}
		match field.name.filter(|name| !name.is_empty()) {
			Some(name) => {
				let kind = kinds
					.as_ref()
					.and_then(|dict| dict.get(&name))
					.map(|value| value.kind().as_str())
					.unwrap_or("null");
				walk.fields.push(FieldEntry { name, kind });
			}
			None => walk.skipped += 1,
		}
		protocol.skip(field.field_type)?;
		protocol.read_field_end()?;
	}
	protocol.read_struct_end()?;

	debug!(fields = walk.fields.len(), skipped = walk.skipped, "inspect");
	Ok(walk)
}

#[derive(serde::Serialize)]
struct InspectJson {
	path: String,
	field_count: usize,
	skipped: usize,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	name: String,
	kind: String,
}
