//! Document loading for CLI commands.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use dollar::dom::Dom;
use dollar_protocol::DocumentSnapshot;
use tracing::debug;

use crate::error::{CliError, Result};

/// How to interpret the input bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
	/// JSON for `.json` paths or input starting with `{`, HTML otherwise
	#[default]
	Auto,
	Html,
	/// Document snapshot JSON
	Json,
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
	/// Input file, or `-` for stdin
	#[arg(short, long, value_name = "FILE", default_value = "-")]
	pub input: PathBuf,

	/// Input format
	#[arg(long, value_enum, default_value_t = InputFormat::Auto)]
	pub input_format: InputFormat,
}

impl InputArgs {
	pub fn is_stdin(&self) -> bool {
		self.input.as_os_str() == "-"
	}

	/// Display name used in results and errors.
	pub fn label(&self) -> String {
		if self.is_stdin() { "<stdin>".to_string() } else { self.input.display().to_string() }
	}
}

/// Reads and parses the document named by `args`.
pub fn load_document(args: &InputArgs) -> Result<Dom> {
	let source = read_source(args)?;
	let format = resolve_format(args.input_format, &args.input, &source);
	debug!(target = "dollar", input = %args.label(), ?format, bytes = source.len(), "loading document");
	parse_document(&source, format)
}

pub fn parse_document(source: &str, format: InputFormat) -> Result<Dom> {
	match format {
		InputFormat::Json => {
			let snapshot: DocumentSnapshot = serde_json::from_str(source)?;
			Ok(Dom::from_snapshot(&snapshot)?)
		}
		InputFormat::Html | InputFormat::Auto => Ok(Dom::parse_html(source)),
	}
}

fn read_source(args: &InputArgs) -> Result<String> {
	let io_error = |source| CliError::Io { path: args.label(), source };
	if args.is_stdin() {
		let mut buf = String::new();
		std::io::stdin().read_to_string(&mut buf).map_err(io_error)?;
		Ok(buf)
	} else {
		std::fs::read_to_string(&args.input).map_err(io_error)
	}
}

fn resolve_format(requested: InputFormat, path: &Path, source: &str) -> InputFormat {
	match requested {
		InputFormat::Auto => {
			let json_path = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
			if json_path || source.trim_start().starts_with('{') { InputFormat::Json } else { InputFormat::Html }
		}
		explicit => explicit,
	}
}
