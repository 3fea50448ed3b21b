use dollar::Selection;
use tracing::info;

use crate::cli::ApplyArgs;
use crate::error::{CliError, Result};
use crate::input::load_document;
use crate::output::{ApplyData, OutputFormat};

pub fn execute(args: &ApplyArgs, format: OutputFormat) -> Result<ApplyData> {
	if args.snapshot && format == OutputFormat::Html {
		return Err(CliError::InvalidInput("--snapshot cannot be combined with -f html".into()));
	}

	let mut dom = load_document(&args.input)?;
	let mut selection = Selection::new(&mut dom, &args.selector);
	selection.apply_all(&args.operations);
	let selector = selection.selector().clone();
	let count = selection.len();
	info!(
		target = "dollar",
		selector = %selector,
		count,
		operations = args.operations.len(),
		"applied operations"
	);

	let (html, snapshot) = if args.snapshot { (None, Some(dom.to_snapshot())) } else { (Some(dom.to_html()), None) };

	Ok(ApplyData {
		selector: args.selector.clone(),
		kind: selector.kind().to_string(),
		count,
		operations: args.operations.iter().map(ToString::to_string).collect(),
		html,
		snapshot,
	})
}
