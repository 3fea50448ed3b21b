use dollar::Selection;
use tracing::info;

use crate::cli::QueryArgs;
use crate::error::Result;
use crate::input::load_document;
use crate::output::{MatchedElement, QueryData};

pub fn execute(args: &QueryArgs) -> Result<QueryData> {
	let mut dom = load_document(&args.input)?;
	let selection = Selection::new(&mut dom, &args.selector);
	let selector = selection.selector().clone();
	let elements = selection.into_elements();
	info!(target = "dollar", selector = %selector, kind = selector.kind(), count = elements.len(), "query");

	Ok(QueryData {
		selector: args.selector.clone(),
		kind: selector.kind().to_string(),
		count: elements.len(),
		elements: elements.iter().map(|&el| MatchedElement::describe(&dom, el)).collect(),
	})
}
