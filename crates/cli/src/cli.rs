use clap::{ArgAction, Args, Parser, Subcommand};
use dollar::Operation;

use crate::input::InputArgs;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "dollar")]
#[command(about = "Select elements by #id, .class or tag name and mutate them")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = ArgAction::Count)]
	pub verbose: u8,

	/// Output format
	#[arg(short = 'f', long, global = true, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Resolve a selector and report the matched elements
	#[command(alias = "q")]
	Query(QueryArgs),

	/// Resolve a selector, apply operations to every match and print the document
	Apply(ApplyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
	/// Selector: #id, .class or a tag name
	pub selector: String,

	#[command(flatten)]
	pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ApplyArgs {
	/// Selector: #id, .class or a tag name
	pub selector: String,

	/// Operations applied in order: hide, show, add-class=NAME,
	/// remove-class=NAME, text=CONTENT, add-child=TAG
	#[arg(value_name = "OP")]
	pub operations: Vec<Operation>,

	/// Print the resulting document as snapshot JSON instead of HTML
	#[arg(long)]
	pub snapshot: bool,

	#[command(flatten)]
	pub input: InputArgs,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_apply_chain() {
		let cli = Cli::try_parse_from(["dollar", "apply", ".foobar", "add-class=bar", "hide", "-i", "page.html"]).unwrap();
		let Commands::Apply(args) = cli.command else {
			panic!("expected apply");
		};
		assert_eq!(args.selector, ".foobar");
		assert_eq!(args.operations, vec![Operation::AddClass("bar".into()), Operation::Hide]);
		assert_eq!(args.input.input.to_str(), Some("page.html"));
	}

	#[test]
	fn rejects_unknown_operation() {
		assert!(Cli::try_parse_from(["dollar", "apply", "div", "explode"]).is_err());
	}

	#[test]
	fn format_is_global() {
		let cli = Cli::try_parse_from(["dollar", "query", "#page", "-f", "json"]).unwrap();
		assert_eq!(cli.format, OutputFormat::Json);
	}
}
