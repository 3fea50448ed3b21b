//! Command implementations.

mod apply;
mod query;

use serde::Serialize;
use tracing::warn;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::output::{CommandInputs, OutputFormat, Render, ResultBuilder, print_result};

pub use apply::execute as execute_apply;
pub use query::execute as execute_query;

/// Runs the parsed command and prints its result.
///
/// Failures are printed in the requested format before being returned.
pub fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;
	match cli.command {
		Commands::Query(args) => {
			let inputs = CommandInputs {
				selector: Some(args.selector.clone()),
				input: Some(args.input.label()),
				operations: Vec::new(),
			};
			run("query", inputs, format, || query::execute(&args))
		}
		Commands::Apply(args) => {
			let inputs = CommandInputs {
				selector: Some(args.selector.clone()),
				input: Some(args.input.label()),
				operations: args.operations.iter().map(ToString::to_string).collect(),
			};
			run("apply", inputs, format, || apply::execute(&args, format))
		}
	}
}

fn run<T, F>(command: &str, inputs: CommandInputs, format: OutputFormat, execute: F) -> Result<()>
where
	T: Serialize + Render,
	F: FnOnce() -> Result<T>,
{
	let builder = ResultBuilder::new(command).inputs(inputs);
	match execute() {
		Ok(data) => {
			print_result(&builder.data(data).build(), format);
			Ok(())
		}
		Err(err) => {
			warn!(target = "dollar", command, error = %err, "command failed");
			print_result(&builder.error(err.code(), err.to_string()).build(), format);
			Err(err)
		}
	}
}
