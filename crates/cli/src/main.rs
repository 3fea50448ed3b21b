use clap::Parser;
use dollar_cli::{cli::Cli, commands, logging};

fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	// The failure has already been reported in the requested format.
	if commands::dispatch(cli).is_err() {
		std::process::exit(1);
	}
}
