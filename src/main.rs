use std::process::ExitCode;

use clap::Parser;

use crate::cmd_list::chartpal_list;
use crate::cmd_lookup::chartpal_lookup;
use crate::cmd_series::chartpal_series;
use crate::commands::{Cli, Commands};

mod cmd_list;
mod cmd_lookup;
mod cmd_series;
mod commands;
mod commands_traits;
mod common;
mod vec_push_ext;

fn main() -> ExitCode {
	let cli = Cli::parse();

	let result = match &cli.command {
		Some(Commands::Lookup(args)) => chartpal_lookup(args, cli.debug),
		Some(Commands::Series(args)) => chartpal_series(args, cli.debug),
		Some(Commands::List(args)) => chartpal_list(args, cli.debug),
		None => {
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
