use clap::Args;
use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use chartpal::palettes::builtin::BuiltInPalette;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Per-series rgba color sets for Chart.js style charts")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints diagnostic information to stderr.")]
	pub debug: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct PaletteArgs {
	#[arg(short, long, value_enum, help = "Selects a built-in palette. [default: basic]")]
	pub palette: Option<BuiltInPalette>,

	#[arg(long, conflicts_with_all = ["palette", "base", "highlight"],
	help = "Loads a chart palette from a JSON file of the form {\"base\": [...], \"highlight\": [...]}.")]
	pub file: Option<PathBuf>,

	#[arg(long, requires = "highlight", conflicts_with = "palette", help = "Loads the base palette from a .hex, .json or .rgb file.")]
	pub base: Option<PathBuf>,
	#[arg(long, requires = "base", conflicts_with = "palette", help = "Loads the highlight palette from a .hex, .json or .rgb file.")]
	pub highlight: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct LookupArgs {
	#[arg(allow_negative_numbers = true, help = "The series index. Wraps around the palette; negative values count back from the end.")]
	pub index: i64,

	#[command(flatten)]
	pub palette: PaletteArgs,

	#[arg(short, long, help = "Prints the color set as a JSON object.")]
	pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct SeriesArgs {
	#[arg(help = "The number of chart series. (at most 65535)")]
	pub count: u16,

	#[arg(short, long, allow_negative_numbers = true, help = "The index of the first series.", default_value_t = 0)]
	pub offset: i64,

	#[arg(long, help = "Pretty-prints the JSON output.")]
	pub pretty: bool,

	#[command(flatten)]
	pub palette: PaletteArgs,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ListArgs {
	#[command(flatten)]
	pub palette: PaletteArgs,

	#[arg(short, long, help = "Prints every color set as a JSON array.")]
	pub json: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Prints the color set for a single series index")]
	Lookup(LookupArgs),

	#[command(about = "Prints the color sets for a number of consecutive series as JSON")]
	Series(SeriesArgs),

	#[command(about = "Lists every entry of a palette")]
	List(ListArgs),
}

#[cfg(test)]
mod tests {
	use super::*;

	fn series_count(args: &[&str]) -> Result<u16, clap::Error> {
		let cli = Cli::try_parse_from(args)?;
		match cli.command {
			Some(Commands::Series(series)) => Ok(series.count),
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn series_count_limit() {
		assert_eq!(series_count(&["chartpal", "series", "0"]).unwrap(), 0);
		assert_eq!(series_count(&["chartpal", "series", "65535"]).unwrap(), u16::MAX);

		for count in ["65536", "18446744073709551615", "-1"] {
			assert!(series_count(&["chartpal", "series", count]).is_err(), "{count}");
		}
	}

	#[test]
	fn negative_lookup_index() {
		let cli = Cli::try_parse_from(["chartpal", "lookup", "-1", "--json"]).unwrap();
		match cli.command {
			Some(Commands::Lookup(lookup)) => {
				assert_eq!(lookup.index, -1);
				assert!(lookup.json);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}
}
