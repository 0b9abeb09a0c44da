use anyhow::Result;
use chartpal::palettes::color_set::ColorSet;

use crate::commands::SeriesArgs;
use crate::commands_traits::SelectsPalette;
use crate::common::debug_header;

pub(crate) fn chartpal_series(args: &SeriesArgs, debug: bool) -> Result<()> {
	debug_header(debug);
	let pal = args.chart_palette(debug)?;

	if debug {
		eprintln!("{} series from index {} (first entry {})", args.count, args.offset, pal.normalize_index(args.offset));
	}

	let sets = pal.color_sets(args.offset, args.count as usize).collect::<Vec<ColorSet>>();
	let json = if args.pretty {
		serde_json::to_string_pretty(&sets)?
	} else {
		serde_json::to_string(&sets)?
	};
	println!("{json}");

	Ok(())
}
