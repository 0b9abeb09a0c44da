use anyhow::Result;
use chartpal::palettes::color_set::ColorSet;
use colored::Colorize;

use crate::commands::LookupArgs;
use crate::commands_traits::SelectsPalette;
use crate::common::{debug_header, swatch};

pub(crate) fn chartpal_lookup(args: &LookupArgs, debug: bool) -> Result<()> {
	debug_header(debug);
	let pal = args.chart_palette(debug)?;

	let i = pal.normalize_index(args.index);
	if debug {
		eprintln!("index {} -> {i}", args.index);
	}

	let set = pal.color_set(args.index);
	if args.json {
		println!("{}", serde_json::to_string(&set)?);
		return Ok(());
	}

	print_color_set(&set, &pal.base().colors[i].name);
	let (base, highlight) = (pal.base().colors[i].color, pal.highlight().colors[i].color);
	println!("{} {}", swatch(base), swatch(highlight));

	Ok(())
}

fn print_color_set(set: &ColorSet, name: &str) {
	if !name.is_empty() {
		println!("{}", name.bold());
	}
	println!("{}: {}", "fillColor".cyan(), set.fill_color);
	println!("{}: {}", "strokeColor".cyan(), set.stroke_color);
	println!("{}: {}", "highlightFill".cyan(), set.highlight_fill);
	println!("{}: {}", "highlightStroke".cyan(), set.highlight_stroke);
}
