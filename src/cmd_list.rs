use anyhow::Result;
use chartpal::palettes::color_set::ColorSet;
use colored::Colorize;

use crate::commands::ListArgs;
use crate::commands_traits::SelectsPalette;
use crate::common::{debug_header, swatch};
use crate::vec_push_ext::PushStrExt;

pub(crate) fn chartpal_list(args: &ListArgs, debug: bool) -> Result<()> {
	debug_header(debug);
	let pal = args.chart_palette(debug)?;

	if args.json {
		let sets = pal.color_sets(0, pal.len()).collect::<Vec<ColorSet>>();
		println!("{}", serde_json::to_string_pretty(&sets)?);
		return Ok(());
	}

	let entries = pal.base().colors.iter().zip(pal.highlight().colors.iter());
	for (i, (base, highlight)) in entries.enumerate() {
		let mut extra_info: Vec<String> = Vec::new();
		if !base.name.is_empty() {
			extra_info.add(&base.name)
		}
		if !highlight.name.is_empty() && highlight.name != base.name {
			extra_info.add(format!("highlight: {}", highlight.name))
		}

		print!("[{i}] {} {} {} {}", swatch(base.color), base.color, swatch(highlight.color), highlight.color);
		if !extra_info.is_empty() {
			print!(" ({})", extra_info.join(", ").dimmed())
		}
		println!();
	}

	Ok(())
}
