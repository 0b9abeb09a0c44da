use std::borrow::Cow;

use anyhow::{Context, Result};
use chartpal::palettes::chart::ChartPalette;
use chartpal::palettes::palette::Color;
use colored::{ColoredString, Colorize};

use crate::commands::PaletteArgs;

pub(crate) fn debug_header(debug: bool) {
	if debug {
		eprintln!("{:#^40}", " DEBUG MODE ");
	}
}

/// Loads the chart palette selected on the command line, falling back to the default built-in one.
pub(crate) fn resolve_palette(args: &PaletteArgs, debug: bool) -> Result<Cow<'static, ChartPalette>> {
	let pal = if let Some(file) = &args.file {
		if debug {
			eprintln!("palette file: {}", file.display());
		}
		let pal = ChartPalette::from_json_file(file)
			.with_context(|| format!("can't load chart palette {}", file.display()))?;
		Cow::Owned(pal)
	} else if let (Some(base), Some(highlight)) = (&args.base, &args.highlight) {
		if debug {
			eprintln!("base palette: {}", base.display());
			eprintln!("highlight palette: {}", highlight.display());
		}
		let pal = ChartPalette::from_files(base, highlight)
			.with_context(|| format!("can't load palettes {} and {}", base.display(), highlight.display()))?;
		Cow::Owned(pal)
	} else {
		let builtin = args.palette.unwrap_or_default();
		if debug {
			eprintln!("built-in palette: {builtin}");
		}
		Cow::Borrowed(builtin.chart_palette())
	};

	if debug {
		eprintln!("palette size: {}", pal.len());
	}

	Ok(pal)
}

/// A two-character block in the given color, for terminals with truecolor support.
pub(crate) fn swatch(c: Color) -> ColoredString {
	"  ".on_truecolor(c.r, c.g, c.b)
}
