use std::borrow::Cow;

use anyhow::Result;
use chartpal::palettes::chart::ChartPalette;

use crate::commands::{ListArgs, LookupArgs, PaletteArgs, SeriesArgs};
use crate::common::resolve_palette;

pub(crate) trait SelectsPalette {
	fn palette_args(&self) -> &PaletteArgs;

	fn chart_palette(&self, debug: bool) -> Result<Cow<'static, ChartPalette>> {
		resolve_palette(self.palette_args(), debug)
	}
}

impl SelectsPalette for LookupArgs {
	fn palette_args(&self) -> &PaletteArgs {
		&self.palette
	}
}

impl SelectsPalette for SeriesArgs {
	fn palette_args(&self) -> &PaletteArgs {
		&self.palette
	}
}

impl SelectsPalette for ListArgs {
	fn palette_args(&self) -> &PaletteArgs {
		&self.palette
	}
}
