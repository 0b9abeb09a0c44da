use std::fmt::{Display, Formatter};
use std::sync::LazyLock;

use crate::palettes::chart::ChartPalette;
use crate::palettes::palette::Color;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BuiltInPalette {
	/// Eight pastel fills with fully saturated highlights, starting at red
	#[default]
	Basic,
}

const BASIC: [(&str, Color, Color); 8] = [
	("Red", Color::new(255, 102, 102), Color::new(255, 0, 0)),
	("Orange", Color::new(255, 178, 102), Color::new(255, 128, 0)),
	("Yellow", Color::new(255, 255, 102), Color::new(255, 255, 0)),
	("Green", Color::new(102, 255, 102), Color::new(0, 255, 0)),
	("Turquoise", Color::new(102, 255, 255), Color::new(0, 255, 255)),
	("Blue", Color::new(102, 102, 255), Color::new(0, 0, 255)),
	("Purple", Color::new(178, 102, 255), Color::new(127, 0, 255)),
	("Pink", Color::new(255, 102, 178), Color::new(255, 0, 127)),
];

static BASIC_PALETTE: LazyLock<ChartPalette> = LazyLock::new(|| ChartPalette::from_table(&BASIC));

impl BuiltInPalette {
	pub fn chart_palette(self) -> &'static ChartPalette {
		match self {
			BuiltInPalette::Basic => &BASIC_PALETTE,
		}
	}
}

impl Display for BuiltInPalette {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			BuiltInPalette::Basic => write!(f, "basic"),
		}
	}
}
