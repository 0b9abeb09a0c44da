use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

impl Palette {
	/// Builds a palette from color strings in any notation [Color] can parse.
	pub(crate) fn from_color_strings(colors: &[String]) -> Result<Palette, PaletteError> {
		if colors.len() > MAX_PALETTE_COLORS {
			return Err(PaletteError::TooManyColors);
		}

		let colors = colors.iter().enumerate().map(|(i, c)| {
			c.parse::<Color>().map_err(|_| PaletteError::InvalidJsonEntry {
				index: i,
				msg: format!("\"{}\" is not a valid color value", c.trim()),
			})
		}).collect::<Result<Vec<Color>, PaletteError>>()?;

		Ok(Palette::from(colors))
	}

	fn from_json_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let colors: Vec<String> = serde_json::from_reader(reader)
			.map_err(|_| PaletteError::InvalidFile)?;

		Self::from_color_strings(&colors)
	}

	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_json_internal(reader)
	}

	pub fn from_json_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_json_internal(reader)
	}
}
