use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

// one RRGGBB value per line, with an optional # or 0x prefix.
// lines starting with ; are comments

impl Palette {
	fn from_hex_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let mut pal = Palette::default();

		for (i, line) in reader.lines().enumerate() {
			let line = line?;
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() || trimmed_line.starts_with(';') {
				continue;
			}

			let col = Color::from_hex_str(trimmed_line)
				.ok_or_else(|| PaletteError::InvalidTextLine { line: i + 1, msg: "Not a hexadecimal color value".to_string() })?;

			pal.push_color(col);

			if pal.len() > MAX_PALETTE_COLORS {
				return Err(PaletteError::TooManyColors);
			}
		}

		Ok(pal)
	}

	pub fn from_hex_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_hex_internal(reader)
	}

	pub fn from_hex_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_hex_internal(reader)
	}
}
