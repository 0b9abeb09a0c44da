use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::palettes::MAX_PALETTE_COLORS;
use crate::palettes::palette::{Color, Palette, PaletteError};

// the "R,G,B" notation charting libraries splice into rgba() strings, one color per line:
//
//   255,102,102 # Red
//   255,178,102 # Orange

impl Palette {
	fn from_rgb_internal<R: Read + BufRead>(reader: R) -> Result<Palette, PaletteError> {
		let mut pal = Palette::default();

		for (i, line) in reader.lines().enumerate() {
			let line = line?;
			let trimmed_line = line.trim();
			if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
				continue;
			}

			let line_no = i + 1;
			let (rgb, name) = match trimmed_line.split_once('#') {
				Some((rgb, name)) => (rgb, name.trim()),
				None => (trimmed_line, ""),
			};

			let col = match Color::from_triplet(rgb) {
				None => {
					return Err(PaletteError::InvalidTextLine {
						line: line_no,
						msg: "Malformed line".to_string(),
					});
				}
				Some(Err(channel)) => {
					return Err(PaletteError::InvalidTextLine {
						line: line_no,
						msg: format!("Invalid {channel} value"),
					});
				}
				Some(Ok(col)) => col
			};

			if name.is_empty() {
				pal.push_color(col);
			} else {
				pal.push_named_color(col, name);
			}

			if pal.len() > MAX_PALETTE_COLORS {
				return Err(PaletteError::TooManyColors);
			}
		}

		Ok(pal)
	}

	pub fn from_rgb_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_rgb_internal(reader)
	}

	pub fn from_rgb_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_rgb_internal(reader)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_and_unnamed_lines() {
		let pal = Palette::from_rgb_string("# basic colors\n255,102,102 # Red\n\n 102, 255, 102\n").unwrap();
		assert_eq!(pal.len(), 2);
		assert_eq!(pal.colors[0].name, "Red");
		assert_eq!(pal.colors[1].name, "");
		assert_eq!(pal.color(1), Some(Color::new(102, 255, 102)));
	}

	#[test]
	fn channel_out_of_range() {
		let err = Palette::from_rgb_string("255,102,102\n255,300,0\n").unwrap_err();
		match err {
			PaletteError::InvalidTextLine { line, msg } => {
				assert_eq!(line, 2);
				assert_eq!(msg, "Invalid green value");
			}
			e => panic!("unexpected error: {e}"),
		}
	}

	#[test]
	fn lines_parse_like_color_strings() {
		let lines = ["12,34,56#Teal", " 0 , 0 , 255 ", "255,255,255 # White # again"];
		let pal = Palette::from_rgb_string(lines.join("\n")).unwrap();

		for (i, line) in lines.iter().enumerate() {
			let rgb = line.split('#').next().unwrap();
			assert_eq!(pal.color(i), Some(rgb.parse::<Color>().unwrap()), "{line}");
		}
		assert_eq!(pal.colors[0].name, "Teal");
		assert_eq!(pal.colors[2].name, "White # again");

		// CSS and hex notation are valid colors, but not valid .rgb lines
		for line in ["rgb(12,34,56)", "0C2238", "1234,0,0"] {
			let err = Palette::from_rgb_string(line).unwrap_err();
			assert!(matches!(err, PaletteError::InvalidTextLine { line: 1, .. }), "{line}");
		}
	}
}
