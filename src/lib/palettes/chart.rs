use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::palettes::color_set::ColorSet;
use crate::palettes::palette::{Color, Palette, PaletteError};

/// A base palette paired with its highlight palette.
///
/// Both halves always have the same, non-zero length, so every normalized index is valid for both.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPalette {
	base: Palette,
	highlight: Palette,
}

#[derive(Deserialize)]
struct ChartPaletteFile {
	base: Vec<String>,
	highlight: Vec<String>,
}

impl ChartPalette {
	pub fn new(base: Palette, highlight: Palette) -> Result<ChartPalette, PaletteError> {
		if base.is_empty() || highlight.is_empty() {
			return Err(PaletteError::Empty);
		}

		if base.len() != highlight.len() {
			return Err(PaletteError::LengthMismatch { base: base.len(), highlight: highlight.len() });
		}

		Ok(ChartPalette { base, highlight })
	}

	/// Builds a palette from a static `(name, base, highlight)` table.
	pub(crate) fn from_table(table: &[(&str, Color, Color)]) -> ChartPalette {
		debug_assert!(!table.is_empty());

		let mut base = Palette::default();
		let mut highlight = Palette::default();
		for (name, b, h) in table {
			base.push_named_color(*b, *name);
			highlight.push_named_color(*h, *name);
		}

		ChartPalette { base, highlight }
	}

	pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(base: P, highlight: Q) -> Result<ChartPalette, PaletteError> {
		Self::new(Palette::load_from_file(base)?, Palette::load_from_file(highlight)?)
	}

	/// Parses `{"base": [...], "highlight": [...]}` where each item is a color string.
	pub fn from_json_string<S: AsRef<str>>(s: S) -> Result<ChartPalette, PaletteError> {
		let file: ChartPaletteFile = serde_json::from_str(s.as_ref())
			.map_err(|_| PaletteError::InvalidFile)?;

		Self::new(
			Palette::from_color_strings(&file.base)?,
			Palette::from_color_strings(&file.highlight)?,
		)
	}

	pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<ChartPalette, PaletteError> {
		let s = fs::read_to_string(path)?;
		Self::from_json_string(s)
	}

	pub fn base(&self) -> &Palette {
		&self.base
	}

	pub fn highlight(&self) -> &Palette {
		&self.highlight
	}

	pub fn len(&self) -> usize {
		self.base.len()
	}

	pub fn is_empty(&self) -> bool {
		self.base.is_empty()
	}

	/// Maps any index into `[0, len)`. Negative indices count back from the end.
	pub fn normalize_index(&self, index: i64) -> usize {
		// len is capped at 256, so the cast can't truncate
		index.rem_euclid(self.len() as i64) as usize
	}

	pub fn color_set(&self, index: i64) -> ColorSet {
		self.color_set_at(self.normalize_index(index))
	}

	/// Yields `count` consecutive color sets starting at `offset`, one per chart series.
	///
	/// Lazy, so any `count` is fine as long as the caller doesn't collect all of it.
	pub fn color_sets(&self, offset: i64, count: usize) -> impl Iterator<Item = ColorSet> {
		let start = self.normalize_index(offset);
		let len = self.len();
		(0..count).map(move |i| self.color_set_at((start + i % len) % len))
	}

	fn color_set_at(&self, i: usize) -> ColorSet {
		ColorSet::new(self.base.colors[i].color, self.highlight.colors[i].color)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn three() -> ChartPalette {
		ChartPalette::new(
			Palette::from(vec![0x110000, 0x002200, 0x000033]),
			Palette::from(vec![0xff0000, 0x00ff00, 0x0000ff]),
		).unwrap()
	}

	#[test]
	fn rejects_mismatched_lengths() {
		let err = ChartPalette::new(Palette::from(vec![0x0, 0x1]), Palette::from(vec![0x0])).unwrap_err();
		assert!(matches!(err, PaletteError::LengthMismatch { base: 2, highlight: 1 }));
	}

	#[test]
	fn rejects_empty() {
		let err = ChartPalette::new(Palette::default(), Palette::default()).unwrap_err();
		assert!(matches!(err, PaletteError::Empty));
	}

	#[test]
	fn index_normalization() {
		let pal = three();
		assert_eq!(pal.normalize_index(0), 0);
		assert_eq!(pal.normalize_index(3), 0);
		assert_eq!(pal.normalize_index(-1), 2);
		assert_eq!(pal.normalize_index(-3), 0);
		assert_eq!(pal.normalize_index(-4), 2);
		assert!(pal.normalize_index(i64::MIN) < 3);
		assert!(pal.normalize_index(i64::MAX) < 3);
	}

	#[test]
	fn series_wrap_around() {
		let pal = three();
		let sets = pal.color_sets(-1, 5).collect::<Vec<ColorSet>>();
		assert_eq!(sets.len(), 5);
		assert_eq!(sets[0], pal.color_set(2));
		assert_eq!(sets[1], pal.color_set(0));
		assert_eq!(sets[4], pal.color_set(0));
		assert_eq!(sets[1].fill_color, "rgba(17,0,0,0.5)");
		assert_eq!(sets[1].highlight_fill, "rgba(255,0,0,0.75)");
	}

	#[test]
	fn series_with_huge_count() {
		let pal = three();
		let sets = pal.color_sets(0, usize::MAX).take(4).collect::<Vec<ColorSet>>();
		assert_eq!(sets, [pal.color_set(0), pal.color_set(1), pal.color_set(2), pal.color_set(0)]);

		let sets = pal.color_sets(i64::MIN, usize::MAX).take(3).collect::<Vec<ColorSet>>();
		assert_eq!(sets[0], pal.color_set(i64::MIN));
		assert_eq!(sets[2], pal.color_set(i64::MIN + 2));
	}
}
