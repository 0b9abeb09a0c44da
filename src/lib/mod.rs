use crate::palettes::builtin::BuiltInPalette;
use crate::palettes::color_set::ColorSet;

pub mod palettes;

/// Returns the [ColorSet] for the given chart series index, using the default built-in palette.
///
/// Any index is valid. Indices past the end of the palette wrap around and negative indices
/// count back from the end, so `lookup(-1)` is the last entry.
pub fn lookup(index: i64) -> ColorSet {
	lookup_in(index, BuiltInPalette::default())
}

/// Same as [lookup], but with an explicitly chosen built-in palette.
pub fn lookup_in(index: i64, palette: BuiltInPalette) -> ColorSet {
	palette.chart_palette().color_set(index)
}
