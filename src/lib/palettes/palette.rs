use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static TRIPLET_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})$").unwrap()
});

static CSS_RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?i)rgba?\(\s*(?P<r>\d{1,3})\s*,\s*(?P<g>\d{1,3})\s*,\s*(?P<b>\d{1,3})\s*(?:,\s*[0-9.]+\s*)?\)$").unwrap()
});

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Formats the color as a CSS `rgba(r,g,b,a)` string.
	///
	/// The alpha value uses the shortest float representation, so `1.0` becomes `1` and `0.5` stays `0.5`.
	pub fn rgba(&self, alpha: f64) -> String {
		format!("rgba({},{},{},{alpha})", self.r, self.g, self.b)
	}

	/// Parses `RRGGBB`, optionally prefixed with `#` or `0x`.
	pub(crate) fn from_hex_str(s: &str) -> Option<Color> {
		let s = s.trim();
		let s = s.strip_prefix("0x").unwrap_or(s);
		let s = s.strip_prefix("#").unwrap_or(s);

		if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
			return None;
		}

		u32::from_str_radix(s, 16).ok().map(Color::from)
	}

	/// Reads the named `r`, `g` and `b` groups. On failure, returns the name of the first channel that doesn't fit in a byte.
	fn from_captures(groups: &Captures) -> Result<Color, &'static str> {
		let channel = |name: &str, label: &'static str| {
			groups.name(name)
				.and_then(|m| m.as_str().parse::<u8>().ok())
				.ok_or(label)
		};

		Ok(Color::from([channel("r", "red")?, channel("g", "green")?, channel("b", "blue")?]))
	}

	/// Parses the bare `R,G,B` notation.
	///
	/// `None` if `s` isn't shaped like a triplet at all, `Some(Err(channel))` if a channel is out of range.
	pub(crate) fn from_triplet(s: &str) -> Option<Result<Color, &'static str>> {
		TRIPLET_RE.captures(s.trim()).map(|groups| Color::from_captures(&groups))
	}
}

impl FromStr for Color {
	type Err = PaletteError;

	/// Accepts `R,G,B`, `rgb(R,G,B)`, `rgba(R,G,B,A)` (alpha is dropped) and hexadecimal notation.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		let invalid = || PaletteError::InvalidColor { value: trimmed.to_string() };

		if let Some(col) = Color::from_triplet(trimmed) {
			return col.map_err(|_| invalid());
		}

		if let Some(groups) = CSS_RGB_RE.captures(trimmed) {
			return Color::from_captures(&groups).map_err(|_| invalid());
		}

		Color::from_hex_str(trimmed).ok_or_else(invalid)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let mut rgb = self.r as u32;
		rgb = (rgb << 8) | self.g as u32;
		rgb = (rgb << 8) | self.b as u32;
		write!(f, "#{:06X}", rgb)
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Entry {
	pub color: Color,
	pub name: String,
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<Entry>,
}

impl Palette {
	pub fn push_color(&mut self, c: Color) {
		self.colors.push(Entry { color: c, ..Default::default() });
	}

	pub fn push_named_color<S: Into<String>>(&mut self, c: Color, name: S) {
		self.colors.push(Entry { color: c, name: name.into() });
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn color(&self, i: usize) -> Option<Color> {
		self.colors.get(i).map(|e| e.color)
	}

	fn guess_format<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref()
			.extension()?
			.to_str()?
			.to_lowercase();

		match ext.as_str() {
			"hex" => Some(PaletteFormat::Hex),
			"json" => Some(PaletteFormat::Json),
			"rgb" => Some(PaletteFormat::Rgb),
			_ => None
		}
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		let pal = match Self::guess_format(&path) {
			Some(PaletteFormat::Hex) => Self::from_hex_file(&path),
			Some(PaletteFormat::Json) => Self::from_json_file(&path),
			Some(PaletteFormat::Rgb) => Self::from_rgb_file(&path),
			None => Err(PaletteError::InvalidFile),
		}?;

		pal.non_empty()
	}

	pub fn load_from_string<S: Into<String>>(s: S, format: PaletteFormat) -> Result<Palette, PaletteError> {
		let pal = match format {
			PaletteFormat::Hex => Self::from_hex_string(s),
			PaletteFormat::Json => Self::from_json_string(s),
			PaletteFormat::Rgb => Self::from_rgb_string(s),
		}?;

		pal.non_empty()
	}

	fn non_empty(self) -> Result<Palette, PaletteError> {
		if self.is_empty() {
			return Err(PaletteError::Empty);
		}
		Ok(self)
	}
}

impl From<Vec<u32>> for Palette {
	fn from(v: Vec<u32>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(Color::from(c));
		}
		pal
	}
}

impl From<Vec<Color>> for Palette {
	fn from(v: Vec<Color>) -> Self {
		let mut pal = Palette::default();
		for c in v {
			pal.push_color(c);
		}
		pal
	}
}

#[derive(Debug)]
pub enum PaletteError {
	Empty,
	TooManyColors,
	InvalidFile,
	InvalidColor { value: String },
	InvalidTextLine { line: usize, msg: String },
	InvalidJsonEntry { index: usize, msg: String },
	LengthMismatch { base: usize, highlight: usize },
	IoErr(std::io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::Empty => write!(f, "The loaded palette is empty"),
			PaletteError::TooManyColors => write!(f, "The palette contains more than 256 colors"),
			PaletteError::InvalidFile => write!(f, "Invalid file"),
			PaletteError::InvalidColor { value } => write!(f, "\"{value}\" is not a valid color value"),
			PaletteError::InvalidTextLine { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			PaletteError::InvalidJsonEntry { index, msg } => write!(f, "Invalid JSON array item at index {index}: {msg}"),
			PaletteError::LengthMismatch { base, highlight } =>
				write!(f, "The base palette has {base} colors but the highlight palette has {highlight}"),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {}

impl From<std::io::Error> for PaletteError {
	fn from(e: std::io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteFormat {
	Hex, // .hex
	Json, // .json
	Rgb, // .rgb
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Hex => write!(f, "hex"),
			PaletteFormat::Json => write!(f, "json"),
			PaletteFormat::Rgb => write!(f, "rgb"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn color_parsing() {
		let orange = Color::new(255, 178, 102);
		for s in ["255,178,102", " 255, 178 ,102 ", "rgb(255,178,102)", "rgba(255, 178, 102, 0.5)", "#FFB266", "0xffb266", "FFB266"] {
			assert_eq!(s.parse::<Color>().unwrap(), orange, "{s}");
		}

		for s in ["", "256,0,0", "1,2", "rgb(1,2,3", "#FFB26", "#GGGGGG", "+FB266"] {
			assert!(s.parse::<Color>().is_err(), "{s}");
		}
	}

	#[test]
	fn color_formatting() {
		let c = Color::new(127, 0, 255);
		assert_eq!(c.to_string(), "#7F00FF");
		assert_eq!(c.rgba(0.5), "rgba(127,0,255,0.5)");
		assert_eq!(c.rgba(0.75), "rgba(127,0,255,0.75)");
		assert_eq!(c.rgba(1.0), "rgba(127,0,255,1)");
	}
}
