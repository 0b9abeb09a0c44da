use serde::{Deserialize, Serialize};

use crate::palettes::palette::Color;

/// Stroke color of every series, regardless of index.
pub const STROKE_COLOR: &str = "rgba(220,220,220,0.8)";
/// Stroke color of a highlighted series, regardless of index.
pub const HIGHLIGHT_STROKE: &str = "rgba(220,220,220,1)";

pub const FILL_ALPHA: f64 = 0.5;
pub const HIGHLIGHT_FILL_ALPHA: f64 = 0.75;

/// The per-series color configuration a Chart.js style library expects.
///
/// Serializes with the library's key names (`fillColor`, `strokeColor`, `highlightFill`, `highlightStroke`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSet {
	pub fill_color: String,
	pub stroke_color: String,
	pub highlight_fill: String,
	pub highlight_stroke: String,
}

impl ColorSet {
	pub fn new(fill: Color, highlight: Color) -> Self {
		Self {
			fill_color: fill.rgba(FILL_ALPHA),
			stroke_color: STROKE_COLOR.to_string(),
			highlight_fill: highlight.rgba(HIGHLIGHT_FILL_ALPHA),
			highlight_stroke: HIGHLIGHT_STROKE.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn serializes_with_chartjs_keys() {
		let set = ColorSet::new(Color::new(255, 102, 102), Color::new(255, 0, 0));
		let json = serde_json::to_value(&set).unwrap();

		assert_eq!(json, serde_json::json!({
			"fillColor": "rgba(255,102,102,0.5)",
			"strokeColor": "rgba(220,220,220,0.8)",
			"highlightFill": "rgba(255,0,0,0.75)",
			"highlightStroke": "rgba(220,220,220,1)",
		}));
	}
}
