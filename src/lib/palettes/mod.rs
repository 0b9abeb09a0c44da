pub mod builtin;
pub mod chart;
pub mod color_set;
pub(crate) mod pal_hex;
pub(crate) mod pal_json;
pub(crate) mod pal_rgb;
pub mod palette;

const MAX_PALETTE_COLORS: usize = 256;
