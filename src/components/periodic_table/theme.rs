//! Category theming for the periodic table.
//!
//! The palette is a set of named color families, each with ten tonal shades keyed
//! "1".."10". [`Theme::build`] maps every chemical category to one family and picks
//! the shades used for the cell fill and the tooltip border.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::types::Element;
use crate::error::{ColorError, ThemeError};

/// Decode a `#RRGGBB` string into its `[r, g, b]` components.
pub fn to_rgb(hex: &str) -> Result<[u8; 3], ColorError> {
	let malformed = || ColorError::Malformed(hex.to_string());
	let digits = hex.strip_prefix('#').ok_or_else(malformed)?;
	if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err(malformed());
	}
	let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| malformed());
	Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `0.0..=1.0`.
	pub a: f64,
}

impl Color {
	/// Opaque color from channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Opaque color from a `#RRGGBB` string.
	pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
		let [r, g, b] = to_rgb(hex)?;
		Ok(Self::rgb(r, g, b))
	}

	/// Same color with a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// `#rrggbb` when opaque, `rgba(r,g,b,a)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Tonal shades of one named color, keyed by shade number.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ColorFamily(BTreeMap<String, String>);

impl ColorFamily {
	/// Hex string for a shade, if the family defines it.
	pub fn shade(&self, shade: u8) -> Option<&str> {
		self.0.get(&shade.to_string()).map(String::as_str)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColorFamily {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
	}
}

/// Named color families, as loaded from `colors.json`.
pub type Palette = HashMap<String, ColorFamily>;

/// Shade at the start of the cell gradient.
pub const GRADIENT_FROM_SHADE: u8 = 4;
/// Shade tinting the cell drop shadow.
pub const SHADOW_SHADE: u8 = 5;
/// Shade at the end of the cell gradient.
pub const GRADIENT_TO_SHADE: u8 = 6;

/// Category → (family, fill shade, border shade).
const CATEGORY_SHADES: [(&str, &str, u8, u8); 15] = [
	("diatomic nonmetal", "red", 5, 6),
	("noble gas", "volcano", 5, 6),
	("alkali metal", "orange", 5, 6),
	("alkaline earth metal", "gold", 5, 6),
	("metalloid", "yellow", 5, 6),
	("polyatomic nonmetal", "lime", 5, 6),
	("post-transition metal", "green", 5, 6),
	("transition metal", "cyan", 5, 5),
	("lanthanide", "blue", 5, 6),
	("actinide", "geekblue", 5, 6),
	("unknown, probably transition metal", "purple", 5, 6),
	("unknown, probably post-transition metal", "magenta", 5, 6),
	("unknown, probably metalloid", "red", 2, 3),
	("unknown, predicted to be noble gas", "volcano", 2, 3),
	("unknown, but predicted to be an alkali metal", "orange", 2, 3),
];

/// Per-category color bundle.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeEntry {
	/// Name of the family this entry was derived from.
	pub family: String,
	/// The full family, for gradient and shadow shades.
	pub base: ColorFamily,
	/// Solid fill color.
	pub color: String,
	/// Tooltip border color.
	pub border_color: String,
}

impl ThemeEntry {
	/// Hex string for a shade of the base family.
	pub fn shade(&self, shade: u8) -> Result<&str, ThemeError> {
		self.base.shade(shade).ok_or_else(|| ThemeError::MissingShade {
			family: self.family.clone(),
			shade,
		})
	}

	/// Parsed color for a shade of the base family.
	pub fn shade_color(&self, shade: u8) -> Result<Color, ThemeError> {
		Color::from_hex(self.shade(shade)?).map_err(|source| ThemeError::BadColor {
			family: self.family.clone(),
			shade,
			source,
		})
	}
}

/// Category name → theme entry. Built once at startup and passed down read-only.
#[derive(Clone, Debug, Default)]
pub struct Theme {
	entries: HashMap<String, ThemeEntry>,
}

impl Theme {
	/// Derive the category theme from a palette.
	///
	/// Every shade a cell or tooltip will read is checked here, so rendering never
	/// meets a missing or malformed color.
	pub fn build(palette: &Palette) -> Result<Self, ThemeError> {
		let mut entries = HashMap::with_capacity(CATEGORY_SHADES.len());

		for (category, family, fill, border) in CATEGORY_SHADES {
			let base = palette
				.get(family)
				.ok_or_else(|| ThemeError::UnknownFamily {
					category: category.to_string(),
					family: family.to_string(),
				})?
				.clone();
			let entry = ThemeEntry {
				family: family.to_string(),
				color: String::new(),
				border_color: String::new(),
				base,
			};
			for shade in [GRADIENT_FROM_SHADE, SHADOW_SHADE, GRADIENT_TO_SHADE, fill, border] {
				entry.shade_color(shade)?;
			}
			let entry = ThemeEntry {
				color: entry.shade(fill)?.to_string(),
				border_color: entry.shade(border)?.to_string(),
				..entry
			};
			entries.insert(category.to_string(), entry);
		}

		Ok(Self { entries })
	}

	#[cfg(test)]
	pub(crate) fn from_entries(entries: HashMap<String, ThemeEntry>) -> Self {
		Self { entries }
	}

	/// Entry for a category, if themed.
	pub fn get(&self, category: &str) -> Option<&ThemeEntry> {
		self.entries.get(category)
	}

	/// Number of themed categories.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no category is themed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Check that every element's category has an entry.
	pub fn check_coverage(&self, elements: &[Element]) -> Result<(), ThemeError> {
		match elements.iter().find(|e| self.get(&e.category).is_none()) {
			Some(e) => Err(ThemeError::MissingCategory {
				symbol: e.symbol.clone(),
				category: e.category.clone(),
			}),
			None => Ok(()),
		}
	}
}
