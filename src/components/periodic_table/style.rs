//! Inline style computation for element cells.

use log::{error, warn};

use super::theme::{GRADIENT_FROM_SHADE, GRADIENT_TO_SHADE, SHADOW_SHADE, Theme, ThemeEntry};
use super::types::Element;
use crate::error::ThemeError;

const SHADOW_ALPHA: f64 = 0.39;

/// Class of a cell drawn with its category colors.
pub const CELL_CLASS: &str = "element";
/// Class of a cell whose colors could not be resolved.
pub const PLACEHOLDER_CLASS: &str = "element placeholder";

/// Resolved inline style of one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellStyle {
	/// 1-based grid column (`xpos`).
	pub grid_column: u32,
	/// 1-based grid row (`ypos`).
	pub grid_row: u32,
	/// Solid fill under the gradient.
	pub background_color: String,
	/// Diagonal gradient between the lighter and darker shades.
	pub background_image: String,
	/// Drop shadow tinted with the shadow shade.
	pub box_shadow: String,
}

impl CellStyle {
	/// Derive the cell style from an element and its category's theme entry.
	pub fn new(element: &Element, entry: &ThemeEntry) -> Result<Self, ThemeError> {
		let shadow = entry.shade_color(SHADOW_SHADE)?.with_alpha(SHADOW_ALPHA);
		Ok(Self {
			grid_column: element.xpos,
			grid_row: element.ypos,
			background_color: entry.color.clone(),
			background_image: format!(
				"linear-gradient(45deg, {} 0%, {} 100%)",
				entry.shade(GRADIENT_FROM_SHADE)?,
				entry.shade(GRADIENT_TO_SHADE)?
			),
			box_shadow: format!("0 4px 14px 0 {}", shadow.to_css()),
		})
	}

	/// Inline `style` attribute value.
	pub fn to_css(&self) -> String {
		format!(
			"grid-column-start: {}; grid-row-start: {}; background-color: {}; background-image: {}; box-shadow: {};",
			self.grid_column,
			self.grid_row,
			self.background_color,
			self.background_image,
			self.box_shadow
		)
	}
}

/// Style for a cell whose category could not be themed: grid placement only.
pub fn placeholder_css(element: &Element) -> String {
	format!(
		"grid-column-start: {}; grid-row-start: {};",
		element.xpos, element.ypos
	)
}

/// Class and inline style for a cell.
///
/// An unthemed category or an unusable shade falls back to the placeholder at the
/// element's grid position, logging why.
pub fn cell_appearance(element: &Element, theme: &Theme) -> (&'static str, String) {
	let Some(entry) = theme.get(&element.category) else {
		error!(
			"periodic-table: {} has unthemed category {:?}",
			element.symbol, element.category
		);
		return (PLACEHOLDER_CLASS, placeholder_css(element));
	};
	match CellStyle::new(element, entry) {
		Ok(style) => (CELL_CLASS, style.to_css()),
		Err(e) => {
			warn!("periodic-table: {} drawn unstyled: {e}", element.symbol);
			(PLACEHOLDER_CLASS, placeholder_css(element))
		}
	}
}
