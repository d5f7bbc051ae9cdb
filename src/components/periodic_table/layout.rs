//! Grid geometry and tooltip placement.
//!
//! The table is laid out on a fixed CSS grid. Tooltip placement maps an element's
//! 1-based grid coordinates linearly onto the window, after reserving an inset on
//! the right and bottom edges:
//!
//! - `x = (viewport_width - width_inset) * xpos / columns`
//! - `y = (viewport_height - height_inset) * ypos / rows`

use super::types::Element;

/// Layout parameters for the table grid and tooltip interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Nominal column count of the grid.
	pub columns: f64,
	/// Nominal row count of the grid, including the lanthanide and actinide rows.
	pub rows: f64,
	/// Pixels subtracted from the viewport width before interpolating.
	pub width_inset: f64,
	/// Pixels subtracted from the viewport height before interpolating.
	pub height_inset: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			columns: 18.0,
			rows: 10.0,
			width_inset: 50.0,
			height_inset: 200.0,
		}
	}
}

impl LayoutConfig {
	/// Screen position of the tooltip for a hovered element.
	pub fn tooltip_position(&self, element: &Element, viewport: Viewport) -> (f64, f64) {
		let available_width = viewport.width - self.width_inset;
		let available_height = viewport.height - self.height_inset;
		(
			available_width * (element.xpos as f64 / self.columns),
			available_height * (element.ypos as f64 / self.rows),
		)
	}
}

/// Inner size of the browser window in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Window inner width.
	pub width: f64,
	/// Window inner height.
	pub height: f64,
}

impl Viewport {
	/// Viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Read the current window size. `None` outside a browser.
	pub fn current() -> Option<Self> {
		let window = web_sys::window()?;
		Some(Self {
			width: window.inner_width().ok()?.as_f64()?,
			height: window.inner_height().ok()?.as_f64()?,
		})
	}
}
