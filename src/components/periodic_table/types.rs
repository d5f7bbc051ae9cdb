//! Element data structures for input to the periodic table component.

use serde::Deserialize;

/// A chemical element as it appears in the table dataset.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Element {
	/// Atomic number. Optional in the dataset; shown in the tooltip when present.
	#[serde(default)]
	pub number: Option<u32>,
	/// Unique chemical symbol (e.g., "Fe").
	pub symbol: String,
	/// Display name.
	pub name: String,
	/// Standard atomic mass.
	pub atomic_mass: f64,
	/// Chemical category. Used as the theme lookup key.
	pub category: String,
	/// 1-based grid column.
	pub xpos: u32,
	/// 1-based grid row.
	pub ypos: u32,
}

impl Element {
	/// Atomic mass rounded half-up to the nearest integer, as shown in the cell footer.
	pub fn display_mass(&self) -> i64 {
		(self.atomic_mass + 0.5).floor() as i64
	}
}

/// Complete table dataset: elements in render order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TableData {
	/// Elements in render order.
	pub elements: Vec<Element>,
}
