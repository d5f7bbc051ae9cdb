//! Static datasets: the element table and the color palette.
//!
//! Both are compiled into the binary. A host page may replace the element table by
//! embedding JSON in a `<script id="table-data">` element.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::periodic_table::{Element, Palette, TableData, Theme};
use crate::error::DataError;

const TABLE_JSON: &str = include_str!("../data/table.json");
const COLORS_JSON: &str = include_str!("../data/colors.json");

/// Element list and derived theme, validated and ready to render.
#[derive(Clone, Debug)]
pub struct AppData {
	/// Elements in render order.
	pub elements: Arc<Vec<Element>>,
	/// Category theme built from the palette.
	pub theme: Arc<Theme>,
}

impl AppData {
	/// Load the bundled datasets, preferring a table embedded in the page.
	pub fn load() -> Result<Self, DataError> {
		match dom_json("table-data") {
			Some(table) => {
				info!("periodic-table: using element table from page");
				Self::from_json(&table, COLORS_JSON)
			}
			None => Self::bundled(),
		}
	}

	/// Load the datasets compiled into the binary.
	pub fn bundled() -> Result<Self, DataError> {
		Self::from_json(TABLE_JSON, COLORS_JSON)
	}

	/// Parse both datasets, build the theme and validate the table against it.
	pub fn from_json(table: &str, colors: &str) -> Result<Self, DataError> {
		let table: TableData = serde_json::from_str(table).map_err(|source| DataError::Parse {
			what: "element table",
			source,
		})?;
		let palette: Palette = serde_json::from_str(colors).map_err(|source| DataError::Parse {
			what: "color palette",
			source,
		})?;

		let theme = Theme::build(&palette)?;
		theme.check_coverage(&table.elements)?;
		check_layout(&table.elements)?;

		info!(
			"periodic-table: loaded {} elements, {} themed categories",
			table.elements.len(),
			theme.len()
		);
		Ok(Self {
			elements: Arc::new(table.elements),
			theme: Arc::new(theme),
		})
	}
}

/// Symbols are unique and every element owns a distinct 1-based grid cell.
fn check_layout(elements: &[Element]) -> Result<(), DataError> {
	let mut symbols = HashSet::new();
	let mut cells: HashMap<(u32, u32), &str> = HashMap::with_capacity(elements.len());

	for e in elements {
		if e.xpos == 0 || e.ypos == 0 {
			return Err(DataError::ZeroPosition {
				symbol: e.symbol.clone(),
				xpos: e.xpos,
				ypos: e.ypos,
			});
		}
		if !symbols.insert(e.symbol.as_str()) {
			return Err(DataError::DuplicateSymbol(e.symbol.clone()));
		}
		if let Some(first) = cells.insert((e.xpos, e.ypos), e.symbol.as_str()) {
			return Err(DataError::DuplicatePosition {
				first: first.to_string(),
				second: e.symbol.clone(),
				xpos: e.xpos,
				ypos: e.ypos,
			});
		}
	}
	Ok(())
}

/// Text of a `<script>` element by id, if the page has one.
fn dom_json(id: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(id)?;
	match element.dyn_into::<HtmlScriptElement>() {
		Ok(script) => script.text().ok(),
		Err(_) => {
			warn!("periodic-table: #{id} is not a script element, ignoring");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::ThemeError;

	const HYDROGEN: &str = r#"{ "number": 1, "symbol": "H", "name": "Hydrogen",
		"atomic_mass": 1.008, "category": "diatomic nonmetal", "xpos": 1, "ypos": 1 }"#;

	fn table(entries: &[&str]) -> String {
		format!(r#"{{ "elements": [{}] }}"#, entries.join(","))
	}

	#[test]
	fn bundled_datasets_load() {
		let data = AppData::bundled().unwrap();
		assert_eq!(data.elements.len(), 119);
		assert_eq!(data.theme.len(), 15);
		assert_eq!(data.elements[0].symbol, "H");
	}

	#[test]
	fn rejects_duplicate_position() {
		let deuterium = HYDROGEN.replace(r#""symbol": "H""#, r#""symbol": "D""#);
		let err = AppData::from_json(&table(&[HYDROGEN, deuterium.as_str()]), COLORS_JSON).unwrap_err();
		assert!(matches!(
			err,
			DataError::DuplicatePosition { ref first, ref second, xpos: 1, ypos: 1 }
				if first == "H" && second == "D"
		));
	}

	#[test]
	fn rejects_duplicate_symbol() {
		let moved = HYDROGEN.replace(r#""xpos": 1"#, r#""xpos": 2"#);
		let err = AppData::from_json(&table(&[HYDROGEN, moved.as_str()]), COLORS_JSON).unwrap_err();
		assert!(matches!(err, DataError::DuplicateSymbol(ref s) if s == "H"));
	}

	#[test]
	fn rejects_zero_coordinate() {
		let zero = HYDROGEN.replace(r#""ypos": 1"#, r#""ypos": 0"#);
		let err = AppData::from_json(&table(&[zero.as_str()]), COLORS_JSON).unwrap_err();
		assert!(matches!(err, DataError::ZeroPosition { xpos: 1, ypos: 0, .. }));
	}

	#[test]
	fn rejects_unthemed_category() {
		let odd = HYDROGEN.replace("diatomic nonmetal", "imaginary");
		let err = AppData::from_json(&table(&[odd.as_str()]), COLORS_JSON).unwrap_err();
		assert!(matches!(
			err,
			DataError::Theme(ThemeError::MissingCategory { ref category, .. }) if category == "imaginary"
		));
	}

	#[test]
	fn reports_parse_failures_by_dataset() {
		let err = AppData::from_json("{", COLORS_JSON).unwrap_err();
		assert!(matches!(err, DataError::Parse { what: "element table", .. }));
		let err = AppData::from_json(TABLE_JSON, "[]").unwrap_err();
		assert!(matches!(err, DataError::Parse { what: "color palette", .. }));
	}

	#[test]
	fn accepts_record_without_atomic_number() {
		let unnumbered = HYDROGEN.replace(r#""number": 1, "#, "");
		assert!(!unnumbered.contains("number"));
		let data = AppData::from_json(&table(&[unnumbered.as_str()]), COLORS_JSON).unwrap();
		assert_eq!(data.elements.len(), 1);
		assert_eq!(data.elements[0].number, None);
		assert_eq!(data.elements[0].symbol, "H");
	}

	#[test]
	fn duplicate_position_found_after_many_cells() {
		let mut entries: Vec<String> = (1..=18)
			.flat_map(|x| (1..=10).map(move |y| (x, y)))
			.map(|(x, y)| {
				HYDROGEN
					.replace(r#""symbol": "H""#, &format!(r#""symbol": "E{x}x{y}""#))
					.replace(r#""xpos": 1"#, &format!(r#""xpos": {x}"#))
					.replace(r#""ypos": 1"#, &format!(r#""ypos": {y}"#))
			})
			.collect();
		entries.push(HYDROGEN.replace(r#""xpos": 1"#, r#""xpos": 18"#).replace(r#""ypos": 1"#, r#""ypos": 10"#));
		let entries: Vec<&str> = entries.iter().map(String::as_str).collect();

		let err = AppData::from_json(&table(&entries), COLORS_JSON).unwrap_err();
		assert!(matches!(
			err,
			DataError::DuplicatePosition { ref first, ref second, xpos: 18, ypos: 10 }
				if first == "E18x10" && second == "H"
		));
	}
}
