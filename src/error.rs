//! Error types for palette parsing, theme construction and dataset loading.

/// A color string that is not of the form `#RRGGBB`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
	/// Wrong length, missing `#`, or a non-hex digit.
	#[error("expected a #RRGGBB color, got {0:?}")]
	Malformed(String),
}

/// Failures while deriving the category theme from the palette.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ThemeError {
	/// A category refers to a color family the palette does not define.
	#[error("category {category:?} uses unknown color family {family:?}")]
	UnknownFamily {
		/// Category being themed.
		category: String,
		/// Missing family name.
		family: String,
	},
	/// A family lacks one of the shades the cells draw with.
	#[error("color family {family:?} has no shade {shade}")]
	MissingShade {
		/// Family name.
		family: String,
		/// Shade key that was looked up.
		shade: u8,
	},
	/// A shade is present but is not a valid hex color.
	#[error("color family {family:?} shade {shade}: {source}")]
	BadColor {
		/// Family name.
		family: String,
		/// Offending shade key.
		shade: u8,
		/// Underlying parse failure.
		source: ColorError,
	},
	/// An element's category has no theme entry.
	#[error("element {symbol} has category {category:?} which is not themed")]
	MissingCategory {
		/// Element symbol.
		symbol: String,
		/// Unthemed category.
		category: String,
	},
}

/// Failures while loading and validating the static datasets.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
	/// A dataset is not valid JSON for its schema.
	#[error("failed to parse {what}: {source}")]
	Parse {
		/// Which dataset failed.
		what: &'static str,
		/// Underlying serde error.
		source: serde_json::Error,
	},
	/// Theme construction or coverage failed.
	#[error(transparent)]
	Theme(#[from] ThemeError),
	/// Two elements share a symbol.
	#[error("duplicate element symbol {0}")]
	DuplicateSymbol(String),
	/// Two elements occupy the same grid cell.
	#[error("elements {first} and {second} both sit at column {xpos}, row {ypos}")]
	DuplicatePosition {
		/// Symbol of the earlier element.
		first: String,
		/// Symbol of the later element.
		second: String,
		/// Shared column.
		xpos: u32,
		/// Shared row.
		ypos: u32,
	},
	/// Grid coordinates are 1-based.
	#[error("element {symbol} has zero grid coordinate ({xpos}, {ypos})")]
	ZeroPosition {
		/// Element symbol.
		symbol: String,
		/// Column.
		xpos: u32,
		/// Row.
		ypos: u32,
	},
}
