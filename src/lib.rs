//! periodic-table: Interactive periodic table of the elements.
//!
//! This crate provides a WASM-based grid of element cells, colored by chemical
//! category, with a tooltip that tracks the hovered cell.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info};

pub mod components;
pub mod data;
pub mod error;

pub use components::periodic_table::{
	Element, ElementCell, HoverEvent, HoverState, PeriodicTable, Theme, ThemeEntry, to_rgb,
};
pub use data::AppData;
pub use error::{ColorError, DataError, ThemeError};

use components::periodic_table::stylesheet::TABLE_CSS;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("periodic-table: logging initialized");
}

/// Main application component.
/// Loads and validates the datasets, then renders the table or a load error.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = match AppData::load() {
		Ok(data) => view! { <PeriodicTable elements=data.elements theme=data.theme /> }.into_any(),
		Err(e) => {
			error!("periodic-table: {e}");
			view! {
				<div class="load-error">{format!("Could not load the periodic table: {e}")}</div>
			}
			.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Periodic Table" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{TABLE_CSS}</Style>

		{content}
	}
}
