//! Leptos component for a single element cell.

use std::sync::Arc;

use leptos::prelude::*;

use super::state::HoverEvent;
use super::style::cell_appearance;
use super::theme::Theme;
use super::types::Element;

/// Renders one element: name, symbol and rounded mass, filled with its category colors.
///
/// Pointer enter/leave are reported through `on_hover`, tagged with `index`. A
/// category missing from the theme renders as an unfilled placeholder at the same
/// grid position.
#[component]
pub fn ElementCell(
	element: Element,
	index: usize,
	theme: Arc<Theme>,
	on_hover: Callback<HoverEvent>,
) -> impl IntoView {
	let (class, style) = cell_appearance(&element, &theme);
	let mass = element.display_mass();
	let Element { symbol, name, .. } = element;
	let data_symbol = symbol.clone();

	view! {
		<div
			class=class
			style=style
			data-symbol=data_symbol
			on:mouseenter=move |_| on_hover.run(HoverEvent::pointer(true, index))
			on:mouseleave=move |_| on_hover.run(HoverEvent::pointer(false, index))
		>
			<div class="header">{name}</div>
			<div class="body">{symbol}</div>
			<div class="footer">{mass}</div>
		</div>
	}
}
