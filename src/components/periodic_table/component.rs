//! Leptos component rendering the full periodic table grid with its hover tooltip.
//!
//! The component owns a single `RwSignal<HoverState>`. Every cell reports pointer
//! transitions through one shared `Callback<HoverEvent>`; the callback reads the
//! window size and folds the event into the state with [`HoverState::reduce`].

use std::sync::Arc;

use leptos::prelude::*;
use log::warn;

use super::cell::ElementCell;
use super::layout::{LayoutConfig, Viewport};
use super::state::{HoverEvent, HoverState};
use super::theme::Theme;
use super::types::Element;

/// Renders every element as a grid cell, in list order, plus the hover tooltip.
///
/// `elements` and `theme` are read-only. `layout` overrides the grid dimensions
/// and insets used to place the tooltip.
#[component]
pub fn PeriodicTable(
	elements: Arc<Vec<Element>>,
	theme: Arc<Theme>,
	#[prop(optional)] layout: Option<LayoutConfig>,
) -> impl IntoView {
	let layout = layout.unwrap_or_default();
	let hover = RwSignal::new(HoverState::default());

	let on_hover = {
		let elements = Arc::clone(&elements);
		Callback::new(move |event: HoverEvent| {
			let Some(viewport) = Viewport::current() else {
				warn!("periodic-table: window size unavailable, dropping {event:?}");
				return;
			};
			hover.update(|state| {
				*state = std::mem::take(state).reduce(event, &elements, viewport, &layout);
			});
		})
	};

	let cells = elements
		.iter()
		.enumerate()
		.map(|(index, element)| {
			view! {
				<ElementCell
					element=element.clone()
					index=index
					theme=Arc::clone(&theme)
					on_hover=on_hover
				/>
			}
		})
		.collect_view();

	let tooltip_class = move || {
		if hover.with(HoverState::is_active) {
			"tooltip active"
		} else {
			"tooltip"
		}
	};
	let tooltip_style = move || hover.with(|state| state.tooltip.to_css());

	// Details of the last hovered element, framed in its category's border color.
	let tooltip_card = {
		let (elements, theme) = (Arc::clone(&elements), Arc::clone(&theme));
		move || {
			let element = hover
				.with(|state| state.active)
				.and_then(|index| elements.get(index))?
				.clone();
			let border = theme
				.get(&element.category)
				.map(|entry| format!("border-color: {};", entry.border_color))
				.unwrap_or_default();
			Some(view! {
				<div class="tooltip-card" style=border>
					{element.number.map(|n| view! { <span class="tooltip-number">{n}</span> })}
					<span class="tooltip-symbol">{element.symbol}</span>
					<span class="tooltip-name">{element.name}</span>
					<span class="tooltip-category">{element.category}</span>
					<span class="tooltip-mass">{format!("{:.3}", element.atomic_mass)}</span>
				</div>
			})
		}
	};

	view! {
		<div class="root">
			<div class="grid">{cells}</div>
			<div class=tooltip_class style=tooltip_style>
				{tooltip_card}
			</div>
		</div>
	}
}
