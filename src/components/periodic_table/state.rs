//! Hover state and the reducer that drives it.
//!
//! The table owns one [`HoverState`]. Cells emit [`HoverEvent`]s; the component
//! folds each event into the state with [`HoverState::reduce`], which is pure so
//! transitions can be tested without a DOM.

use log::{debug, warn};

use super::layout::{LayoutConfig, Viewport};
use super::types::Element;

/// Pointer transition over a cell, carrying the cell's index in the element list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
	/// Pointer entered the cell.
	Enter(usize),
	/// Pointer left the cell.
	Leave(usize),
}

impl HoverEvent {
	/// Event for a `mouseenter` (`entered`) or `mouseleave` on the cell at `index`.
	pub fn pointer(entered: bool, index: usize) -> Self {
		if entered { Self::Enter(index) } else { Self::Leave(index) }
	}

	/// Index of the cell the event came from.
	pub fn index(self) -> usize {
		match self {
			Self::Enter(index) | Self::Leave(index) => index,
		}
	}
}

/// Inline style of the tooltip container. Empty when no tooltip is shown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TooltipStyle {
	/// Translation in CSS pixels.
	pub translate: Option<(f64, f64)>,
	/// Tooltip opacity.
	pub opacity: Option<f64>,
}

impl TooltipStyle {
	/// Fully opaque tooltip translated to `(x, y)`.
	pub fn visible_at(x: f64, y: f64) -> Self {
		Self {
			translate: Some((x, y)),
			opacity: Some(1.0),
		}
	}

	/// Whether no property is set.
	pub fn is_empty(&self) -> bool {
		self.translate.is_none() && self.opacity.is_none()
	}

	/// Inline `style` attribute value; empty when no property is set.
	pub fn to_css(&self) -> String {
		let mut css = String::new();
		if let Some((x, y)) = self.translate {
			css.push_str(&format!("transform: translate({x}px, {y}px);"));
		}
		if let Some(opacity) = self.opacity {
			if !css.is_empty() {
				css.push(' ');
			}
			css.push_str(&format!("opacity: {opacity};"));
		}
		css
	}
}

/// Hovered element and tooltip placement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverState {
	/// Index of the element last entered or left. `None` until the first event.
	pub active: Option<usize>,
	/// Style of the tooltip container.
	pub tooltip: TooltipStyle,
}

impl HoverState {
	/// Whether the tooltip container carries the `active` modifier.
	pub fn is_active(&self) -> bool {
		self.active.is_some()
	}

	/// Apply one hover event and return the next state.
	///
	/// `Leave` records the leaving index in `active` rather than clearing it, and
	/// only empties the tooltip style. An `Enter` for an index outside `elements`
	/// leaves the state unchanged.
	pub fn reduce(
		self,
		event: HoverEvent,
		elements: &[Element],
		viewport: Viewport,
		layout: &LayoutConfig,
	) -> Self {
		match event {
			HoverEvent::Enter(index) => {
				let Some(element) = elements.get(index) else {
					warn!("periodic-table: hover on unknown element index {index}");
					return self;
				};
				let (x, y) = layout.tooltip_position(element, viewport);
				debug!("periodic-table: enter {} -> tooltip at ({x:.1}, {y:.1})", element.symbol);
				Self {
					active: Some(index),
					tooltip: TooltipStyle::visible_at(x, y),
				}
			}
			HoverEvent::Leave(index) => {
				debug!("periodic-table: leave {index}");
				Self {
					active: Some(index),
					tooltip: TooltipStyle::default(),
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn elements() -> Vec<Element> {
		[("H", 1, 1), ("He", 18, 1), ("U", 6, 10)]
			.into_iter()
			.enumerate()
			.map(|(i, (symbol, xpos, ypos))| Element {
				number: Some(i as u32 + 1),
				symbol: symbol.into(),
				name: symbol.into(),
				atomic_mass: 1.0,
				category: "noble gas".into(),
				xpos,
				ypos,
			})
			.collect()
	}

	const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);

	fn reduce(state: HoverState, event: HoverEvent) -> HoverState {
		state.reduce(event, &elements(), VIEWPORT, &LayoutConfig::default())
	}

	#[test]
	fn starts_inactive_with_empty_tooltip() {
		let state = HoverState::default();
		assert_eq!(state.active, None);
		assert!(!state.is_active());
		assert!(state.tooltip.is_empty());
		assert_eq!(state.tooltip.to_css(), "");
	}

	#[test]
	fn enter_shows_tooltip_at_cell() {
		let state = reduce(HoverState::default(), HoverEvent::Enter(0));
		assert_eq!(state.active, Some(0));
		assert_eq!(state.tooltip.opacity, Some(1.0));
		let (x, y) = state.tooltip.translate.unwrap();
		assert!((x - 950.0 / 18.0).abs() < 1e-9);
		assert_eq!(y, 60.0);
	}

	#[test]
	fn leave_keeps_index_but_clears_tooltip() {
		let entered = reduce(HoverState::default(), HoverEvent::Enter(2));
		let left = reduce(entered, HoverEvent::Leave(2));
		assert_eq!(left.active, Some(2));
		assert!(left.is_active());
		assert!(left.tooltip.is_empty());
		assert_eq!(left.tooltip.opacity, None);
	}

	#[test]
	fn latest_event_wins() {
		let state = [
			HoverEvent::Enter(0),
			HoverEvent::Leave(0),
			HoverEvent::Enter(1),
		]
		.into_iter()
		.fold(HoverState::default(), reduce);
		assert_eq!(state.active, Some(1));
		assert_eq!(state.tooltip.translate, Some((950.0, 60.0)));
	}

	#[test]
	fn enter_out_of_range_is_ignored() {
		let entered = reduce(HoverState::default(), HoverEvent::Enter(1));
		assert_eq!(reduce(entered.clone(), HoverEvent::Enter(99)), entered);
	}

	#[test]
	fn tooltip_css_matches_inline_style() {
		assert_eq!(
			TooltipStyle::visible_at(950.0, 60.0).to_css(),
			"transform: translate(950px, 60px); opacity: 1;"
		);
		assert_eq!(
			TooltipStyle::visible_at(52.5, 0.25).to_css(),
			"transform: translate(52.5px, 0.25px); opacity: 1;"
		);
	}

	#[test]
	fn pointer_transitions_map_to_events() {
		assert_eq!(HoverEvent::pointer(true, 7), HoverEvent::Enter(7));
		assert_eq!(HoverEvent::pointer(false, 7), HoverEvent::Leave(7));
		assert_eq!(HoverEvent::pointer(false, 3).index(), 3);
	}

	#[test]
	fn pointer_sequence_over_one_cell() {
		let state = [true, false]
			.into_iter()
			.map(|entered| HoverEvent::pointer(entered, 2))
			.fold(HoverState::default(), reduce);
		assert_eq!(state.active, Some(2));
		assert!(state.tooltip.is_empty());
	}
}
