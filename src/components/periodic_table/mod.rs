//! Periodic table grid component.
//!
//! Renders the element dataset as an 18×10 CSS grid with:
//! - Cells colored by chemical category (solid fill, diagonal gradient, tinted shadow)
//! - A tooltip that follows the hovered cell, placed by interpolating grid
//!   coordinates over the window size
//! - A pure hover reducer so state transitions are testable without a DOM
//!
//! # Example
//!
//! ```ignore
//! use periodic_table::{AppData, PeriodicTable};
//!
//! let data = AppData::bundled()?;
//! view! { <PeriodicTable elements=data.elements theme=data.theme /> }
//! ```

mod cell;
mod component;
pub mod layout;
pub mod state;
pub mod style;
pub mod stylesheet;
pub mod theme;
mod types;

pub use cell::ElementCell;
pub use component::PeriodicTable;
pub use layout::{LayoutConfig, Viewport};
pub use state::{HoverEvent, HoverState, TooltipStyle};
pub use style::{CellStyle, cell_appearance};
pub use theme::{Color, ColorFamily, Palette, Theme, ThemeEntry, to_rgb};
pub use types::{Element, TableData};
