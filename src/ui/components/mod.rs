//! Design-system UI components.
//!
//! Every component composes its classes through [`crate::style`], so colors
//! and radii always come from the design tokens and a caller's `class`
//! override is applied last.
//!
//! # Components
//!
//! - [`Panel`]: dashed-border container with variants and sizes
//! - [`TextField`]: input-like element using the button radius
//! - [`Container`]: page-width wrapper
//! - [`Divider`]: dashed section rule
//! - [`ArrowLink`]: navigation link with an arrow
//! - [`ContentGrid`]: grid of content cards

mod arrow_link;
mod container;
mod content_grid;
mod divider;
mod panel;
mod text_field;

pub use arrow_link::{ArrowDirection, ArrowLink};
pub use container::Container;
pub use content_grid::ContentGrid;
pub use divider::Divider;
pub use panel::{Panel, panel_classes};
pub use text_field::{TextField, text_field_classes};
