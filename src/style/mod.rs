//! Style resolution for design-system elements.
//!
//! # Structure
//!
//! - [`variant`]: closed variant and size inputs
//! - [`resolver`]: maps inputs to an ordered directive list
//! - [`merge`]: collapses a directive list with "last write wins" semantics
//! - [`audit`]: checks class strings against the design rules
//!
//! # Example
//!
//! ```rust
//! use stocktaper_design::style::{ElementKind, SizeClass, StyleVariant, resolve};
//!
//! let directives = resolve(ElementKind::Card, StyleVariant::Accent, SizeClass::Large, "text-negative");
//! assert_eq!(directives.last(), Some("text-negative"));
//! assert!(directives.to_class_string().ends_with("bg-charcoal/5 text-negative"));
//! ```

pub mod audit;
mod error;
pub mod merge;
pub mod resolver;
pub mod variant;

pub use audit::{Rule, Violation, audit};
pub use error::StyleError;
pub use merge::merge;
pub use resolver::{Directives, ElementKind, resolve, resolve_named};
pub use variant::{SizeClass, StyleVariant};
