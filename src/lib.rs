//! StockTaper design system
//!
//! Token-driven component and page templates rendered with Leptos SSR.
//! Every color and radius comes from a fixed token set, components resolve
//! their classes deterministically from a variant and a size, and every page
//! follows the same header, divider, content, navigation layout.
//!
//! # Modules
//!
//! - [`tokens`]: the read-only design token registry
//! - [`style`]: style resolution, class merging and design rule checks
//! - [`content`]: content listing collaborators
//! - [`page`]: page inputs and region contract
//! - [`ui`]: Leptos components
//! - [`config`]: layered configuration for the preview binary
//! - [`telemetry`]: logging setup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod content;
pub mod page;
pub mod style;
pub mod telemetry;
pub mod tokens;
pub mod ui;
