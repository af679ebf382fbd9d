//! UI components and layouts.
//!
//! This module provides Leptos SSR components for the StockTaper design
//! system.
//!
//! # Structure
//!
//! - [`components`]: reusable design-system components
//! - [`page`]: the fixed-region page template
//! - [`document`]: full HTML document shell

pub mod components;
pub mod document;
pub mod page;
