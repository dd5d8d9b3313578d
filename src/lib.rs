// Sticky Tabs Library
// A product catalog screen whose sticky tab strip follows the scrolled section

// Core infrastructure - state, catalog, scroll and animation machinery
pub mod core;

// UI - TUI components and views
pub mod ui;

// Re-export commonly used items for convenience
pub use crate::core::{App, AppConfig, Category, Product};
