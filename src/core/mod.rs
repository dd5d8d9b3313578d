// Core module
// Screen state, catalog data and the scroll / animation machinery behind it

pub mod animation;
pub mod app;
pub mod app_config;
pub mod catalog;
pub mod events;
pub mod geometry;
pub mod resolver;
pub mod scroll;
pub mod sections;
pub mod tab_strip;

pub use app::{App, Deferred};
pub use app_config::AppConfig;
pub use catalog::{Category, Product, ProductGroup};
pub use events::{AppEvent, EventHandler};
