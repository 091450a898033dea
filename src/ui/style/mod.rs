//! Visual styling utilities.
//!
//! Themes are the colour schemes applied to the console; they are selected by
//! name from the settings.

pub mod theme;

pub use theme::{Theme, ThemeDefinition, by_name, default_theme, names};
