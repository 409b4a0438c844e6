//! Presentation layer.
//!
//! Presenters turn domain values into serializable view models; views print
//! them (console `Display` impls) or draw them (ratatui widgets); renderers
//! decide between JSON, plain text and the interactive browser.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;
