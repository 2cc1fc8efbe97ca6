//! Figure renderers.
//!
//! [`terminal`] draws character-cell charts for stdout; [`svg`] draws a
//! vector image through plotters.

pub mod svg;
pub mod terminal;

pub use terminal::TextOptions;
