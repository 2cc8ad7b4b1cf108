//! Declarative render options as accepted from callers and JSON.

pub mod image;
pub mod shorthand;
pub mod style;
pub mod text;
