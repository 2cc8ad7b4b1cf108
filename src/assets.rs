//! Resource services: image decoding and font resolution.

pub mod decode;
pub mod fonts;
pub mod loader;
