//! Frame rasterization: grid, eaten-cell glow, sprite, teleport particles and caption.

pub(crate) mod cpu;
pub(crate) mod frame;
pub(crate) mod glyphs;
pub(crate) mod layout;
pub(crate) mod particles;
pub(crate) mod sprite;
pub(crate) mod style;
pub(crate) mod title;
