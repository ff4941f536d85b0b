use crate::foundation::error::{EnderError, EnderResult};

/// Absolute 0-based frame index in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Width and height as the `u16` pair the rasterizer works with.
    pub fn to_u16(self) -> EnderResult<(u16, u16)> {
        let w = u16::try_from(self.width)
            .map_err(|_| EnderError::render("canvas width exceeds u16"))?;
        let h = u16::try_from(self.height)
            .map_err(|_| EnderError::render("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Byte length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Activity bucket in `0..=4`, used for cell color and visiting priority.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tier(u8);

impl Tier {
    /// Highest tier value.
    pub const MAX: u8 = 4;
    /// The "no activity" tier.
    pub const ZERO: Tier = Tier(0);

    /// Step function from a daily count: 0, 1-2, 3-5, 6-8, more.
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Tier(0),
            1..=2 => Tier(1),
            3..=5 => Tier(2),
            6..=8 => Tier(3),
            _ => Tier(4),
        }
    }


    /// Raw level.
    pub fn level(self) -> u8 {
        self.0
    }

    /// `true` for any tier above zero.
    pub fn is_active(self) -> bool {
        self.0 > 0
    }
}

/// A `(row, col)` coordinate in the activity grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    /// Day-of-week row.
    pub row: u8,
    /// Week column.
    pub col: u8,
}

impl GridPos {
    /// Build a coordinate.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
