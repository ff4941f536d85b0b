use crate::foundation::core::{Canvas, GridPos};
use crate::grid::{GRID_COLS, GRID_ROWS};
use crate::render::style::RenderStyle;

/// Pixel rectangle with half-open bounds `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PxRect {
    /// Left edge (inclusive).
    pub x0: i32,
    /// Top edge (inclusive).
    pub y0: i32,
    /// Right edge (exclusive).
    pub x1: i32,
    /// Bottom edge (exclusive).
    pub y1: i32,
}

impl PxRect {
    /// Rectangle whose corner pixels `(x0, y0)` and `(x1, y1)` are both covered.
    pub fn inclusive(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0,
            y0,
            x1: x1 + 1,
            y1: y1 + 1,
        }
    }

    /// Rectangle of `w x h` pixels at `(x, y)`.
    pub fn sized(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
        }
    }

    /// Shrink by `n` pixels on every side.
    pub fn inset(self, n: i32) -> Self {
        Self {
            x0: self.x0 + n,
            y0: self.y0 + n,
            x1: self.x1 - n,
            y1: self.y1 - n,
        }
    }

    /// Move by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    /// Overlap with `other`, or `None` when they do not intersect.
    pub fn intersect(self, other: PxRect) -> Option<PxRect> {
        let r = PxRect {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (r.x0 < r.x1 && r.y0 < r.y1).then_some(r)
    }

    /// `true` if pixel `(x, y)` is covered.
    pub fn contains(self, x: i32, y: i32) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    pub(crate) fn to_kurbo(self) -> vello_cpu::kurbo::Rect {
        vello_cpu::kurbo::Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

/// Where everything sits on the canvas for a given [`RenderStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    cell: i32,
    gap: i32,
    padding: i32,
}

impl GridLayout {
    /// Sprite box size relative to the cell.
    const SPRITE_GROW: i32 = 5;
    /// Sprite box offset up and left of the cell origin.
    const SPRITE_SHIFT: i32 = 2;
    /// Particle box margin around the cell.
    const PARTICLE_MARGIN: i32 = 5;

    /// Derive geometry from `style`.
    pub fn new(style: &RenderStyle) -> Self {
        Self {
            cell: style.cell_size as i32,
            gap: style.gap as i32,
            padding: style.padding as i32,
        }
    }

    fn pitch(&self) -> i32 {
        self.cell + self.gap
    }

    /// Canvas holding all 53 x 7 cells plus padding.
    pub fn canvas(&self) -> Canvas {
        let span = |n: usize| (n as i32) * self.pitch() - self.gap + 2 * self.padding;
        Canvas {
            width: span(GRID_COLS).max(1) as u32,
            height: span(GRID_ROWS).max(1) as u32,
        }
    }

    /// Top-left pixel of the cell at `pos`.
    pub fn cell_origin(&self, pos: GridPos) -> (i32, i32) {
        (
            self.padding + i32::from(pos.col) * self.pitch(),
            self.padding + i32::from(pos.row) * self.pitch(),
        )
    }

    /// Cell square including its outline.
    pub fn cell_rect(&self, pos: GridPos) -> PxRect {
        let (x, y) = self.cell_origin(pos);
        PxRect::inclusive(x, y, x + self.cell, y + self.cell)
    }

    /// Glow underlay of an eaten cell, one pixel larger on every side.
    pub fn glow_rect(&self, pos: GridPos) -> PxRect {
        let r = self.cell_rect(pos);
        PxRect {
            x0: r.x0 - 1,
            y0: r.y0 - 1,
            x1: r.x1 + 1,
            y1: r.y1 + 1,
        }
    }

    /// Square the sprite is drawn into; sprite parts outside it are clipped.
    pub fn sprite_box(&self, pos: GridPos) -> PxRect {
        let (x, y) = self.cell_origin(pos);
        let size = self.sprite_size();
        PxRect::sized(x - Self::SPRITE_SHIFT, y - Self::SPRITE_SHIFT, size, size)
    }

    /// Sprite side length in pixels.
    pub fn sprite_size(&self) -> i32 {
        self.cell + Self::SPRITE_GROW
    }

    /// Square the teleport particles are scattered in.
    pub fn particle_box(&self, pos: GridPos) -> PxRect {
        let (x, y) = self.cell_origin(pos);
        let size = self.cell + 2 * Self::PARTICLE_MARGIN;
        PxRect::sized(
            x - Self::PARTICLE_MARGIN,
            y - Self::PARTICLE_MARGIN,
            size,
            size,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
