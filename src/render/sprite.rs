//! The enderman: a blocky humanoid built from rectangles.

use crate::render::layout::PxRect;

/// Which palette entry a sprite part is filled with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpritePaint {
    /// Body color.
    Body,
    /// Darker rim around head and torso.
    Outline,
    /// Glowing eyes.
    Eye,
}

/// One filled rectangle of the sprite, in sprite-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpritePart {
    /// Covered area relative to the sprite box origin.
    pub rect: PxRect,
    /// Fill.
    pub paint: SpritePaint,
}

/// Vertical bob in pixels for pose `frame`: a slow sine rounded to whole pixels.
pub fn bob_offset(frame: u64) -> i32 {
    ((frame as f64) * 0.3).sin().round() as i32
}

/// Rectangles making up the sprite at pose `frame`, in paint order, clipped to a `size x size` box.
pub fn sprite_parts(size: i32, frame: u64) -> Vec<SpritePart> {
    let bob = bob_offset(frame);
    let unit = (size / 10).max(1);

    let head_w = size / 2;
    let head_h = (2 * size) / 5;
    let head = PxRect::sized(size / 4, bob, head_w, head_h);

    let body_w = (head_w - 4).max(unit);
    let body_h = size / 3;
    let body = PxRect::sized(head.x0 + (head_w - body_w) / 2, head.y1, body_w, body_h);

    let arm_len = size / 2;
    let left_arm = PxRect::sized(body.x0 - unit, body.y0, unit, arm_len);
    let right_arm = PxRect::sized(body.x1, body.y0, unit, arm_len);

    let leg_len = size - head_h - body_h;
    let left_leg = PxRect::sized(body.x0, body.y1, unit, leg_len);
    let right_leg = PxRect::sized(body.x1 - unit, body.y1, unit, leg_len);

    let eye_y = head.y0 + head_h / 3;
    let left_eye = PxRect::sized(head.x0 + 2, eye_y, unit, unit);
    let right_eye = PxRect::sized(head.x1 - 2 - unit, eye_y, unit, unit);

    let bounds = PxRect::sized(0, 0, size, size);
    [
        (head, SpritePaint::Outline),
        (head.inset(1), SpritePaint::Body),
        (left_eye, SpritePaint::Eye),
        (right_eye, SpritePaint::Eye),
        (body, SpritePaint::Outline),
        (body.inset(1), SpritePaint::Body),
        (left_arm, SpritePaint::Body),
        (right_arm, SpritePaint::Body),
        (left_leg, SpritePaint::Body),
        (right_leg, SpritePaint::Body),
    ]
    .into_iter()
    .filter_map(|(rect, paint)| {
        rect.intersect(bounds)
            .map(|rect| SpritePart { rect, paint })
    })
    .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/sprite.rs"]
mod tests;
