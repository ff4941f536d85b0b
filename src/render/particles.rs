use crate::render::layout::PxRect;
use rand::Rng;

/// One teleport particle, relative to the particle box origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Particle {
    /// Covered area.
    pub rect: PxRect,
    /// Straight alpha.
    pub alpha: u8,
}

/// Scatter teleport particles inside a `size x size` box.
///
/// `budget * intensity` particles are placed uniformly; each is a 2-4 px square whose opacity is
/// drawn from `0..255 * intensity`.
pub fn scatter_particles<R: Rng + ?Sized>(
    size: i32,
    budget: u32,
    intensity: f32,
    rng: &mut R,
) -> Vec<Particle> {
    let intensity = intensity.clamp(0.0, 1.0);
    let count = ((budget as f32) * intensity) as usize;
    let max_origin = (size - 2).max(0);
    let bounds = PxRect::sized(0, 0, size, size);

    (0..count)
        .filter_map(|_| {
            let x = rng.gen_range(0..=max_origin);
            let y = rng.gen_range(0..=max_origin);
            let extent = rng.gen_range(1..=3);
            let alpha = (255.0 * intensity * rng.r#gen::<f32>()) as u8;
            PxRect::inclusive(x, y, x + extent, y + extent)
                .intersect(bounds)
                .map(|rect| Particle { rect, alpha })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/particles.rs"]
mod tests;
