use std::path::PathBuf;

/// Immutable visual configuration handed to [`crate::FrameRenderer`].
///
/// Colors are straight-alpha RGB. `Default` reproduces the stock enderman look.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    /// Side length of one grid cell in pixels.
    pub cell_size: u32,
    /// Gap between neighbouring cells.
    pub gap: u32,
    /// Border around the whole grid.
    pub padding: u32,
    /// Canvas background.
    pub background: [u8; 3],
    /// 1px outline drawn around every cell.
    pub cell_outline: [u8; 3],
    /// Cell fill per tier, index = tier level.
    pub tier_colors: [[u8; 3]; 5],
    /// Fill of an eaten cell.
    pub eaten: [u8; 3],
    /// Underlay square behind an eaten cell.
    pub eaten_glow: [u8; 3],
    /// Sprite body, arms and legs.
    pub sprite_body: [u8; 3],
    /// Outline around the sprite head and body.
    pub sprite_outline: [u8; 3],
    /// Eye squares.
    pub sprite_eyes: [u8; 3],
    /// Teleport particle color; opacity is randomized per particle.
    pub particle: [u8; 3],
    /// Particles drawn at full intensity.
    pub particle_budget: u32,
    /// Teleport effect strength in `0.0..=1.0`; scales particle count and opacity.
    pub particle_intensity: f32,
    /// Caption at the top of the canvas; `None` disables it.
    pub title: Option<TitleStyle>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: 15,
            gap: 2,
            padding: 20,
            background: [13, 17, 23],
            cell_outline: [30, 30, 30],
            tier_colors: [
                [22, 27, 34],
                [14, 68, 41],
                [0, 109, 50],
                [38, 166, 65],
                [57, 211, 83],
            ],
            eaten: [30, 20, 40],
            eaten_glow: [60, 20, 80],
            sprite_body: [20, 20, 20],
            sprite_outline: [40, 40, 40],
            sprite_eyes: [255, 0, 255],
            particle: [138, 43, 226],
            particle_budget: 10,
            particle_intensity: 0.8,
            title: None,
        }
    }
}

/// Caption settings.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleStyle {
    /// Preferred decorative font; the built-in face is used when it cannot be loaded.
    pub font_path: PathBuf,
    /// Font size in pixels.
    pub font_size: f32,
    /// Text color.
    pub color: [u8; 3],
    /// Distance of the text top from the canvas top.
    pub top: u32,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            font_size: 16.0,
            color: [255, 255, 255],
            top: 5,
        }
    }
}
