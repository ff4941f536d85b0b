use crate::foundation::core::{Canvas, GridPos};
use crate::foundation::error::{EnderError, EnderResult};
use crate::foundation::math::premul_over_px;
use crate::grid::Grid;
use crate::path::visited::VisitedSet;
use crate::render::frame::FrameRGBA;
use crate::render::glyphs;
use crate::render::layout::{GridLayout, PxRect};
use crate::render::particles::scatter_particles;
use crate::render::sprite::{SpritePaint, sprite_parts};
use crate::render::style::RenderStyle;
use crate::render::title::{TitleFont, builtin_layout, rasterize_face_title};
use rand::Rng;

/// Everything that varies from one frame to the next.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    /// Activity grid.
    pub grid: &'a Grid,
    /// Cell the sprite stands on; `None` hides the sprite.
    pub position: Option<GridPos>,
    /// Cells eaten so far.
    pub visited: &'a VisitedSet,
    /// Pose frame number driving the sprite bob.
    pub pose_frame: u64,
    /// Draw the teleport particle overlay under the sprite.
    pub teleporting: bool,
}

/// CPU frame renderer powered by `vello_cpu`.
///
/// Owns the immutable [`RenderStyle`], the caption (if any) and a render context reused across
/// frames of the same size.
pub struct FrameRenderer {
    style: RenderStyle,
    layout: GridLayout,
    title: Option<(String, TitleFont)>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl FrameRenderer {
    /// Create a renderer. `caption` is only drawn when `style.title` is set; its font is acquired
    /// here, once.
    pub fn new(style: RenderStyle, caption: Option<String>) -> Self {
        let title = match (&style.title, caption) {
            (Some(t), Some(text)) => Some((text, TitleFont::acquire(&t.font_path))),
            _ => None,
        };
        Self {
            layout: GridLayout::new(&style),
            style,
            title,
            ctx: None,
        }
    }

    /// Geometry derived from the style.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Output size of every frame.
    pub fn canvas(&self) -> Canvas {
        self.layout.canvas()
    }

    /// Font resolved for the caption, if a caption is drawn.
    pub fn title_font(&self) -> Option<&TitleFont> {
        self.title.as_ref().map(|(_, font)| font)
    }

    /// Render one frame. `rng` only feeds the teleport particles.
    pub fn render<R: Rng + ?Sized>(
        &mut self,
        input: &FrameInput<'_>,
        rng: &mut R,
    ) -> EnderResult<FrameRGBA> {
        let canvas = self.canvas();
        let (width, height) = canvas.to_u16()?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |this, ctx| {
            this.draw_background(ctx, canvas);
            this.draw_grid(ctx, input);
            if let Some(pos) = input.position {
                if input.teleporting {
                    this.draw_particles(ctx, pos, rng);
                }
                this.draw_sprite(ctx, pos, input.pose_frame);
            }
            this.draw_builtin_title(ctx, canvas);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        let mut data = pixmap.data_as_u8_slice().to_vec();
        if data.len() != canvas.rgba8_len() {
            return Err(EnderError::render(format!(
                "rasterizer returned {} bytes for a {}x{} canvas",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        self.composite_face_title(&mut data, canvas)?;

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> EnderResult<R>,
    ) -> EnderResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn draw_background(&self, ctx: &mut vello_cpu::RenderContext, canvas: Canvas) {
        let full = PxRect::sized(0, 0, canvas.width as i32, canvas.height as i32);
        fill(ctx, full, self.style.background, 255);
    }

    fn draw_grid(&self, ctx: &mut vello_cpu::RenderContext, input: &FrameInput<'_>) {
        let style = &self.style;
        for (pos, tier) in input.grid.iter() {
            let cell = self.layout.cell_rect(pos);
            let color = if input.visited.contains(pos) {
                fill(ctx, self.layout.glow_rect(pos), style.eaten_glow, 255);
                style.eaten
            } else {
                style.tier_colors[usize::from(tier.level())]
            };
            fill(ctx, cell, style.cell_outline, 255);
            fill(ctx, cell.inset(1), color, 255);
        }
    }

    fn draw_particles<R: Rng + ?Sized>(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        pos: GridPos,
        rng: &mut R,
    ) {
        let area = self.layout.particle_box(pos);
        let size = area.x1 - area.x0;
        let particles = scatter_particles(
            size,
            self.style.particle_budget,
            self.style.particle_intensity,
            rng,
        );
        for p in particles {
            fill(
                ctx,
                p.rect.translate(area.x0, area.y0),
                self.style.particle,
                p.alpha,
            );
        }
    }

    fn draw_sprite(&self, ctx: &mut vello_cpu::RenderContext, pos: GridPos, pose_frame: u64) {
        let sprite_box = self.layout.sprite_box(pos);
        for part in sprite_parts(self.layout.sprite_size(), pose_frame) {
            let color = match part.paint {
                SpritePaint::Body => self.style.sprite_body,
                SpritePaint::Outline => self.style.sprite_outline,
                SpritePaint::Eye => self.style.sprite_eyes,
            };
            fill(
                ctx,
                part.rect.translate(sprite_box.x0, sprite_box.y0),
                color,
                255,
            );
        }
    }

    fn draw_builtin_title(&self, ctx: &mut vello_cpu::RenderContext, canvas: Canvas) {
        let (Some(style), Some((text, TitleFont::Builtin))) = (&self.style.title, &self.title)
        else {
            return;
        };
        let (scale, left) = builtin_layout(text, canvas.width, style.font_size);
        let top = style.top as i32;
        for (col, row) in glyphs::lit_cells(text) {
            let rect = PxRect::sized(left + col * scale, top + row * scale, scale, scale);
            fill(ctx, rect, style.color, 255);
        }
    }

    fn composite_face_title(&self, data: &mut [u8], canvas: Canvas) -> EnderResult<()> {
        let (Some(style), Some((text, TitleFont::Face { fontdb, family }))) =
            (&self.style.title, &self.title)
        else {
            return Ok(());
        };
        let overlay = rasterize_face_title(fontdb, family, text, canvas, style)?;
        for (dst, src) in data.chunks_exact_mut(4).zip(overlay.chunks_exact(4)) {
            if src[3] == 0 {
                continue;
            }
            let out = premul_over_px(
                [dst[0], dst[1], dst[2], dst[3]],
                [src[0], src[1], src[2], src[3]],
            );
            dst.copy_from_slice(&out);
        }
        Ok(())
    }
}

fn fill(ctx: &mut vello_cpu::RenderContext, rect: PxRect, rgb: [u8; 3], alpha: u8) {
    if rect.x0 >= rect.x1 || rect.y0 >= rect.y1 || alpha == 0 {
        return;
    }
    let [r, g, b] = rgb;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, alpha));
    ctx.fill_rect(&rect.to_kurbo());
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
