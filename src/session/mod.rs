use crate::activity::generator::{ActivitySource, generate_activity};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{EnderError, EnderResult};
use crate::grid::Grid;
use crate::path::planner::{VisitPath, plan_path};
use crate::path::visited::VisitedSet;
use crate::render::cpu::{FrameInput, FrameRenderer};
use crate::render::style::RenderStyle;
use chrono::NaiveDate;
use rand::Rng;

mod script;

pub use script::{FrameSpec, SessionOpts, expected_frame_count, frame_script};

/// Summary of one [`AnimationSession::render_into`] run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Steps in the visit path.
    pub path_len: usize,
    /// Path steps rendered with the teleport effect.
    pub teleports: usize,
}

/// A planned animation: grid, visit path and the renderer that draws it.
pub struct AnimationSession {
    grid: Grid,
    path: VisitPath,
    renderer: FrameRenderer,
    opts: SessionOpts,
}

impl AnimationSession {
    /// Assemble a session from already planned parts.
    pub fn new(grid: Grid, path: VisitPath, renderer: FrameRenderer, opts: SessionOpts) -> Self {
        Self {
            grid,
            path,
            renderer,
            opts,
        }
    }

    /// Generate a year of activity ending at `today`, bucket it into a grid and plan the path.
    ///
    /// `caption` is the user name shown in the title band when `style.title` is enabled.
    #[tracing::instrument(skip(source, style, opts, rng))]
    pub fn plan<R: Rng + ?Sized>(
        source: &mut dyn ActivitySource,
        today: NaiveDate,
        caption: Option<String>,
        style: RenderStyle,
        opts: SessionOpts,
        rng: &mut R,
    ) -> Self {
        let records = generate_activity(source, today);
        let grid = Grid::from_records(&records);
        let path = plan_path(&grid, rng);
        tracing::info!(
            records = records.len(),
            active_cells = grid.count_active(),
            path_len = path.len(),
            "animation planned"
        );
        Self::new(grid, path, FrameRenderer::new(style, caption), opts)
    }

    /// Bucketed activity.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Order the sprite visits cells in.
    pub fn path(&self) -> &VisitPath {
        &self.path
    }

    /// Sequencing options.
    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    /// Renderer used for every frame.
    pub fn renderer(&self) -> &FrameRenderer {
        &self.renderer
    }

    /// Frame order this session renders.
    pub fn script(&self) -> Vec<FrameSpec> {
        frame_script(self.path.len(), &self.opts)
    }

    /// Render every frame in script order and stream it into `sink`.
    ///
    /// `rng` only drives the teleport particles. The sink is ended on success; on error it is left
    /// as is and dropping it releases its resources.
    #[tracing::instrument(skip(self, sink, rng))]
    pub fn render_into<R: Rng + ?Sized>(
        &mut self,
        sink: &mut dyn FrameSink,
        rng: &mut R,
    ) -> EnderResult<RenderStats> {
        let canvas = self.renderer.canvas();
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            frame_delay_ms: self.opts.frame_delay_ms,
        })?;

        let script = self.script();
        let mut visited = VisitedSet::new();
        let mut eaten = 0usize;
        let mut stats = RenderStats {
            frames: 0,
            path_len: self.path.len(),
            teleports: (0..self.path.len())
                .filter(|&s| self.opts.is_teleport_step(s))
                .count(),
        };

        for spec in &script {
            while eaten < spec.visited_len {
                let pos = self.path.get(eaten).ok_or_else(|| {
                    EnderError::validation(format!(
                        "frame {} expects {} visited steps but the path has {}",
                        spec.index,
                        spec.visited_len,
                        self.path.len()
                    ))
                })?;
                visited.visit(pos);
                eaten += 1;
            }

            let position = spec.step.and_then(|s| self.path.get(s));
            let input = FrameInput {
                grid: &self.grid,
                position,
                visited: &visited,
                pose_frame: spec.pose_frame,
                teleporting: spec.teleport,
            };
            let frame = self.renderer.render(&input, rng)?;
            sink.push_frame(FrameIndex(spec.index), &frame)?;

            stats.frames += 1;
        }

        sink.end()?;
        tracing::info!(
            frames = stats.frames,
            path_len = stats.path_len,
            teleports = stats.teleports,
            "animation rendered"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/session.rs"]
mod tests;
