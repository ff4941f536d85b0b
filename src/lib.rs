//! endergrid renders a year of activity as a contribution-style grid that a teleporting enderman
//! eats, cell by cell, richest days first.
//!
//! The pipeline runs strictly forward:
//!
//! - Generate daily records with an [`ActivitySource`] ([`generate_activity`])
//! - Bucket them into a 7 x 53 [`Grid`] and order the active cells with [`plan_path`]
//! - Draw frames with a [`FrameRenderer`]
//! - Sequence and stream them into a [`FrameSink`] through an [`AnimationSession`], usually a
//!   looping [`GifSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod activity;
/// Encoding sinks.
pub mod encode;
pub(crate) mod grid;
pub(crate) mod path;
/// Frame rasterization.
pub mod render;
/// Frame sequencing and the end-to-end session API.
pub mod session;

pub use crate::foundation::core::{Canvas, FrameIndex, GridPos, Tier};
pub use crate::foundation::error::{EnderError, EnderResult};

pub use crate::activity::generator::{
    ActivitySource, DAYS_PER_YEAR, RandomActivity, WEEKDAY_OUTCOMES, WEEKEND_OUTCOMES,
    generate_activity, is_weekend,
};
pub use crate::activity::record::ActivityRecord;
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::grid::{GRID_CAPACITY, GRID_COLS, GRID_ROWS, Grid};
pub use crate::path::planner::{VisitPath, plan_path};
pub use crate::path::visited::VisitedSet;
pub use crate::render::cpu::{FrameInput, FrameRenderer};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::layout::{GridLayout, PxRect};
pub use crate::render::particles::{Particle, scatter_particles};
pub use crate::render::sprite::{SpritePaint, SpritePart, bob_offset, sprite_parts};
pub use crate::render::style::{RenderStyle, TitleStyle};
pub use crate::render::title::TitleFont;
pub use crate::session::{
    AnimationSession, FrameSpec, RenderStats, SessionOpts, expected_frame_count, frame_script,
};
