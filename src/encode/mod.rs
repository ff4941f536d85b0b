//! Encoding sinks.
//!
//! Sinks consume rendered frames in render order and are driven by
//! [`crate::AnimationSession::render_into`].

/// Animated GIF output.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
