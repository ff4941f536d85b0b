/// Tunables for sequencing and encoding one animation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    /// Frames appended after the path is exhausted, with no sprite on the grid.
    pub hold_frames: u32,
    /// Every step `i > 0` with `i % teleport_every == 0` gets the teleport effect.
    pub teleport_every: u32,
    /// Extra teleport frames rendered right after a teleporting step.
    pub teleport_extra_frames: u32,
    /// Display time of each frame.
    pub frame_delay_ms: u32,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            hold_frames: 20,
            teleport_every: 5,
            teleport_extra_frames: 2,
            frame_delay_ms: 150,
        }
    }
}

/// One frame of the render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSpec {
    /// Position in the output.
    pub index: u64,
    /// Pose frame number fed to the sprite bob.
    pub pose_frame: u64,
    /// Path step the sprite stands on; `None` for hold frames.
    pub step: Option<usize>,
    /// Path steps eaten once this frame is shown.
    pub visited_len: usize,
    /// Draw the teleport particle overlay.
    pub teleport: bool,
}

impl SessionOpts {
    /// `true` when path step `step` is a teleport step.
    pub fn is_teleport_step(&self, step: usize) -> bool {
        self.teleport_every > 0 && step > 0 && step.is_multiple_of(self.teleport_every as usize)
    }
}

/// Lay out every frame of an animation over a path of `path_len` steps.
///
/// Step `i` yields one frame with pose `i`; teleport steps are followed by
/// `teleport_extra_frames` copies posed `i`, `i + 1`, .. . Hold frames continue the pose numbering
/// from `path_len`.
pub fn frame_script(path_len: usize, opts: &SessionOpts) -> Vec<FrameSpec> {
    let mut out = Vec::with_capacity(expected_frame_count(path_len, opts));
    let mut push = |pose_frame: u64, step: Option<usize>, visited_len: usize, teleport: bool| {
        let index = out.len() as u64;
        out.push(FrameSpec {
            index,
            pose_frame,
            step,
            visited_len,
            teleport,
        });
    };

    for step in 0..path_len {
        let teleport = opts.is_teleport_step(step);
        push(step as u64, Some(step), step + 1, teleport);
        if teleport {
            for extra in 0..opts.teleport_extra_frames {
                push(step as u64 + u64::from(extra), Some(step), step + 1, true);
            }
        }
    }

    for hold in 0..opts.hold_frames {
        push(path_len as u64 + u64::from(hold), None, path_len, false);
    }

    out
}

/// Frame total [`frame_script`] produces, without building it.
pub fn expected_frame_count(path_len: usize, opts: &SessionOpts) -> usize {
    let teleports = if path_len == 0 || opts.teleport_every == 0 {
        0
    } else {
        (path_len - 1) / opts.teleport_every as usize
    };
    path_len + teleports * opts.teleport_extra_frames as usize + opts.hold_frames as usize
}

#[cfg(test)]
#[path = "../../tests/unit/session/script.rs"]
mod tests;
