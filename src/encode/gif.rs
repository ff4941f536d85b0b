use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{EnderError, EnderResult};
use crate::foundation::math::mul_div255_u8;
use crate::render::frame::FrameRGBA;
use anyhow::Context as _;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Options for [`GifSink`] output.
#[derive(Clone, Debug)]
pub struct GifSinkOpts {
    /// Output GIF file path.
    pub out_path: PathBuf,
    /// Background used to flatten any remaining alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
    /// Quantizer speed passed to the encoder, `1..=30` (higher is faster, coarser palettes).
    pub speed: i32,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            bg_rgba: [0, 0, 0, 255],
            speed: 10,
        }
    }
}

/// Sink that streams frames into an infinitely looping animated GIF.
///
/// The output file is created in `begin` and closed in `end`; dropping the sink early also closes
/// it, leaving whatever was written so far on disk.
pub struct GifSink {
    opts: GifSinkOpts,
    encoder: Option<GifEncoder<TrackedFile>>,
    write_error: Arc<Mutex<Option<String>>>,
    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    next_idx: FrameIndex,
}

impl GifSink {
    /// Create a sink; nothing is opened until `begin`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            write_error: Arc::new(Mutex::new(None)),
            scratch: Vec::new(),
            cfg: None,
            next_idx: FrameIndex(0),
        }
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> EnderResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(EnderError::validation(
                "gif sink width/height must be non-zero",
            ));
        }
        if cfg.width > u32::from(u16::MAX) || cfg.height > u32::from(u16::MAX) {
            return Err(EnderError::validation(format!(
                "gif frames are limited to 65535x65535, got {}x{}",
                cfg.width, cfg.height
            )));
        }
        if !(1..=30).contains(&self.opts.speed) {
            return Err(EnderError::validation(
                "gif quantizer speed must be in 1..=30",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        let file = File::create(&self.opts.out_path).with_context(|| {
            format!("failed to create output '{}'", self.opts.out_path.display())
        })?;
        let writer = TrackedFile {
            inner: BufWriter::new(file),
            error: Arc::clone(&self.write_error),
        };

        let mut encoder = GifEncoder::new_with_speed(writer, self.opts.speed);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| EnderError::encode(format!("failed to set gif loop count: {e}")))?;

        tracing::debug!(
            path = %self.opts.out_path.display(),
            width = cfg.width,
            height = cfg.height,
            delay_ms = cfg.frame_delay_ms,
            "gif sink opened"
        );
        self.scratch = vec![0u8; (cfg.width as usize) * (cfg.height as usize) * 4];
        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.next_idx = FrameIndex(0);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> EnderResult<()> {
        let cfg = self
            .cfg
            .ok_or_else(|| EnderError::encode("gif sink not started"))?;
        if idx != self.next_idx {
            return Err(EnderError::encode(format!(
                "gif sink expected frame {}, got {}",
                self.next_idx.0, idx.0
            )));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(EnderError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(EnderError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        if frame.premultiplied {
            flatten_premul_over_bg_to_opaque_rgba8(
                &mut self.scratch,
                &frame.data,
                self.opts.bg_rgba,
            )?;
        } else {
            self.scratch.copy_from_slice(&frame.data);
        }

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(EnderError::encode("gif sink is already finalized"));
        };
        let buffer = RgbaImage::from_raw(cfg.width, cfg.height, self.scratch.clone())
            .ok_or_else(|| EnderError::validation("frame buffer does not match its size"))?;
        let delay = Delay::from_numer_denom_ms(cfg.frame_delay_ms, 1);
        encoder
            .encode_frame(Frame::from_parts(buffer, 0, 0, delay))
            .map_err(|e| EnderError::encode(format!("failed to encode frame {}: {e}", idx.0)))?;

        self.next_idx = FrameIndex(idx.0 + 1);
        Ok(())
    }

    fn end(&mut self) -> EnderResult<()> {
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| EnderError::encode("gif sink not started"))?;
        // Dropping the encoder writes the trailer and flushes the file.
        drop(encoder);
        self.cfg = None;

        let failure = self
            .write_error
            .lock()
            .map_err(|_| EnderError::encode("gif write status poisoned"))?
            .take();
        if let Some(msg) = failure {
            return Err(EnderError::encode(format!(
                "failed to write '{}': {msg}",
                self.opts.out_path.display()
            )));
        }

        tracing::debug!(
            frames = self.next_idx.0,
            path = %self.opts.out_path.display(),
            "gif sink closed"
        );
        Ok(())
    }
}

/// Buffered file that records the first IO error, including the one from the final flush on drop.
struct TrackedFile {
    inner: BufWriter<File>,
    error: Arc<Mutex<Option<String>>>,
}

impl TrackedFile {
    fn record<T>(&self, res: std::io::Result<T>) -> std::io::Result<T> {
        if let Err(e) = &res
            && let Ok(mut slot) = self.error.lock()
            && slot.is_none()
        {
            *slot = Some(e.to_string());
        }
        res
    }
}

impl Write for TrackedFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let res = self.inner.write(buf);
        self.record(res)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        let res = self.inner.flush();
        self.record(res)
    }
}

impl Drop for TrackedFile {
    fn drop(&mut self) {
        let res = self.inner.flush();
        let _ = self.record(res);
    }
}

fn flatten_premul_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> EnderResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(EnderError::validation(
            "flatten_premul_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3];
        if a == 255 {
            d.copy_from_slice(s);
            continue;
        }

        let inv = 255u16 - u16::from(a);
        for ((dc, sc), bc) in d[..3].iter_mut().zip(&s[..3]).zip(&bg_rgba[..3]) {
            *dc = sc.saturating_add(mul_div255_u8(u16::from(*bc), inv));
        }
        d[3] = 255;
    }

    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> EnderResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
