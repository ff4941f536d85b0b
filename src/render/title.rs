use crate::foundation::core::Canvas;
use crate::foundation::error::{EnderError, EnderResult};
use crate::render::glyphs;
use crate::render::style::TitleStyle;
use anyhow::Context as _;
use std::path::Path;
use std::sync::Arc;

/// Font used for the caption.
///
/// Acquisition never fails: when the preferred font file is unusable the built-in bitmap face is
/// substituted.
#[derive(Clone)]
pub enum TitleFont {
    /// Outline font loaded from disk, shaped and rasterized through `usvg`/`resvg`.
    Face {
        /// Database holding only the loaded face.
        fontdb: Arc<usvg::fontdb::Database>,
        /// Family name of the loaded face.
        family: String,
    },
    /// 3x5 bitmap glyphs painted as rectangles.
    Builtin,
}

impl std::fmt::Debug for TitleFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Face { family, .. } => f.debug_struct("Face").field("family", family).finish(),
            Self::Builtin => f.write_str("Builtin"),
        }
    }
}

impl TitleFont {
    /// Load `path`, falling back to [`TitleFont::Builtin`].
    pub fn acquire(path: &Path) -> Self {
        match load_face(path) {
            Ok(font) => {
                tracing::debug!(path = %path.display(), ?font, "loaded title font");
                font
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %format!("{err:#}"),
                    "title font unavailable, using built-in face"
                );
                Self::Builtin
            }
        }
    }

    /// `true` for the built-in bitmap face.
    pub fn is_builtin(&self) -> bool {
        matches!(self, Self::Builtin)
    }
}

fn load_face(path: &Path) -> anyhow::Result<TitleFont> {
    let mut db = usvg::fontdb::Database::new();
    db.load_font_file(path)
        .with_context(|| format!("read font '{}'", path.display()))?;
    let family = db
        .faces()
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        .with_context(|| format!("no usable face in '{}'", path.display()))?;
    Ok(TitleFont::Face {
        fontdb: Arc::new(db),
        family,
    })
}

/// Rasterize `text` centered horizontally on a transparent canvas.
///
/// Returns premultiplied RGBA8.
pub(crate) fn rasterize_face_title(
    fontdb: &Arc<usvg::fontdb::Database>,
    family: &str,
    text: &str,
    canvas: Canvas,
    style: &TitleStyle,
) -> EnderResult<Vec<u8>> {
    let Canvas { width, height } = canvas;
    let font_size = style.font_size;
    let [r, g, b] = style.color;
    let baseline = style.top as f32 + font_size * 0.8;
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><text x="{cx}" y="{baseline}" font-family="{family}" font-weight="bold" font-size="{font_size}" text-anchor="middle" fill="rgb({r},{g},{b})">{body}</text></svg>"#,
        cx = width as f32 / 2.0,
        family = escape_xml(family),
        body = escape_xml(text),
    );

    let opts = usvg::Options {
        fontdb: Arc::clone(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse title svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| EnderError::render("failed to allocate title pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.data().to_vec())
}

/// Scale and left offset for laying `text` out with the built-in face, centered in `width`.
pub(crate) fn builtin_layout(text: &str, width: u32, font_size: f32) -> (i32, i32) {
    let scale = ((font_size / 8.0).round() as i32).max(1);
    let text_w = glyphs::text_width(text) * scale;
    let left = ((width as i32) - text_w) / 2;
    (scale, left)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/title.rs"]
mod tests;
