use super::*;
use crate::activity::record::ActivityRecord;
use crate::render::style::TitleStyle;
use chrono::{Duration, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn opaque(rgb: [u8; 3]) -> [u8; 4] {
    [rgb[0], rgb[1], rgb[2], 255]
}

fn grid_with(counts: &[(usize, u32)]) -> Grid {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let records: Vec<_> = (0..365)
        .map(|i| {
            let count = counts
                .iter()
                .find(|(idx, _)| *idx == i)
                .map_or(0, |(_, c)| *c);
            ActivityRecord::new(start + Duration::days(i as i64), count)
        })
        .collect();
    Grid::from_records(&records)
}

fn center_of(layout: &GridLayout, pos: GridPos) -> (u32, u32) {
    let (x, y) = layout.cell_origin(pos);
    ((x + 7) as u32, (y + 7) as u32)
}

fn render(
    renderer: &mut FrameRenderer,
    grid: &Grid,
    position: Option<GridPos>,
    visited: &VisitedSet,
    teleporting: bool,
    seed: u64,
) -> FrameRGBA {
    let input = FrameInput {
        grid,
        position,
        visited,
        pose_frame: 0,
        teleporting,
    };
    renderer
        .render(&input, &mut ChaCha8Rng::seed_from_u64(seed))
        .unwrap()
}

#[test]
fn frame_has_canvas_size_and_is_opaque() {
    let mut r = FrameRenderer::new(RenderStyle::default(), None);
    let grid = grid_with(&[]);
    let frame = render(&mut r, &grid, None, &VisitedSet::new(), false, 0);

    assert_eq!((frame.width, frame.height), (939, 157));
    assert_eq!(frame.data.len(), 939 * 157 * 4);
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn grid_cells_use_tier_colors_and_outline() {
    let style = RenderStyle::default();
    let mut r = FrameRenderer::new(style.clone(), None);
    // index 8 -> (1, 1) tier 4; index 0 -> (0, 0) tier 1
    let grid = grid_with(&[(0, 1), (8, 12)]);
    let frame = render(&mut r, &grid, None, &VisitedSet::new(), false, 0);
    let layout = *r.layout();

    assert_eq!(frame.pixel(0, 0), Some(opaque(style.background)));
    assert_eq!(frame.pixel(20, 20), Some(opaque(style.cell_outline)));

    let (x, y) = center_of(&layout, GridPos::new(0, 0));
    assert_eq!(frame.pixel(x, y), Some(opaque(style.tier_colors[1])));
    let (x, y) = center_of(&layout, GridPos::new(1, 1));
    assert_eq!(frame.pixel(x, y), Some(opaque(style.tier_colors[4])));
    let (x, y) = center_of(&layout, GridPos::new(4, 30));
    assert_eq!(frame.pixel(x, y), Some(opaque(style.tier_colors[0])));
}

#[test]
fn eaten_cells_get_glow_underlay() {
    let style = RenderStyle::default();
    let mut r = FrameRenderer::new(style.clone(), None);
    let grid = grid_with(&[(8, 12)]);
    let pos = GridPos::new(1, 1);
    let mut visited = VisitedSet::new();
    visited.visit(pos);

    let frame = render(&mut r, &grid, None, &visited, false, 0);
    let layout = *r.layout();
    let (cx, cy) = center_of(&layout, pos);
    assert_eq!(frame.pixel(cx, cy), Some(opaque(style.eaten)));

    let glow = layout.glow_rect(pos);
    assert_eq!(
        frame.pixel(glow.x0 as u32, glow.y0 as u32),
        Some(opaque(style.eaten_glow))
    );
    assert_eq!(
        frame.pixel((glow.x1 - 1) as u32, (glow.y1 - 1) as u32),
        Some(opaque(style.eaten_glow))
    );
}

#[test]
fn sprite_is_drawn_only_with_a_position() {
    let style = RenderStyle::default();
    let mut r = FrameRenderer::new(style.clone(), None);
    let grid = grid_with(&[(8, 12)]);
    let pos = GridPos::new(1, 1);
    let layout = *r.layout();

    let sprite_box = layout.sprite_box(pos);
    let eye = sprite_parts(layout.sprite_size(), 0)
        .into_iter()
        .find(|p| p.paint == SpritePaint::Eye)
        .unwrap()
        .rect
        .translate(sprite_box.x0, sprite_box.y0);

    let with = render(&mut r, &grid, Some(pos), &VisitedSet::new(), false, 0);
    assert_eq!(
        with.pixel(eye.x0 as u32, eye.y0 as u32),
        Some(opaque(style.sprite_eyes))
    );

    let without = render(&mut r, &grid, None, &VisitedSet::new(), false, 0);
    assert_ne!(
        without.pixel(eye.x0 as u32, eye.y0 as u32),
        Some(opaque(style.sprite_eyes))
    );
}

#[test]
fn teleport_particles_stay_in_their_box() {
    let mut r = FrameRenderer::new(RenderStyle::default(), None);
    let grid = grid_with(&[(8, 12)]);
    let pos = GridPos::new(1, 1);
    let area = r.layout().particle_box(pos);
    let visited = VisitedSet::new();

    let mut any_changed = false;
    for seed in 0..5 {
        let plain = render(&mut r, &grid, Some(pos), &visited, false, seed);
        let burst = render(&mut r, &grid, Some(pos), &visited, true, seed);
        for y in 0..plain.height {
            for x in 0..plain.width {
                if plain.pixel(x, y) != burst.pixel(x, y) {
                    assert!(area.contains(x as i32, y as i32), "({x}, {y})");
                    any_changed = true;
                }
            }
        }
    }
    assert!(any_changed);
}

#[test]
fn title_is_off_by_default() {
    let r = FrameRenderer::new(RenderStyle::default(), Some("octocat".into()));
    assert!(r.title_font().is_none());
}

#[test]
fn builtin_title_paints_text_in_the_top_band() {
    let title = TitleStyle {
        font_path: "/no/such/font.ttf".into(),
        ..TitleStyle::default()
    };
    let style = RenderStyle {
        title: Some(title.clone()),
        ..RenderStyle::default()
    };
    let mut r = FrameRenderer::new(style, Some("octocat".into()));
    assert!(r.title_font().is_some_and(TitleFont::is_builtin));

    let grid = grid_with(&[]);
    let frame = render(&mut r, &grid, None, &VisitedSet::new(), false, 0);
    let band = title.top..title.top + 10;
    let lit = band
        .flat_map(|y| (0..frame.width).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.pixel(x, y) == Some(opaque(title.color)))
        .count();
    assert!(lit > 0);
}

#[test]
fn outline_font_title_is_composited_over_the_background() {
    let title = TitleStyle::default();
    if !title.font_path.exists() {
        eprintln!("skipping: {} not installed", title.font_path.display());
        return;
    }
    let style = RenderStyle {
        title: Some(title),
        ..RenderStyle::default()
    };
    let mut r = FrameRenderer::new(style, Some("octocat".into()));
    assert!(r.title_font().is_some_and(|f| !f.is_builtin()));

    let grid = grid_with(&[]);
    let frame = render(&mut r, &grid, None, &VisitedSet::new(), false, 0);
    let defaults = RenderStyle::default();
    let background = opaque(defaults.background);
    // The grid starts below the padding, so anything lit above it is the caption.
    let band = 0..defaults.padding;
    let touched = band
        .flat_map(|y| (0..frame.width).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.pixel(x, y) != Some(background))
        .count();
    assert!(touched > 0);
    assert!(frame.data.chunks_exact(4).all(|px| px[3] == 255));
}
