use super::*;
use crate::activity::record::ActivityRecord;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{GridPos, Tier};
use crate::render::frame::FrameRGBA;
use chrono::Duration;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

fn session_for(grid: Grid, seed: u64) -> AnimationSession {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let path = plan_path(&grid, &mut rng);
    AnimationSession::new(
        grid,
        path,
        FrameRenderer::new(RenderStyle::default(), None),
        SessionOpts::default(),
    )
}

fn grid_with_active(n: usize) -> Grid {
    let start = today() - Duration::days(365);
    let records: Vec<_> = (0..365)
        .map(|i| {
            let count = if i < n { 3 } else { 0 };
            ActivityRecord::new(start + Duration::days(i as i64), count)
        })
        .collect();
    Grid::from_records(&records)
}

#[test]
fn plan_with_silent_source_has_empty_path() {
    let mut source = |_: NaiveDate| 0u32;
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let session = AnimationSession::plan(
        &mut source,
        today(),
        None,
        RenderStyle::default(),
        SessionOpts::default(),
        &mut rng,
    );
    assert!(session.path().is_empty());
    assert_eq!(session.grid().count_active(), 0);
    assert_eq!(session.script().len(), 20);
}

#[test]
fn render_into_pushes_every_scripted_frame_in_order() {
    let mut session = session_for(grid_with_active(6), 3);
    assert_eq!(session.path().len(), 6);

    let mut sink = InMemorySink::new();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let stats = session.render_into(&mut sink, &mut rng).unwrap();

    assert_eq!(stats.path_len, 6);
    assert_eq!(stats.teleports, 1);
    assert_eq!(stats.frames, 6 + 2 + 20);
    assert!(sink.is_finished());

    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.frame_delay_ms), (939, 157, 150));

    let frames = sink.frames();
    assert_eq!(frames.len() as u64, stats.frames);
    for (i, (idx, frame)) in frames.iter().enumerate() {
        assert_eq!(idx.0, i as u64);
        assert_eq!((frame.width, frame.height), (939, 157));
    }
}

#[test]
fn hold_frames_show_every_cell_eaten() {
    let mut session = session_for(grid_with_active(3), 9);
    let path: Vec<GridPos> = session.path().steps().to_vec();
    let mut sink = InMemorySink::new();
    session
        .render_into(&mut sink, &mut ChaCha8Rng::seed_from_u64(0))
        .unwrap();

    let style = RenderStyle::default();
    let layout = *session.renderer().layout();
    let (_, last) = sink.frames().last().unwrap();
    for pos in path {
        assert_eq!(session.grid().tier(pos), Tier::from_count(3));
        let (x, y) = layout.cell_origin(pos);
        let px = last.pixel((x + 7) as u32, (y + 7) as u32).unwrap();
        assert_eq!(&px[..3], &style.eaten);
    }
}

#[test]
fn sink_failure_propagates() {
    struct Refusing;
    impl FrameSink for Refusing {
        fn begin(&mut self, _cfg: SinkConfig) -> EnderResult<()> {
            Ok(())
        }
        fn push_frame(&mut self, _idx: FrameIndex, _frame: &FrameRGBA) -> EnderResult<()> {
            Err(EnderError::encode("disk full"))
        }
        fn end(&mut self) -> EnderResult<()> {
            Ok(())
        }
    }

    let mut session = session_for(Grid::default(), 0);
    let err = session
        .render_into(&mut Refusing, &mut ChaCha8Rng::seed_from_u64(0))
        .unwrap_err();
    assert!(matches!(err, EnderError::Encode(_)));
}
