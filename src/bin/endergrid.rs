use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Render a year of activity as a grid eaten by a teleporting enderman.
#[derive(Parser, Debug)]
#[command(name = "endergrid", version)]
struct Cli {
    /// User the animation is made for.
    username: String,

    /// Output GIF path.
    #[arg(short, long, default_value = "enderman-animation.gif")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = ChaCha8Rng::from_entropy();
    let today = chrono::Local::now().date_naive();

    tracing::info!(user = %cli.username, "generating activity");
    let style = endergrid::RenderStyle::default();
    let opts = endergrid::SessionOpts::default();
    let [r, g, b] = style.background;

    let mut source = endergrid::RandomActivity::new(ChaCha8Rng::from_rng(&mut rng)?)
        .context("set up activity generator")?;
    let mut session = endergrid::AnimationSession::plan(
        &mut source,
        today,
        Some(cli.username.clone()),
        style,
        opts,
        &mut rng,
    );

    let mut sink = endergrid::GifSink::new(endergrid::GifSinkOpts {
        bg_rgba: [r, g, b, 255],
        ..endergrid::GifSinkOpts::new(&cli.output)
    });
    let stats = session
        .render_into(&mut sink, &mut rng)
        .with_context(|| format!("render animation to '{}'", cli.output.display()))?;

    let size = std::fs::metadata(&cli.output)
        .with_context(|| format!("stat output '{}'", cli.output.display()))?
        .len();

    println!("Animation saved to {}", cli.output.display());
    println!("Total frames: {}", stats.frames);
    println!("File size: {:.1} KB", size as f64 / 1024.0);
    Ok(())
}
