//! Headless session runner (default binary).
//!
//! Drives a seeded session with a fixed frame step and a scripted intent string,
//! then prints the final snapshot as JSON. Rendering and device input belong to
//! other collaborators; this binary exists for reproducible runs and debugging.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};

use cmyk_drop::core::{Session, SessionConfig};
use cmyk_drop::types::Intent;

/// Run a CMYK drop session without a display.
#[derive(Debug, Parser)]
#[command(name = "cmyk-drop", version, about)]
struct Args {
    /// JSON session config; missing fields take defaults
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for the spawn colour source
    #[arg(long)]
    seed: Option<u32>,

    /// Board width (odd)
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// Tiles per spawned group
    #[arg(long)]
    group_size: Option<usize>,

    /// Land a slammed group within the same frame
    #[arg(long)]
    instant_slam: bool,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Intent script: L (left), R (right), D (down), S (slam), W (swap); cycles
    #[arg(short, long, default_value = "")]
    intents: String,

    /// Frames between scripted intents
    #[arg(long, default_value_t = 15)]
    intent_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cmyk_drop=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let script = parse_script(&args.intents)?;

    let mut session = Session::new(config).context("invalid session config")?;
    run(&mut session, &script, &args);

    let snapshot = session.snapshot();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => SessionConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(size) = args.group_size {
        config.spawn_group_size = size;
    }
    config.instant_slam |= args.instant_slam;
    Ok(config)
}

fn parse_script(script: &str) -> Result<Vec<Intent>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match Intent::from_char(c) {
            Some(intent) => Ok(intent),
            None => bail!("unknown intent {c:?} in script"),
        })
        .collect()
}

fn run(session: &mut Session, script: &[Intent], args: &Args) {
    let every = args.intent_every.max(1);
    let mut next_intent = 0usize;
    let mut redraws = 0u64;

    for frame in 0..args.frames {
        if !script.is_empty() && frame % every == 0 {
            let intent = script[next_intent % script.len()];
            next_intent += 1;
            let applied = session.apply_intent(intent);
            debug!(frame, intent = intent.as_str(), applied, "intent");
        }

        if session.advance(args.dt).redraw_needed {
            redraws += 1;
        }
        if let Some(event) = session.take_last_event() {
            if event.points > 0 {
                info!(frame, points = event.points, score = session.score(), "score");
            }
        }
        if session.is_game_over() {
            info!(frame, score = session.score(), "session over");
            break;
        }
    }

    info!(
        ticks = session.ticks(),
        redraws,
        score = session.score(),
        total_spawned = session.total_spawned(),
        "run finished"
    );
}
