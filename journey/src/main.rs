//! LifePath headless walkthrough
//!
//! Runs a whole journey at a fixed frame step without a window and prints
//! the end summary as JSON.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use journey::{load_events, parse_birth_year, CatalogSource, JourneyConfig, Session};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "lifepath", version, about = "Walk a lifetime through history without a window")]
struct Cli {
    /// Year the journey starts from.
    #[arg(long)]
    birth_year: String,

    /// Speed multiplier; must be one of the configured steps.
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Simulated frames per second of real time.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    fps: u32,

    /// JSON config file; defaults apply when omitted.
    #[arg(long, env = "LIFEPATH_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = JourneyConfig::load_or_default(cli.config.as_deref())
        .context("loading journey config")?;

    if !config.speed_steps.contains(&cli.speed) {
        bail!("speed {}x is not one of {:?}", cli.speed, config.speed_steps);
    }

    let birth = parse_birth_year(&cli.birth_year, &config)?;
    let events = futures::executor::block_on(load_events(&CatalogSource::new(), birth.get(), config.max_age));
    info!("LifePath starting: born {}, {} events ahead", birth.get(), events.len());

    let mut session = Session::new(birth, events, &config);
    while session.journey().clock().speed() != cli.speed {
        session.journey_mut().cycle_speed();
    }
    session.journey_mut().request_toggle();

    let step = 1.0 / cli.fps as f64;
    let start = std::time::Instant::now();
    let mut frames: u64 = 0;
    loop {
        let frame = session.advance(step);
        frames += 1;
        if let Some(event) = &frame.tick.activated {
            info!("{} (age {}): {}", event.year, event.age, event.title);
        }
        if frame.tick.ended {
            break;
        }
    }

    info!(
        "Journey complete: {} frames simulated in {:?}",
        frames,
        start.elapsed()
    );

    let summary = session
        .journey()
        .summary()
        .context("journey ended without a summary")?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
