use std::sync::Arc;

use clap::Parser;

use nightdrift::{
    load_settings, save_settings, ChunkGenerator, EngineSettings, FlightPath, HeadlessRenderer,
    NoiseField, StreamingController, DEFAULT_SETTINGS_FILE,
};

const STATS_INTERVAL: u64 = 120;

/// Endless night-flight terrain streaming demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Noise seed; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Number of streaming ticks to run
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Path to the settings file
    #[arg(long, default_value_t = String::from(DEFAULT_SETTINGS_FILE))]
    settings: String,

    /// Write default settings to the settings file and exit
    #[arg(long, default_value_t = false)]
    write_settings: bool,
}

pub fn run_flyover() -> Result<(), String> {
    let args = Args::parse();

    if args.write_settings {
        save_settings(&args.settings, &EngineSettings::default())?;
        tracing::info!("Wrote default settings to {}", args.settings);
        return Ok(());
    }

    let settings = match load_settings(&args.settings) {
        Ok(settings) => {
            tracing::info!("Loaded settings from {}", args.settings);
            settings
        }
        Err(err) => {
            tracing::warn!("Could not load settings from {}: {}", args.settings, err);
            tracing::warn!("Using default settings.");
            EngineSettings::default()
        }
    };

    // A fresh seed per run unless pinned; every flight sees new terrain.
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Starting flyover with seed {} for {} ticks", seed, args.ticks);

    let noise = Arc::new(NoiseField::new(seed));
    let generator = ChunkGenerator::new(noise, settings.streaming.chunk_size);
    let mut controller = StreamingController::new(settings.streaming, generator)?;
    let mut flight = FlightPath::new(settings.flight.speed, settings.flight.altitude);
    let mut renderer = HeadlessRenderer::new();

    for tick in 1..=args.ticks {
        let viewpoint = flight.advance();
        controller.tick(&viewpoint, &mut renderer);

        if tick % STATS_INTERVAL == 0 {
            let stats = controller.stats();
            tracing::info!(
                "Tick {}: {} resident ({} settled), {} generated, {} evicted",
                tick,
                stats.resident,
                stats.settled,
                stats.generated_total,
                stats.evicted_total
            );
        }
    }

    let ticks_run = controller.ticks();
    let stats = controller.stats();
    controller.shutdown(&mut renderer);
    tracing::info!(
        "Flyover complete after {} ticks: {} chunks generated, {} evicted, peak {} resident, {} trees",
        ticks_run,
        stats.generated_total,
        stats.evicted_total,
        renderer.peak_live(),
        renderer.placements_seen()
    );

    if renderer.live_count() != 0 {
        return Err(format!(
            "renderer still holds {} chunks after shutdown",
            renderer.live_count()
        ));
    }
    Ok(())
}
