use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::LevelFilter;
use std::path::Path;

mod args;

use args::Args;
use irisflow::config::AppConfig;
use irisflow::gestures::GestureController;
use irisflow::mapper::CoordinateMapper;
use irisflow::overlay::Overlay;
use irisflow::pipeline::GazePipeline;
use irisflow::pointer::{EnigoPointer, LogPointer, PointerSink};
use irisflow::session::Session;
use irisflow::simulate::SimulatedSource;
use irisflow::source::{FrameSource, ReplaySource};

/// Fallback display size for dry runs without an explicit screen size
const DRY_RUN_SCREEN: (u32, u32) = (1920, 1080);

fn open_source(args: &Args) -> Result<Box<dyn FrameSource>> {
    if args.simulate {
        return Ok(Box::new(SimulatedSource::new(None)));
    }
    let path = args.input.as_deref().unwrap_or("-");
    let source = ReplaySource::open(path).with_context(|| {
        format!(
            "Failed to open landmark input '{}'. Point --input at a recording from the face \
             landmark model, pipe frames to stdin with --input -, or use --simulate.",
            path
        )
    })?;
    Ok(Box::new(source))
}

/// Pointer sink plus the screen size the mapper should target
fn open_sink(config: &AppConfig) -> Result<(Box<dyn PointerSink>, (u32, u32))> {
    if config.pointer.dry_run {
        let w = config.screen.width.unwrap_or(DRY_RUN_SCREEN.0);
        let h = config.screen.height.unwrap_or(DRY_RUN_SCREEN.1);
        let sink: Box<dyn PointerSink> = Box::new(LogPointer::new(w, h));
        return Ok((sink, (w, h)));
    }

    let mut pointer = EnigoPointer::new(config.pointer.fail_safe)
        .context("Failed to initialize pointer control. Re-run with --dry-run to test without it.")?;
    let (detected_w, detected_h) = pointer.display_size()?;
    let w = config.screen.width.unwrap_or(detected_w);
    let h = config.screen.height.unwrap_or(detected_h);
    pointer.set_bounds(w, h);
    let sink: Box<dyn PointerSink> = Box::new(pointer);
    Ok((sink, (w, h)))
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(t) = args.wink_threshold {
        config.tracking.wink_threshold = t;
    }
    if let Some(m) = args.margin {
        config.tracking.margin = m;
    }
    if args.screen_width.is_some() {
        config.screen.width = args.screen_width;
    }
    if args.screen_height.is_some() {
        config.screen.height = args.screen_height;
    }
    if args.dry_run {
        config.pointer.dry_run = true;
    }
    if args.no_clicks {
        config.tracking.clicks_enabled = false;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    // 0. Load Config (CLI overrides are for this session only)
    let mut config = AppConfig::load(Path::new(&args.config)).context("Failed to load configuration")?;
    apply_overrides(&mut config, &args);

    // 1. Setup Input + Output
    let mut source = open_source(&args)?;
    let (mut sink, (screen_w, screen_h)) = open_sink(&config)?;

    // 2. Setup Pipeline
    let mapper = CoordinateMapper::new(screen_w, screen_h, config.tracking.margin)
        .context("Invalid virtual box configuration")?;
    let gestures = GestureController::new(config.tracking.wink_threshold)
        .context("Invalid wink threshold")?;
    let pipeline = GazePipeline::new(mapper, gestures);

    let (frame_w, frame_h) = (config.overlay.frame_width, config.overlay.frame_height);
    let ((x1, y1), (x2, y2)) = mapper.get_box_corners(frame_w, frame_h);

    println!("{}", "IrisFlow started.".green());
    println!("Source: {}", source.name());
    println!("Pointer: {}", sink.name());
    println!(
        "Virtual box: ({}, {}) - ({}, {}) on a {}x{} feed, margin {:.2}",
        x1, y1, x2, y2, frame_w, frame_h, config.tracking.margin
    );
    println!(
        "Wink threshold: {:.2} | Clicks: {}",
        config.tracking.wink_threshold,
        if config.tracking.clicks_enabled { "ON".green() } else { "OFF".yellow() }
    );
    if !config.pointer.dry_run && config.pointer.fail_safe {
        println!("{}", "Move the cursor to the top-left corner to stop.".yellow());
    }

    // 3. Loop
    let mut session = Session::new(
        source.as_mut(),
        sink.as_mut(),
        &pipeline,
        config.tracking.clicks_enabled,
    )
    .with_frame_limit(args.frames);
    let result = session.run();

    if let Some(path) = &args.snapshot {
        if let Some((frame, output)) = session.last_frame() {
            let overlay = Overlay::new(
                frame_w,
                frame_h,
                &config.overlay.box_color_hex,
                config.overlay.dot_size,
            );
            let img = overlay.render(&mapper, frame, output);
            Overlay::save(&img, Path::new(path))
                .with_context(|| format!("Failed to save snapshot to {}", path))?;
            log::info!("Saved snapshot to {}", path);
        } else {
            log::warn!("No frames processed, snapshot not written");
        }
    }

    let summary = match result {
        Ok(summary) => summary,
        Err(irisflow::Error::FailSafe) => {
            println!("{}", "Fail-safe triggered, stopping.".red());
            return Ok(());
        }
        Err(e) => {
            let summary = session.summary();
            log::error!(
                "Session aborted after {} frames ({} with gaze), {} clicks",
                summary.frames,
                summary.frames_with_gaze,
                summary.clicks
            );
            return Err(e).context("Tracking stopped");
        }
    };

    log::info!(
        "Session ended: {} frames ({} with gaze), {} left / {} right winks, {} clicks",
        summary.frames,
        summary.frames_with_gaze,
        summary.left_winks,
        summary.right_winks,
        summary.clicks
    );
    Ok(())
}
