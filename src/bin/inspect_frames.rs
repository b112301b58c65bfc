use anyhow::{Context, Result};
use irisflow::gestures::GestureController;
use irisflow::mapper::CoordinateMapper;
use irisflow::pipeline::GazePipeline;
use irisflow::source::{FrameSource, ReplaySource};
use irisflow::types::WinkEvent;

fn fmt_opt<T>(value: Option<T>, f: impl Fn(T) -> String) -> String {
    value.map(f).unwrap_or_else(|| "----".to_string())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: inspect_frames <frames.jsonl|-> [screen_w screen_h]");
        return Ok(());
    }

    let screen_w: u32 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(1920);
    let screen_h: u32 = args.get(3).map(|s| s.parse()).transpose()?.unwrap_or(1080);

    let mut source = ReplaySource::open(&args[1]).with_context(|| format!("Failed to open {}", args[1]))?;
    let mapper = CoordinateMapper::new(screen_w, screen_h, CoordinateMapper::DEFAULT_MARGIN)?;
    let pipeline = GazePipeline::new(mapper, GestureController::default());

    println!("Inspecting {} against {}x{}", source.name(), screen_w, screen_h);
    println!(
        "{:<6} | {:<15} | {:<15} | {:<11} | {:<12} | {:<5}",
        "Frame", "Iris", "Gaze (h, v)", "Blink L/R", "Screen", "Wink"
    );
    println!("{}", "-".repeat(80));

    let mut frames = 0u64;
    let mut with_face = 0u64;
    let (mut left, mut right) = (0u64, 0u64);
    let (mut h_min, mut h_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut v_min, mut v_max) = (f64::INFINITY, f64::NEG_INFINITY);

    while let Some(frame) = source.capture()? {
        let out = pipeline.process(&frame);
        frames += 1;

        if let Some(g) = out.gaze {
            with_face += 1;
            h_min = h_min.min(g.h);
            h_max = h_max.max(g.h);
            v_min = v_min.min(g.v);
            v_max = v_max.max(g.v);
        }
        match out.wink {
            WinkEvent::Left => left += 1,
            WinkEvent::Right => right += 1,
            WinkEvent::None => {}
        }

        println!(
            "{:<6} | {:<15} | {:<15} | {:<11} | {:<12} | {:<5}",
            frames,
            fmt_opt(out.iris, |p| format!("{:.3}, {:.3}", p.x, p.y)),
            fmt_opt(out.gaze, |g| format!("{:.3}, {:.3}", g.h, g.v)),
            format!("{:.2}/{:.2}", out.blink.left, out.blink.right),
            fmt_opt(out.screen, |p| format!("{}, {}", p.x, p.y)),
            out.wink.as_str(),
        );
    }

    println!("{}", "-".repeat(80));
    println!("Frames: {} ({} with face, {} malformed)", frames, with_face, source.skipped());
    println!("Winks: {} left, {} right", left, right);
    if with_face > 0 {
        println!("Gaze h range: {:.3} .. {:.3}", h_min, h_max);
        println!("Gaze v range: {:.3} .. {:.3}", v_min, v_max);
    }

    Ok(())
}
