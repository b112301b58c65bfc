use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Landmark recording to replay, one JSON frame per line ("-" for stdin)
    #[arg(short, long, conflicts_with = "simulate")]
    pub input: Option<String>,

    /// Drive the pointer from a synthetic face instead of model output
    #[arg(long, default_value_t = false)]
    pub simulate: bool,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Configuration file
    #[arg(short, long, default_value = irisflow::config::AppConfig::DEFAULT_PATH)]
    pub config: String,

    /// Wink sensitivity override
    #[arg(long)]
    pub wink_threshold: Option<f64>,

    /// Virtual box margin override (0.0 - 0.5)
    #[arg(long)]
    pub margin: Option<f64>,

    #[arg(long)]
    pub screen_width: Option<u32>,

    #[arg(long)]
    pub screen_height: Option<u32>,

    /// Log pointer actions instead of injecting them
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Track gaze only, never click
    #[arg(long, default_value_t = false)]
    pub no_clicks: bool,

    /// Save an annotated image of the last frame on exit
    #[arg(long)]
    pub snapshot: Option<String>,
}
