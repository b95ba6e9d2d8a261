use std::{
    io::{IsTerminal as _, Read as _},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::Context as _;
use clap::Parser;
use rsvp_video::{ConfigLayer, PreparedRender, RenderRequest, RsvpError, RsvpResult, Settings};

/// Turn text into a words-per-minute speed-reading video (requires `ffmpeg` on PATH).
#[derive(Parser, Debug)]
#[command(name = "rsvp-video", version)]
struct Cli {
    /// Input text. Read from piped stdin when omitted.
    #[arg(short, long)]
    text: Option<String>,

    /// Output video path.
    #[arg(short, long, default_value = "output.mp4")]
    output: PathBuf,

    /// Words per minute [default: 300].
    #[arg(short, long)]
    wpm: Option<f64>,

    /// Total video length in seconds; overrides the wpm-derived duration.
    #[arg(short, long)]
    duration: Option<f64>,

    /// Word color: a name, #RRGGBB or rgb(r,g,b) [default: #ffffee].
    #[arg(long)]
    text_color: Option<String>,

    /// Background color [default: black].
    #[arg(long)]
    bg_color: Option<String>,

    /// Focus line and wpm badge color [default: #1a1911].
    #[arg(long)]
    secondary_color: Option<String>,

    /// Word font size in pixels [default: 100].
    #[arg(long)]
    font_size: Option<u32>,

    /// Font file. A platform default is used when omitted.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Seconds of rest after sentence-ending words [default: 0].
    #[arg(long)]
    rest: Option<f64>,

    /// Draw focus lines around the word.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    focus_lines: Option<bool>,

    /// Show the wpm in the corner.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    show_wpm: Option<bool>,

    /// Canvas width [default: 1920].
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height [default: 1080].
    #[arg(long)]
    height: Option<u32>,

    /// Frame rate [default: 30].
    #[arg(long)]
    fps: Option<u32>,

    /// Overwrite the output if it already exists.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    overwrite: Option<bool>,

    /// Config file [default: ~/.rsvp-video.toml].
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the filter chain and ffmpeg command instead of running it.
    #[arg(long)]
    dry_run: bool,

    /// Print the word timeline as JSON to stdout.
    #[arg(long)]
    dump_timeline: bool,

    /// Debug logging (RUST_LOG takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            wpm: self.wpm,
            text_color: self.text_color.clone(),
            bg_color: self.bg_color.clone(),
            secondary_color: self.secondary_color.clone(),
            font_size: self.font_size,
            font: self.font.clone(),
            rest: self.rest,
            focus_lines: self.focus_lines,
            show_wpm: self.show_wpm,
            width: self.width,
            height: self.height,
            fps: self.fps,
            overwrite: self.overwrite,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "rsvp_video=debug"
    } else {
        "rsvp_video=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> RsvpResult<()> {
    let started = Instant::now();

    let file = ConfigLayer::load(cli.config.as_deref())?;
    let settings = Settings::resolve(cli.layer(), file);

    let text = match cli.text {
        Some(text) => text,
        None => read_piped_stdin()?,
    };
    let request = RenderRequest {
        text,
        out_path: cli.output,
        duration: cli.duration,
    };

    let prepared = PreparedRender::prepare(&request, &settings)?;

    if cli.dump_timeline {
        let json = serde_json::to_string_pretty(prepared.spec.words())
            .context("serialize timeline")?;
        println!("{json}");
    }

    if cli.dry_run {
        println!("{}", prepared.filter_chain);
        println!("{:?}", prepared.command());
        return Ok(());
    }

    tracing::info!(out = %prepared.out_path().display(), "rendering video");
    prepared.render()?;

    tracing::info!(
        elapsed_secs = started.elapsed().as_secs_f64(),
        video_secs = prepared.spec.duration_secs(),
        "wrote {}",
        prepared.out_path().display()
    );
    Ok(())
}

fn read_piped_stdin() -> RsvpResult<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(RsvpError::invalid_input(
            "no --text given and nothing piped on stdin. Usage: echo \"text\" | rsvp-video",
        ));
    }

    let mut buf = Vec::new();
    stdin
        .lock()
        .read_to_end(&mut buf)
        .context("failed to read from stdin")?;

    let text = String::from_utf8_lossy(&buf).into_owned();
    if text.trim().is_empty() {
        return Err(RsvpError::invalid_input("the piped input was empty"));
    }
    Ok(text)
}
