//! gesture_live — command-line entry point.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use clap::{Parser, Subcommand};
use gesture_live::app::{run, AppConfig, OutputFormat, RunSummary};
use gesture_live::source::{read_sim_keys, ReplaySource, SimLandmarkSource};
use gesture_live::Result;
use hand_pose::{classify, Landmark};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Classify hand gestures from a stream of landmark frames")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// YAML config file; flags below override it.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit one JSON object per frame instead of status lines.
    #[arg(long, global = true)]
    json: bool,

    /// Frames a label must persist before it is shown.
    #[arg(long, global = true)]
    hold_frames: Option<u32>,

    /// Show `Unknown` rather than suppressing it.
    #[arg(long, global = true)]
    show_unknown: bool,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay JSON-lines frames from a file, or `-` for stdin.
    Replay {
        input: PathBuf,
        /// Pause between frames in milliseconds.
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Drive canned poses from the keyboard.
    Sim,
    /// Poll a LeapMotion controller (requires the `leap` feature).
    Leap,
    /// Classify one hand given as a JSON array of 21 landmarks.
    Classify {
        input: PathBuf,
    },
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);

    if let Err(e) = dispatch(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn dispatch(args: Args) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None       => AppConfig::default(),
    };
    if args.json { cfg.output = OutputFormat::Json; }
    if args.show_unknown { cfg.show_unknown = true; }
    if let Some(n) = args.hold_frames { cfg.hold_frames = n; }

    let summary = match args.command {
        Command::Replay { input, interval_ms } => {
            if let Some(ms) = interval_ms { cfg.frame_interval_ms = ms; }
            let source = ReplaySource::new(open_input(&input)?).paced(cfg.frame_interval());
            run(source, &cfg, io::stdout())?
        }
        Command::Sim => {
            write_sim_banner(&mut io::stderr().lock())?;
            let (key_tx, key_rx) = mpsc::channel();
            thread::spawn(move || read_sim_keys(io::stdin().lock(), key_tx));
            run(SimLandmarkSource { rx: key_rx }, &cfg, io::stdout())?
        }
        Command::Leap => run_leap(&cfg)?,
        Command::Classify { input } => return classify_one(&input, &cfg),
    };

    if summary.rejected > 0 {
        tracing::warn!(rejected = summary.rejected, "some frames had a malformed primary hand");
    }
    Ok(())
}

#[cfg(feature = "leap")]
fn run_leap(cfg: &AppConfig) -> Result<RunSummary> {
    use gesture_live::source::LeapLandmarkSource;
    let source = LeapLandmarkSource { calibration: cfg.leap.clone() };
    run(source, cfg, io::stdout())
}

#[cfg(not(feature = "leap"))]
fn run_leap(_cfg: &AppConfig) -> Result<RunSummary> {
    Err(gesture_live::LiveError::Source(
        "built without LeapMotion support (rebuild with --features leap)".to_string(),
    ))
}

fn classify_one(input: &Path, cfg: &AppConfig) -> Result<()> {
    let mut text = String::new();
    open_input(input)?.read_to_string(&mut text)?;
    let landmarks: Vec<Landmark> = serde_json::from_str(&text)?;
    let result = classify(&landmarks)?;

    match cfg.output {
        OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
        OutputFormat::Text => println!("{}", result),
    }
    Ok(())
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead + Send>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

// Key help goes to stderr; stdout carries only presenter output.
fn write_sim_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║          Gesture Live — Keyboard Landmark Simulator          ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝")?;
    writeln!(out)?;
    writeln!(out, "  t=Thumbs Up  f=Fist  o=Open Hand  p=Peace Sign  i=Pointing")?;
    writeln!(out, "  3=three fingers  2=two hands  n=no hands  q=quit")?;
    writeln!(out, "  (type keys, then Enter)")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_live::source::SimKey;

    #[test]
    fn sim_banner_lists_every_key() {
        let mut buf = Vec::new();
        write_sim_banner(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for key in ['t', 'f', 'o', 'p', 'i', '3', '2', 'n', 'q'] {
            assert!(SimKey::from_char(key).is_some());
            assert!(text.contains(&format!("{key}=")), "missing {key}");
        }
    }

    #[test]
    fn json_flag_parses_for_sim() {
        let args = Args::try_parse_from(["gesture_live", "sim", "--json"]).unwrap();
        assert!(args.json);
        assert!(matches!(args.command, Command::Sim));
    }
}
