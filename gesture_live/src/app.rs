//! Top-level application loop.
//!
//! `run` spawns a [`LandmarkSource`], feeds every frame through the
//! [`GestureTracker`], and hands each snapshot to the [`Presenter`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use hand_pose::{GestureLabel, GestureResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::debounce::Debouncer;
use crate::error::{LiveError, Result};
use crate::source::{spawn_landmark_source, LandmarkSource, LeapCalibration};
use crate::tracker::{GestureTracker, Snapshot};

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One status line whenever the display changes.
    #[default]
    Text,
    /// One JSON object per frame.
    Json,
}

/// Configuration for the full application.
///
/// Every field has a default, so a config file only needs the keys it
/// changes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pause after each replayed frame, in milliseconds (0 = no pacing).
    pub frame_interval_ms: u64,
    /// Frames a label must persist before it is displayed (0/1 = off).
    pub hold_frames:       u32,
    /// Display `Unknown` instead of suppressing it.
    pub show_unknown:      bool,
    pub output:            OutputFormat,
    pub leap:              LeapCalibration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            frame_interval_ms: 0,
            hold_frames:       1,
            show_unknown:      false,
            output:            OutputFormat::Text,
            leap:              LeapCalibration::default(),
        }
    }
}

impl AppConfig {
    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|source| LiveError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Presenter
// ════════════════════════════════════════════════════════════════════════════

/// Status line for a snapshot whose displayed label is `shown`.
pub fn render_status(hand_count: usize, shown: Option<GestureLabel>, show_unknown: bool) -> String {
    if hand_count == 0 {
        return "No hands detected".to_string();
    }
    let hands = if hand_count == 1 {
        "1 Hand Detected".to_string()
    } else {
        format!("{} Hands Detected", hand_count)
    };
    match shown {
        Some(label) if show_unknown || !label.is_unknown() => {
            format!("{}  ·  {}", GestureResult::from(label), hands)
        }
        _ => hands,
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(flatten)]
    snapshot: &'a Snapshot,
    stable:   Option<GestureLabel>,
}

/// Writes snapshots for a human (text) or a downstream program (JSON).
pub struct Presenter<W: Write> {
    out:          W,
    format:       OutputFormat,
    show_unknown: bool,
    debouncer:    Debouncer,
    last_line:    Option<String>,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, cfg: &AppConfig) -> Self {
        Presenter {
            out,
            format:       cfg.output,
            show_unknown: cfg.show_unknown,
            debouncer:    Debouncer::new(cfg.hold_frames),
            last_line:    None,
        }
    }

    pub fn present(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        let stable = self.debouncer.push(snapshot.gesture.map(|g| g.name));

        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonLine { snapshot, stable })?;
                writeln!(self.out)?;
            }
            OutputFormat::Text => {
                let line = render_status(snapshot.hand_count, stable, self.show_unknown);
                if self.last_line.as_deref() != Some(line.as_str()) {
                    writeln!(self.out, "  {}", line)?;
                    self.last_line = Some(line);
                }
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Totals reported when a source runs dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub frames:   u64,
    pub rejected: u64,
}

/// Run until `source` stops delivering frames.
///
/// Frames are handled strictly one at a time on the calling thread; the
/// source runs on its own thread and only queues frames.
pub fn run<S: LandmarkSource, W: Write>(source: S, cfg: &AppConfig, out: W) -> Result<RunSummary> {
    let frames = spawn_landmark_source(source);
    let mut tracker = GestureTracker::new();
    let mut presenter = Presenter::new(out, cfg);

    info!(output = ?cfg.output, hold_frames = cfg.hold_frames, "waiting for frames");
    for frame in frames {
        let snapshot = tracker.on_frame(&frame);
        presenter.present(&snapshot)?;
    }

    let summary = RunSummary { frames: tracker.frames(), rejected: tracker.rejected() };
    info!(frames = summary.frames, rejected = summary.rejected, "landmark source closed");
    Ok(summary)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
