//! Landmark sources — anything that delivers per-frame hand landmarks.
//!
//! The public interface is [`Frame`] delivered over a `mpsc` channel.
//! Consumers don't need to know whether frames came from a replay file, the
//! keyboard simulator, or real hardware.

use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use hand_pose::{Finger, GestureLabel, Landmark, PoseBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{LiveError, Result};

// ════════════════════════════════════════════════════════════════════════════
// Frame
// ════════════════════════════════════════════════════════════════════════════

/// One detection callback's worth of hands, in detector order.
///
/// Hands are kept as raw landmark lists: the detector is external and may hand
/// over malformed data, which is rejected at classification time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default, alias = "multiHandLandmarks", alias = "multi_hand_landmarks")]
    pub hands: Vec<Vec<Landmark>>,
}

impl Frame {
    pub fn empty() -> Self {
        Frame::default()
    }

    pub fn with_hands(hands: Vec<Vec<Landmark>>) -> Self {
        Frame { hands }
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LandmarkSource trait — unified interface for replay, sim and hw
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`Frame`]s over a channel.
///
/// Frames are sent in order, one per processed video frame.  Returning (and
/// so dropping `tx`) ends the stream.
pub trait LandmarkSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<Frame>);
}

/// Spawn a landmark source on its own thread and return the receiving end.
pub fn spawn_landmark_source<S: LandmarkSource>(source: S) -> Receiver<Frame> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// ReplaySource — JSON lines
// ════════════════════════════════════════════════════════════════════════════

/// Replays frames recorded one JSON object per line:
///
/// ```text
/// {"hands": [[{"x":0.51,"y":0.72,"z":0.0}, … 21 points], …]}
/// ```
///
/// Blank lines and lines starting with `#` are skipped.  A line that fails to
/// decode is logged and skipped; a read error ends the stream.
pub struct ReplaySource<R> {
    reader:   R,
    interval: Duration,
}

impl<R: BufRead + Send + 'static> ReplaySource<R> {
    pub fn new(reader: R) -> Self {
        ReplaySource { reader, interval: Duration::ZERO }
    }

    /// Sleep `interval` after each delivered frame.
    pub fn paced(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Decode one replay line (`line` is 1-based, for messages).
pub fn parse_frame_line(text: &str, line: usize) -> Result<Option<Frame>> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| LiveError::Frame { line, source })
}

impl<R: BufRead + Send + 'static> LandmarkSource for ReplaySource<R> {
    fn run(self: Box<Self>, tx: Sender<Frame>) {
        let ReplaySource { reader, interval } = *self;
        let mut delivered = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(l)  => l,
                Err(e) => {
                    warn!(error = %e, "replay read failed, ending stream");
                    break;
                }
            };
            match parse_frame_line(&line, i + 1) {
                Ok(Some(frame)) => {
                    if tx.send(frame).is_err() { return; }
                    delivered += 1;
                    if !interval.is_zero() { thread::sleep(interval); }
                }
                Ok(None) => {}
                Err(e)   => warn!("{e}, skipping"),
            }
        }
        info!(frames = delivered, "replay finished");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimLandmarkSource — keyboard simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Simulated key presses, each standing for a canned pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    ThumbsUp,      // t
    Fist,          // f
    OpenHand,      // o
    PeaceSign,     // p
    Pointing,      // i
    ThreeFingers,  // 3
    TwoHands,      // 2
    NoHands,       // n
    Quit,          // q
}

impl SimKey {
    pub fn from_char(c: char) -> Option<SimKey> {
        match c.to_ascii_lowercase() {
            't' => Some(SimKey::ThumbsUp),
            'f' => Some(SimKey::Fist),
            'o' => Some(SimKey::OpenHand),
            'p' => Some(SimKey::PeaceSign),
            'i' => Some(SimKey::Pointing),
            '3' => Some(SimKey::ThreeFingers),
            '2' => Some(SimKey::TwoHands),
            'n' => Some(SimKey::NoHands),
            'q' => Some(SimKey::Quit),
            _   => None,
        }
    }

    /// The frame this key simulates; `None` for [`SimKey::Quit`].
    pub fn frame(self) -> Option<Frame> {
        let one = |label: GestureLabel| {
            Frame::with_hands(vec![PoseBuilder::for_label(label).landmarks()])
        };
        let frame = match self {
            SimKey::ThumbsUp     => one(GestureLabel::ThumbsUp),
            SimKey::Fist         => one(GestureLabel::Fist),
            SimKey::OpenHand     => one(GestureLabel::OpenHand),
            SimKey::PeaceSign    => one(GestureLabel::PeaceSign),
            SimKey::Pointing     => one(GestureLabel::Pointing),
            SimKey::ThreeFingers => one(GestureLabel::Unknown),
            SimKey::TwoHands     => Frame::with_hands(vec![
                PoseBuilder::for_label(GestureLabel::PeaceSign).at(0.35, 0.5).scale(0.8).landmarks(),
                PoseBuilder::new().finger(Finger::Thumb, true).at(0.7, 0.5).scale(0.8).landmarks(),
            ]),
            SimKey::NoHands      => Frame::empty(),
            SimKey::Quit         => return None,
        };
        Some(frame)
    }
}

/// Landmark source driven by [`SimKey`] events.
pub struct SimLandmarkSource {
    pub rx: Receiver<SimKey>,
}

impl LandmarkSource for SimLandmarkSource {
    fn run(self: Box<Self>, tx: Sender<Frame>) {
        for key in self.rx {
            let Some(frame) = key.frame() else {
                info!("simulation quit");
                return;
            };
            debug!(?key, hands = frame.hands.len(), "simulated frame");
            if tx.send(frame).is_err() { return; }
        }
    }
}

/// Translate typed lines into [`SimKey`]s until `q`, EOF, or hang-up.
///
/// Every recognised character on a line is sent, so `"ffp"` is three frames.
pub fn read_sim_keys<R: BufRead>(reader: R, tx: Sender<SimKey>) {
    for line in reader.lines() {
        let Ok(line) = line else { return };
        for key in line.chars().filter_map(SimKey::from_char) {
            if tx.send(key).is_err() || key == SimKey::Quit {
                return;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapMotion normalisation
// ════════════════════════════════════════════════════════════════════════════

/// Maps LeapMotion millimetre coordinates onto normalized image coordinates.
///
/// The device's x axis is mirrored so that the result matches a mirrored
/// camera view, and y is flipped so it grows downward.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LeapCalibration {
    /// Horizontal span (mm) mapped onto `[0, 1]`, centred on the device.
    pub x_range_mm: f32,
    /// Height (mm) above the device that maps to the bottom of the frame.
    pub y_floor_mm: f32,
    /// Vertical span (mm) mapped onto `[0, 1]`.
    pub y_range_mm: f32,
}

impl Default for LeapCalibration {
    fn default() -> Self {
        LeapCalibration { x_range_mm: 400.0, y_floor_mm: 50.0, y_range_mm: 400.0 }
    }
}

impl LeapCalibration {
    pub fn normalize(&self, x: f32, y: f32, z: f32) -> Landmark {
        Landmark::with_depth(
            0.5 - x / self.x_range_mm,
            1.0 - (y - self.y_floor_mm) / self.y_range_mm,
            z / self.x_range_mm,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapLandmarkSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Landmark source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
///
/// Each tracked hand is mapped onto the 21-point topology: the wrist is taken
/// from the index metacarpal's base, and each digit contributes the far end of
/// its metacarpal, proximal, intermediate and distal bones.
#[cfg(feature = "leap")]
pub struct LeapLandmarkSource {
    pub calibration: LeapCalibration,
}

#[cfg(feature = "leap")]
impl LandmarkSource for LeapLandmarkSource {
    fn run(self: Box<Self>, tx: Sender<Frame>) {
        use leaprs::*;
        use tracing::error;

        let mut connection = match Connection::create(ConnectionConfig::default()) {
            Ok(c)  => c,
            Err(e) => {
                error!(error = ?e, "failed to create LeapC connection");
                return;
            }
        };
        if let Err(e) = connection.open() {
            error!(error = ?e, "failed to open LeapMotion device");
            return;
        }
        info!("LeapMotion connected");

        loop {
            let msg = match connection.poll(100) {
                Ok(m)  => m,
                Err(_) => continue,
            };

            if let Event::Tracking(frame) = msg.event() {
                let hands = frame.hands()
                    .map(|h| self.calibration.leap_hand(&h))
                    .collect();
                if tx.send(Frame::with_hands(hands)).is_err() { return; }
            }
        }
    }
}

#[cfg(feature = "leap")]
impl LeapCalibration {
    fn leap_hand(&self, hand: &leaprs::Hand) -> Vec<Landmark> {
        let digits: Vec<_> = hand.digits().collect();
        if digits.len() < 5 {
            return Vec::new();
        }

        let wrist = digits[1].metacarpal().prev_joint();
        let mut out = vec![self.normalize(wrist.x, wrist.y, wrist.z)];
        for digit in &digits {
            for joint in [
                digit.metacarpal().next_joint(),
                digit.proximal().next_joint(),
                digit.intermediate().next_joint(),
                digit.distal().next_joint(),
            ] {
                out.push(self.normalize(joint.x, joint.y, joint.z));
            }
        }
        out
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
