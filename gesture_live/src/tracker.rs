//! Per-frame orchestration: count hands, classify the primary one, publish.

use hand_pose::{classify, GestureResult};
use serde::Serialize;
use tracing::{debug, warn};

use crate::source::Frame;

/// What the presentation side sees after each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub hand_count: usize,
    pub gesture:    Option<GestureResult>,
}

/// Holds the latest published [`Snapshot`].
///
/// Each frame replaces the previous snapshot wholesale; nothing carries over
/// between frames except the counters.  Only the first hand of a frame (the
/// primary hand) is classified.
#[derive(Debug, Default)]
pub struct GestureTracker {
    latest:   Snapshot,
    frames:   u64,
    rejected: u64,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_frame(&mut self, frame: &Frame) -> Snapshot {
        self.frames += 1;

        let snapshot = match frame.hands.first() {
            None => Snapshot::default(),
            Some(primary) => {
                let gesture = match classify(primary) {
                    Ok(r)  => Some(r),
                    Err(e) => {
                        self.rejected += 1;
                        warn!(frame = self.frames, error = %e, "primary hand rejected");
                        None
                    }
                };
                Snapshot { hand_count: frame.hands.len(), gesture }
            }
        };

        debug!(
            frame = self.frames,
            hands = snapshot.hand_count,
            gesture = ?snapshot.gesture.map(|g| g.name),
            "frame classified"
        );
        self.latest = snapshot;
        snapshot
    }

    pub fn latest(&self) -> Snapshot {
        self.latest
    }

    /// Frames seen so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames whose primary hand was malformed.
    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}
