//! Optional display-side smoothing.
//!
//! The classifier judges every frame on its own, so a pose near a rule
//! boundary can flicker between two labels.  A [`Debouncer`] only promotes a
//! label once it has been observed for `hold_frames` consecutive frames.  It
//! sits in the presenter; published snapshots are never altered.

use hand_pose::GestureLabel;

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    hold_frames: u32,
    candidate:   Option<GestureLabel>,
    streak:      u32,
    stable:      Option<GestureLabel>,
}

impl Debouncer {
    /// `hold_frames` of 0 or 1 passes every observation straight through.
    pub fn new(hold_frames: u32) -> Self {
        Debouncer { hold_frames, ..Default::default() }
    }

    pub fn is_passthrough(&self) -> bool {
        self.hold_frames <= 1
    }

    /// Feed one frame's observation, return the current stable label.
    pub fn push(&mut self, observed: Option<GestureLabel>) -> Option<GestureLabel> {
        if self.is_passthrough() {
            self.stable = observed;
            return observed;
        }

        if observed == self.candidate && self.streak > 0 {
            self.streak = self.streak.saturating_add(1);
        } else {
            self.candidate = observed;
            self.streak = 1;
        }

        if self.streak >= self.hold_frames {
            self.stable = self.candidate;
        }
        self.stable
    }

    pub fn stable(&self) -> Option<GestureLabel> {
        self.stable
    }

    pub fn reset(&mut self) {
        *self = Debouncer::new(self.hold_frames);
    }
}
