//! # gesture_live
//!
//! Live hand-gesture recognition over a stream of hand-landmark frames.
//! Landmark detection itself is external: a detector (MediaPipe, a
//! LeapMotion controller, a recording) delivers one [`source::Frame`] per
//! processed video frame, and this crate classifies the primary hand with
//! [`hand_pose::classify`].
//!
//! ## Per-frame behaviour
//!
//! | Frame | Published hand count | Published gesture |
//! |---|---|---|
//! | no hands | 0 | none |
//! | N ≥ 1 hands | N | classification of the first hand |
//! | first hand malformed | N | none (logged, next frame recovers) |
//!
//! ## Landmark sources
//!
//! | Source | Input |
//! |---|---|
//! | [`source::ReplaySource`] | JSON lines, one frame per line |
//! | [`source::SimLandmarkSource`] | typed keys → canned poses |
//! | `LeapLandmarkSource` | LeapMotion hardware (`leap` feature) |
//!
//! ## Feature flags
//!
//! * (default) — replay and keyboard simulation only.
//! * `leap` — **Hardware mode**: polls a real LeapMotion controller via LeapC.
//!
//! ### Simulation keys
//!
//! | Key | Frame |
//! |---|---|
//! | `t` | Thumbs Up |
//! | `f` | Fist |
//! | `o` | Open Hand |
//! | `p` | Peace Sign |
//! | `i` | Pointing |
//! | `3` | three raised fingers (Unknown) |
//! | `2` | two hands |
//! | `n` | no hands |
//! | `q` | Quit |

pub mod app;
pub mod debounce;
pub mod source;
pub mod tracker;

mod error;

pub use error::{LiveError, Result};
