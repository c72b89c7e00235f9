//! # hand_pose
//!
//! Rule-based gesture classification for a single hand described by the
//! standard 21-point landmark topology (the layout produced by MediaPipe-style
//! hand landmark detectors).
//!
//! ## Gesture rules
//!
//! Each non-thumb finger is *extended* when its tip sits above its PIP joint
//! (`tip.y < pip.y`, image coordinates grow downward).  The thumb is extended
//! when its tip sits left of its MCP joint (`tip.x < mcp.x`).  Rules are tried
//! in order and the first match wins:
//!
//! | Thumb | Extended fingers | Gesture | Confidence |
//! |---|---|---|---|
//! | yes | none | Thumbs Up | 0.90 |
//! | no | none | Fist | 0.95 |
//! | yes | all four | Open Hand | 0.90 |
//! | any | index + middle only | Peace Sign | 0.85 |
//! | any | index only | Pointing | 0.85 |
//! | — | anything else | Unknown | 0.50 |
//!
//! ## Orientation
//!
//! The thumb test assumes one fixed orientation: a right hand, palm toward
//! the camera, in a mirrored view.  A left hand or a rotated hand flips the
//! thumb reading and will be misclassified.  This is a known limitation of the
//! rule set; the classifier does not attempt to infer handedness.
//!
//! ## Quick start
//!
//! ```rust
//! use hand_pose::{classify, GestureLabel, PoseBuilder};
//!
//! let landmarks = PoseBuilder::for_label(GestureLabel::PeaceSign).landmarks();
//! let result = classify(&landmarks).unwrap();
//! assert_eq!(result.name, GestureLabel::PeaceSign);
//! assert_eq!(result.confidence, 0.85);
//! ```

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Number of landmarks in one hand.
pub const LANDMARK_COUNT: usize = 21;

// ════════════════════════════════════════════════════════════════════════════
// Topology
// ════════════════════════════════════════════════════════════════════════════

/// Landmark indices of the 21-point hand topology.
pub mod topology {
    pub const WRIST:      usize = 0;
    pub const THUMB_CMC:  usize = 1;
    pub const THUMB_MCP:  usize = 2;
    pub const THUMB_IP:   usize = 3;
    pub const THUMB_TIP:  usize = 4;
    pub const INDEX_MCP:  usize = 5;
    pub const INDEX_PIP:  usize = 6;
    pub const INDEX_DIP:  usize = 7;
    pub const INDEX_TIP:  usize = 8;
    pub const MIDDLE_MCP: usize = 9;
    pub const MIDDLE_PIP: usize = 10;
    pub const MIDDLE_DIP: usize = 11;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_MCP:   usize = 13;
    pub const RING_PIP:   usize = 14;
    pub const RING_DIP:   usize = 15;
    pub const RING_TIP:   usize = 16;
    pub const PINKY_MCP:  usize = 17;
    pub const PINKY_PIP:  usize = 18;
    pub const PINKY_DIP:  usize = 19;
    pub const PINKY_TIP:  usize = 20;
}

// ════════════════════════════════════════════════════════════════════════════
// Landmark & Hand
// ════════════════════════════════════════════════════════════════════════════

/// One tracked point, normalized to the source frame.
///
/// `x` grows rightward and `y` grows downward, both roughly in `[0, 1]`.
/// `z` is relative depth and defaults to `0.0` when the detector omits it.
///
/// A missing or `null` `x`/`y` decodes as NaN rather than failing, so one bad
/// point does not take its whole frame down with it; [`Hand::new`] rejects it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    #[serde(default = "missing_coordinate", deserialize_with = "coordinate")]
    pub x: f32,
    #[serde(default = "missing_coordinate", deserialize_with = "coordinate")]
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Landmark { x, y, z: 0.0 }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn missing_coordinate() -> f32 {
    f32::NAN
}

fn coordinate<'de, D: Deserializer<'de>>(de: D) -> Result<f32, D::Error> {
    Ok(Option::<f32>::deserialize(de)?.unwrap_or(f32::NAN))
}

/// Rejection reasons for landmark data that cannot be classified.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("expected 21 landmarks, found {found}")]
    LandmarkCount { found: usize },

    #[error("landmark {index} has a missing or non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

/// A validated hand: exactly [`LANDMARK_COUNT`] landmarks with finite `x, y`.
#[derive(Clone, Debug, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Hand {
    /// Validate a landmark slice.
    pub fn new(landmarks: &[Landmark]) -> Result<Self, InvalidInput> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(InvalidInput::LandmarkCount { found: landmarks.len() });
        }
        if let Some(index) = landmarks.iter().position(|p| !p.is_finite()) {
            return Err(InvalidInput::NonFiniteCoordinate { index });
        }
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points.copy_from_slice(landmarks);
        Ok(Hand { landmarks: points })
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Tip of `finger`.
    pub fn tip(&self, finger: Finger) -> Landmark {
        self.landmarks[finger.tip()]
    }

    /// Reference joint `finger`'s tip is compared against.
    pub fn base(&self, finger: Finger) -> Landmark {
        self.landmarks[finger.base()]
    }
}

impl Index<usize> for Hand {
    type Output = Landmark;

    fn index(&self, index: usize) -> &Landmark {
        &self.landmarks[index]
    }
}

impl TryFrom<&[Landmark]> for Hand {
    type Error = InvalidInput;

    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        Hand::new(landmarks)
    }
}

impl TryFrom<Vec<Landmark>> for Hand {
    type Error = InvalidInput;

    fn try_from(landmarks: Vec<Landmark>) -> Result<Self, Self::Error> {
        Hand::new(&landmarks)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Fingers
// ════════════════════════════════════════════════════════════════════════════

/// Declared in landmark order, so `finger as usize` is its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb, Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky,
    ];

    /// The four fingers judged by vertical position.
    pub const NON_THUMB: [Finger; 4] = [
        Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky,
    ];

    pub fn tip(self) -> usize {
        use topology::*;
        match self {
            Finger::Thumb  => THUMB_TIP,
            Finger::Index  => INDEX_TIP,
            Finger::Middle => MIDDLE_TIP,
            Finger::Ring   => RING_TIP,
            Finger::Pinky  => PINKY_TIP,
        }
    }

    /// MCP for the thumb, PIP for the other four.
    pub fn base(self) -> usize {
        use topology::*;
        match self {
            Finger::Thumb  => THUMB_MCP,
            Finger::Index  => INDEX_PIP,
            Finger::Middle => MIDDLE_PIP,
            Finger::Ring   => RING_PIP,
            Finger::Pinky  => PINKY_PIP,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb  => "thumb",
            Finger::Index  => "index",
            Finger::Middle => "middle",
            Finger::Ring   => "ring",
            Finger::Pinky  => "pinky",
        }
    }
}

/// Extended/curled reading of every finger of one hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FingerStates {
    pub thumb:  bool,
    pub index:  bool,
    pub middle: bool,
    pub ring:   bool,
    pub pinky:  bool,
}

impl FingerStates {
    pub fn of(hand: &Hand) -> Self {
        let raised = |f: Finger| hand.tip(f).y < hand.base(f).y;
        FingerStates {
            thumb:  hand.tip(Finger::Thumb).x < hand.base(Finger::Thumb).x,
            index:  raised(Finger::Index),
            middle: raised(Finger::Middle),
            ring:   raised(Finger::Ring),
            pinky:  raised(Finger::Pinky),
        }
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        match finger {
            Finger::Thumb  => self.thumb,
            Finger::Index  => self.index,
            Finger::Middle => self.middle,
            Finger::Ring   => self.ring,
            Finger::Pinky  => self.pinky,
        }
    }

    /// Extended fingers, thumb excluded.
    pub fn extended_count(&self) -> usize {
        Finger::NON_THUMB.iter().filter(|&&f| self.is_extended(f)).count()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gesture labels & results
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureLabel {
    ThumbsUp,
    Fist,
    OpenHand,
    PeaceSign,
    Pointing,
    Unknown,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 6] = [
        GestureLabel::ThumbsUp,
        GestureLabel::Fist,
        GestureLabel::OpenHand,
        GestureLabel::PeaceSign,
        GestureLabel::Pointing,
        GestureLabel::Unknown,
    ];

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            GestureLabel::ThumbsUp  => "Thumbs Up",
            GestureLabel::Fist      => "Fist",
            GestureLabel::OpenHand  => "Open Hand",
            GestureLabel::PeaceSign => "Peace Sign",
            GestureLabel::Pointing  => "Pointing",
            GestureLabel::Unknown   => "Unknown",
        }
    }

    /// Fixed confidence attached to the rule that yields this label.
    pub fn confidence(self) -> f32 {
        match self {
            GestureLabel::Fist      => 0.95,
            GestureLabel::ThumbsUp  => 0.90,
            GestureLabel::OpenHand  => 0.90,
            GestureLabel::PeaceSign => 0.85,
            GestureLabel::Pointing  => 0.85,
            GestureLabel::Unknown   => 0.50,
        }
    }

    pub fn is_unknown(self) -> bool {
        self == GestureLabel::Unknown
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureResult {
    pub name:       GestureLabel,
    pub confidence: f32,
}

impl From<GestureLabel> for GestureResult {
    fn from(name: GestureLabel) -> Self {
        GestureResult { name, confidence: name.confidence() }
    }
}

impl fmt::Display for GestureResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.confidence)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Classification
// ════════════════════════════════════════════════════════════════════════════

/// Apply the ordered gesture rules to a finger reading.
pub fn match_rules(states: &FingerStates) -> GestureLabel {
    let count = states.extended_count();

    if states.thumb && count == 0 {
        GestureLabel::ThumbsUp
    } else if count == 0 && !states.thumb {
        GestureLabel::Fist
    } else if count == 4 && states.thumb {
        GestureLabel::OpenHand
    } else if states.index && states.middle && count == 2 {
        GestureLabel::PeaceSign
    } else if states.index && count == 1 {
        GestureLabel::Pointing
    } else {
        GestureLabel::Unknown
    }
}

/// Classify an already validated hand.
pub fn classify_hand(hand: &Hand) -> GestureResult {
    match_rules(&FingerStates::of(hand)).into()
}

/// Classify raw landmarks, rejecting anything that is not a complete hand.
pub fn classify(landmarks: &[Landmark]) -> Result<GestureResult, InvalidInput> {
    Hand::new(landmarks).map(|hand| classify_hand(&hand))
}

// ════════════════════════════════════════════════════════════════════════════
// PoseBuilder — synthetic hands
// ════════════════════════════════════════════════════════════════════════════

// Joint offsets from the hand origin at unit scale.
const WRIST_OFFSET:      (f32, f32) = (0.0, 0.25);
const THUMB_CMC_OFFSET:  (f32, f32) = (-0.06, 0.18);
const THUMB_MCP_OFFSET:  (f32, f32) = (-0.10, 0.12);
const THUMB_OPEN:        [(f32, f32); 2] = [(-0.15, 0.08), (-0.20, 0.05)];
const THUMB_TUCKED:      [(f32, f32); 2] = [(-0.07, 0.08), (-0.03, 0.06)];
const FINGER_COLUMNS:    [f32; 4] = [-0.06, -0.02, 0.02, 0.06];
const FINGER_MCP_Y:      f32 = 0.05;
const FINGER_PIP_Y:      f32 = -0.03;
const FINGER_RAISED_Y:   [f32; 2] = [-0.09, -0.14];
const FINGER_CURLED_Y:   [f32; 2] = [0.0, 0.03];

/// Builds plausible 21-point hands with chosen finger states.
///
/// Used for demos, the interactive simulator, and tests.  Every finger starts
/// curled, so `PoseBuilder::new().build()` is a fist.  Placement is not
/// checked up front: a non-finite origin or scale surfaces as
/// [`InvalidInput`] from [`PoseBuilder::build`] (or from [`classify`] on
/// [`PoseBuilder::landmarks`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseBuilder {
    extended: [bool; 5],
    origin:   (f32, f32),
    scale:    f32,
}

impl Default for PoseBuilder {
    fn default() -> Self {
        PoseBuilder { extended: [false; 5], origin: (0.5, 0.5), scale: 1.0 }
    }
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical pose for `label`.  `Unknown` yields three raised fingers.
    pub fn for_label(label: GestureLabel) -> Self {
        let b = Self::new();
        match label {
            GestureLabel::ThumbsUp  => b.finger(Finger::Thumb, true),
            GestureLabel::Fist      => b,
            GestureLabel::OpenHand  => b.all(true),
            GestureLabel::PeaceSign => b.finger(Finger::Index, true).finger(Finger::Middle, true),
            GestureLabel::Pointing  => b.finger(Finger::Index, true),
            GestureLabel::Unknown   => b
                .finger(Finger::Index, true)
                .finger(Finger::Middle, true)
                .finger(Finger::Ring, true),
        }
    }

    pub fn finger(mut self, finger: Finger, extended: bool) -> Self {
        self.extended[finger as usize] = extended;
        self
    }

    pub fn all(mut self, extended: bool) -> Self {
        self.extended = [extended; 5];
        self
    }

    /// Move the wrist-centred origin (normalized coordinates).
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    /// Hand size relative to the default; a negative scale mirrors the pose.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn landmarks(&self) -> Vec<Landmark> {
        let point = |(dx, dy): (f32, f32)| {
            Landmark::new(self.origin.0 + dx * self.scale, self.origin.1 + dy * self.scale)
        };

        let mut out = Vec::with_capacity(LANDMARK_COUNT);
        out.push(point(WRIST_OFFSET));

        // ── thumb ─────────────────────────────────────────────────────────
        let thumb = if self.extended[0] { THUMB_OPEN } else { THUMB_TUCKED };
        out.push(point(THUMB_CMC_OFFSET));
        out.push(point(THUMB_MCP_OFFSET));
        out.extend(thumb.iter().map(|&p| point(p)));

        // ── index … pinky ─────────────────────────────────────────────────
        for (slot, &x) in FINGER_COLUMNS.iter().enumerate() {
            let [dip, tip] = if self.extended[slot + 1] { FINGER_RAISED_Y } else { FINGER_CURLED_Y };
            out.push(point((x, FINGER_MCP_Y)));
            out.push(point((x, FINGER_PIP_Y)));
            out.push(point((x, dip)));
            out.push(point((x, tip)));
        }
        out
    }

    pub fn build(&self) -> Result<Hand, InvalidInput> {
        Hand::new(&self.landmarks())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn label_of(b: PoseBuilder) -> GestureResult {
        classify(&b.landmarks()).unwrap()
    }

    #[test]
    fn builder_emits_full_hand() {
        assert_eq!(PoseBuilder::new().landmarks().len(), LANDMARK_COUNT);
    }

    #[test]
    fn canonical_poses_round_trip() {
        for label in GestureLabel::ALL {
            let r = label_of(PoseBuilder::for_label(label));
            assert_eq!(r.name, label, "canonical pose for {label}");
            assert_eq!(r.confidence, label.confidence());
        }
    }

    #[test]
    fn fist_confidence() {
        let r = label_of(PoseBuilder::new());
        assert_eq!(r, GestureResult { name: GestureLabel::Fist, confidence: 0.95 });
    }

    #[test]
    fn open_hand_requires_thumb() {
        let four = PoseBuilder::new().all(true).finger(Finger::Thumb, false);
        assert_eq!(label_of(four).name, GestureLabel::Unknown);
    }

    #[test]
    fn peace_sign_ignores_thumb() {
        let b = PoseBuilder::for_label(GestureLabel::PeaceSign);
        assert_eq!(label_of(b.finger(Finger::Thumb, true)).name, GestureLabel::PeaceSign);
        assert_eq!(label_of(b.finger(Finger::Thumb, false)).name, GestureLabel::PeaceSign);
    }

    #[test]
    fn pointing_ignores_thumb() {
        let b = PoseBuilder::for_label(GestureLabel::Pointing).finger(Finger::Thumb, true);
        assert_eq!(label_of(b), GestureResult { name: GestureLabel::Pointing, confidence: 0.85 });
    }

    #[test]
    fn two_fingers_other_than_index_middle_is_unknown() {
        let b = PoseBuilder::new()
            .finger(Finger::Thumb, true)
            .finger(Finger::Ring, true)
            .finger(Finger::Pinky, true);
        assert_eq!(label_of(b).name, GestureLabel::Unknown);

        let b = PoseBuilder::new().finger(Finger::Index, true).finger(Finger::Pinky, true);
        assert_eq!(label_of(b).name, GestureLabel::Unknown);
    }

    #[test]
    fn single_non_index_finger_is_unknown() {
        let b = PoseBuilder::new().finger(Finger::Middle, true);
        assert_eq!(label_of(b).name, GestureLabel::Unknown);
    }

    #[test]
    fn equal_y_counts_as_curled() {
        let mut pts = PoseBuilder::new().landmarks();
        pts[topology::INDEX_TIP].y = pts[topology::INDEX_PIP].y;
        pts[topology::THUMB_TIP].x = pts[topology::THUMB_MCP].x;
        assert_eq!(classify(&pts).unwrap().name, GestureLabel::Fist);
    }

    #[test]
    fn finger_states_match_builder() {
        let hand = PoseBuilder::new()
            .finger(Finger::Index, true)
            .finger(Finger::Ring, true)
            .build()
            .unwrap();
        let s = FingerStates::of(&hand);
        assert!(s.index && s.ring);
        assert!(!s.thumb && !s.middle && !s.pinky);
        assert_eq!(s.extended_count(), 2);
    }

    #[test]
    fn rule_table_exhaustive() {
        // Every one of the 32 finger combinations yields exactly the rule label.
        for bits in 0u8..32 {
            let s = FingerStates {
                thumb:  bits & 1 != 0,
                index:  bits & 2 != 0,
                middle: bits & 4 != 0,
                ring:   bits & 8 != 0,
                pinky:  bits & 16 != 0,
            };
            let expected = match (s.thumb, s.index, s.middle, s.ring, s.pinky) {
                (true,  false, false, false, false) => GestureLabel::ThumbsUp,
                (false, false, false, false, false) => GestureLabel::Fist,
                (true,  true,  true,  true,  true)  => GestureLabel::OpenHand,
                (_,     true,  true,  false, false) => GestureLabel::PeaceSign,
                (_,     true,  false, false, false) => GestureLabel::Pointing,
                _ => GestureLabel::Unknown,
            };
            assert_eq!(match_rules(&s), expected, "states {s:?}");
        }
    }

    #[test]
    fn short_hand_rejected() {
        let pts = vec![Landmark::new(0.5, 0.5); 10];
        assert_eq!(classify(&pts), Err(InvalidInput::LandmarkCount { found: 10 }));
    }

    #[test]
    fn long_hand_rejected() {
        let pts = vec![Landmark::new(0.5, 0.5); 22];
        assert!(matches!(Hand::new(&pts), Err(InvalidInput::LandmarkCount { found: 22 })));
    }

    #[test]
    fn nan_coordinate_rejected() {
        let mut pts = PoseBuilder::new().landmarks();
        pts[topology::MIDDLE_TIP].y = f32::NAN;
        assert_eq!(
            classify(&pts),
            Err(InvalidInput::NonFiniteCoordinate { index: topology::MIDDLE_TIP })
        );
    }

    #[test]
    fn depth_is_ignored() {
        let mut pts = PoseBuilder::for_label(GestureLabel::OpenHand).landmarks();
        for (i, p) in pts.iter_mut().enumerate() {
            p.z = f32::NAN * (i as f32);
        }
        assert_eq!(classify(&pts).unwrap().name, GestureLabel::OpenHand);
    }

    #[test]
    fn builder_placement_preserves_label() {
        let b = PoseBuilder::for_label(GestureLabel::ThumbsUp).at(0.2, 0.3).scale(0.5);
        assert_eq!(label_of(b).name, GestureLabel::ThumbsUp);
    }

    #[test]
    fn try_from_vec() {
        let hand = Hand::try_from(PoseBuilder::new().landmarks()).unwrap();
        assert_eq!(hand[topology::WRIST], Landmark::new(0.5, 0.75));
    }

    #[test]
    fn build_rejects_non_finite_placement() {
        let b = PoseBuilder::for_label(GestureLabel::OpenHand).at(f32::NAN, 0.5);
        assert_eq!(b.build(), Err(InvalidInput::NonFiniteCoordinate { index: 0 }));
        assert_eq!(classify(&b.landmarks()), Err(InvalidInput::NonFiniteCoordinate { index: 0 }));

        let b = PoseBuilder::new().scale(f32::INFINITY);
        assert!(matches!(b.build(), Err(InvalidInput::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn build_and_classify_agree() {
        for label in GestureLabel::ALL {
            let b = PoseBuilder::for_label(label);
            assert_eq!(Ok(classify_hand(&b.build().unwrap())), classify(&b.landmarks()));
        }
    }

    #[test]
    fn missing_or_null_coordinate_decodes_as_invalid() {
        let mut json: Vec<serde_json::Value> = PoseBuilder::new()
            .landmarks()
            .iter()
            .map(|p| serde_json::to_value(p).unwrap())
            .collect();
        json[3].as_object_mut().unwrap().remove("y");
        json[7]["x"] = serde_json::Value::Null;

        let pts: Vec<Landmark> = serde_json::from_value(serde_json::Value::Array(json)).unwrap();
        assert!(pts[3].y.is_nan());
        assert!(pts[7].x.is_nan());
        assert_eq!(classify(&pts), Err(InvalidInput::NonFiniteCoordinate { index: 3 }));
    }

    #[test]
    fn display_names() {
        assert_eq!(GestureLabel::PeaceSign.to_string(), "Peace Sign");
        let r = GestureResult::from(GestureLabel::Fist);
        assert_eq!(r.to_string(), "Fist (0.95)");
    }
}
