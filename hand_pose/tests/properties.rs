//! Property tests for the gesture classifier.
//!
//! - Totality: every valid hand gets a label and a confidence in (0, 1]
//! - Determinism: same landmarks, same result
//! - Three raised fingers never name a gesture
//! - Anything but 21 landmarks is rejected

use hand_pose::{
    classify, topology, FingerStates, GestureLabel, Hand, InvalidInput, Landmark, LANDMARK_COUNT,
};
use proptest::prelude::*;

fn landmark() -> impl Strategy<Value = Landmark> {
    (0.0f32..1.0, 0.0f32..1.0, -0.2f32..0.2).prop_map(|(x, y, z)| Landmark::with_depth(x, y, z))
}

fn hand() -> impl Strategy<Value = Vec<Landmark>> {
    prop::collection::vec(landmark(), LANDMARK_COUNT)
}

const FINGERS: [(usize, usize); 4] = [
    (topology::INDEX_TIP, topology::INDEX_PIP),
    (topology::MIDDLE_TIP, topology::MIDDLE_PIP),
    (topology::RING_TIP, topology::RING_PIP),
    (topology::PINKY_TIP, topology::PINKY_PIP),
];

proptest! {
    #[test]
    fn prop_confidence_in_range(points in hand()) {
        let r = classify(&points).unwrap();
        prop_assert!(GestureLabel::ALL.contains(&r.name));
        prop_assert!(r.confidence > 0.0 && r.confidence <= 1.0);
    }

    #[test]
    fn prop_deterministic(points in hand()) {
        prop_assert_eq!(classify(&points), classify(&points.clone()));
    }

    #[test]
    fn prop_three_fingers_unknown(
        mut points in hand(),
        curled in 0usize..4,
        thumb in any::<bool>(),
    ) {
        for (i, &(tip, pip)) in FINGERS.iter().enumerate() {
            let base_y = points[pip].y;
            points[tip].y = if i == curled { base_y + 0.1 } else { base_y - 0.1 };
        }
        let mcp_x = points[topology::THUMB_MCP].x;
        points[topology::THUMB_TIP].x = if thumb { mcp_x - 0.1 } else { mcp_x + 0.1 };

        let hand = Hand::new(&points).unwrap();
        prop_assert_eq!(FingerStates::of(&hand).extended_count(), 3);

        let r = classify(&points).unwrap();
        prop_assert_eq!(r.name, GestureLabel::Unknown);
        prop_assert_eq!(r.confidence, 0.5);
    }

    #[test]
    fn prop_fist_when_everything_curled(mut points in hand()) {
        for &(tip, pip) in FINGERS.iter() {
            points[tip].y = points[pip].y + 0.05;
        }
        points[topology::THUMB_TIP].x = points[topology::THUMB_MCP].x;

        let r = classify(&points).unwrap();
        prop_assert_eq!(r.name, GestureLabel::Fist);
        prop_assert_eq!(r.confidence, 0.95);
    }

    #[test]
    fn prop_open_hand_when_everything_extended(mut points in hand()) {
        for &(tip, pip) in FINGERS.iter() {
            points[tip].y = points[pip].y - 0.05;
        }
        points[topology::THUMB_TIP].x = points[topology::THUMB_MCP].x - 0.05;

        let r = classify(&points).unwrap();
        prop_assert_eq!(r.name, GestureLabel::OpenHand);
        prop_assert_eq!(r.confidence, 0.9);
    }

    #[test]
    fn prop_wrong_count_rejected(points in prop::collection::vec(landmark(), 0..64)) {
        prop_assume!(points.len() != LANDMARK_COUNT);
        prop_assert_eq!(
            classify(&points),
            Err(InvalidInput::LandmarkCount { found: points.len() })
        );
    }
}

#[test]
fn mediapipe_json_hand() {
    // z omitted on some points, as lightweight exporters do.
    let mut json = String::from("[");
    for i in 0..LANDMARK_COUNT {
        if i > 0 {
            json.push(',');
        }
        json.push_str(&format!("{{\"x\":0.5,\"y\":{:.2}}}", 0.9 - i as f32 * 0.01));
    }
    json.push(']');

    let points: Vec<Landmark> = serde_json::from_str(&json).unwrap();
    assert_eq!(points.len(), LANDMARK_COUNT);
    assert!(points.iter().all(|p| p.z == 0.0));
    assert!(classify(&points).is_ok());
}
