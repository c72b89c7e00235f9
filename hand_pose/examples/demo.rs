//! Quick tour of the gesture rules using synthetic hands.
//!
//! Run with:  cargo run -p hand_pose --example demo

use hand_pose::{classify, classify_hand, Finger, FingerStates, GestureLabel, Landmark, PoseBuilder};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║          Hand Pose — Gesture Rule Showcase           ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── 1. Canonical poses ────────────────────────────────────────────────
    println!("── Canonical poses ─────────────────────────────────────");
    for label in GestureLabel::ALL {
        let hand = PoseBuilder::for_label(label).build().expect("builder hands are valid");
        let states = FingerStates::of(&hand);
        let raised: Vec<&str> = Finger::ALL
            .iter()
            .filter(|&&f| states.is_extended(f))
            .map(|f| f.name())
            .collect();
        println!(
            "  {:<11} raised=[{}]  →  {}",
            label.name(),
            raised.join(", "),
            classify_hand(&hand),
        );
    }
    println!();

    // ── 2. Thumb does not matter for Peace Sign / Pointing ───────────────
    println!("── Thumb-agnostic rules ────────────────────────────────");
    for label in [GestureLabel::PeaceSign, GestureLabel::Pointing] {
        for thumb in [false, true] {
            let pts = PoseBuilder::for_label(label).finger(Finger::Thumb, thumb).landmarks();
            let r = classify(&pts).expect("valid");
            println!("  {:<11} thumb={:<5}  →  {}", label.name(), thumb, r);
        }
    }
    println!();

    // ── 3. Malformed input ────────────────────────────────────────────────
    println!("── Malformed input ─────────────────────────────────────");
    let short = vec![Landmark::new(0.5, 0.5); 10];
    match classify(&short) {
        Ok(r)  => println!("  unexpected result: {}", r),
        Err(e) => println!("  10 landmarks  →  error: {}", e),
    }
    println!();
}
