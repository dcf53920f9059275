// Host-side tests for colour parsing, blending and the phrase palette cycle.
// The main crate is wasm-only, so we compile the pure core module directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::color::{interpolate_color, ColorCycle, ColorError, Rgb};

#[test]
fn interpolate_midpoint_black_to_white() {
    assert_eq!(interpolate_color("#000000", "#FFFFFF", 0.5).unwrap(), "#808080");
}

#[test]
fn interpolate_endpoints_are_exact() {
    let a = "#FFD700";
    let b = "#9932CC";
    assert!(interpolate_color(a, b, 0.0).unwrap().eq_ignore_ascii_case(a));
    assert!(interpolate_color(a, b, 1.0).unwrap().eq_ignore_ascii_case(b));
}

#[test]
fn interpolate_channels_are_monotonic() {
    let from = Rgb::from_hex("#10f080").unwrap();
    let to = Rgb::from_hex("#e02040").unwrap();
    let mut prev = from;
    for i in 1..=100 {
        let t = i as f32 / 100.0;
        let c = from.lerp(to, t);
        assert!(c.r >= prev.r, "red should rise at t={t}");
        assert!(c.g <= prev.g, "green should fall at t={t}");
        assert!(c.b <= prev.b, "blue should fall at t={t}");
        prev = c;
    }
    assert_eq!(prev, to);
}

#[test]
fn hex_round_trips_in_lowercase() {
    let c = Rgb::from_hex("#ADFF2F").unwrap();
    assert_eq!(c, Rgb::new(0xad, 0xff, 0x2f));
    assert_eq!(c.to_hex(), "#adff2f");
}

#[test]
fn malformed_hex_is_rejected() {
    for bad in ["", "#", "00ff00", "#00ff0", "#00ff00ff", "#gg0000", "#+12345"] {
        assert_eq!(
            Rgb::from_hex(bad),
            Err(ColorError::Malformed(bad.to_string())),
            "{bad:?} should not parse"
        );
    }
    assert!(interpolate_color("#000000", "white", 0.5).is_err());
}

#[test]
fn cycle_starts_on_first_entry() {
    let cycle = ColorCycle::new(&["#ff0000", "#00ff00", "#0000ff"], 0.25).unwrap();
    assert_eq!(cycle.current_index(), 0);
    assert_eq!(cycle.next_index(), 1);
    assert_eq!(cycle.color(), Rgb::new(255, 0, 0));
}

#[test]
fn cycle_wraps_and_rotates_indices() {
    let mut cycle = ColorCycle::new(&["#ff0000", "#00ff00", "#0000ff"], 0.25).unwrap();
    for _ in 0..3 {
        cycle.advance();
    }
    assert_eq!(cycle.current_index(), 0);
    assert!((cycle.progress() - 0.75).abs() < 1e-6);

    cycle.advance();
    assert_eq!(cycle.current_index(), 1);
    assert_eq!(cycle.next_index(), 2);
    assert_eq!(cycle.progress(), 0.0);
    assert_eq!(cycle.color(), Rgb::new(0, 255, 0));

    for _ in 0..8 {
        cycle.advance();
    }
    // 1 -> 2 -> 0, next wraps back to 1
    assert_eq!(cycle.current_index(), 0);
    assert_eq!(cycle.next_index(), 1);
}

#[test]
fn cycle_progress_stays_below_one() {
    let mut cycle = ColorCycle::new(crate::core::constants::TEXT_PALETTE, 0.005).unwrap();
    for _ in 0..5_000 {
        cycle.advance();
        assert!((0.0..1.0).contains(&cycle.progress()));
    }
}

#[test]
fn cycle_rejects_bad_palette() {
    assert!(ColorCycle::new(&["#ffffff", "nope"], 0.1).is_err());
    assert!(ColorCycle::new(&[], 0.1).is_err());
}
