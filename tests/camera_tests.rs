// Host-side tests for pan/zoom input handling, projection and spawn timers.
// The main crate is wasm-only, so we compile the pure core module directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::camera::Camera;
use crate::core::constants::{ZOOM_MAX, ZOOM_MIN};
use crate::core::ticker::Ticker;
use crate::core::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

#[test]
fn sixty_wheel_ups_saturate_at_max_zoom() {
    let mut cam = Camera::default();
    assert_eq!(cam.zoom(), 1.0);
    for _ in 0..60 {
        cam.wheel(-120.0);
    }
    assert_eq!(cam.zoom(), 5.0);
}

#[test]
fn wheel_downs_saturate_at_min_zoom() {
    let mut cam = Camera::default();
    for _ in 0..60 {
        cam.wheel(120.0);
    }
    assert_eq!(cam.zoom(), ZOOM_MIN);
}

#[test]
fn zero_delta_counts_as_zoom_out() {
    let mut cam = Camera::default();
    cam.wheel(0.0);
    assert!((cam.zoom() - 0.9).abs() < 1e-6);
}

#[test]
fn zoom_stays_clamped_under_random_wheel_input() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut cam = Camera::default();
    for _ in 0..10_000 {
        cam.wheel(rng.gen_range(-300.0..300.0));
        assert!((ZOOM_MIN..=ZOOM_MAX).contains(&cam.zoom()));
    }
}

#[test]
fn drag_pans_against_pointer_scaled_by_zoom() {
    let mut cam = Camera::default();
    for _ in 0..10 {
        cam.wheel(-1.0);
    }
    let zoom = cam.zoom();
    assert!((zoom - 2.0).abs() < 1e-5);

    cam.begin_drag(Vec2::new(100.0, 100.0));
    cam.drag_to(Vec2::new(110.0, 90.0));
    let expected = Vec2::new(-10.0, 10.0) / zoom;
    assert!((cam.pan - expected).length() < 1e-4);

    // deltas are measured from the previous sample, not the anchor
    cam.drag_to(Vec2::new(120.0, 90.0));
    let expected = Vec2::new(-20.0, 10.0) / zoom;
    assert!((cam.pan - expected).length() < 1e-4);
}

#[test]
fn moves_without_drag_do_not_pan() {
    let mut cam = Camera::default();
    cam.drag_to(Vec2::new(50.0, 50.0));
    assert_eq!(cam.pan, Vec2::ZERO);

    cam.begin_drag(Vec2::ZERO);
    assert!(cam.is_dragging());
    cam.end_drag();
    assert!(!cam.is_dragging());
    cam.drag_to(Vec2::new(50.0, 50.0));
    assert_eq!(cam.pan, Vec2::ZERO);
}

#[test]
fn projection_centers_origin_and_scales_by_depth() {
    let cam = Camera::default();
    let vp = Viewport::new(800.0, 600.0);
    let p = cam.project(Vec2::ZERO, 300.0, 300.0, vp);
    assert_eq!(p.scale, 1.0);
    assert_eq!(p.screen, Vec2::new(400.0, 300.0));

    let far = cam.project(Vec2::new(100.0, -50.0), 600.0, 300.0, vp);
    assert_eq!(far.scale, 0.5);
    assert_eq!(far.screen, Vec2::new(450.0, 275.0));
}

#[test]
fn projection_applies_pan_before_scaling() {
    let mut cam = Camera::default();
    cam.pan = Vec2::new(100.0, 0.0);
    let p = cam.project(Vec2::new(100.0, 0.0), 150.0, 300.0, Viewport::new(800.0, 600.0));
    assert_eq!(p.screen, Vec2::new(400.0, 300.0));
    assert_eq!(p.scale, 2.0);
}

#[test]
fn viewport_clamps_to_one_pixel() {
    let vp = Viewport::new(0.0, -5.0);
    assert_eq!(vp.width(), 1.0);
    assert_eq!(vp.height(), 1.0);
}

#[test]
fn non_finite_viewport_still_seeds_stars() {
    let vp = Viewport::new(f32::INFINITY, f32::NAN);
    assert_eq!((vp.width(), vp.height()), (1.0, 1.0));
    let mut stars = crate::core::starfield::Starfield::new(10);
    stars.resize(vp, &mut StdRng::seed_from_u64(1));
    assert!(stars
        .stars()
        .iter()
        .all(|s| s.position.x < 1.0 && s.position.y < 1.0));
}

#[test]
fn square_outside_requires_full_miss() {
    let vp = Viewport::new(800.0, 600.0);
    assert!(!vp.square_outside(Vec2::new(-10.0, 300.0), 20.0));
    assert!(vp.square_outside(Vec2::new(-30.0, 300.0), 20.0));
    assert!(vp.square_outside(Vec2::new(400.0, 625.0), 20.0));
    assert!(!vp.square_outside(Vec2::new(400.0, 300.0), 0.0));
}

#[test]
fn ticker_fires_once_per_period_and_carries_remainder() {
    let mut t = Ticker::new(Duration::from_millis(100), 4);
    assert_eq!(t.advance(Duration::from_millis(50)), 0);
    assert_eq!(t.advance(Duration::from_millis(50)), 1);
    assert_eq!(t.advance(Duration::from_millis(250)), 2);
    assert_eq!(t.advance(Duration::from_millis(50)), 1);
    assert_eq!(t.advance(Duration::ZERO), 0);
}

#[test]
fn ticker_caps_catch_up_and_drops_backlog() {
    let mut t = Ticker::new(Duration::from_millis(100), 4);
    assert_eq!(t.advance(Duration::from_millis(10_050)), 4);
    assert_eq!(t.advance(Duration::from_millis(40)), 0);
    assert_eq!(t.advance(Duration::from_millis(10)), 1);
}
