// Host-side tests for the assembled sky scene: population, timers, render order.
// The main crate is wasm-only, so we compile the pure core module directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::constants::*;
use crate::core::{AssetError, AssetEvent, SkyParams, SkyScene, Viewport};
use glam::Vec2;
use std::time::Duration;
use support::{viewport, DrawCall, FakeLoader, RecordingSurface};

fn scene(params: SkyParams) -> (SkyScene, FakeLoader) {
    let mut loader = FakeLoader::default();
    let mut scene = SkyScene::new(params, viewport(), 42).expect("default palette parses");
    scene.populate(&mut loader);
    (scene, loader)
}

#[test]
fn new_scene_has_stars_and_initial_population() {
    let (scene, loader) = scene(SkyParams::default());
    assert_eq!(scene.starfield().len(), STAR_COUNT);
    assert_eq!(scene.field().len(), INITIAL_FALLING_COUNT);
    assert!(scene.shooting_stars().is_empty());
    assert_eq!(
        loader.requested.len(),
        scene.field().elements().iter().filter(|e| e.asset().is_some()).count()
    );
}

#[test]
fn bad_palette_is_reported() {
    let params = SkyParams {
        palette: &["#123456", "teal"],
        ..SkyParams::default()
    };
    assert!(SkyScene::new(params, viewport(), 1).is_err());
}

#[test]
fn shooting_timer_fires_every_half_second() {
    let (mut scene, mut loader) = scene(SkyParams::default());
    scene.advance_timers(Duration::from_millis(499), &mut loader);
    assert_eq!(scene.shooting_stars().len(), 0);
    scene.advance_timers(Duration::from_millis(1), &mut loader);
    assert_eq!(scene.shooting_stars().len(), 1);
}

#[test]
fn falling_timer_tops_up_to_the_cap() {
    let params = SkyParams {
        max_falling: 53,
        ..SkyParams::default()
    };
    let (mut scene, mut loader) = scene(params);
    scene.advance_timers(Duration::from_millis(200), &mut loader);
    assert_eq!(scene.field().len(), 52);
    for _ in 0..20 {
        scene.advance_timers(FALLING_SPAWN_PERIOD, &mut loader);
    }
    assert_eq!(scene.field().len(), 53);
    assert!(!scene.spawn_falling(&mut loader));
}

#[test]
fn long_stall_spawns_at_most_the_catch_up_limit() {
    let (mut scene, mut loader) = scene(SkyParams::default());
    scene.advance_timers(Duration::from_secs(30), &mut loader);
    assert_eq!(
        scene.field().len(),
        INITIAL_FALLING_COUNT + TIMER_MAX_CATCH_UP as usize
    );
    assert_eq!(scene.shooting_stars().len(), TIMER_MAX_CATCH_UP as usize);
}

#[test]
fn failed_image_shrinks_then_spawn_tick_refills() {
    let params = SkyParams {
        max_falling: INITIAL_FALLING_COUNT,
        ..SkyParams::default()
    };
    let (mut scene, mut loader) = scene(params);
    let target = scene
        .field()
        .elements()
        .iter()
        .find_map(|e| e.asset())
        .expect("seeded scene has images");

    let event = AssetEvent::Failed(target, AssetError::Load { url: "2.jpeg".into() });
    scene.apply_asset_event(&event, &mut loader);
    assert_eq!(scene.field().len(), INITIAL_FALLING_COUNT - 1);
    assert!(!scene.field().contains_asset(target));

    scene.advance_timers(FALLING_SPAWN_PERIOD, &mut loader);
    assert_eq!(scene.field().len(), INITIAL_FALLING_COUNT);
}

#[test]
fn render_draws_layers_back_to_front() {
    let (mut scene, mut loader) = scene(SkyParams::default());
    scene.advance_timers(SHOOTING_SPAWN_PERIOD, &mut loader);
    let mut surface = RecordingSurface::default();
    scene.render(&mut surface, &mut loader);

    assert_eq!(surface.calls[0], DrawCall::Clear);
    assert_eq!(
        surface.calls[1],
        DrawCall::Gradient {
            top: BACKGROUND_TOP.to_string(),
            bottom: BACKGROUND_BOTTOM.to_string(),
        }
    );
    let stars = &surface.calls[2..2 + STAR_COUNT];
    assert!(stars.iter().all(|c| matches!(c, DrawCall::Circle { .. })));
    assert!(matches!(surface.calls[2 + STAR_COUNT], DrawCall::Line { .. }));
    assert!(surface.calls[3 + STAR_COUNT..]
        .iter()
        .all(|c| matches!(c, DrawCall::Text { .. } | DrawCall::Image { .. })));
}

#[test]
fn one_palette_colour_per_frame() {
    let (mut scene, mut loader) = scene(SkyParams::default());
    let mut surface = RecordingSurface::default();
    scene.render(&mut surface, &mut loader);

    let first = TEXT_PALETTE[0].to_ascii_lowercase();
    for call in &surface.calls {
        if let DrawCall::Text { color, .. } = call {
            assert_eq!(*color, first);
        }
    }
    assert!((scene.palette().progress() - PALETTE_STEP_PER_FRAME).abs() < 1e-6);
}

#[test]
fn frames_keep_population_steady_without_failures() {
    let (mut scene, mut loader) = scene(SkyParams {
        max_falling: INITIAL_FALLING_COUNT,
        ..SkyParams::default()
    });
    let mut surface = RecordingSurface::default();
    for _ in 0..600 {
        scene.frame(Duration::from_millis(16), &mut surface, &mut loader);
        surface.calls.clear();
        assert_eq!(scene.field().len(), INITIAL_FALLING_COUNT);
    }
}

#[test]
fn resize_regenerates_stars_inside_new_bounds() {
    let (mut scene, _) = scene(SkyParams::default());
    scene.resize(Viewport::new(400.0, 200.0));
    assert_eq!(scene.viewport(), Viewport::new(400.0, 200.0));
    assert_eq!(scene.starfield().len(), STAR_COUNT);
    assert!(scene
        .starfield()
        .stars()
        .iter()
        .all(|s| s.position.x < 400.0 && s.position.y < 200.0));
}

#[test]
fn input_routes_to_the_camera() {
    let (mut scene, _) = scene(SkyParams::default());
    for _ in 0..100 {
        scene.wheel(-53.0);
    }
    assert_eq!(scene.camera.zoom(), ZOOM_MAX);

    scene.pointer_move(Vec2::new(10.0, 10.0));
    assert_eq!(scene.camera.pan, Vec2::ZERO);

    scene.pointer_down(Vec2::new(10.0, 10.0));
    scene.pointer_move(Vec2::new(60.0, 10.0));
    scene.pointer_release();
    scene.pointer_move(Vec2::new(500.0, 500.0));
    assert!((scene.camera.pan - Vec2::new(-10.0, 0.0)).length() < 1e-4);
}
