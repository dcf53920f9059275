use super::asset::{AssetEvent, ImageLoader};
use super::camera::Camera;
use super::color::{ColorCycle, ColorError};
use super::constants::{
    BACKGROUND_BOTTOM, BACKGROUND_TOP, FALLING_SPAWN_PERIOD, FOCAL_LENGTH, INITIAL_FALLING_COUNT,
    MAX_FALLING_COUNT, PALETTE_STEP_PER_FRAME, SHOOTING_SPAWN_PERIOD, STAR_COUNT,
    TEXT_PALETTE, TIMER_MAX_CATCH_UP,
};
use super::falling::{FallingField, FieldContent};
use super::shooting::ShootingStars;
use super::starfield::Starfield;
use super::surface::{Surface, Viewport};
use super::ticker::Ticker;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct SkyParams {
    pub star_count: usize,
    pub focal_length: f32,
    pub initial_falling: usize,
    pub max_falling: usize,
    pub shooting_period: Duration,
    pub falling_period: Duration,
    pub palette: &'static [&'static str],
    pub palette_step: f32,
    pub content: FieldContent,
}

impl Default for SkyParams {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            focal_length: FOCAL_LENGTH,
            initial_falling: INITIAL_FALLING_COUNT,
            max_falling: MAX_FALLING_COUNT,
            shooting_period: SHOOTING_SPAWN_PERIOD,
            falling_period: FALLING_SPAWN_PERIOD,
            palette: TEXT_PALETTE,
            palette_step: PALETTE_STEP_PER_FRAME,
            content: FieldContent::default(),
        }
    }
}

/// Everything the sky animation owns: background, streaks, sprites, camera,
/// palette, spawn timers and the random source.
pub struct SkyScene {
    pub params: SkyParams,
    pub camera: Camera,
    viewport: Viewport,
    rng: StdRng,
    starfield: Starfield,
    shooting: ShootingStars,
    field: FallingField,
    palette: ColorCycle,
    shooting_timer: Ticker,
    falling_timer: Ticker,
}

impl SkyScene {
    pub fn new(params: SkyParams, viewport: Viewport, seed: u64) -> Result<Self, ColorError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let palette = ColorCycle::new(params.palette, params.palette_step)?;
        let mut starfield = Starfield::new(params.star_count);
        starfield.resize(viewport, &mut rng);
        Ok(Self {
            camera: Camera::default(),
            viewport,
            rng,
            starfield,
            shooting: ShootingStars::new(),
            field: FallingField::new(params.focal_length, params.content),
            palette,
            shooting_timer: Ticker::new(params.shooting_period, TIMER_MAX_CATCH_UP),
            falling_timer: Ticker::new(params.falling_period, TIMER_MAX_CATCH_UP),
            params,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn shooting_stars(&self) -> &ShootingStars {
        &self.shooting
    }

    pub fn field(&self) -> &FallingField {
        &self.field
    }

    pub fn palette(&self) -> &ColorCycle {
        &self.palette
    }

    /// Borrow the scene's random source, e.g. for effects layered on top.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Seed the field with its initial population.
    pub fn populate<L: ImageLoader + ?Sized>(&mut self, loader: &mut L) {
        for _ in 0..self.params.initial_falling {
            self.field.spawn(self.viewport, &mut self.rng, loader);
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.starfield.resize(viewport, &mut self.rng);
    }

    /// Fire due spawn timers. Falling spawns only top the field up to `max_falling`.
    pub fn advance_timers<L: ImageLoader + ?Sized>(&mut self, dt: Duration, loader: &mut L) {
        for _ in 0..self.shooting_timer.advance(dt) {
            self.shooting.spawn(self.viewport, &mut self.rng);
        }
        for _ in 0..self.falling_timer.advance(dt) {
            self.spawn_falling(loader);
        }
    }

    /// One falling-element spawn tick; returns whether an element was added.
    pub fn spawn_falling<L: ImageLoader + ?Sized>(&mut self, loader: &mut L) -> bool {
        if self.field.len() >= self.params.max_falling {
            return false;
        }
        self.field.spawn(self.viewport, &mut self.rng, loader);
        true
    }

    pub fn apply_asset_event<L: ImageLoader + ?Sized>(&mut self, event: &AssetEvent, loader: &mut L) {
        if let AssetEvent::Failed(asset, err) = event {
            if self.field.apply_asset_event(event, loader) {
                log::warn!("[asset] {} (asset {}); element dropped", err, asset.0);
            }
        } else {
            self.field.apply_asset_event(event, loader);
        }
    }

    /// Draw one frame in fixed layer order, then step the palette.
    pub fn render<S, L>(&mut self, surface: &mut S, loader: &mut L)
    where
        S: Surface + ?Sized,
        L: ImageLoader + ?Sized,
    {
        let viewport = self.viewport;
        surface.clear(viewport);
        surface.fill_vertical_gradient(viewport, BACKGROUND_TOP, BACKGROUND_BOTTOM);
        self.starfield.update_and_draw(surface);
        self.shooting.update_and_draw(surface);
        let text_color = self.palette.color().to_hex();
        self.field.update_and_draw(
            &self.camera,
            viewport,
            &text_color,
            &mut self.rng,
            loader,
            surface,
        );
        self.palette.advance();
    }

    pub fn frame<S, L>(&mut self, dt: Duration, surface: &mut S, loader: &mut L)
    where
        S: Surface + ?Sized,
        L: ImageLoader + ?Sized,
    {
        self.advance_timers(dt, loader);
        self.render(surface, loader);
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.camera.wheel(delta_y);
    }

    pub fn pointer_down(&mut self, at: Vec2) {
        self.camera.begin_drag(at);
    }

    pub fn pointer_move(&mut self, at: Vec2) {
        self.camera.drag_to(at);
    }

    pub fn pointer_release(&mut self) {
        self.camera.end_drag();
    }
}
