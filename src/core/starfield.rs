use super::constants::{
    STAR_ALPHA_STEP_MAX, STAR_ALPHA_STEP_MIN, STAR_COLOR, STAR_RADIUS_MAX, STAR_RADIUS_MIN,
};
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub delta: f32,
}

impl Star {
    /// One twinkle step; alpha is pinned to the bound it crosses and the step reverses.
    #[inline]
    pub fn twinkle(&mut self) {
        self.alpha += self.delta;
        if self.alpha <= 0.0 {
            self.alpha = 0.0;
            self.delta = self.delta.abs();
        } else if self.alpha >= 1.0 {
            self.alpha = 1.0;
            self.delta = -self.delta.abs();
        }
    }
}

/// Twinkling background points, rebuilt whenever the viewport changes size.
#[derive(Clone, Debug, Default)]
pub struct Starfield {
    stars: Vec<Star>,
    count: usize,
}

impl Starfield {
    pub fn new(count: usize) -> Self {
        Self {
            stars: Vec::with_capacity(count),
            count,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.stars.clear();
        for _ in 0..self.count {
            self.stars.push(Star {
                position: Vec2::new(
                    rng.gen_range(0.0..viewport.width()),
                    rng.gen_range(0.0..viewport.height()),
                ),
                radius: rng.gen_range(STAR_RADIUS_MIN..=STAR_RADIUS_MAX),
                alpha: rng.gen::<f32>(),
                delta: rng.gen_range(STAR_ALPHA_STEP_MIN..STAR_ALPHA_STEP_MAX),
            });
        }
    }

    pub fn update_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        for star in &mut self.stars {
            star.twinkle();
            surface.fill_circle(star.position, star.radius, STAR_COLOR, star.alpha);
        }
    }
}
