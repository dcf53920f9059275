use super::constants::{
    SHOOTING_ANGLE, SHOOTING_FADE_PER_FRAME, SHOOTING_LENGTH_MAX, SHOOTING_LENGTH_MIN,
    SHOOTING_LINE_WIDTH, SHOOTING_SPEED_MAX, SHOOTING_SPEED_MIN,
};
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub head: Vec2,
    pub length: f32,
    pub speed: f32,
    pub angle: f32,
    pub opacity: f32,
}

impl ShootingStar {
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::new(self.angle.cos(), self.angle.sin())
    }

    #[inline]
    pub fn tail(&self) -> Vec2 {
        self.head - self.direction() * self.length
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
    active: Vec<ShootingStar>,
}

impl ShootingStars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[ShootingStar] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Launch one streak somewhere in the upper half of the viewport.
    pub fn spawn<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) {
        self.active.push(ShootingStar {
            head: Vec2::new(
                rng.gen_range(0.0..viewport.width()),
                rng.gen_range(0.0..viewport.height() * 0.5),
            ),
            length: rng.gen_range(SHOOTING_LENGTH_MIN..SHOOTING_LENGTH_MAX),
            speed: rng.gen_range(SHOOTING_SPEED_MIN..SHOOTING_SPEED_MAX),
            angle: SHOOTING_ANGLE,
            opacity: 1.0,
        });
    }

    pub fn update_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.active.retain_mut(|s| {
            surface.stroke_fading_line(s.head, s.tail(), s.opacity, SHOOTING_LINE_WIDTH);
            s.head += s.direction() * s.speed;
            s.opacity -= SHOOTING_FADE_PER_FRAME;
            s.opacity > 0.0
        });
    }
}
