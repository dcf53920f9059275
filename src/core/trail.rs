use super::constants::{
    TRAIL_ARRIVE_DISTANCE, TRAIL_COLORS, TRAIL_DOT_COLOR, TRAIL_DOT_RADIUS, TRAIL_FOLLOW_DURATION,
    TRAIL_FOLLOW_EASE, TRAIL_HOMING_EASE, TRAIL_HOME_Y, TRAIL_PARTICLE_DRIFT,
    TRAIL_PARTICLE_LIFETIME, TRAIL_PARTICLE_RADIUS,
};
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailPhase {
    Idle,
    Following,
    Homing,
    Arrived,
}

#[derive(Clone, Debug)]
pub struct TrailParticle {
    pub origin: Vec2,
    pub drift: Vec2,
    pub color: &'static str,
    pub age: Duration,
}

impl TrailParticle {
    #[inline]
    fn progress(&self) -> f32 {
        (self.age.as_secs_f32() / TRAIL_PARTICLE_LIFETIME.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn position(&self) -> Vec2 {
        self.origin + self.drift * self.progress()
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Guide dot that chases the cursor for a while, then settles at the top
/// center, leaving a fading confetti trail behind it.
#[derive(Clone, Debug)]
pub struct CursorTrail {
    phase: TrailPhase,
    dot: Vec2,
    following_for: Duration,
    particles: Vec<TrailParticle>,
}

impl CursorTrail {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            phase: TrailPhase::Idle,
            dot: Vec2::new(0.0, viewport.height()),
            following_for: Duration::ZERO,
            particles: Vec::new(),
        }
    }

    pub fn phase(&self) -> TrailPhase {
        self.phase
    }

    pub fn dot(&self) -> Vec2 {
        self.dot
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }

    pub fn start(&mut self) {
        if self.phase == TrailPhase::Idle {
            self.phase = TrailPhase::Following;
        }
    }

    pub fn home_target(viewport: Viewport) -> Vec2 {
        Vec2::new(viewport.width() * 0.5, TRAIL_HOME_Y)
    }

    /// One frame. Returns `true` on the frame the dot arrives home.
    pub fn advance<R: Rng>(
        &mut self,
        dt: Duration,
        cursor: Vec2,
        viewport: Viewport,
        rng: &mut R,
    ) -> bool {
        for p in &mut self.particles {
            p.age += dt;
        }
        self.particles.retain(|p| p.age < TRAIL_PARTICLE_LIFETIME);

        let mut arrived = false;
        match self.phase {
            TrailPhase::Idle | TrailPhase::Arrived => return false,
            TrailPhase::Following => {
                self.dot += (cursor - self.dot) * TRAIL_FOLLOW_EASE;
                self.following_for += dt;
                if self.following_for >= TRAIL_FOLLOW_DURATION {
                    self.phase = TrailPhase::Homing;
                }
            }
            TrailPhase::Homing => {
                let target = Self::home_target(viewport);
                if self.dot.distance(target) < TRAIL_ARRIVE_DISTANCE {
                    self.dot = target;
                    self.phase = TrailPhase::Arrived;
                    arrived = true;
                } else {
                    self.dot += (target - self.dot) * TRAIL_HOMING_EASE;
                }
            }
        }

        if !arrived {
            self.emit(rng);
        }
        arrived
    }

    fn emit<R: Rng>(&mut self, rng: &mut R) {
        let color = TRAIL_COLORS[rng.gen_range(0..TRAIL_COLORS.len())];
        let drift = Vec2::new(
            rng.gen_range(-TRAIL_PARTICLE_DRIFT..TRAIL_PARTICLE_DRIFT),
            rng.gen_range(-TRAIL_PARTICLE_DRIFT..TRAIL_PARTICLE_DRIFT),
        );
        self.particles.push(TrailParticle {
            origin: self.dot,
            drift,
            color,
            age: Duration::ZERO,
        });
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in &self.particles {
            surface.fill_circle(p.position(), TRAIL_PARTICLE_RADIUS, p.color, p.alpha());
        }
        if matches!(self.phase, TrailPhase::Following | TrailPhase::Homing) {
            surface.fill_circle(self.dot, TRAIL_DOT_RADIUS, TRAIL_DOT_COLOR, 1.0);
        }
    }
}
