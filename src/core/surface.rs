use super::asset::AssetId;
use glam::Vec2;

/// Drawable area in CSS pixels. Never smaller than 1×1; only `new` builds one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_extent(width),
            height: clamp_extent(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True when the axis-aligned square `center ± half` misses the viewport entirely.
    #[inline]
    pub fn square_outside(&self, center: Vec2, half: f32) -> bool {
        center.x + half < 0.0
            || center.x - half > self.width
            || center.y + half < 0.0
            || center.y - half > self.height
    }
}

// Non-finite sizes would make every uniform range over the viewport empty.
#[inline]
fn clamp_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Immediate-mode drawing target the simulation renders through.
///
/// The browser build backs this with a `CanvasRenderingContext2d`; host tests
/// record the calls instead. Alphas are in `[0, 1]`, colours are CSS strings.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);

    /// Fill the whole viewport with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, viewport: Viewport, top: &str, bottom: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);

    /// White line whose opacity fades from `head_alpha` at `head` to zero at `tail`.
    fn stroke_fading_line(&mut self, head: Vec2, tail: Vec2, head_alpha: f32, width: f32);

    /// Centered text with a same-coloured glow of radius `glow`.
    fn fill_glow_text(&mut self, text: &str, center: Vec2, size: f32, color: &str, alpha: f32, glow: f32);

    /// Draw a loaded image as a `size`×`size` square centered on `center`.
    fn draw_image(&mut self, asset: AssetId, center: Vec2, size: f32, alpha: f32);
}
