use super::constants::{ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};
use super::surface::Viewport;
use glam::Vec2;

/// Screen placement of a world point at some depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub screen: Vec2,
    /// `focal_length / depth`; drives size, glow and opacity.
    pub scale: f32,
}

/// Pan/zoom state fed by pointer drag and the wheel.
///
/// `pan` is in world units at the focal plane. `zoom` stays in
/// `[ZOOM_MIN, ZOOM_MAX]` and scales both sprite size and approach speed.
#[derive(Clone, Debug)]
pub struct Camera {
    pub pan: Vec2,
    zoom: f32,
    drag_anchor: Option<Vec2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            drag_anchor: None,
        }
    }
}

impl Camera {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// One wheel notch: negative `delta_y` (scroll up) zooms in, anything else out.
    pub fn wheel(&mut self, delta_y: f64) {
        let step = if delta_y < 0.0 { ZOOM_STEP } else { -ZOOM_STEP };
        self.zoom = (self.zoom + step).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    pub fn begin_drag(&mut self, at: Vec2) {
        self.drag_anchor = Some(at);
    }

    /// Pan by the pointer delta since the last sample, divided by zoom so the
    /// scene tracks the pointer at any zoom level. No-op when not dragging.
    pub fn drag_to(&mut self, at: Vec2) {
        if let Some(last) = self.drag_anchor {
            self.pan -= (at - last) / self.zoom;
            self.drag_anchor = Some(at);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    #[inline]
    pub fn project(&self, world: Vec2, depth: f32, focal_length: f32, viewport: Viewport) -> Projection {
        let scale = focal_length / depth;
        Projection {
            screen: (world - self.pan) * scale + viewport.center(),
            scale,
        }
    }
}
