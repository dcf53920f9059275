// Shared fakes for host-side tests: a surface that records draw calls and an
// image loader that only remembers what it was asked to do.

#![allow(dead_code)]
use crate::core::{AssetId, ImageLoader, Surface, Viewport};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Gradient { top: String, bottom: String },
    Circle { center: Vec2, radius: f32, color: String, alpha: f32 },
    Line { head: Vec2, tail: Vec2, alpha: f32, width: f32 },
    Text { text: String, center: Vec2, size: f32, color: String, alpha: f32, glow: f32 },
    Image { asset: AssetId, center: Vec2, size: f32, alpha: f32 },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn images(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Image { .. }))
    }

    pub fn texts(&self) -> usize {
        self.count(|c| matches!(c, DrawCall::Text { .. }))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _viewport: Viewport) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_vertical_gradient(&mut self, _viewport: Viewport, top: &str, bottom: &str) {
        self.calls.push(DrawCall::Gradient {
            top: top.to_string(),
            bottom: bottom.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color: color.to_string(),
            alpha,
        });
    }

    fn stroke_fading_line(&mut self, head: Vec2, tail: Vec2, head_alpha: f32, width: f32) {
        self.calls.push(DrawCall::Line {
            head,
            tail,
            alpha: head_alpha,
            width,
        });
    }

    fn fill_glow_text(&mut self, text: &str, center: Vec2, size: f32, color: &str, alpha: f32, glow: f32) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            center,
            size,
            color: color.to_string(),
            alpha,
            glow,
        });
    }

    fn draw_image(&mut self, asset: AssetId, center: Vec2, size: f32, alpha: f32) {
        self.calls.push(DrawCall::Image {
            asset,
            center,
            size,
            alpha,
        });
    }
}

#[derive(Default)]
pub struct FakeLoader {
    pub requested: Vec<(AssetId, String)>,
    pub released: Vec<AssetId>,
}

impl FakeLoader {
    pub fn outstanding(&self) -> Vec<AssetId> {
        self.requested
            .iter()
            .map(|(id, _)| *id)
            .filter(|id| !self.released.contains(id))
            .collect()
    }
}

impl ImageLoader for FakeLoader {
    fn load(&mut self, asset: AssetId, url: &str) {
        self.requested.push((asset, url.to_string()));
    }

    fn release(&mut self, asset: AssetId) {
        self.released.push(asset);
    }
}

pub fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}
