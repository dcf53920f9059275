use crate::assets::ImageRegistry;
use crate::constants::PHRASE_FONT_FAMILY;
use crate::core::{AssetId, Surface, Viewport};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Surface` backed by the page's 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    images: ImageRegistry,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, images: ImageRegistry) -> Self {
        Self { ctx, images }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width() as f64, viewport.height() as f64);
    }

    fn fill_vertical_gradient(&mut self, viewport: Viewport, top: &str, bottom: &str) {
        let h = viewport.height() as f64;
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
        _ = gradient.add_color_stop(0.0, top);
        _ = gradient.add_color_stop(1.0, bottom);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, viewport.width() as f64, h);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        _ = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }

    fn stroke_fading_line(&mut self, head: Vec2, tail: Vec2, head_alpha: f32, width: f32) {
        let ctx = &self.ctx;
        let gradient =
            ctx.create_linear_gradient(head.x as f64, head.y as f64, tail.x as f64, tail.y as f64);
        _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", head_alpha.max(0.0)));
        _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        ctx.set_stroke_style_canvas_gradient(&gradient);
        ctx.set_line_width(width as f64);
        ctx.begin_path();
        ctx.move_to(head.x as f64, head.y as f64);
        ctx.line_to(tail.x as f64, tail.y as f64);
        ctx.stroke();
    }

    fn fill_glow_text(&mut self, text: &str, center: Vec2, size: f32, color: &str, alpha: f32, glow: f32) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        ctx.set_fill_style_str(color);
        ctx.set_font(&format!("{}px {}", size, PHRASE_FONT_FAMILY));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_shadow_color(color);
        ctx.set_shadow_blur(glow as f64);
        ctx.set_shadow_offset_x(0.0);
        ctx.set_shadow_offset_y(0.0);
        _ = ctx.fill_text(text, center.x as f64, center.y as f64);
        ctx.restore();
    }

    fn draw_image(&mut self, asset: AssetId, center: Vec2, size: f32, alpha: f32) {
        let images = self.images.borrow();
        let Some(tracked) = images.get(&asset) else {
            return;
        };
        // a decoded-but-broken image reports zero natural height
        if !tracked.element.complete() || tracked.element.natural_height() == 0 {
            return;
        }
        let ctx = &self.ctx;
        let half = size as f64 * 0.5;
        ctx.save();
        ctx.set_global_alpha(alpha as f64);
        _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            &tracked.element,
            center.x as f64 - half,
            center.y as f64 - half,
            size as f64,
            size as f64,
        );
        ctx.restore();
    }
}
