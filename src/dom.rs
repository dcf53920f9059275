use crate::core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Match the canvas backing store to the window's inner size and return it.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let (w, h) = web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (iw, ih)
        })
        .unwrap_or((1.0, 1.0));
    let w_px = (w as u32).max(1);
    let h_px = (h as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    Viewport::new(w_px as f32, h_px as f32)
}

#[inline]
pub fn set_cursor(canvas: &web::HtmlCanvasElement, cursor: &str) {
    _ = canvas.style().set_property("cursor", cursor);
}
