use crate::constants::{CURSOR_GRABBING, CURSOR_IDLE, CURSOR_OUTSIDE};
use crate::core::SkyScene;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<SkyScene>>,
    pub cursor: Rc<RefCell<input::CursorState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_mousedown(&w);
    wire_mousemove(&w);
    wire_mouseup(&w);
    wire_mouseleave(&w);
    wire_cursor_tracking(&w);
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        w.scene.borrow_mut().wheel(ev.delta_y());
    }) as Box<dyn FnMut(_)>);

    // non-passive so prevent_default stops the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_mousedown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_canvas_px(&ev, &w.canvas);
        w.scene.borrow_mut().pointer_down(pos);
        dom::set_cursor(&w.canvas, CURSOR_GRABBING);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let mut scene = w.scene.borrow_mut();
        if !scene.camera.is_dragging() {
            return;
        }
        scene.pointer_move(input::mouse_canvas_px(&ev, &w.canvas));
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseup(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.scene.borrow_mut().pointer_release();
        dom::set_cursor(&w.canvas, CURSOR_IDLE);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        w.scene.borrow_mut().pointer_release();
        dom::set_cursor(&w.canvas, CURSOR_OUTSIDE);
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

// The guide trail follows the cursor anywhere on the page, not just the canvas.
fn wire_cursor_tracking(w: &InputWiring) {
    let cursor = w.cursor.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let pos = input::mouse_client_px(&ev);
        let mut c = cursor.borrow_mut();
        c.x = pos.x;
        c.y = pos.y;
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
