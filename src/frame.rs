use crate::assets::WebImageLoader;
use crate::core::{Cue, GreetingSequence, SkyScene};
use crate::input;
use crate::overlay;
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// One stalled frame (tab switch, debugger) must not replay seconds of animation.
const MAX_FRAME_DT: Duration = Duration::from_millis(250);

pub struct FrameContext {
    pub scene: Rc<RefCell<SkyScene>>,
    pub sequence: Rc<RefCell<GreetingSequence>>,
    pub cursor: Rc<RefCell<input::CursorState>>,

    pub document: web::Document,
    pub surface: CanvasSurface,
    pub loader: WebImageLoader,

    pub last_instant: Instant,
    pub cues: Vec<Cue>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(MAX_FRAME_DT);
        self.last_instant = now;

        let mut scene = self.scene.borrow_mut();
        for event in self.loader.drain_events() {
            scene.apply_asset_event(&event, &mut self.loader);
        }
        scene.frame(dt, &mut self.surface, &mut self.loader);

        let cursor = self.cursor.borrow().position();
        let viewport = scene.viewport();
        let mut sequence = self.sequence.borrow_mut();
        self.cues.clear();
        sequence.advance(dt, cursor, viewport, scene.rng(), &mut self.cues);
        sequence.draw(&mut self.surface);
        drop(sequence);
        drop(scene);

        for cue in &self.cues {
            overlay::apply(&self.document, cue);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
