#![cfg(target_arch = "wasm32")]
use crate::core::{GreetingSequence, SkyParams, SkyScene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SkyScene>>) {
    let canvas_resize = canvas.clone();
    let scene_resize = scene.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_to_window(&canvas_resize);
        scene_resize.borrow_mut().resize(viewport);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn wire_strap(document: &web::Document, sequence: &Rc<RefCell<GreetingSequence>>) {
    let sequence_click = sequence.clone();
    dom::add_click_listener(document, constants::STRAP_ID, move || {
        if sequence_click.borrow_mut().open_letter() {
            log::info!("[letter] opened");
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starlit-greeting starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    overlay::hide_strap_initially(&document);
    let viewport = dom::sync_canvas_to_window(&canvas);

    let params = SkyParams::default();
    let seed = js_sys::Date::now() as u64;
    let mut scene = SkyScene::new(params, viewport, seed)?;
    let mut loader = assets::WebImageLoader::new();
    scene.populate(&mut loader);
    log::info!(
        "[sky] viewport={}x{} stars={} falling={} (max {}) seed={}",
        viewport.width(),
        viewport.height(),
        scene.starfield().len(),
        scene.field().len(),
        scene.params.max_falling,
        seed
    );
    let scene = Rc::new(RefCell::new(scene));
    let sequence = Rc::new(RefCell::new(GreetingSequence::new(
        viewport,
        constants::LETTER_LINES.iter().copied(),
    )));
    let cursor = Rc::new(RefCell::new(input::CursorState::default()));

    wire_canvas_resize(&canvas, &scene);
    wire_strap(&document, &sequence);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        cursor: cursor.clone(),
    });
    dom::set_cursor(&canvas, constants::CURSOR_IDLE);

    let surface = render::CanvasSurface::new(ctx, loader.registry());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        sequence,
        cursor,
        document,
        surface,
        loader,
        last_instant: Instant::now(),
        cues: Vec::new(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
