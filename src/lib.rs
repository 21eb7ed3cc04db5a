#![cfg(target_arch = "wasm32")]
//! Microphone-reactive starfield: stars rush past, wireframe asteroids tumble
//! and flare, and the camera shakes with the bass. A start button asks for
//! the microphone; Escape tears everything back down.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::audio::MicAnalyzer;
use crate::core::{ActivityEnvelope, SceneState};
use crate::frame::{FrameContext, LoopHandle};

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

/// Shell state shared between the start button and the stop key: whether a
/// loop is live, and the handle needed to cancel it.
struct AppState {
    loop_handle: RefCell<Option<LoopHandle>>,
    starting: Cell<bool>,
}

impl AppState {
    fn is_live(&self) -> bool {
        self.loop_handle.borrow().is_some()
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stardrift starting");

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

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let app = Rc::new(AppState {
        loop_handle: RefCell::new(None),
        starting: Cell::new(false),
    });

    // Start button: acquire the microphone, then build the scene and loop.
    // Acquisition failure leaves everything un-started and retryable.
    {
        let app_click = app.clone();
        let document_click = document.clone();
        let canvas_click = canvas.clone();
        dom::add_click_listener(&document, "start-button", move || {
            if app_click.is_live() || app_click.starting.get() {
                return;
            }
            app_click.starting.set(true);
            let app = app_click.clone();
            let document = document_click.clone();
            let canvas = canvas_click.clone();
            spawn_local(async move {
                start_visualizer(&app, &document, canvas).await;
                app.starting.set(false);
            });
        });
    }

    // Escape tears the running visualizer down and brings the overlay back.
    {
        let app_key = app.clone();
        let document_key = document.clone();
        events::wire_stop_key(&document, move || {
            if let Some(handle) = app_key.loop_handle.borrow_mut().take() {
                handle.stop();
                overlay::show(&document_key);
                log::info!("visualizer stopped");
            }
        });
    }

    Ok(())
}

async fn start_visualizer(
    app: &Rc<AppState>,
    document: &web::Document,
    canvas: web::HtmlCanvasElement,
) {
    let mic = match MicAnalyzer::acquire().await {
        Ok(mic) => mic,
        Err(e) => {
            log::warn!("microphone acquisition failed: {e}");
            overlay::show_error(document, &e.user_message());
            return;
        }
    };

    // Scene and GPU are only built once the microphone is live; a missing
    // WebGPU adapter leaves the simulation running headless.
    let gpu = frame::init_gpu(&canvas).await;
    let scene = SceneState::new(js_sys::Date::now() as u64);
    let ctx = Rc::new(RefCell::new(FrameContext {
        mic,
        envelope: ActivityEnvelope::new(),
        scene,
        canvas,
        gpu,
    }));
    let handle = frame::start_loop(ctx);
    *app.loop_handle.borrow_mut() = Some(handle);
    overlay::hide(document);
    log::info!("visualizer running");
}
