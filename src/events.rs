use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `on_stop` whenever Escape is pressed anywhere in the document.
pub fn wire_stop_key(document: &web::Document, mut on_stop: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_stop();
        }
    }) as Box<dyn FnMut(web::KeyboardEvent)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
