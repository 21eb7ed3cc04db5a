use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("start-overlay") {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
    clear_error(document);
}

/// Surface an acquisition failure next to the start button; the overlay stays
/// up so the user can retry.
pub fn show_error(document: &web::Document, message: &str) {
    show(document);
    if let Some(el) = document.get_element_by_id("overlay-error") {
        el.set_text_content(Some(message));
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn clear_error(document: &web::Document) {
    if let Some(el) = document.get_element_by_id("overlay-error") {
        el.set_text_content(None);
        _ = el.set_attribute("style", "display:none");
    }
}
