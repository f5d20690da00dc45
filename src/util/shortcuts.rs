//! Global keyboard shortcuts for the admin pages.
//!
//! - Ctrl/Cmd + K: focus the text search field.
//! - Escape: blur the focused `<input>`.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

pub const SEARCH_INPUT_SELECTOR: &str = "input[type=\"text\"], input[placeholder*=\"Filtra\"]";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    BlurInput,
}

/// The modifier state and key of a `keydown` event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub meta: bool,
}

/// Map a key press to a shortcut, if any.
pub fn resolve(press: KeyPress<'_>) -> Option<Shortcut> {
    if (press.ctrl || press.meta) && press.key.eq_ignore_ascii_case("k") {
        return Some(Shortcut::FocusSearch);
    }
    if press.key == "Escape" {
        return Some(Shortcut::BlurInput);
    }
    None
}

/// Install the document-level `keydown` listener.
#[cfg(feature = "hydrate")]
pub fn install() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let doc_for_cb = doc.clone();
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let press = KeyPress { key: &key, ctrl: ev.ctrl_key(), meta: ev.meta_key() };
        match resolve(press) {
            Some(Shortcut::FocusSearch) => {
                ev.prevent_default();
                if let Some(input) = doc_for_cb
                    .query_selector(SEARCH_INPUT_SELECTOR)
                    .ok()
                    .flatten()
                    .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                {
                    let _ = input.focus();
                }
            }
            Some(Shortcut::BlurInput) => {
                if let Some(active) = doc_for_cb.active_element() {
                    if active.tag_name().eq_ignore_ascii_case("input") {
                        if let Ok(el) = active.dyn_into::<web_sys::HtmlElement>() {
                            let _ = el.blur();
                        }
                    }
                }
            }
            None => {}
        }
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
