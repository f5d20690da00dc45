//! Loading state for form submit buttons.
//!
//! A submitted form's button is disabled and shows a spinner, then is restored
//! after a fixed delay whether or not the submission finished. The delay only
//! keeps a failed submission from leaving the button stuck.

#[cfg(test)]
#[path = "form_loading_test.rs"]
mod form_loading_test;

use super::timers::OneShotTimer;

pub const LOADING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Loading..."#;
pub const DEFAULT_LOADING_RESET_MS: u32 = 5_000;

/// The parts of a submit button the loading state touches.
pub trait SubmitButton {
    /// Current label markup.
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

/// Put `button` into the loading state and schedule its restore.
///
/// A button that is already disabled is left alone so its original label is
/// not overwritten by the spinner.
pub fn mark_submitting<B, T>(button: B, timer: &T, reset_ms: u32)
where
    B: SubmitButton + 'static,
    T: OneShotTimer,
{
    if button.is_disabled() {
        return;
    }
    let original = button.label();
    button.set_disabled(true);
    button.set_label(LOADING_LABEL);
    timer.after(
        reset_ms,
        Box::new(move || {
            button.set_disabled(false);
            button.set_label(&original);
        }),
    );
}

#[cfg(feature = "hydrate")]
impl SubmitButton for web_sys::HtmlButtonElement {
    fn label(&self) -> String {
        self.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.set_inner_html(label);
    }

    fn is_disabled(&self) -> bool {
        self.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        web_sys::HtmlButtonElement::set_disabled(self, disabled);
    }
}

/// Attach the loading behavior to every `<form>` currently on the page.
#[cfg(feature = "hydrate")]
pub fn install(reset_ms: u32) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use super::timers::BrowserTimers;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(forms) = doc.query_selector_all("form") else {
        return;
    };
    for i in 0..forms.length() {
        let Some(form) = forms.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let form_for_cb = form.clone();
        let on_submit = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            let button = form_for_cb
                .query_selector("button[type=\"submit\"]")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web_sys::HtmlButtonElement>().ok());
            if let Some(button) = button {
                mark_submitting(button, &BrowserTimers, reset_ms);
            }
        });
        let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
        on_submit.forget();
    }
}
