//! Reset of the message filter form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The filter form is server-rendered under one of two ids depending on the
//! page. Clearing blanks text and date fields, resets selects to `all` where
//! that option exists, and resubmits so the server renders an unfiltered list.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

pub const FILTER_FORM_IDS: [&str; 2] = ["filters-form", "messages-filters-form"];

/// The kinds of filter controls the reset distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Text,
    DateTimeLocal,
    Select { has_all_option: bool },
    Other,
}

impl FilterField {
    /// Classify an `<input>` by its `type` attribute.
    pub fn input(input_type: &str) -> Self {
        match input_type {
            "text" => Self::Text,
            "datetime-local" => Self::DateTimeLocal,
            _ => Self::Other,
        }
    }
}

/// The value a field gets on reset, or `None` to leave it alone.
pub fn cleared_value(field: FilterField) -> Option<&'static str> {
    match field {
        FilterField::Text | FilterField::DateTimeLocal => Some(""),
        FilterField::Select { has_all_option: true } => Some("all"),
        FilterField::Select { has_all_option: false } => Some(""),
        FilterField::Other => None,
    }
}

/// Clear the page's filter form and submit it. Returns `false` when absent.
#[cfg(feature = "hydrate")]
pub fn clear_page_form() -> bool {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(form) = FILTER_FORM_IDS
        .iter()
        .find_map(|id| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return false;
    };
    let Ok(fields) = form.query_selector_all("input, select") else {
        return false;
    };

    for i in 0..fields.length() {
        let Some(node) = fields.item(i) else {
            continue;
        };
        if let Some(input) = node.dyn_ref::<web_sys::HtmlInputElement>() {
            if let Some(value) = cleared_value(FilterField::input(&input.type_())) {
                input.set_value(value);
            }
        } else if let Some(select) = node.dyn_ref::<web_sys::HtmlSelectElement>() {
            let has_all_option = select.query_selector("option[value=\"all\"]").ok().flatten().is_some();
            if let Some(value) = cleared_value(FilterField::Select { has_all_option }) {
                select.set_value(value);
            }
        }
    }

    let _ = form.submit();
    true
}
