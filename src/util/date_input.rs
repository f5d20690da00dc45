//! Conversion of server timestamps into `datetime-local` input values.
//!
//! The server formats timestamps as `DD/MM/YYYY HH:MM:SS`; date-time widgets
//! want `YYYY-MM-DDTHH:MM`. Malformed input degrades to an empty string.

#[cfg(test)]
#[path = "date_input_test.rs"]
mod date_input_test;

const DEFAULT_TIME: &str = "00:00";

/// Convert `DD/MM/YYYY HH:MM:SS` into `YYYY-MM-DDTHH:MM`.
///
/// Returns an empty string for empty input or when the date segment does not
/// have exactly three `/`-separated parts. A missing time becomes `00:00`.
pub fn to_input_format(source: &str) -> String {
    if source.is_empty() {
        return String::new();
    }

    let mut segments = source.split(' ');
    let date = segments.next().unwrap_or_default();
    let time = segments.next().filter(|t| !t.is_empty());

    let parts: Vec<&str> = date.split('/').collect();
    let [day, month, year] = parts.as_slice() else {
        return String::new();
    };

    let time = time.map_or(DEFAULT_TIME, |t| t.char_indices().nth(5).map_or(t, |(i, _)| &t[..i]));
    format!("{year}-{month:0>2}-{day:0>2}T{time}")
}

/// Rewrite every `input[type=datetime-local]` whose server value converts.
#[cfg(feature = "hydrate")]
pub fn format_page_inputs() {
    use wasm_bindgen::JsCast;

    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(inputs) = doc.query_selector_all("input[type=\"datetime-local\"]") else {
        return;
    };
    for i in 0..inputs.length() {
        let Some(input) = inputs.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
            continue;
        };
        // The `value` property of a date-time input is already sanitized,
        // so the server-written text only survives in the attribute.
        let Some(raw) = input.get_attribute("value") else {
            continue;
        };
        let formatted = to_input_format(&raw);
        if !formatted.is_empty() {
            input.set_value(&formatted);
        }
    }
}
