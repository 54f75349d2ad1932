//! Thin DOM helpers shared across the client.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Event, HtmlInputElement, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Ask the user a yes/no question through the browser confirm dialog.
/// Answers "no" when the dialog cannot be shown.
#[must_use]
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Today's date in local time as an ISO `YYYY-MM-DD` string.
#[must_use]
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

/// Leave the SPA entirely and load the given path fresh.
pub fn navigate_to(path: &str) {
    if let Err(err) = window().location().set_href(path) {
        console_error(&format!(
            "Failed to navigate to {path}: {}",
            js_error_message(&err)
        ));
    }
}

/// Extract the current value of the `<input>` that raised an event.
#[must_use]
pub fn input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}
