//! Styled greeting in the developer console.

use folio_core::ConsoleLine;
use wasm_bindgen::JsValue;

pub fn print(lines: &[ConsoleLine]) {
    for line in lines {
        web_sys::console::log_2(
            &JsValue::from_str(&line.format_arg()),
            &JsValue::from_str(&line.style),
        );
    }
}
