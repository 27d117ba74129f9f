//! Console branding for anyone who looks under the hood.

use wasm_bindgen::JsValue;

const BANNER: &str = r#"
    ___                 ___ _
   /   \_____  _____   / __\ |_   ___  __
  / /\ / _ \ \/ / _ \ / _\ | | | | \ \/ /
 / /_//  __/>  < (_) / /   | | |_| |>  <
/___,' \___/_/\_\___/\/    |_|\__,_/_/\_\

  Institute of Technology & Skills
"#;

/// Print the brand block to the browser console. Once, on mount.
pub fn print_console_brand() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{BANNER}")),
        &JsValue::from_str("color: #818cf8; font-family: monospace; font-size: 11px;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%cWhere Innovation Begins"),
        &JsValue::from_str("color: #c084fc; font-weight: bold;"),
    );

    web_sys::console::log_2(
        &JsValue::from_str("%cCourse inquiries: Dexoflux@gmail.com | 8801659042"),
        &JsValue::from_str("color: #888;"),
    );
}
