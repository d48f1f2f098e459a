use wasm_bindgen::prelude::*;

use crate::convert;

// This struct helps the JavaScript frontend understand the result easily.
// We derive Serialize so we can return it as a JSON string.
#[derive(serde::Serialize)]
struct WasmResult {
    ok: bool,
    json: Option<String>,  // The pretty-printed JSON array on success
    error: Option<String>, // The parse diagnostic on failure
}

#[wasm_bindgen]
pub fn convert_csv(input: &str) -> String {
    let result = match convert::convert(input) {
        Ok(records) => match convert::to_json_string(&records) {
            Ok(json) => WasmResult {
                ok: true,
                json: Some(json),
                error: None,
            },
            Err(e) => WasmResult {
                ok: false,
                json: None,
                error: Some(format!("JSON encoding failed: {e}")),
            },
        },
        Err(e) => WasmResult {
            ok: false,
            json: None,
            error: Some(format!("malformed input: {e}")),
        },
    };
    serde_json::to_string(&result).unwrap_or_default()
}
