use crate::errors::CurveError;
use crate::result::CurveResult;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod request_js;
pub mod spirograph_js;

// Optional: better panic messages in the browser console.
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The `{x, y}` object hosts receive for every sample.
#[derive(Serialize)]
struct PointJs {
    x: f64,
    y: f64,
}

fn error_to_js(error: CurveError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

// CurveResult -> [[{x, y}, ...], ...]
fn curve_to_js(result: &CurveResult) -> Result<JsValue, JsValue> {
    let traces: Vec<Vec<PointJs>> = result
        .iter()
        .map(|trace| {
            trace
                .iter()
                .map(|p| PointJs {
                    x: p.x as f64,
                    y: p.y as f64,
                })
                .collect()
        })
        .collect();

    serde_wasm_bindgen::to_value(&traces)
        .map_err(|e| JsValue::from_str(&format!("Failed to convert points for JS: {:?}", e)))
}
