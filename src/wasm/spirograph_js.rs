use crate::float_types::Real;
use crate::generator::generate;
use crate::presets::Preset;
use crate::request::{CurveRequest, Mode};
use crate::wasm::{curve_to_js, error_to_js};
use wasm_bindgen::prelude::*;

/// `spirograph(R, r, [d...], inside)` -> one `[{x, y}, ...]` array per pen.
#[wasm_bindgen(js_name = spirograph)]
pub fn spirograph(
    ring_radius: f64,
    wheel_radius: f64,
    pen_offsets: Vec<f64>,
    inside: bool,
) -> Result<JsValue, JsValue> {
    let request = CurveRequest::new(
        ring_radius as Real,
        wheel_radius as Real,
        pen_offsets.into_iter().map(|d| d as Real).collect(),
        Mode::from(inside),
    );
    let result = generate(&request).map_err(error_to_js)?;
    curve_to_js(&result)
}

/// Same output as `spirograph` for one of the named presets.
#[wasm_bindgen(js_name = spirographPreset)]
pub fn spirograph_preset(name: &str) -> Result<JsValue, JsValue> {
    let preset: Preset = name.parse().map_err(error_to_js)?;
    let result = generate(&preset.request()).map_err(error_to_js)?;
    curve_to_js(&result)
}

#[wasm_bindgen(js_name = presetNames)]
pub fn preset_names() -> Vec<String> {
    Preset::ALL.iter().map(|p| p.name().to_string()).collect()
}
