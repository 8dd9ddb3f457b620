use crate::float_types::Real;
use crate::generator::generate_with;
use crate::presets::Preset;
use crate::request::{CurveRequest, Mode};
use crate::sampling::SamplingOptions;
use crate::wasm::{curve_to_js, error_to_js};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct CurveRequestJs {
    pub(crate) inner: CurveRequest,
    pub(crate) options: SamplingOptions,
}

#[wasm_bindgen]
impl CurveRequestJs {
    #[wasm_bindgen(constructor)]
    pub fn new(ring_radius: f64, wheel_radius: f64, inside: bool) -> CurveRequestJs {
        CurveRequestJs {
            inner: CurveRequest::new(
                ring_radius as Real,
                wheel_radius as Real,
                Vec::new(),
                Mode::from(inside),
            ),
            options: SamplingOptions::default(),
        }
    }

    #[wasm_bindgen(js_name = fromPreset)]
    pub fn from_preset(name: &str) -> Result<CurveRequestJs, JsValue> {
        let preset: Preset = name.parse().map_err(error_to_js)?;
        Ok(preset.request().into())
    }

    #[wasm_bindgen(js_name = fromQueryString)]
    pub fn from_query_string(query: &str) -> Result<CurveRequestJs, JsValue> {
        let request = CurveRequest::from_query_string(query).map_err(error_to_js)?;
        Ok(request.into())
    }

    #[wasm_bindgen(js_name = toQueryString)]
    pub fn to_query_string(&self) -> String {
        self.inner.to_query_string()
    }

    #[wasm_bindgen(js_name = addPen)]
    pub fn add_pen(&mut self, offset: f64) {
        self.inner.pen_offsets.push(offset as Real);
    }

    #[wasm_bindgen(js_name = setStep)]
    pub fn set_step(&mut self, step: f64) {
        self.options = self.options.with_step(step as Real);
    }

    #[wasm_bindgen(getter)]
    pub fn inside(&self) -> bool {
        self.inner.mode.is_inside()
    }

    #[wasm_bindgen(getter, js_name = penCount)]
    pub fn pen_count(&self) -> usize {
        self.inner.pen_offsets.len()
    }

    pub fn generate(&self) -> Result<JsValue, JsValue> {
        let result = generate_with(&self.inner, &self.options).map_err(error_to_js)?;
        curve_to_js(&result)
    }
}

// Rust-only conversions (not visible to JS)
impl From<CurveRequest> for CurveRequestJs {
    fn from(inner: CurveRequest) -> Self {
        CurveRequestJs {
            inner,
            options: SamplingOptions::default(),
        }
    }
}

impl From<&CurveRequestJs> for CurveRequest {
    fn from(request: &CurveRequestJs) -> Self {
        request.inner.clone()
    }
}
