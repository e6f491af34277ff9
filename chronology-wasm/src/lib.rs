//! Bridge WASM <-> JavaScript trung lập framework.

use chronology_core::{
    compute_bar_geometry, ChronologyConfig, ChronologyError, ChronologyOptions, Event,
};
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Vẽ chronology thành chuỗi SVG.
#[wasm_bindgen]
pub fn render_chronology(
    data: JsValue,
    options: Option<JsValue>,
    selected: Option<usize>,
) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let events = read_events(data)?;
    let options = read_options(options)?;

    chronology_svg::render_chronology(events, &options, selected)
        .map_err(|err| JsValue::from_str(&format_chronology_error(err)))
}

/// Hình học thanh cho khoảng trong tùy chọn (hoặc toàn bộ dữ liệu).
#[wasm_bindgen]
pub fn bar_geometry(data: JsValue, options: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let events = read_events(data)?;
    let options = read_options(options)?;
    let config = ChronologyConfig::resolve(&options, &events)
        .map_err(|err| JsValue::from_str(&format_chronology_error(err)))?;

    let geometry =
        compute_bar_geometry(&config.range, config.height(), config.bar.min, config.bar.max);
    to_value(&geometry)
        .map_err(|err| JsValue::from_str(&format!("Không serialize hình học thanh: {err}")))
}

fn read_events(data: JsValue) -> Result<Vec<Event>, JsValue> {
    let value = from_value::<serde_json::Value>(data)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON dữ liệu: {err}")))?;
    chronology_json::load_events_value(&value)
        .map_err(|err| JsValue::from_str(&format_chronology_error(err)))
}

fn read_options(options: Option<JsValue>) -> Result<ChronologyOptions, JsValue> {
    match options {
        Some(js_options) if !js_options.is_undefined() && !js_options.is_null() => {
            let value = from_value::<serde_json::Value>(js_options)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được tùy chọn: {err}")))?;
            chronology_json::load_options_value(&value)
                .map_err(|err| JsValue::from_str(&format_chronology_error(err)))
        }
        _ => Ok(ChronologyOptions::default()),
    }
}

fn format_chronology_error(err: ChronologyError) -> String {
    format!("Chronology error: {err}")
}
