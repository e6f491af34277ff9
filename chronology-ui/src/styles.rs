#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-chronology-ui]";

/// Bố cục khung chứa; kiểu của thanh và bảng chi tiết lấy từ `chronology_svg::DEFAULT_STYLES`.
pub const LAYOUT_STYLES: &str = r#"
.chronology-root {
  display: flex;
  gap: 16px;
  align-items: flex-start;
}

.chronology-slider {
  display: flex;
  flex-direction: column;
  gap: 8px;
  min-width: 180px;
  font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  font-size: 13px;
  color: #3f4c5a;
}

.chronology-slider input[type="range"] {
  width: 100%;
  accent-color: #2563eb;
}

.chronology-error {
  color: #b42318;
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document không có thẻ <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-chronology-ui", "v1")?;
    style_el.set_text_content(Some(&format!(
        "{}{}",
        chronology_svg::DEFAULT_STYLES,
        LAYOUT_STYLES
    )));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
