use wasm_bindgen::prelude::*;

use crate::descriptor::ServiceDescriptors;
use crate::service::normalize_wire_code;
use crate::service::table::DescriptorTable;
use crate::types::ErrorContext;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Classifies `code` against a `{ service, errors: [...] }` descriptor list.
///
/// Returns `null` when the service does not claim the code; throws when the
/// descriptor list itself is malformed.
#[wasm_bindgen(js_name = classifyErrorCode)]
pub fn classify_error_code(
    descriptors: JsValue,
    code: &str,
    context: JsValue,
) -> Result<JsValue, JsValue> {
    let descriptors: ServiceDescriptors =
        serde_wasm_bindgen::from_value(descriptors).map_err(js_error)?;
    let context: ErrorContext = if context.is_null() || context.is_undefined() {
        ErrorContext::default()
    } else {
        serde_wasm_bindgen::from_value(context).map_err(js_error)?
    };
    let table = DescriptorTable::new(descriptors).map_err(js_error)?;

    let Some(err) = table.try_from_code(code, context) else {
        return Ok(JsValue::NULL);
    };
    Ok(to_js(&serde_json::json!({
        "service": err.service(),
        "errorCode": err.error_code(),
        "variantId": err.variant_id(),
        "display": err.to_string(),
    })))
}

#[wasm_bindgen(js_name = normalizeWireCode)]
pub fn normalize_wire_code_js(code: &str) -> String {
    normalize_wire_code(code).to_string()
}
