use strum::VariantNames;
use wasm_bindgen::prelude::*;

use crate::decoder::{self, DecoderConfig};
use crate::descriptor::Descriptor;
use crate::serialization::{ErrorKind, SerializationError, messages};

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

fn error_result(err: &SerializationError) -> JsValue {
    let obj = serde_json::json!({
        "error": {
            "kind": err.kind().as_ref(),
            "message": err.to_string(),
        }
    });
    to_js(&obj)
}

/// Decode `input_json` against a descriptor, returning `{record}` or `{error: {kind, message}}`.
#[wasm_bindgen]
pub fn decode_json(descriptor_json: &str, config_json: &str, input_json: &str) -> JsValue {
    let descriptor: Descriptor = match serde_json::from_str(descriptor_json) {
        Ok(d) => d,
        Err(e) => return error_result(&SerializationError::from(e)),
    };
    let config = match DecoderConfig::from_json(config_json) {
        Ok(c) => c,
        Err(e) => return error_result(&e),
    };
    match decoder::decode_object_str(&descriptor, input_json, &config) {
        Ok(record) => to_js(&serde_json::json!({ "record": record.to_json() })),
        Err(e) => error_result(&e),
    }
}

/// Names of every error kind, as reported in `error.kind`.
#[wasm_bindgen]
pub fn describe_error_kinds() -> JsValue {
    let kinds: Vec<serde_json::Value> = ErrorKind::VARIANTS
        .iter()
        .map(|k| serde_json::Value::String((*k).to_string()))
        .collect();
    to_js(&serde_json::Value::Array(kinds))
}

/// Message a decoder would raise for the given missing field names.
#[wasm_bindgen]
pub fn missing_fields_message(fields: JsValue, serial_name: &str) -> Option<String> {
    let fields: Vec<String> = serde_wasm_bindgen::from_value(fields).ok()?;
    if fields.is_empty() {
        return None;
    }
    Some(messages::missing_fields(&fields, serial_name))
}

/// Message a decoder would raise for an unknown element index.
#[wasm_bindgen]
pub fn unknown_field_message(index: u32) -> String {
    messages::unknown_field(index as usize)
}
