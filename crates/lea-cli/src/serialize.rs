//! Conversion of decoded values into JSON-safe structures.
//!
//! A recursive visitor over [`Value`]: large integers become decimal
//! strings, byte buffers become arrays of 0-255 numbers, map keys are
//! coerced to strings, and a composite revisited while still being
//! converted collapses to the `"[Circular]"` sentinel instead of recursing
//! forever. The conversion itself is infallible for well-formed input.

use lea_sdk::Value;
use num_bigint::BigInt;
use serde_json::{Map as JsonMap, Number, Value as Json};
use std::rc::Rc;

/// Marker emitted in place of a composite that is already being converted.
///
/// A plain string, indistinguishable from a legitimately-valued one; kept
/// for output compatibility.
pub const CIRCULAR_SENTINEL: &str = "[Circular]";

/// Largest integer magnitude JSON consumers can hold exactly (2^53 - 1).
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Converts a decoded value into a JSON-safe value.
pub fn to_json(value: &Value) -> Json {
    let mut in_flight = Vec::new();
    walk(value, &mut in_flight)
}

fn walk(value: &Value, in_flight: &mut Vec<*const ()>) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => int_to_json(*i),
        Value::Big(b) => big_to_json(b),
        Value::Float(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
        Value::Str(s) => Json::String(s.clone()),
        Value::Bytes(bytes) => Json::Array(bytes.iter().map(|&b| Json::from(b)).collect()),
        Value::Seq(items) => {
            let ptr = Rc::as_ptr(items) as *const ();
            if in_flight.contains(&ptr) {
                return Json::String(CIRCULAR_SENTINEL.to_string());
            }
            in_flight.push(ptr);
            let out = Json::Array(
                items
                    .borrow()
                    .iter()
                    .map(|item| walk(item, in_flight))
                    .collect(),
            );
            in_flight.pop();
            out
        }
        Value::Map(entries) => {
            let ptr = Rc::as_ptr(entries) as *const ();
            if in_flight.contains(&ptr) {
                return Json::String(CIRCULAR_SENTINEL.to_string());
            }
            in_flight.push(ptr);
            let mut out = JsonMap::new();
            for (key, entry) in entries.borrow().iter() {
                out.insert(key_string(key), walk(entry, in_flight));
            }
            in_flight.pop();
            Json::Object(out)
        }
    }
}

fn int_to_json(i: i64) -> Json {
    if (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i) {
        Json::from(i)
    } else {
        Json::String(i.to_string())
    }
}

fn big_to_json(b: &BigInt) -> Json {
    match i64::try_from(b) {
        Ok(i) => int_to_json(i),
        Err(_) => Json::String(b.to_string()),
    }
}

/// Coerces a map key to its natural string form.
fn key_string(key: &Value) -> String {
    match key {
        Value::Str(s) => s.clone(),
        Value::Int(i) => i.to_string(),
        Value::Big(b) => b.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Bytes(bytes) => format!("0x{}", hex::encode(bytes)),
        Value::Seq(_) | Value::Map(_) => "[object]".to_string(),
    }
}
