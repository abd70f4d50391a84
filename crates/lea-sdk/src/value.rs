//! The decoded-result value union.
//!
//! Node responses carry a dynamically shaped `decoded` payload: scalars,
//! large integers, binary buffers, ordered sequences, and key-value maps in
//! any nesting. [`Value`] models that shape as a closed enum. Composites are
//! reference-counted with interior mutability so shared and cyclic
//! structures are representable; the CLI's serializer is responsible for
//! breaking cycles on output.

use num_bigint::BigInt;
use std::cell::RefCell;
use std::rc::Rc;

/// A decoded value from a node response.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    /// An integer that fits in 64 bits.
    Int(i64),
    /// An integer wider than 64 bits, kept exact.
    Big(BigInt),
    Float(f64),
    Str(String),
    /// A binary buffer (hashes, raw account state).
    Bytes(Vec<u8>),
    /// An ordered sequence; shared so aliased/cyclic structures survive decode.
    Seq(Rc<RefCell<Vec<Value>>>),
    /// A key-value map with insertion order preserved. Keys are values too:
    /// the node may key maps by addresses, integers, or byte strings.
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
}

impl Value {
    /// Wraps a vector of elements as a sequence value.
    pub fn seq(items: Vec<Value>) -> Value {
        Value::Seq(Rc::new(RefCell::new(items)))
    }

    /// Wraps a list of entries as a map value.
    pub fn map(entries: Vec<(Value, Value)>) -> Value {
        Value::Map(Rc::new(RefCell::new(entries)))
    }

    /// Looks up a map entry by string key. Returns `None` for non-map values
    /// and missing keys.
    pub fn get(&self, key: &str) -> Option<Value> {
        let Value::Map(entries) = self else {
            return None;
        };
        entries.borrow().iter().find_map(|(k, v)| match k {
            Value::Str(s) if s == key => Some(v.clone()),
            _ => None,
        })
    }

    /// Converts wire JSON into the decoded union.
    ///
    /// Integers ride serde_json's arbitrary-precision representation, so
    /// values wider than 64 bits keep their exact digits. Strings of the
    /// form `0x…` with an even number of hex digits are the node's encoding
    /// for binary fields and decode to [`Value::Bytes`].
    pub fn from_wire(raw: &serde_json::Value) -> Value {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => from_wire_number(n),
            serde_json::Value::String(s) => from_wire_string(s),
            serde_json::Value::Array(items) => {
                Value::seq(items.iter().map(Value::from_wire).collect())
            }
            serde_json::Value::Object(fields) => Value::map(
                fields
                    .iter()
                    .map(|(k, v)| (Value::Str(k.clone()), Value::from_wire(v)))
                    .collect(),
            ),
        }
    }
}

fn from_wire_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Int(i);
    }
    if let Some(u) = n.as_u64() {
        return Value::Big(BigInt::from(u));
    }
    // Integer literals wider than u64 still carry their exact digits under
    // the arbitrary_precision feature.
    let repr = n.to_string();
    if let Ok(big) = repr.parse::<BigInt>() {
        return Value::Big(big);
    }
    match n.as_f64() {
        Some(f) => Value::Float(f),
        None => Value::Null,
    }
}

fn from_wire_string(s: &str) -> Value {
    if let Some(hex_digits) = s.strip_prefix("0x") {
        if !hex_digits.is_empty() && hex_digits.len() % 2 == 0 {
            if let Ok(bytes) = hex::decode(hex_digits) {
                return Value::Bytes(bytes);
            }
        }
    }
    Value::Str(s.to_string())
}
