//! JSON interop for the container model.
//!
//! The serialized form backs [`replace_serialized`] and lets callers load
//! containers from parsed JSON or YAML documents. Branches always serialize
//! as JSON objects with canonical string keys; integer keys are recovered on
//! the way back in via [`Key::from_canonical`], so key flavor survives a
//! round trip even though array-ness does not.
//!
//! [`replace_serialized`]: crate::replace_serialized
//! [`Key::from_canonical`]: crate::Key::from_canonical

use serde_json::{Map, Value};

use crate::key::Key;
use crate::node::{Branch, Node};
use crate::scalar::Scalar;

impl Node {
    /// Converts this node to a `serde_json::Value`.
    ///
    /// Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Leaf(Scalar::Null) => Value::Null,
            Node::Leaf(Scalar::Bool(b)) => Value::Bool(*b),
            Node::Leaf(Scalar::Int(n)) => Value::Number((*n).into()),
            Node::Leaf(Scalar::Float(f)) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::Leaf(Scalar::Str(s)) => Value::String(s.clone()),
            Node::Branch(b) => {
                let mut map = Map::new();
                for (key, child) in b.entries() {
                    map.insert(key.canonical().into_owned(), child.to_json());
                }
                Value::Object(map)
            }
        }
    }

    /// Builds a node from a `serde_json::Value`.
    ///
    /// Objects and arrays both become branches: object keys parse back
    /// into their flavor, array elements get sequential integer keys.
    pub fn from_json(value: &Value) -> Node {
        match value {
            Value::Null => Node::Leaf(Scalar::Null),
            Value::Bool(b) => Node::Leaf(Scalar::Bool(*b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Node::Leaf(Scalar::Int(i)),
                None => Node::Leaf(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
            },
            Value::String(s) => Node::Leaf(Scalar::Str(s.clone())),
            Value::Array(items) => {
                let mut branch = Branch::new();
                for (i, item) in items.iter().enumerate() {
                    branch.insert(Key::Index(i as u64), Node::from_json(item));
                }
                Node::Branch(branch)
            }
            Value::Object(map) => {
                let mut branch = Branch::new();
                for (key, item) in map {
                    branch.insert(Key::from_canonical(key), Node::from_json(item));
                }
                Node::Branch(branch)
            }
        }
    }
}
