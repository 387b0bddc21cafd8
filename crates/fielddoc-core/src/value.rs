//! Literal configuration values
//!
//! Defaults and choice keys are variant-typed literals. The type is
//! hashable so choice values can key an insertion-ordered map; floats go
//! through [`OrderedFloat`] to get `Eq` and `Hash`.

use ordered_float::OrderedFloat;

/// A literal value carried by a field descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Absent or explicitly none-valued
    None,
    /// Boolean literal
    Bool(bool),
    /// 64-bit signed integer literal
    Int(i64),
    /// 64-bit floating-point literal
    Float(OrderedFloat<f64>),
    /// String literal
    Str(String),
    /// Sequence of literals (list-field defaults)
    List(Vec<Value>),
}

impl Value {
    /// Create a float value.
    pub fn float(v: f64) -> Self {
        Value::Float(OrderedFloat(v))
    }

    /// Create a string value.
    pub fn str(v: impl Into<String>) -> Self {
        Value::Str(v.into())
    }

    /// Canonical literal rendering, used for "Default" items and choice
    /// terms.
    ///
    /// Strings are single-quoted, lists bracketed with comma-separated
    /// elements, and an absent value renders as `None`.
    pub fn repr(&self) -> String {
        match self {
            Value::None => "None".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.0.to_string(),
            Value::Str(s) => format!("'{s}'"),
            Value::List(items) => {
                let mut out = String::from("[");
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&item.repr());
                }
                out.push(']');
                out
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.repr())
    }
}
