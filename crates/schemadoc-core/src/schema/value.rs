//! Input values: default values and directive arguments

use std::fmt;

use indexmap::IndexMap;

/// Raw payload of a scalar literal
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Boolean(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// A constant input value as it appears in a schema.
///
/// Equality is structural: lists compare element-wise, input objects compare
/// as maps regardless of field order.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(ScalarValue),
    Enum(String),
    Null,
    List(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn boolean(value: bool) -> Self {
        Value::Scalar(ScalarValue::Boolean(value))
    }

    pub fn int(value: i64) -> Self {
        Value::Scalar(ScalarValue::Int(value))
    }

    pub fn float(value: f64) -> Self {
        Value::Scalar(ScalarValue::Float(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::Scalar(ScalarValue::String(value.into()))
    }

    pub fn enum_value(value: impl Into<String>) -> Self {
        Value::Enum(value.into())
    }

    /// Build an input object, keeping the given field order
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Boolean(b) => write!(f, "{b}"),
            ScalarValue::Int(i) => write!(f, "{i}"),
            ScalarValue::Float(v) => {
                let text = v.to_string();
                if v.is_finite() && !text.contains(&['.', 'e', 'E'][..]) {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            ScalarValue::String(s) => write_quoted(f, s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => scalar.fmt(f),
            Value::Enum(name) => f.write_str(name),
            Value::Null => f.write_str("null"),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt(f)?;
                }
                f.write_str("]")
            }
            Value::Object(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_display() {
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::int(-42).to_string(), "-42");
        assert_eq!(Value::float(1.0).to_string(), "1.0");
        assert_eq!(Value::float(2.5).to_string(), "2.5");
        assert_eq!(Value::string("say \"hi\"\n").to_string(), r#""say \"hi\"\n""#);
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::enum_value("ASC").to_string(), "ASC");
    }

    #[test]
    fn test_composite_display() {
        let value = Value::object([
            ("ids", Value::List(vec![Value::int(1), Value::int(2)])),
            ("order", Value::enum_value("DESC")),
        ]);
        assert_eq!(value.to_string(), "{ids: [1, 2], order: DESC}");
        assert_eq!(Value::List(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = Value::object([("x", Value::int(1)), ("y", Value::int(2))]);
        let b = Value::object([("y", Value::int(2)), ("x", Value::int(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_int_and_float_differ() {
        assert_ne!(Value::int(1), Value::float(1.0));
    }
}
