//! Input value markup

use crate::error::RenderError;
use crate::schema::{ScalarValue, Value};

use super::markup::{span, span_html};

/// Render a constant value.
///
/// Leaves get a class naming their literal kind; lists and input objects
/// render their children between bracket markers.
pub fn print_value(value: &Value) -> Result<String, RenderError> {
    match value {
        Value::Scalar(scalar) => print_scalar(scalar),
        Value::Enum(name) => Ok(span("enum-literal", name)),
        Value::Null => Ok(span("null", "null")),
        Value::List(items) => {
            let children = items
                .iter()
                .map(print_value)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(composite("bracket-square", "[", "]", &children))
        }
        Value::Object(fields) => {
            let children = fields
                .iter()
                .map(|(name, value)| {
                    Ok(format!(
                        "{}{}{}",
                        span("value-name", name),
                        span("colon", ":"),
                        print_value(value)?
                    ))
                })
                .collect::<Result<Vec<_>, RenderError>>()?;
            Ok(composite("bracket-curly", "{", "}", &children))
        }
    }
}

fn print_scalar(scalar: &ScalarValue) -> Result<String, RenderError> {
    let class = match scalar {
        ScalarValue::Boolean(true) => "true",
        ScalarValue::Boolean(false) => "false",
        ScalarValue::Int(_) => "int-literal",
        ScalarValue::Float(f) if !f.is_finite() => {
            return Err(RenderError::UnsupportedValue(format!(
                "float {f} has no GraphQL literal"
            )));
        }
        ScalarValue::Float(_) => "float-literal",
        ScalarValue::String(_) => "string-literal",
    };
    Ok(span(class, &scalar.to_string()))
}

fn composite(bracket: &str, open: &str, close: &str, children: &[String]) -> String {
    let open = span(bracket, open);
    let close = span(bracket, close);
    if children.is_empty() {
        return format!("{open}{close}");
    }
    let joined = children.join(&span("comma", ","));
    format!("{open}{}{close}", span_html("value", &joined))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_classes() {
        assert_eq!(
            print_value(&Value::boolean(true)).unwrap(),
            r#"<span class="true">true</span>"#
        );
        assert_eq!(
            print_value(&Value::boolean(false)).unwrap(),
            r#"<span class="false">false</span>"#
        );
        assert_eq!(
            print_value(&Value::int(7)).unwrap(),
            r#"<span class="int-literal">7</span>"#
        );
        assert_eq!(
            print_value(&Value::float(1.5)).unwrap(),
            r#"<span class="float-literal">1.5</span>"#
        );
        assert_eq!(
            print_value(&Value::string("a<b")).unwrap(),
            r#"<span class="string-literal">&quot;a&lt;b&quot;</span>"#
        );
        assert_eq!(
            print_value(&Value::enum_value("ASC")).unwrap(),
            r#"<span class="enum-literal">ASC</span>"#
        );
        assert_eq!(
            print_value(&Value::Null).unwrap(),
            r#"<span class="null">null</span>"#
        );
    }

    #[test]
    fn test_list() {
        let value = Value::List(vec![Value::int(1), Value::int(2)]);
        assert_eq!(
            print_value(&value).unwrap(),
            concat!(
                r#"<span class="bracket-square">[</span><span class="value">"#,
                r#"<span class="int-literal">1</span><span class="comma">,</span>"#,
                r#"<span class="int-literal">2</span></span>"#,
                r#"<span class="bracket-square">]</span>"#
            )
        );
    }

    #[test]
    fn test_object() {
        let value = Value::object([("active", Value::boolean(true))]);
        assert_eq!(
            print_value(&value).unwrap(),
            concat!(
                r#"<span class="bracket-curly">{</span><span class="value">"#,
                r#"<span class="value-name">active</span><span class="colon">:</span>"#,
                r#"<span class="true">true</span></span>"#,
                r#"<span class="bracket-curly">}</span>"#
            )
        );
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(
            print_value(&Value::List(vec![])).unwrap(),
            r#"<span class="bracket-square">[</span><span class="bracket-square">]</span>"#
        );
        assert_eq!(
            print_value(&Value::object(Vec::<(String, Value)>::new())).unwrap(),
            r#"<span class="bracket-curly">{</span><span class="bracket-curly">}</span>"#
        );
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert!(matches!(
            print_value(&Value::float(f64::NAN)),
            Err(RenderError::UnsupportedValue(_))
        ));
    }
}
