/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use serde_json::Value;

/// Whether a response value counts as set
///
/// `null`, `false`, `0` and `""` are unset; every other value, including
/// empty arrays and objects, is set.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Returns the value stored under `field` when it is set, otherwise the
/// whole response
///
/// # Examples
/// ```
/// use project_client::model::responses::unwrap_field;
/// use serde_json::json;
///
/// let body = json!({"materials": [1, 2]});
/// assert_eq!(unwrap_field(body, "materials"), json!([1, 2]));
///
/// let body = json!({"errors": ["nope"]});
/// assert_eq!(unwrap_field(body.clone(), "materials"), body);
/// ```
pub fn unwrap_field(response: Value, field: &str) -> Value {
    if present(&response, field).is_none() {
        return response;
    }
    match response {
        Value::Object(mut map) => map.remove(field).unwrap_or(Value::Null),
        other => other,
    }
}

/// Returns the value of `field` if `response` is an object carrying it set
pub fn present<'a>(response: &'a Value, field: &str) -> Option<&'a Value> {
    response.get(field).filter(|v| is_truthy(v))
}

/// Returns `value[key]`, or `null` when `value` is not an object or lacks `key`
pub fn field_or_null(value: &Value, key: &str) -> Value {
    value.get(key).cloned().unwrap_or(Value::Null)
}
