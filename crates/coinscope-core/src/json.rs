//! 느슨한 JSON 필드 추출 헬퍼.
//!
//! 외부 서비스 응답은 키가 빠지거나 `null`이 들어오는 경우가 잦습니다.
//! 이 헬퍼들은 에러 대신 빈 문자열/0/`None`으로 성능 저하합니다.

use serde_json::Value;

/// 숫자 또는 숫자 문자열을 `f64`로 변환합니다.
pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 객체 필드를 `f64`로 읽습니다 (없거나 숫자가 아니면 `None`).
pub fn opt_f64(object: &Value, key: &str) -> Option<f64> {
    object.get(key).and_then(as_f64)
}

/// 객체 필드를 `f64`로 읽습니다 (없으면 0).
pub fn field_f64(object: &Value, key: &str) -> f64 {
    opt_f64(object, key).unwrap_or(0.0)
}

/// 객체 필드를 문자열로 읽습니다 (없거나 문자열이 아니면 `None`).
pub fn opt_str<'a>(object: &'a Value, key: &str) -> Option<&'a str> {
    object.get(key).and_then(Value::as_str)
}

/// 객체 필드를 문자열로 읽습니다 (없으면 빈 문자열).
pub fn field_str(object: &Value, key: &str) -> String {
    opt_str(object, key).unwrap_or_default().to_string()
}

/// 객체 필드를 표시용 텍스트로 읽습니다.
///
/// 문자열은 그대로, 숫자와 불리언은 JSON 표기 그대로 변환합니다.
/// 없거나 `null`이거나 배열/객체면 빈 문자열입니다.
pub fn field_text(object: &Value, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => value.to_string(),
        _ => String::new(),
    }
}

/// 배열의 각 원소를 `f64`로 변환합니다. 숫자가 아닌 원소는 `None`입니다.
///
/// 배열이 아니면 `None`을 반환합니다.
pub fn f64_sequence(value: &Value) -> Option<Vec<Option<f64>>> {
    value
        .as_array()
        .map(|items| items.iter().map(as_f64).collect())
}
