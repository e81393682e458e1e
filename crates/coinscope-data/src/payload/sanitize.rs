//! 비유한 JSON 숫자 토큰 정리.
//!
//! 분석 서비스는 워밍업 구간의 값을 `NaN`으로 직렬화하는데, 이는 표준 JSON이
//! 아닙니다. 문자열 리터럴 밖의 `NaN`, `Infinity`, `-Infinity` 토큰을 `null`로
//! 바꿔 표준 파서가 읽을 수 있게 합니다.

use std::borrow::Cow;

const TOKENS: [&str; 3] = ["-Infinity", "Infinity", "NaN"];

/// 문자열 밖의 비유한 숫자 토큰을 `null`로 바꿉니다.
///
/// 바꿀 토큰이 없으면 입력을 그대로 빌려 반환합니다.
pub fn sanitize_json_numbers(input: &str) -> Cow<'_, str> {
    if !TOKENS.iter().any(|token| input.contains(token)) {
        return Cow::Borrowed(input);
    }

    let bytes = input.as_bytes();
    let mut output = String::with_capacity(input.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut copied_until = 0;
    let mut i = 0;

    while i < bytes.len() {
        let byte = bytes[i];

        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if byte == b'"' {
            in_string = true;
            i += 1;
            continue;
        }

        if let Some(token) = TOKENS.iter().find(|token| bytes[i..].starts_with(token.as_bytes())) {
            output.push_str(&input[copied_until..i]);
            output.push_str("null");
            i += token.len();
            copied_until = i;
            continue;
        }

        i += 1;
    }

    output.push_str(&input[copied_until..]);
    Cow::Owned(output)
}
