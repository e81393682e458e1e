//! 로케일별 통화 포맷.
//!
//! 소수 자릿수는 최소 2, 최대 6이며, 2자리를 넘는 끝자리 0은 제거됩니다.
//! 반올림은 ICU처럼 최단 10진 표현에서 시작합니다.

use crate::types::{split_fraction, Locale};

/// 통화 최소 소수 자릿수.
pub const CURRENCY_MIN_FRACTION_DIGITS: u32 = 2;

/// 통화 최대 소수 자릿수.
pub const CURRENCY_MAX_FRACTION_DIGITS: u32 = 6;

const NBSP: char = '\u{a0}';

/// 기본 로케일(`pt-BR`)로 통화를 포맷합니다.
///
/// # Examples
///
/// ```
/// use coinscope_core::format_currency;
///
/// assert_eq!(format_currency(1234.5, "USD"), "US$\u{a0}1.234,50");
/// assert_eq!(format_currency(0.000123456789, "usd"), "US$\u{a0}0,000123");
/// ```
pub fn format_currency(value: f64, currency_code: &str) -> String {
    format_currency_in(value, currency_code, Locale::default())
}

/// 지정한 로케일로 통화를 포맷합니다.
pub fn format_currency_in(value: f64, currency_code: &str, locale: Locale) -> String {
    let prefix = currency_prefix(currency_code, locale);
    let sign = if !value.is_nan() && value.is_sign_negative() {
        "-"
    } else {
        ""
    };

    let body = if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        "∞".to_string()
    } else {
        group_digits(value.abs(), locale)
    };

    format!("{}{}{}", sign, prefix, body)
}

/// 통화 기호와 뒤따르는 공백.
fn currency_prefix(currency_code: &str, locale: Locale) -> String {
    match (locale.currency_symbol(currency_code), locale) {
        (Some(symbol), Locale::PtBr) => format!("{}{}", symbol, NBSP),
        (Some(symbol), Locale::EnUs) => symbol.to_string(),
        (None, _) => format!("{}{}", currency_code.to_ascii_uppercase(), NBSP),
    }
}

fn group_digits(magnitude: f64, locale: Locale) -> String {
    let (int_part, frac_part) = split_fraction(
        magnitude,
        CURRENCY_MIN_FRACTION_DIGITS,
        CURRENCY_MAX_FRACTION_DIGITS,
    );

    let grouped = group_integer(&int_part, locale.group_separator());

    if frac_part.is_empty() {
        grouped
    } else {
        format!("{}{}{}", grouped, locale.decimal_separator(), frac_part)
    }
}

fn group_integer(int_part: &str, separator: char) -> String {
    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*digit);
    }
    grouped
}

/// 정수를 로케일의 천 단위 구분자로 묶습니다 (`toLocaleString`).
///
/// ```
/// use coinscope_core::{format_count, Locale};
///
/// assert_eq!(format_count(17_321, Locale::PtBr), "17.321");
/// assert_eq!(format_count(17_321, Locale::EnUs), "17,321");
/// ```
pub fn format_count(value: u64, locale: Locale) -> String {
    group_integer(&value.to_string(), locale.group_separator())
}
