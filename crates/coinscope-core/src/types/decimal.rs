//! 표시용 반올림을 위한 Decimal 유틸리티.
//!
//! 반올림 시작점이 두 가지입니다:
//! - [`to_fixed`]: 이진 값 그대로 (`toFixed`와 동일, `1.005`는 `1.00499…`이므로 `1.00`)
//! - [`split_fraction`]: 최단 왕복 10진 표현 (`Intl.NumberFormat`과 동일,
//!   `1.2345665`는 `1.234567`)

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Decimal 연산을 위한 확장 트레이트.
pub trait DecimalExt {
    /// 지정된 소수점 자릿수로 반올림합니다 (0.5는 0에서 먼 쪽으로).
    fn round_half_away(&self, dp: u32) -> Decimal;

    /// 정확히 `dp` 자리의 소수 문자열로 변환합니다.
    fn to_fixed_string(&self, dp: u32) -> String;
}

impl DecimalExt for Decimal {
    fn round_half_away(&self, dp: u32) -> Decimal {
        self.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
    }

    fn to_fixed_string(&self, dp: u32) -> String {
        let mut rounded = self.round_half_away(dp);
        rounded.rescale(dp);
        rounded.to_string()
    }
}

/// `f64`의 이진 값을 최대한 보존한 `Decimal`을 반환합니다.
///
/// NaN, 무한대, `Decimal` 범위를 벗어난 값은 `None`입니다.
pub fn exact_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_f64_retain(value)
}

/// `f64`의 최단 왕복 10진 표현을 `Decimal`로 반환합니다.
///
/// `Display`는 지수 표기 없이 최단 자릿수를 출력합니다. `Decimal`의
/// 자릿수를 넘는 값은 이진 값 경로로 대신합니다.
pub fn shortest_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| exact_decimal(value))
}

/// JavaScript `Number.prototype.toFixed`와 동일한 문자열을 생성합니다.
///
/// 음수는 크기를 반올림한 뒤 `-`를 붙이므로 `-0.001`은 `-0.00`이 됩니다.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let body = match exact_decimal(magnitude) {
        Some(decimal) => decimal.to_fixed_string(digits),
        None => format!("{:.*}", digits as usize, magnitude),
    };

    format!("{}{}", sign, body)
}

/// 크기를 `min..=max` 소수 자릿수로 반올림해 정수부와 소수부로 나눕니다.
///
/// 반올림은 최단 10진 표현에서 시작합니다. 소수부는 `min` 자리를 넘는
/// 끝자리 0이 제거됩니다. 부호는 다루지 않으므로 호출자가 절댓값을
/// 넘겨야 합니다.
pub fn split_fraction(magnitude: f64, min_digits: u32, max_digits: u32) -> (String, String) {
    let text = match shortest_decimal(magnitude) {
        Some(decimal) => {
            let mut rounded = decimal.round_half_away(max_digits).normalize();
            if rounded.scale() < min_digits {
                rounded.rescale(min_digits);
            }
            rounded.to_string()
        }
        None => {
            let fixed = format!("{:.*}", max_digits as usize, magnitude);
            trim_fraction(&fixed, min_digits as usize)
        }
    };

    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    }
}

fn trim_fraction(fixed: &str, min_digits: usize) -> String {
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => {
            let mut frac = frac_part.trim_end_matches('0').to_string();
            while frac.len() < min_digits {
                frac.push('0');
            }
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        }
        None => fixed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away() {
        assert_eq!(dec!(0.125).round_half_away(2), dec!(0.13));
        assert_eq!(dec!(-0.125).round_half_away(2), dec!(-0.13));
        assert_eq!(dec!(2.5).round_half_away(0), dec!(3));
    }

    #[test]
    fn test_to_fixed_string_pads() {
        assert_eq!(dec!(1).to_fixed_string(2), "1.00");
        assert_eq!(dec!(1.5).to_fixed_string(2), "1.50");
    }

    #[test]
    fn test_to_fixed_matches_binary_value() {
        // 1.005는 이진 표현상 1.00499...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(999.999999, 2), "1000.00");
    }

    #[test]
    fn test_to_fixed_sign_and_special_values() {
        assert_eq!(to_fixed(-1.234, 2), "-1.23");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 1), "-Infinity");
    }

    #[test]
    fn test_split_fraction_trims_to_minimum() {
        assert_eq!(
            split_fraction(1234.5, 2, 6),
            ("1234".to_string(), "50".to_string())
        );
        assert_eq!(
            split_fraction(0.000123456789, 2, 6),
            ("0".to_string(), "000123".to_string())
        );
        assert_eq!(split_fraction(42.0, 2, 6), ("42".to_string(), "00".to_string()));
        assert_eq!(
            split_fraction(1.23456789, 2, 6),
            ("1".to_string(), "234568".to_string())
        );
    }

    #[test]
    fn test_split_fraction_starts_from_shortest_repr() {
        // 이진 값은 중간값 바로 아래지만 최단 표현은 정확한 중간값
        assert_eq!(
            split_fraction(1.2345665, 2, 6),
            ("1".to_string(), "234567".to_string())
        );
        assert_eq!(
            split_fraction(0.1234565, 2, 6),
            ("0".to_string(), "123457".to_string())
        );
        assert_eq!(
            split_fraction(5e-7, 2, 6),
            ("0".to_string(), "000001".to_string())
        );
    }

    #[test]
    fn test_shortest_decimal() {
        assert_eq!(shortest_decimal(0.1), Some(dec!(0.1)));
        assert_eq!(shortest_decimal(5e-7), Some(dec!(0.0000005)));
        assert!(shortest_decimal(f64::NAN).is_none());
    }

    #[test]
    fn test_exact_decimal_rejects_non_finite() {
        assert!(exact_decimal(f64::NAN).is_none());
        assert!(exact_decimal(f64::INFINITY).is_none());
        assert!(exact_decimal(1.5).is_some());
    }
}
