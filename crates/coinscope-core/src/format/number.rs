//! 거래량, 퍼센트, 고정 소수 포맷.

use crate::types::to_fixed;
use serde::{Deserialize, Serialize};

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// 거래량 포맷 스타일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolumeStyle {
    /// 스크리너: 1e6 미만은 모두 K 단위
    #[default]
    Screener,
    /// 과거 데이터: 1e3 미만은 달러 그대로
    Historical,
}

/// 스크리너 스타일로 거래량을 포맷합니다.
///
/// # Examples
///
/// ```
/// use coinscope_core::format_volume;
///
/// assert_eq!(format_volume(1e9), "$1.00B");
/// assert_eq!(format_volume(999_999_999.0), "$1000.00M");
/// assert_eq!(format_volume(500.0), "$0.50K");
/// ```
pub fn format_volume(value: f64) -> String {
    format_volume_with(value, VolumeStyle::Screener)
}

/// 지정한 스타일로 거래량을 포맷합니다.
///
/// 임계값은 모두 `>=` 비교이며, 단위로 나눈 뒤 소수 2자리로 반올림합니다.
pub fn format_volume_with(value: f64, style: VolumeStyle) -> String {
    if value >= BILLION {
        return format!("${}B", to_fixed(value / BILLION, 2));
    }
    if value >= MILLION {
        return format!("${}M", to_fixed(value / MILLION, 2));
    }

    match style {
        VolumeStyle::Screener => format!("${}K", to_fixed(value / THOUSAND, 2)),
        VolumeStyle::Historical if value >= THOUSAND => {
            format!("${}K", to_fixed(value / THOUSAND, 2))
        }
        VolumeStyle::Historical => format!("${}", to_fixed(value, 2)),
    }
}

/// 부호가 붙은 퍼센트 (`+1.23%`, `-0.50%`, 값이 없으면 `N/A`).
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v >= 0.0 => format!("+{}%", to_fixed(v, 2)),
        Some(v) => format!("{}%", to_fixed(v, 2)),
    }
}

/// 시가총액을 십억 단위로 포맷합니다 (`$X.XXB`).
pub fn format_market_cap_billions(value: f64) -> String {
    format!("${}B", to_fixed(value / BILLION, 2))
}

/// `toFixed`와 동일한 고정 소수 포맷.
pub fn format_fixed(value: f64, digits: u32) -> String {
    to_fixed(value, digits)
}
