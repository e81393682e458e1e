//! 스크리너 필터 → 쿼리 변환 및 결과 해석.
//!
//! 필터 상태는 불변 스냅샷으로 전달되며, 쿼리 키 순서는
//! `min_volume, min_rsi, max_rsi, trend`로 고정됩니다.

use super::classify::{classify_price_change, classify_rsi, classify_trend, RsiClass, Tone, TrendLabel};
use crate::error::{CoreError, CoreResult};
use crate::json::{field_f64, field_str, opt_str};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// 추세 필터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum TrendFilter {
    /// 필터 없음
    #[default]
    All,
    /// 특정 추세만
    Trend(TrendLabel),
}

impl TrendFilter {
    /// 쿼리 파라미터 값.
    ///
    /// 중립 추세는 외부 서비스의 명칭인 `sideways`로 전송합니다.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Trend(TrendLabel::Bullish) => "bullish",
            Self::Trend(TrendLabel::Bearish) => "bearish",
            Self::Trend(TrendLabel::Neutral) => "sideways",
        }
    }
}

impl fmt::Display for TrendFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for TrendFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "bullish" => Ok(Self::Trend(TrendLabel::Bullish)),
            "bearish" => Ok(Self::Trend(TrendLabel::Bearish)),
            "sideways" | "neutral" => Ok(Self::Trend(TrendLabel::Neutral)),
            _ => Err(format!(
                "Invalid trend: {}. Supported: all, bullish, bearish, sideways",
                s
            )),
        }
    }
}

impl TryFrom<String> for TrendFilter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TrendFilter> for String {
    fn from(filter: TrendFilter) -> Self {
        filter.as_query_value().to_string()
    }
}

/// 스크리너 필터 스냅샷.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenerFilter {
    /// 최소 거래량 (≥ 0)
    pub min_volume: f64,
    /// 최소 RSI (0 ~ 100)
    pub min_rsi: f64,
    /// 최대 RSI (0 ~ 100)
    pub max_rsi: f64,
    /// 추세 필터
    pub trend: TrendFilter,
}

impl Default for ScreenerFilter {
    fn default() -> Self {
        Self {
            min_volume: 1_000_000.0,
            min_rsi: 30.0,
            max_rsi: 70.0,
            trend: TrendFilter::All,
        }
    }
}

impl ScreenerFilter {
    /// 범위 위반을 검사합니다.
    ///
    /// `min_rsi > max_rsi`는 검사하지 않습니다. 뒤집힌 범위의 해석은
    /// 외부 서비스의 몫입니다 ([`Self::has_inverted_rsi_range`] 참고).
    pub fn validate(&self) -> CoreResult<()> {
        if !self.min_volume.is_finite() || self.min_volume < 0.0 {
            return Err(CoreError::InvalidFilter(format!(
                "min_volume must be a non-negative number, got {}",
                self.min_volume
            )));
        }
        for (name, value) in [("min_rsi", self.min_rsi), ("max_rsi", self.max_rsi)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CoreError::InvalidFilter(format!(
                    "{} must be within [0, 100], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// 최소 RSI가 최대 RSI보다 큰지 확인합니다.
    pub fn has_inverted_rsi_range(&self) -> bool {
        self.min_rsi > self.max_rsi
    }
}

/// 정렬된 쿼리 키/값 쌍.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScreenerQuery {
    pairs: Vec<(&'static str, String)>,
}

impl ScreenerQuery {
    /// 키/값 쌍 (고정 순서).
    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }

    /// 키의 값.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// 키 목록 (순서 유지).
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }
}

/// 스크리너 결과의 코인.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenedCoin {
    /// 코인 ID
    pub id: String,
    /// 이름
    pub name: String,
    /// 심볼
    pub symbol: String,
    /// 현재 가격
    pub current_price: f64,
    /// 24시간 변화율(%)
    pub price_change_24h: f64,
    /// 거래량
    pub volume: f64,
    /// RSI
    pub rsi: f64,
    /// 원본 추세 문자열
    pub trend: String,
}

impl ScreenedCoin {
    /// JSON 객체에서 코인을 추출합니다. 객체가 아니면 `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        Some(Self {
            id: field_str(value, "id"),
            name: field_str(value, "name"),
            symbol: field_str(value, "symbol"),
            current_price: field_f64(value, "current_price"),
            price_change_24h: field_f64(value, "price_change_24h"),
            volume: field_f64(value, "volume"),
            rsi: field_f64(value, "rsi"),
            trend: opt_str(value, "trend").unwrap_or_default().to_string(),
        })
    }

    /// 추세 라벨
    pub fn trend_label(&self) -> TrendLabel {
        classify_trend(Some(&self.trend))
    }

    /// RSI 분류
    pub fn rsi_class(&self) -> RsiClass {
        classify_rsi(self.rsi)
    }

    /// 24시간 변화 색상 범주
    pub fn price_change_tone(&self) -> Tone {
        classify_price_change(self.price_change_24h)
    }
}

/// 스크리너 쿼리 빌더.
pub struct ScreenerQueryBuilder;

impl ScreenerQueryBuilder {
    /// 필터를 쿼리로 변환합니다.
    ///
    /// 숫자는 반올림 없이 10진 문자열로 직렬화합니다. 뒤집힌 RSI 범위는
    /// 경고만 남기고 그대로 전달합니다.
    pub fn build_query(filter: &ScreenerFilter) -> ScreenerQuery {
        if filter.has_inverted_rsi_range() {
            tracing::warn!(
                min_rsi = filter.min_rsi,
                max_rsi = filter.max_rsi,
                "screener filter has inverted RSI range"
            );
        }

        ScreenerQuery {
            pairs: vec![
                ("min_volume", number_string(filter.min_volume)),
                ("min_rsi", number_string(filter.min_rsi)),
                ("max_rsi", number_string(filter.max_rsi)),
                ("trend", filter.trend.as_query_value().to_string()),
            ],
        }
    }

    /// 응답 JSON을 코인 목록으로 해석합니다.
    ///
    /// `coins` 키가 없으면 빈 목록입니다. 객체가 아닌 항목은 건너뜁니다.
    pub fn interpret_results(raw: &Value) -> Vec<ScreenedCoin> {
        let Some(coins) = raw.get("coins") else {
            return Vec::new();
        };
        let Some(items) = coins.as_array() else {
            tracing::warn!("screener payload 'coins' is not an array");
            return Vec::new();
        };

        let parsed: Vec<ScreenedCoin> = items.iter().filter_map(ScreenedCoin::from_value).collect();
        if parsed.len() < items.len() {
            tracing::warn!(
                skipped = items.len() - parsed.len(),
                "non-object screener entries skipped"
            );
        }
        parsed
    }
}

/// 숫자의 10진 문자열 (반올림 없음).
///
/// JavaScript `String(number)`와 같이 크기가 `1e21` 이상이거나 `1e-6`
/// 미만이면 지수 표기(`1e+21`, `1.5e-7`)를 사용합니다.
fn number_string(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }
    format!("{}", value)
}
