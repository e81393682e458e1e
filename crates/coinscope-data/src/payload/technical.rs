//! 기술적 분석 응답 해석.
//!
//! 중첩된 `indicators` 객체는 점 경로(`macd.histogram` 등)로 평탄화되어
//! [`IndicatorSeries`]가 됩니다. 모든 키는 선택 사항입니다.

use coinscope_core::json::{as_f64, f64_sequence, opt_str};
use coinscope_core::{
    classify_rsi, classify_trend, format_fixed, AlignedPoint, IndicatorSeries, RsiZone,
    SeriesAligner, Tone, TradingSignal, TrendLabel,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// 차트 패널.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorPanel {
    /// 20일 이동평균
    MovingAverage,
    /// RSI
    Rsi,
    /// 볼린저 밴드 중심선
    Bollinger,
    /// MACD 히스토그램
    Macd,
}

impl IndicatorPanel {
    /// 모든 패널 (표시 순서).
    pub const ALL: [IndicatorPanel; 4] = [
        IndicatorPanel::MovingAverage,
        IndicatorPanel::Rsi,
        IndicatorPanel::Bollinger,
        IndicatorPanel::Macd,
    ];

    /// 지표 경로
    pub fn path(self) -> &'static str {
        match self {
            Self::MovingAverage => "sma_20",
            Self::Rsi => "rsi",
            Self::Bollinger => "bollinger_bands.middle",
            Self::Macd => "macd.histogram",
        }
    }

    /// 패널 제목
    pub fn title(self) -> &'static str {
        match self {
            Self::MovingAverage => "SMA 20",
            Self::Rsi => "RSI",
            Self::Bollinger => "Bollinger Bands",
            Self::Macd => "MACD Histogram",
        }
    }
}

impl fmt::Display for IndicatorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 추세 분석 (원본 문자열).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// 전체 기간 추세
    pub overall_trend: Option<String>,
    /// 최근 14개 구간 추세
    pub short_term_trend: Option<String>,
    /// 최근 30개 구간 추세
    pub medium_term_trend: Option<String>,
}

impl TrendAnalysis {
    fn from_value(raw: Option<&Value>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self {
            overall_trend: opt_str(raw, "overall_trend").map(str::to_string),
            short_term_trend: opt_str(raw, "short_term_trend").map(str::to_string),
            medium_term_trend: opt_str(raw, "medium_term_trend").map(str::to_string),
        }
    }

    /// 전체 추세 라벨
    pub fn overall_label(&self) -> TrendLabel {
        classify_trend(self.overall_trend.as_deref())
    }
}

/// 지지/저항 가격 수준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// 가격 시퀀스에서의 위치
    pub index: usize,
    /// 가격
    pub price: f64,
}

/// 지지선과 저항선.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceLevels {
    /// 저항선
    pub resistance: Vec<PriceLevel>,
    /// 지지선
    pub support: Vec<PriceLevel>,
}

impl PriceLevels {
    fn from_value(raw: Option<&Value>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        Self {
            resistance: parse_levels(raw.get("resistance")),
            support: parse_levels(raw.get("support")),
        }
    }
}

/// 전체 추세 카드.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendCard {
    /// 라벨
    pub label: TrendLabel,
    /// 색상 범주
    pub tone: Tone,
    /// 표시 텍스트 (없으면 `N/A`)
    pub text: String,
}

/// 현재 RSI 카드.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsiCard {
    /// 마지막 위치의 RSI
    pub value: Option<f64>,
    /// 소수 2자리 텍스트 (없으면 `N/A`)
    pub text: String,
    /// 구간 (값이 없으면 중립)
    pub zone: RsiZone,
}

/// 요약 카드 세 개.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSummary {
    /// 전체 추세
    pub trend: TrendCard,
    /// 현재 RSI
    pub rsi: RsiCard,
    /// 활성 신호 수
    pub signal_count: usize,
}

/// 기술적 분석 응답.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechnicalAnalysis {
    /// 코인 ID
    pub coin_id: Option<String>,
    /// 분석 기간 설명 (예: "90 days")
    pub period: Option<String>,
    /// 타임스탬프 (밀리초, 숫자가 아닌 위치는 `None`으로 자리를 유지)
    pub timestamps: Vec<Option<i64>>,
    /// 가격 (숫자가 아닌 위치는 NaN으로 자리를 유지)
    pub prices: Vec<f64>,
    /// 거래량
    pub volumes: Vec<Option<f64>>,
    /// 평탄화된 지표
    pub indicators: IndicatorSeries,
    /// 추세 분석
    pub trend_analysis: TrendAnalysis,
    /// 트레이딩 신호
    pub trading_signals: Vec<TradingSignal>,
    /// 지지/저항
    pub levels: PriceLevels,
}

impl TechnicalAnalysis {
    /// 응답 JSON에서 분석 결과를 만듭니다.
    pub fn from_value(raw: &Value) -> Self {
        let prices = raw
            .get("prices")
            .and_then(f64_sequence)
            .map(|values| values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
            .unwrap_or_default();

        let timestamps = raw
            .get("timestamps")
            .and_then(f64_sequence)
            .map(|values| {
                values
                    .into_iter()
                    .map(|ts| ts.map(|ts| ts as i64))
                    .collect()
            })
            .unwrap_or_default();

        let mut indicators = IndicatorSeries::new();
        if let Some(raw_indicators) = raw.get("indicators") {
            flatten_indicators(raw_indicators, "", &mut indicators);
        }

        Self {
            coin_id: opt_str(raw, "coin_id").map(str::to_string),
            period: opt_str(raw, "period").map(str::to_string),
            timestamps,
            prices,
            volumes: raw.get("volumes").and_then(f64_sequence).unwrap_or_default(),
            indicators,
            trend_analysis: TrendAnalysis::from_value(raw.get("trend_analysis")),
            trading_signals: parse_signals(raw.get("trading_signals")),
            levels: PriceLevels::from_value(raw.get("levels")),
        }
    }

    /// 패널 하나를 가격과 정렬합니다.
    pub fn panel(&self, panel: IndicatorPanel) -> Vec<AlignedPoint> {
        SeriesAligner::align_path(&self.prices, &self.indicators, panel.path())
    }

    /// 마지막 위치의 RSI.
    pub fn current_rsi(&self) -> Option<f64> {
        self.indicators.get("rsi").and_then(SeriesAligner::latest)
    }

    /// 요약 카드.
    pub fn summary(&self) -> TechnicalSummary {
        let raw_trend = self
            .trend_analysis
            .overall_trend
            .as_deref()
            .filter(|s| !s.is_empty());
        let label = classify_trend(raw_trend);

        let rsi = self.current_rsi();
        let rsi_card = RsiCard {
            value: rsi,
            text: rsi
                .map(|v| format_fixed(v, 2))
                .unwrap_or_else(|| "N/A".to_string()),
            zone: rsi.map(|v| classify_rsi(v).zone).unwrap_or_default(),
        };

        TechnicalSummary {
            trend: TrendCard {
                label,
                tone: label.tone(),
                text: raw_trend.unwrap_or("N/A").to_string(),
            },
            rsi: rsi_card,
            signal_count: self.trading_signals.len(),
        }
    }
}

/// 중첩 지표 객체를 점 경로로 평탄화합니다. 배열만 leaf가 됩니다.
fn flatten_indicators(value: &Value, prefix: &str, out: &mut IndicatorSeries) {
    match value {
        Value::Array(_) => {
            if let Some(sequence) = f64_sequence(value) {
                out.insert(prefix, sequence);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_indicators(child, &path, out);
            }
        }
        _ => {}
    }
}

/// 모든 항목을 신호로 만듭니다. 항목 수는 원본 배열 길이와 같습니다.
fn parse_signals(raw: Option<&Value>) -> Vec<TradingSignal> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };

    let malformed = items.iter().filter(|item| !item.is_object()).count();
    if malformed > 0 {
        tracing::warn!(malformed, "non-object trading signals decoded with defaults");
    }

    items.iter().map(TradingSignal::from_value).collect()
}

fn parse_levels(raw: Option<&Value>) -> Vec<PriceLevel> {
    raw.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let index = item.get("index").and_then(Value::as_u64)?;
                    let price = item.get("price").and_then(as_f64)?;
                    Some(PriceLevel {
                        index: index as usize,
                        price,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}
