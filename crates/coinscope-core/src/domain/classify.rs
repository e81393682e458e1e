//! 도메인 값의 의미 범주 분류.
//!
//! 추세 문자열, RSI 값, 신호 유형, 가격 변화를 라벨/색상에 쓰이는
//! 소수의 고정 범주로 매핑합니다. 모든 함수는 순수 함수이며,
//! 알 수 없는 입력은 에러 대신 중립 범주로 처리합니다.

use super::signal::SignalType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RSI 과매수 임계값 (초과 시 과매수).
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// RSI 과매도 임계값 (미만 시 과매도).
pub const RSI_OVERSOLD: f64 = 30.0;

/// 라벨의 의미 색상 범주.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// 긍정 (녹색)
    Positive,
    /// 부정 (빨간색)
    Negative,
    /// 주의 (노란색)
    Caution,
    /// 강조 없음
    #[default]
    Plain,
}

impl Tone {
    /// 텍스트 CSS 클래스
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Positive => "text-green-400",
            Self::Negative => "text-red-400",
            Self::Caution => "text-yellow-400",
            Self::Plain => "text-white",
        }
    }

    /// 배지 CSS 클래스
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Positive => "bg-green-500/20 text-green-400",
            Self::Negative => "bg-red-500/20 text-red-400",
            Self::Caution => "bg-yellow-500/20 text-yellow-400",
            Self::Plain => "bg-slate-500/20 text-slate-300",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Caution => "caution",
            Self::Plain => "plain",
        };
        write!(f, "{}", s)
    }
}

/// 추세 라벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrendLabel {
    /// 상승 추세
    Bullish,
    /// 하락 추세
    Bearish,
    /// 중립 (알 수 없는 값 포함)
    #[default]
    Neutral,
}

impl TrendLabel {
    /// 소문자 이름
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "bullish",
            Self::Bearish => "bearish",
            Self::Neutral => "neutral",
        }
    }

    /// 색상 범주
    pub fn tone(self) -> Tone {
        match self {
            Self::Bullish => Tone::Positive,
            Self::Bearish => Tone::Negative,
            Self::Neutral => Tone::Caution,
        }
    }
}

impl fmt::Display for TrendLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// RSI 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RsiZone {
    /// 과매수 (> 70)
    Overbought,
    /// 과매도 (< 30)
    Oversold,
    /// 중립 (30 ~ 70, 경계 포함)
    #[default]
    Neutral,
}

impl RsiZone {
    /// 텍스트 CSS 클래스
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Overbought => "text-red-400",
            Self::Oversold => "text-green-400",
            Self::Neutral => "text-white",
        }
    }

    /// 설명 문자열
    pub fn description(self) -> &'static str {
        match self {
            Self::Overbought => "과매수",
            Self::Oversold => "과매도",
            Self::Neutral => "중립",
        }
    }
}

impl fmt::Display for RsiZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Overbought => "overbought",
            Self::Oversold => "oversold",
            Self::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

/// RSI 분류 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RsiClass {
    /// 구간
    pub zone: RsiZone,
    /// 텍스트 CSS 클래스
    pub color_class: &'static str,
}

/// 추세 문자열을 분류합니다.
///
/// 정확히 `"bullish"`/`"bearish"`인 경우만 인식하며, 대소문자가 다르거나
/// 값이 없으면 중립입니다.
///
/// # Examples
///
/// ```
/// use coinscope_core::{classify_trend, TrendLabel};
///
/// assert_eq!(classify_trend(Some("bullish")), TrendLabel::Bullish);
/// assert_eq!(classify_trend(Some("BULLISH")), TrendLabel::Neutral);
/// assert_eq!(classify_trend(None), TrendLabel::Neutral);
/// ```
pub fn classify_trend(raw: Option<&str>) -> TrendLabel {
    match raw {
        Some("bullish") => TrendLabel::Bullish,
        Some("bearish") => TrendLabel::Bearish,
        _ => TrendLabel::Neutral,
    }
}

/// RSI 값을 분류합니다.
///
/// 경계값 30과 70은 중립입니다. NaN은 어떤 비교도 만족하지 않으므로 중립입니다.
pub fn classify_rsi(value: f64) -> RsiClass {
    let zone = if value > RSI_OVERBOUGHT {
        RsiZone::Overbought
    } else if value < RSI_OVERSOLD {
        RsiZone::Oversold
    } else {
        RsiZone::Neutral
    };

    RsiClass {
        zone,
        color_class: zone.color_class(),
    }
}

/// 신호 유형의 색상 범주.
///
/// 매수/매도 외의 값은 외부 서비스의 계약 위반이며, 경고를 남기고
/// 강조 없는 스타일로 표시합니다.
pub fn classify_signal(signal_type: &SignalType) -> Tone {
    match signal_type {
        SignalType::Buy => Tone::Positive,
        SignalType::Sell => Tone::Negative,
        SignalType::Other(raw) => {
            tracing::warn!(signal_type = %raw, "unrecognized signal type");
            Tone::Plain
        }
    }
}

/// 가격 변화의 색상 범주 (0 이상은 긍정).
pub fn classify_price_change(value: f64) -> Tone {
    if value >= 0.0 {
        Tone::Positive
    } else {
        Tone::Negative
    }
}

/// 추세 표시 텍스트 (값이 없으면 `N/A`).
pub fn trend_display_text(raw: Option<&str>) -> &str {
    raw.unwrap_or("N/A")
}
