//! 분석 서비스가 반환하는 트레이딩 신호.
//!
//! 이 모듈은 신호 관련 타입을 정의합니다:
//! - `SignalType` - 신호 유형 (매수, 매도, 그 외 원본 값)
//! - `TradingSignal` - 신호 엔티티

use super::classify::{classify_signal, Tone};
use crate::json::{field_text, opt_str};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 신호 유형.
///
/// 알 수 없는 값은 버리지 않고 원본 그대로 `Other`에 보존합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalType {
    /// 매수
    Buy,
    /// 매도
    Sell,
    /// 인식하지 못한 원본 값
    Other(String),
}

impl SignalType {
    /// 원본 문자열에서 신호 유형을 생성합니다 (정확히 일치해야 인식).
    pub fn parse(raw: &str) -> Self {
        match raw {
            "buy" => Self::Buy,
            "sell" => Self::Sell,
            other => Self::Other(other.to_string()),
        }
    }

    /// 원본 문자열
    pub fn as_str(&self) -> &str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Other(raw) => raw,
        }
    }

    /// 배지 라벨 (대문자)
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// 인식된 유형인지 확인합니다.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for SignalType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for SignalType {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<SignalType> for String {
    fn from(signal_type: SignalType) -> Self {
        signal_type.as_str().to_string()
    }
}

impl std::fmt::Display for SignalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 분석 서비스가 생성한 트레이딩 신호.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    /// 신호 유형
    #[serde(rename = "type", default)]
    pub signal_type: SignalType,
    /// 신호를 만든 지표 이름
    #[serde(default)]
    pub indicator: String,
    /// 설명 메시지
    #[serde(default)]
    pub message: String,
    /// 신호 강도 (원본 문자열, 예: "strong")
    #[serde(default)]
    pub strength: String,
}

impl TradingSignal {
    /// 새 신호를 생성합니다.
    pub fn new(
        signal_type: SignalType,
        indicator: impl Into<String>,
        message: impl Into<String>,
        strength: impl Into<String>,
    ) -> Self {
        Self {
            signal_type,
            indicator: indicator.into(),
            message: message.into(),
            strength: strength.into(),
        }
    }

    /// JSON 항목에서 신호를 만듭니다. 실패하지 않습니다.
    ///
    /// `type`이 없거나 문자열이 아니면 `Other("")`입니다. 나머지 필드는
    /// 숫자면 그 표기를, `null`이나 누락이면 빈 문자열을 사용합니다.
    pub fn from_value(value: &Value) -> Self {
        Self {
            signal_type: SignalType::parse(opt_str(value, "type").unwrap_or_default()),
            indicator: field_text(value, "indicator"),
            message: field_text(value, "message"),
            strength: field_text(value, "strength"),
        }
    }

    /// 배지 색상 범주
    pub fn tone(&self) -> Tone {
        classify_signal(&self.signal_type)
    }

    /// 배지 라벨
    pub fn label(&self) -> String {
        self.signal_type.label()
    }
}
