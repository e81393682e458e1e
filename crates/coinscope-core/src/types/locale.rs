//! 숫자/날짜 표시 로케일.
//!
//! 대시보드는 `pt-BR`을 기본으로 사용하며, `en-US`를 보조로 지원합니다.
//! 구분자와 통화 기호는 ICU(`Intl.NumberFormat`)의 출력과 일치합니다.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 표시 로케일.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// 브라질 포르투갈어 (`US$ 1.234,56`)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// 미국 영어 (`$1,234.56`)
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 태그를 반환합니다.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// 천 단위 구분자.
    pub fn group_separator(self) -> char {
        match self {
            Locale::PtBr => '.',
            Locale::EnUs => ',',
        }
    }

    /// 소수점 구분자.
    pub fn decimal_separator(self) -> char {
        match self {
            Locale::PtBr => ',',
            Locale::EnUs => '.',
        }
    }

    /// 통화 코드(대소문자 무관)의 로케일별 기호.
    ///
    /// 알려지지 않은 코드는 `None`이며, 이 경우 ISO 코드를 그대로 표시합니다.
    pub fn currency_symbol(self, code: &str) -> Option<&'static str> {
        let code = code.to_ascii_uppercase();
        let symbol = match (self, code.as_str()) {
            (Locale::PtBr, "USD") => "US$",
            (Locale::EnUs, "USD") => "$",
            (_, "BRL") => "R$",
            (_, "EUR") => "€",
            (_, "GBP") => "£",
            (Locale::PtBr, "JPY") => "JP¥",
            (Locale::EnUs, "JPY") => "¥",
            _ => return None,
        };
        Some(symbol)
    }

    /// 밀리초 타임스탬프를 로케일의 날짜 문자열로 변환합니다 (UTC 기준).
    ///
    /// 표현할 수 없는 타임스탬프는 `Invalid Date`입니다.
    pub fn date_label(self, timestamp_ms: i64) -> String {
        let Some(datetime) = DateTime::from_timestamp_millis(timestamp_ms) else {
            return "Invalid Date".to_string();
        };

        match self {
            Locale::PtBr => datetime.format("%d/%m/%Y").to_string(),
            Locale::EnUs => datetime.format("%-m/%-d/%Y").to_string(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}
