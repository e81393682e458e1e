//! 과거 데이터 조회 기간.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 과거 데이터 조회 기간 (외부 서비스의 `days` 파라미터).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum HistoryPeriod {
    /// 1일
    Day1,
    /// 7일
    Days7,
    /// 30일
    #[default]
    Days30,
    /// 90일
    Days90,
    /// 1년
    Year1,
    /// 전체 기간
    Max,
}

impl HistoryPeriod {
    /// 쿼리 파라미터 값.
    pub fn as_query_value(self) -> &'static str {
        match self {
            HistoryPeriod::Day1 => "1",
            HistoryPeriod::Days7 => "7",
            HistoryPeriod::Days30 => "30",
            HistoryPeriod::Days90 => "90",
            HistoryPeriod::Year1 => "365",
            HistoryPeriod::Max => "max",
        }
    }

    /// 일 단위 기간 (`Max`는 `None`).
    pub fn days(self) -> Option<u32> {
        match self {
            HistoryPeriod::Day1 => Some(1),
            HistoryPeriod::Days7 => Some(7),
            HistoryPeriod::Days30 => Some(30),
            HistoryPeriod::Days90 => Some(90),
            HistoryPeriod::Year1 => Some(365),
            HistoryPeriod::Max => None,
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for HistoryPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(HistoryPeriod::Day1),
            "7" => Ok(HistoryPeriod::Days7),
            "30" => Ok(HistoryPeriod::Days30),
            "90" => Ok(HistoryPeriod::Days90),
            "365" => Ok(HistoryPeriod::Year1),
            "max" => Ok(HistoryPeriod::Max),
            _ => Err(format!(
                "Invalid period: {}. Supported: 1, 7, 30, 90, 365, max",
                s
            )),
        }
    }
}

impl TryFrom<String> for HistoryPeriod {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HistoryPeriod> for String {
    fn from(period: HistoryPeriod) -> Self {
        period.as_query_value().to_string()
    }
}
