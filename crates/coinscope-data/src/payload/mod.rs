//! 외부 서비스 응답 해석.
//!
//! 응답 형태별로 코어 타입을 만듭니다:
//! - `historical` - 가격/거래량/시가총액 차트 행
//! - `technical` - 지표 시리즈, 추세 분석, 트레이딩 신호
//!
//! 스크리너와 시장 목록 응답은 코어의 `ScreenerQueryBuilder`,
//! `MarketOverview`가 직접 해석합니다.

pub mod historical;
pub mod sanitize;
pub mod technical;

pub use historical::{HistoricalChart, HistoricalRow};
pub use sanitize::sanitize_json_numbers;
pub use technical::{
    IndicatorPanel, PriceLevel, PriceLevels, RsiCard, TechnicalAnalysis, TechnicalSummary,
    TrendAnalysis, TrendCard,
};

use crate::error::Result;
use serde_json::Value;

/// 응답 본문을 정리한 뒤 JSON으로 파싱합니다.
pub fn parse_body(body: &str) -> Result<Value> {
    let sanitized = sanitize_json_numbers(body);
    Ok(serde_json::from_str(&sanitized)?)
}
