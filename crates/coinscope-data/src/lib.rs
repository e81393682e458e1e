//! 시장 데이터 수집 및 응답 해석.
//!
//! 이 crate는 다음을 제공합니다:
//! - 분석 서비스 HTTP 클라이언트 (`MarketApiClient`)
//! - 비표준 JSON 숫자 토큰 정리
//! - 과거 차트/기술적 분석 응답을 코어 타입으로 해석

pub mod error;
pub mod payload;
pub mod provider;

pub use error::{DataError, Result};
pub use payload::{
    parse_body, sanitize_json_numbers, HistoricalChart, HistoricalRow, IndicatorPanel,
    PriceLevel, PriceLevels, RsiCard, TechnicalAnalysis, TechnicalSummary, TrendAnalysis,
    TrendCard,
};
pub use provider::{MarketApiClient, MarketDataSource};
