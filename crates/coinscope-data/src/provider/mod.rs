//! 시장 데이터 Provider 모듈.
//!
//! ## 시장 데이터 API
//! - `MarketApiClient`: 분석 서비스 HTTP 클라이언트
//! - 스크리너, 과거 차트, 기술적 분석, 시장 목록
//! - 글로벌 개요, 트렌딩, 공포·탐욕 지수

pub mod market_api;

pub use market_api::MarketApiClient;

use crate::error::Result;
use crate::payload::{HistoricalChart, TechnicalAnalysis};
use async_trait::async_trait;
use coinscope_core::{
    FearGreed, GlobalOverview, HistoryPeriod, Locale, MarketCoin, ScreenedCoin, ScreenerFilter,
    TrendingCoin,
};

/// 시장 데이터 소스 trait.
///
/// 렌더링 계층은 이 trait을 통해서만 데이터를 가져오므로
/// 테스트에서 고정 응답 구현으로 바꿔 끼울 수 있습니다.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    /// 소스 이름.
    fn name(&self) -> &str;

    /// 필터에 맞는 코인 목록.
    async fn screener(&self, filter: &ScreenerFilter) -> Result<Vec<ScreenedCoin>>;

    /// 과거 가격 차트.
    async fn history(
        &self,
        coin_id: &str,
        period: HistoryPeriod,
        currency: &str,
        locale: Locale,
    ) -> Result<HistoricalChart>;

    /// 기술적 분석.
    async fn technical_analysis(&self, coin_id: &str, days: u32) -> Result<TechnicalAnalysis>;

    /// 시가총액 순 시장 목록.
    async fn markets(&self, per_page: u32) -> Result<Vec<MarketCoin>>;

    /// 글로벌 시장 개요. 응답에 `data`가 없으면 `None`.
    async fn global_overview(&self) -> Result<Option<GlobalOverview>>;

    /// 트렌딩 코인 목록.
    async fn trending(&self) -> Result<Vec<TrendingCoin>>;

    /// 최신 공포·탐욕 지수. 응답에 `data[0]`이 없으면 `None`.
    async fn fear_greed(&self) -> Result<Option<FearGreed>>;
}
