//! 시장 데이터 API 클라이언트.
//!
//! 분석 서비스의 엔드포인트를 호출하고 응답을 코어 타입으로 해석합니다.
//! 재시도는 하지 않습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use coinscope_data::provider::MarketApiClient;
//!
//! let client = MarketApiClient::from_config(&config.api)?;
//! let coins = client.screener(&ScreenerFilter::default()).await?;
//! ```

use super::MarketDataSource;
use crate::error::{DataError, Result};
use crate::payload::{parse_body, HistoricalChart, TechnicalAnalysis};
use async_trait::async_trait;
use coinscope_core::{
    ApiConfig, FearGreed, GlobalOverview, HistoryPeriod, Locale, MarketCoin, MarketOverview,
    ScreenedCoin, ScreenerFilter, ScreenerQueryBuilder, TrendingCoin,
};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

const NO_QUERY: &[(&str, &str)] = &[];

/// 시장 데이터 API 클라이언트.
#[derive(Debug, Clone)]
pub struct MarketApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl MarketApiClient {
    /// 새 클라이언트를 생성합니다.
    ///
    /// # Arguments
    /// * `base_url` - 서비스 기본 URL (예: `http://localhost:5001`)
    /// * `timeout` - 요청 타임아웃
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(DataError::Config("base_url is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Config(format!("HTTP client build failed: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// 설정에서 클라이언트를 생성합니다.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// 기본 URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET 요청을 보내고 본문을 JSON으로 파싱합니다.
    async fn get_json<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(url = %url, "Market API 요청");

        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %url, status = status.as_u16(), "Market API 오류 응답");
            return Err(DataError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

/// 경로 세그먼트로 쓸 코인 ID를 검사합니다.
fn validate_coin_id(coin_id: &str) -> Result<&str> {
    let valid = !coin_id.is_empty()
        && coin_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
    if valid {
        Ok(coin_id)
    } else {
        Err(DataError::InvalidData(format!("invalid coin id: {:?}", coin_id)))
    }
}

#[async_trait]
impl MarketDataSource for MarketApiClient {
    fn name(&self) -> &str {
        "market-api"
    }

    async fn screener(&self, filter: &ScreenerFilter) -> Result<Vec<ScreenedCoin>> {
        let query = ScreenerQueryBuilder::build_query(filter);
        let raw = self.get_json("/api/technical/screener", query.pairs()).await?;
        let coins = ScreenerQueryBuilder::interpret_results(&raw);

        tracing::info!(count = coins.len(), "스크리너 조회 완료");
        Ok(coins)
    }

    async fn history(
        &self,
        coin_id: &str,
        period: HistoryPeriod,
        currency: &str,
        locale: Locale,
    ) -> Result<HistoricalChart> {
        let coin_id = validate_coin_id(coin_id)?;
        let path = format!("/api/crypto/coins/{}/history", coin_id);
        let query = [
            ("days", period.as_query_value()),
            ("vs_currency", currency),
        ];
        let raw = self.get_json(&path, &query).await?;
        let chart = HistoricalChart::from_value(&raw, locale);

        tracing::info!(coin = coin_id, rows = chart.len(), "과거 데이터 조회 완료");
        Ok(chart)
    }

    async fn technical_analysis(&self, coin_id: &str, days: u32) -> Result<TechnicalAnalysis> {
        let coin_id = validate_coin_id(coin_id)?;
        let path = format!("/api/technical/analyze/{}", coin_id);
        let raw = self.get_json(&path, &[("days", days)]).await?;
        let analysis = TechnicalAnalysis::from_value(&raw);

        tracing::info!(
            coin = coin_id,
            points = analysis.prices.len(),
            indicators = analysis.indicators.len(),
            "기술적 분석 조회 완료"
        );
        Ok(analysis)
    }

    async fn markets(&self, per_page: u32) -> Result<Vec<MarketCoin>> {
        let raw = self
            .get_json("/api/crypto/coins/markets", &[("per_page", per_page)])
            .await?;
        let coins = MarketOverview::interpret(&raw);

        tracing::info!(count = coins.len(), "시장 목록 조회 완료");
        Ok(coins)
    }

    async fn global_overview(&self) -> Result<Option<GlobalOverview>> {
        let raw = self.get_json("/api/crypto/global", NO_QUERY).await?;
        let overview = GlobalOverview::from_value(&raw);
        if overview.is_none() {
            tracing::warn!("글로벌 응답에 data 객체가 없음");
        }
        Ok(overview)
    }

    async fn trending(&self) -> Result<Vec<TrendingCoin>> {
        let raw = self.get_json("/api/crypto/trending", NO_QUERY).await?;
        let coins = TrendingCoin::interpret(&raw);

        tracing::info!(count = coins.len(), "트렌딩 조회 완료");
        Ok(coins)
    }

    async fn fear_greed(&self) -> Result<Option<FearGreed>> {
        let raw = self.get_json("/api/crypto/fear-greed", NO_QUERY).await?;
        Ok(FearGreed::from_value(&raw))
    }
}
