//! 명령 실행 통합 테스트
//!
//! 고정 응답을 돌려주는 데이터 소스로 `run_*` 흐름을 확인

use async_trait::async_trait;
use coinscope_cli::commands::{
    analyze::run_analyze, history::run_history, markets::run_markets, overview::run_overview,
    screener::run_screener, OutputFormat,
};
use coinscope_core::{
    FearGreed, GlobalOverview, HistoryPeriod, Locale, MarketCoin, ScreenedCoin, ScreenerFilter,
    TrendingCoin,
};
use coinscope_data::{DataError, HistoricalChart, MarketDataSource, Result, TechnicalAnalysis};
use serde_json::json;
use std::sync::Mutex;

/// 고정 응답 데이터 소스. 마지막 요청 인자를 기록합니다.
#[derive(Default)]
struct FixtureSource {
    fail: bool,
    /// 개요 패널 중 실패시킬 요청 이름
    failing_panels: Vec<&'static str>,
    last_request: Mutex<Option<String>>,
}

impl FixtureSource {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn with_failing_panels(panels: &[&'static str]) -> Self {
        Self {
            failing_panels: panels.to_vec(),
            ..Self::default()
        }
    }

    fn record(&self, request: String) -> Result<()> {
        let panel_failed = self.failing_panels.contains(&request.as_str());
        *self.last_request.lock().unwrap() = Some(request);
        if self.fail || panel_failed {
            return Err(DataError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }

    fn last_request(&self) -> Option<String> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketDataSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn screener(&self, filter: &ScreenerFilter) -> Result<Vec<ScreenedCoin>> {
        self.record(format!("screener {}", filter.trend))?;
        Ok(vec![
            ScreenedCoin {
                id: "solana".into(),
                name: "Solana".into(),
                symbol: "sol".into(),
                current_price: 145.2,
                price_change_24h: 3.1,
                volume: 2.5e9,
                rsi: 74.0,
                trend: "bullish".into(),
            },
            ScreenedCoin::default(),
        ])
    }

    async fn history(
        &self,
        coin_id: &str,
        period: HistoryPeriod,
        currency: &str,
        locale: Locale,
    ) -> Result<HistoricalChart> {
        self.record(format!("history {} {} {}", coin_id, period, currency))?;
        Ok(HistoricalChart::from_value(
            &json!({
                "prices": [[1709640000000i64, 100.0], [1709726400000i64, 110.0]],
                "total_volumes": [[1709640000000i64, 5.0e6], [1709726400000i64, 6.0e6]]
            }),
            locale,
        ))
    }

    async fn technical_analysis(&self, coin_id: &str, days: u32) -> Result<TechnicalAnalysis> {
        self.record(format!("analyze {} {}", coin_id, days))?;
        Ok(TechnicalAnalysis::from_value(&json!({
            "coin_id": coin_id,
            "prices": [1.0, 2.0],
            "indicators": {"rsi": [null, 50.0]},
            "trading_signals": [
                {"type": "buy", "indicator": "MACD", "message": "cross", "strength": "weak"},
                {"type": "sell", "indicator": "RSI", "message": "high", "strength": "medium"}
            ]
        })))
    }

    async fn markets(&self, per_page: u32) -> Result<Vec<MarketCoin>> {
        self.record(format!("markets {}", per_page))?;
        Ok(vec![
            MarketCoin {
                id: "bitcoin".into(),
                name: "Bitcoin".into(),
                symbol: "btc".into(),
                current_price: 65000.0,
                market_cap: 1.28e12,
                price_change_percentage_24h: Some(1.5),
            },
            MarketCoin {
                id: "ethereum".into(),
                name: "Ethereum".into(),
                symbol: "eth".into(),
                current_price: 3200.0,
                market_cap: 3.84e11,
                price_change_percentage_24h: None,
            },
        ])
    }

    async fn global_overview(&self) -> Result<Option<GlobalOverview>> {
        self.record("global".to_string())?;
        Ok(GlobalOverview::from_value(&json!({
            "data": {"total_market_cap": {"usd": 2.4e12}, "active_cryptocurrencies": 9000}
        })))
    }

    async fn trending(&self) -> Result<Vec<TrendingCoin>> {
        self.record("trending".to_string())?;
        Ok(TrendingCoin::interpret(&json!({
            "coins": [{"item": {"id": "pepe", "name": "Pepe", "symbol": "PEPE"}}]
        })))
    }

    async fn fear_greed(&self) -> Result<Option<FearGreed>> {
        self.record("fear-greed".to_string())?;
        Ok(FearGreed::from_value(&json!({"data": []})))
    }
}

#[tokio::test]
async fn test_run_screener_counts_coins() {
    let source = FixtureSource::default();
    let filter: ScreenerFilter = ScreenerFilter {
        trend: "sideways".parse().unwrap(),
        ..ScreenerFilter::default()
    };

    let count = run_screener(&source, &filter, Locale::PtBr, OutputFormat::Table)
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(source.last_request().as_deref(), Some("screener sideways"));
}

#[tokio::test]
async fn test_run_screener_rejects_invalid_filter_before_request() {
    let source = FixtureSource::default();
    let filter = ScreenerFilter {
        min_rsi: -5.0,
        ..ScreenerFilter::default()
    };

    let result = run_screener(&source, &filter, Locale::PtBr, OutputFormat::Table).await;

    assert!(result.is_err());
    assert!(source.last_request().is_none());
}

#[tokio::test]
async fn test_run_history_passes_period_and_currency() {
    let source = FixtureSource::default();

    let rows = run_history(
        &source,
        "bitcoin",
        HistoryPeriod::Days7,
        "brl",
        Locale::PtBr,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    assert_eq!(rows, 2);
    assert_eq!(source.last_request().as_deref(), Some("history bitcoin 7 brl"));
}

#[tokio::test]
async fn test_run_analyze_returns_signal_count() {
    let source = FixtureSource::default();

    let signals = run_analyze(&source, "ethereum", 90, OutputFormat::Table)
        .await
        .unwrap();

    assert_eq!(signals, 2);
    assert_eq!(source.last_request().as_deref(), Some("analyze ethereum 90"));
}

#[tokio::test]
async fn test_run_markets_filters_by_search() {
    let source = FixtureSource::default();

    let matched = run_markets(&source, Some("BT"), 50, Locale::EnUs, OutputFormat::Table)
        .await
        .unwrap();
    assert_eq!(matched, 1);

    let all = run_markets(&source, None, 50, Locale::EnUs, OutputFormat::Json)
        .await
        .unwrap();
    assert_eq!(all, 2);
    assert_eq!(source.last_request().as_deref(), Some("markets 50"));
}

#[tokio::test]
async fn test_source_error_is_propagated_with_context() {
    let source = FixtureSource::failing();

    let err = run_analyze(&source, "bitcoin", 30, OutputFormat::Table)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("bitcoin"));
    assert!(matches!(
        err.downcast_ref::<DataError>(),
        Some(DataError::Status { status: 503, .. })
    ));
}

#[tokio::test]
async fn test_run_overview_counts_present_panels() {
    let source = FixtureSource::default();

    let panels = run_overview(&source, Locale::PtBr, OutputFormat::Table)
        .await
        .unwrap();

    // 공포·탐욕 응답에 data[0]이 없으므로 두 패널만 출력
    assert_eq!(panels, 2);
}

#[tokio::test]
async fn test_run_overview_skips_failed_panel() {
    let source = FixtureSource::with_failing_panels(&["global"]);

    let panels = run_overview(&source, Locale::EnUs, OutputFormat::Json)
        .await
        .unwrap();

    assert_eq!(panels, 1);
}

#[tokio::test]
async fn test_run_overview_fails_when_every_panel_fails() {
    let source = FixtureSource::failing();

    let err = run_overview(&source, Locale::PtBr, OutputFormat::Table)
        .await
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DataError>(),
        Some(DataError::Status { status: 503, .. })
    ));
}
