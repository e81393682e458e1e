//! 시장 개요 명령: 글로벌 지표, 공포·탐욕 지수, 트렌딩 코인.

use super::{print_lines, OutputFormat};
use anyhow::Result;
use coinscope_core::{FearGreed, GlobalOverview, Locale, TrendingCoin, TRENDING_DISPLAY_LIMIT};
use coinscope_data::{DataError, MarketDataSource};
use serde::Serialize;
use tracing::{info, warn, Instrument};

/// 개요 화면의 세 패널.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketPulse {
    pub global: Option<GlobalOverview>,
    pub trending: Vec<TrendingCoin>,
    pub fear_greed: Option<FearGreed>,
}

impl MarketPulse {
    /// 내용이 있는 패널 수.
    pub fn panel_count(&self) -> usize {
        usize::from(self.global.is_some())
            + usize::from(!self.trending.is_empty())
            + usize::from(self.fear_greed.is_some())
    }
}

/// 세 패널을 동시에 조회해 출력합니다.
///
/// 패널 하나가 실패하면 경고만 남기고 나머지를 출력합니다.
/// 세 요청이 모두 실패할 때만 오류입니다.
pub async fn run_overview(
    source: &dyn MarketDataSource,
    locale: Locale,
    format: OutputFormat,
) -> Result<usize> {
    let (global, trending, fear_greed) = async {
        tokio::join!(
            source.global_overview(),
            source.trending(),
            source.fear_greed()
        )
    }
    .instrument(tracing::info_span!("overview", source = source.name()))
    .await;

    let mut failures = Vec::new();
    let pulse = MarketPulse {
        global: settle("global", global, &mut failures).flatten(),
        trending: settle("trending", trending, &mut failures).unwrap_or_default(),
        fear_greed: settle("fear-greed", fear_greed, &mut failures).flatten(),
    };

    if failures.len() == 3 {
        if let Some(last) = failures.pop() {
            return Err(anyhow::Error::new(last).context("시장 개요 조회 실패"));
        }
    }

    match format {
        OutputFormat::Table => print_lines(&render_overview(&pulse, locale)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pulse)?),
    }

    info!(
        panels = pulse.panel_count(),
        failed = failures.len(),
        "Overview rendered"
    );
    Ok(pulse.panel_count())
}

fn settle<T>(
    panel: &str,
    result: coinscope_data::Result<T>,
    failures: &mut Vec<DataError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(panel, error = %e, transient = e.is_transient(), "Overview panel skipped");
            failures.push(e);
            None
        }
    }
}

/// 개요 출력 줄.
pub fn render_overview(pulse: &MarketPulse, locale: Locale) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(global) = &pulse.global {
        lines.push("=== 시장 개요 ===".to_string());
        lines.push(format!(
            "전체 시가총액: {} ({} 24h)",
            global.market_cap_text(),
            global.change_text()
        ));
        lines.push(format!("24h 거래량:    {}", global.volume_text()));
        lines.push(format!("BTC 점유율:    {}", global.btc_dominance_text()));
        lines.push(format!("ETH 점유율:    {}", global.eth_dominance_text()));
        lines.push(format!("활성 코인:     {}", global.active_text(locale)));
    }

    if let Some(index) = &pulse.fear_greed {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!(
            "공포·탐욕 지수: {} ({})",
            index.value, index.classification
        ));
    }

    if !pulse.trending.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("--- 트렌딩 ---".to_string());
        for (position, coin) in pulse
            .trending
            .iter()
            .take(TRENDING_DISPLAY_LIMIT)
            .enumerate()
        {
            lines.push(format!(
                "#{} {} ({})  Rank: {}",
                position + 1,
                coin.name,
                coin.symbol,
                coin.rank_text()
            ));
        }
    }

    if lines.is_empty() {
        lines.push("표시할 시장 데이터가 없습니다".to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trending(count: usize) -> Vec<TrendingCoin> {
        (1..=count)
            .map(|i| TrendingCoin {
                id: format!("coin{}", i),
                name: format!("Coin {}", i),
                symbol: format!("C{}", i),
                market_cap_rank: Some(i as u64 * 10),
                ..TrendingCoin::default()
            })
            .collect()
    }

    #[test]
    fn test_render_overview_full() {
        let pulse = MarketPulse {
            global: GlobalOverview::from_value(&json!({
                "data": {
                    "active_cryptocurrencies": 17321,
                    "total_market_cap": {"usd": 2.456e12},
                    "total_volume": {"usd": 8.75e10},
                    "market_cap_percentage": {"btc": 52.345, "eth": 17.04},
                    "market_cap_change_percentage_24h_usd": 1.5
                }
            })),
            trending: trending(8),
            fear_greed: Some(FearGreed {
                value: "72".into(),
                classification: "Greed".into(),
            }),
        };

        let lines = render_overview(&pulse, Locale::PtBr);
        assert_eq!(lines[1], "전체 시가총액: $2.46T (+1.50% 24h)");
        assert_eq!(lines[2], "24h 거래량:    $87.50B");
        assert_eq!(lines[3], "BTC 점유율:    52.3%");
        assert_eq!(lines[5], "활성 코인:     17.321");
        assert!(lines.contains(&"공포·탐욕 지수: 72 (Greed)".to_string()));
        assert!(lines.contains(&"#1 Coin 1 (C1)  Rank: #10".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with('#')).count(), 6);
        assert_eq!(pulse.panel_count(), 3);
    }

    #[test]
    fn test_render_overview_partial() {
        let pulse = MarketPulse {
            trending: vec![TrendingCoin {
                name: "Fresh".into(),
                symbol: "FRSH".into(),
                ..TrendingCoin::default()
            }],
            ..MarketPulse::default()
        };

        let lines = render_overview(&pulse, Locale::EnUs);
        assert_eq!(lines[0], "--- 트렌딩 ---");
        assert_eq!(lines[1], "#1 Fresh (FRSH)  Rank: N/A");
        assert_eq!(pulse.panel_count(), 1);
    }

    #[test]
    fn test_render_overview_empty() {
        let lines = render_overview(&MarketPulse::default(), Locale::PtBr);
        assert_eq!(lines, vec!["표시할 시장 데이터가 없습니다".to_string()]);
    }
}
