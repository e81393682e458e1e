//! 시장 목록 명령.

use super::{print_lines, OutputFormat};
use anyhow::{Context, Result};
use coinscope_core::{
    format_currency_in, format_market_cap_billions, format_percentage, Locale, MarketCoin,
    MarketOverview,
};
use coinscope_data::MarketDataSource;
use tracing::info;

/// 시장 목록 가격은 항상 USD 기준입니다.
const MARKET_CURRENCY: &str = "USD";

/// 시장 목록을 조회해 검색 결과와 점유율을 출력합니다.
pub async fn run_markets(
    source: &dyn MarketDataSource,
    search: Option<&str>,
    per_page: u32,
    locale: Locale,
    format: OutputFormat,
) -> Result<usize> {
    let coins = source
        .markets(per_page)
        .await
        .context("시장 목록 조회 실패")?;

    let term = search.unwrap_or_default();
    let filtered = MarketOverview::filter_by_search(&coins, term);

    match format {
        OutputFormat::Table => print_lines(&render_markets(&coins, term, locale)),
        OutputFormat::Json => {
            let body = serde_json::json!({
                "coins": filtered,
                "dominance": MarketOverview::dominance(&coins),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    info!(total = coins.len(), matched = filtered.len(), "Markets rendered");
    Ok(filtered.len())
}

/// 시장 목록 출력 줄.
///
/// 점유율은 검색과 무관하게 전체 목록의 상위 코인으로 계산합니다.
pub fn render_markets(coins: &[MarketCoin], term: &str, locale: Locale) -> Vec<String> {
    let filtered = MarketOverview::filter_by_search(coins, term);

    let mut lines = vec![format!("{} / {}개 코인", filtered.len(), coins.len())];
    for (rank, coin) in filtered.iter().enumerate() {
        lines.push(format!(
            "{:>3}. {} ({})  {}  {}  MCap {}",
            rank + 1,
            coin.name,
            coin.symbol.to_uppercase(),
            format_currency_in(coin.current_price, MARKET_CURRENCY, locale),
            format_percentage(coin.price_change_percentage_24h),
            format_market_cap_billions(coin.market_cap),
        ));
    }

    let dominance = MarketOverview::dominance(coins);
    if !dominance.is_empty() {
        lines.push(String::new());
        lines.push("--- 시가총액 점유율 (상위) ---".to_string());
        for slice in dominance {
            lines.push(format!("{:<6} {}%", slice.name, slice.percentage));
        }
    }

    lines
}
