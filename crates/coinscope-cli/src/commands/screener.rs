//! 스크리너 명령.

use super::{print_lines, OutputFormat};
use anyhow::{Context, Result};
use coinscope_core::{
    format_currency_in, format_fixed, format_percentage, format_volume, Locale, ScreenedCoin,
    ScreenerFilter,
};
use coinscope_data::MarketDataSource;
use tracing::info;

/// 스크리너 결과 가격은 항상 USD 기준입니다.
const SCREENER_CURRENCY: &str = "USD";

/// 필터로 코인을 조회해 출력합니다.
pub async fn run_screener(
    source: &dyn MarketDataSource,
    filter: &ScreenerFilter,
    locale: Locale,
    format: OutputFormat,
) -> Result<usize> {
    filter.validate()?;

    let coins = source
        .screener(filter)
        .await
        .context("스크리너 조회 실패")?;

    match format {
        OutputFormat::Table => print_lines(&render_screener(&coins, locale)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&coins)?),
    }

    info!(count = coins.len(), "Screener rendered");
    Ok(coins.len())
}

/// 스크리너 결과 출력 줄.
pub fn render_screener(coins: &[ScreenedCoin], locale: Locale) -> Vec<String> {
    let mut lines = vec![format!("{}개 코인이 조건을 만족합니다", coins.len())];

    for coin in coins {
        let rsi = coin.rsi_class();
        lines.push(format!(
            "{} ({})  {}  {}  Vol {}  RSI {} [{}]  {}",
            coin.name,
            coin.symbol.to_uppercase(),
            format_currency_in(coin.current_price, SCREENER_CURRENCY, locale),
            format_percentage(Some(coin.price_change_24h)),
            format_volume(coin.volume),
            format_fixed(coin.rsi, 1),
            rsi.zone,
            coin.trend_label(),
        ));
    }

    lines
}
