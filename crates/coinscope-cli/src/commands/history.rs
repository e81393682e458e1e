//! 과거 가격 명령.

use super::{print_lines, OutputFormat};
use anyhow::{Context, Result};
use coinscope_core::{
    format_currency_in, format_percentage, format_volume_with, HistoryPeriod, Locale,
    VolumeStyle,
};
use coinscope_data::{HistoricalChart, MarketDataSource};
use tracing::{info, Instrument};

/// 과거 가격을 조회해 요약 카드를 출력합니다.
pub async fn run_history(
    source: &dyn MarketDataSource,
    coin_id: &str,
    period: HistoryPeriod,
    currency: &str,
    locale: Locale,
    format: OutputFormat,
) -> Result<usize> {
    let chart = source
        .history(coin_id, period, currency, locale)
        .instrument(coinscope_core::coin_span!("history", coin_id, period))
        .await
        .with_context(|| format!("과거 데이터 조회 실패: {}", coin_id))?;

    match format {
        OutputFormat::Table => print_lines(&render_history(coin_id, &chart, currency, locale)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chart)?),
    }

    info!(coin = coin_id, period = %period, rows = chart.len(), "History rendered");
    Ok(chart.len())
}

/// 요약 카드 출력 줄.
///
/// 데이터가 없으면 가격 카드는 모두 0으로 표시됩니다.
pub fn render_history(
    coin_id: &str,
    chart: &HistoricalChart,
    currency: &str,
    locale: Locale,
) -> Vec<String> {
    let summary = chart.price_summary();
    let money = |value: f64| format_currency_in(value, currency, locale);

    let mut lines = vec![
        format!("=== {} ({}개 데이터) ===", coin_id, chart.len()),
        format!("초기 가격: {}", money(summary.first)),
        format!("최종 가격: {}", money(summary.last)),
        format!("최고가:    {}", money(summary.max)),
        format!("최저가:    {}", money(summary.min)),
        format!("변화율:    {}", format_percentage(summary.change_pct())),
    ];

    if let Some(latest) = chart.latest() {
        lines.push(format!(
            "최근 거래량 ({}): {}",
            latest.date,
            format_volume_with(latest.volume, VolumeStyle::Historical)
        ));
    }

    lines
}
