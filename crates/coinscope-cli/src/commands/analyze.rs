//! 기술적 분석 명령.

use super::{print_lines, OutputFormat};
use anyhow::{Context, Result};
use coinscope_core::format_fixed;
use coinscope_data::{IndicatorPanel, MarketDataSource, PriceLevel, TechnicalAnalysis};
use tracing::{info, Instrument};

/// 기술적 분석을 조회해 요약, 신호, 패널을 출력합니다.
pub async fn run_analyze(
    source: &dyn MarketDataSource,
    coin_id: &str,
    days: u32,
    format: OutputFormat,
) -> Result<usize> {
    let analysis = source
        .technical_analysis(coin_id, days)
        .instrument(coinscope_core::coin_span!("analyze", coin_id, days))
        .await
        .with_context(|| format!("기술적 분석 조회 실패: {}", coin_id))?;

    match format {
        OutputFormat::Table => print_lines(&render_analysis(coin_id, &analysis)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }

    info!(
        coin = coin_id,
        days,
        signals = analysis.trading_signals.len(),
        "Analysis rendered"
    );
    Ok(analysis.trading_signals.len())
}

/// 분석 출력 줄.
pub fn render_analysis(coin_id: &str, analysis: &TechnicalAnalysis) -> Vec<String> {
    let summary = analysis.summary();

    let mut lines = vec![
        format!(
            "=== {} 기술적 분석 ({}) ===",
            analysis.coin_id.as_deref().unwrap_or(coin_id),
            analysis.period.as_deref().unwrap_or("N/A")
        ),
        format!("전체 추세: {} [{}]", summary.trend.text, summary.trend.tone),
        format!(
            "현재 RSI:  {} [{}]",
            summary.rsi.text,
            summary.rsi.zone.description()
        ),
        format!("활성 신호: {}", summary.signal_count),
    ];

    if !analysis.trading_signals.is_empty() {
        lines.push(String::new());
        lines.push("--- 트레이딩 신호 ---".to_string());
        for signal in &analysis.trading_signals {
            lines.push(format!(
                "[{}] {}: {} ({})",
                signal.label(),
                signal.indicator,
                signal.message,
                signal.strength
            ));
        }
    }

    lines.push(String::new());
    lines.push("--- 지표 패널 ---".to_string());
    for panel in IndicatorPanel::ALL {
        let points = analysis.panel(panel);
        let latest = points
            .last()
            .map(|point| format_fixed(point.indicator, 2))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!(
            "{:<16} {:>4}개  최근 {}",
            panel.title(),
            points.len(),
            latest
        ));
    }

    let levels = &analysis.levels;
    if !levels.support.is_empty() || !levels.resistance.is_empty() {
        let join = |items: &[PriceLevel]| {
            items
                .iter()
                .map(|level| format_fixed(level.price, 2))
                .collect::<Vec<_>>()
                .join(", ")
        };
        lines.push(String::new());
        lines.push(format!("지지선: {}", join(&levels.support)));
        lines.push(format!("저항선: {}", join(&levels.resistance)));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TechnicalAnalysis {
        TechnicalAnalysis::from_value(&json!({
            "coin_id": "ethereum",
            "period": "90 days",
            "prices": [10.0, 11.0, 12.0],
            "indicators": {
                "rsi": [null, null, 75.5],
                "sma_20": [null, 10.5, 11.5],
                "macd": {"histogram": [null, 0.1, -0.2]}
            },
            "trend_analysis": {"overall_trend": "bullish"},
            "trading_signals": [
                {"type": "sell", "indicator": "RSI", "message": "Sobrecompra", "strength": "strong"}
            ],
            "levels": {"support": [{"index": 0, "price": 10.0}], "resistance": []}
        }))
    }

    #[test]
    fn test_render_analysis_summary() {
        let lines = render_analysis("ethereum", &sample());

        assert_eq!(lines[0], "=== ethereum 기술적 분석 (90 days) ===");
        assert_eq!(lines[1], "전체 추세: bullish [positive]");
        assert_eq!(lines[2], "현재 RSI:  75.50 [과매수]");
        assert_eq!(lines[3], "활성 신호: 1");
        assert!(lines.contains(&"[SELL] RSI: Sobrecompra (strong)".to_string()));
        assert!(lines.contains(&"지지선: 10.00".to_string()));
    }

    #[test]
    fn test_render_analysis_panel_counts() {
        let lines = render_analysis("ethereum", &sample());

        let panel_line = |title: &str| {
            lines
                .iter()
                .find(|line| line.starts_with(title))
                .cloned()
                .unwrap()
        };
        assert!(panel_line("SMA 20").contains("   2개  최근 11.50"));
        assert!(panel_line("RSI").contains("   1개  최근 75.50"));
        assert!(panel_line("Bollinger Bands").contains("   0개  최근 N/A"));
        assert!(panel_line("MACD Histogram").contains("   2개  최근 -0.20"));
    }

    #[test]
    fn test_render_analysis_missing_fields() {
        let analysis = TechnicalAnalysis::from_value(&json!({}));
        let lines = render_analysis("bitcoin", &analysis);

        assert_eq!(lines[0], "=== bitcoin 기술적 분석 (N/A) ===");
        assert_eq!(lines[1], "전체 추세: N/A [caution]");
        assert_eq!(lines[2], "현재 RSI:  N/A [중립]");
        assert_eq!(lines[3], "활성 신호: 0");
    }
}
