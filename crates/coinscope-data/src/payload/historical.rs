//! 과거 가격 차트 해석.
//!
//! `prices`, `total_volumes`, `market_caps`는 각각 `[timestamp, value]` 쌍의
//! 배열이며, 세 배열은 타임스탬프가 아니라 **인덱스로** 대응합니다.

use coinscope_core::json::as_f64;
use coinscope_core::{Locale, RangeSummarizer, RangeSummary, SeriesAligner};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 차트의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRow {
    /// 타임스탬프 (밀리초)
    pub timestamp: i64,
    /// 로케일 날짜 라벨
    pub date: String,
    /// 가격
    pub price: f64,
    /// 같은 위치의 거래량 (없으면 0)
    pub volume: f64,
    /// 같은 위치의 시가총액 (없으면 0)
    pub market_cap: f64,
}

/// 과거 가격 차트.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalChart {
    rows: Vec<HistoricalRow>,
}

impl HistoricalChart {
    /// 응답 JSON에서 차트를 만듭니다.
    ///
    /// 형식이 잘못된 가격 항목은 건너뛰지만, 거래량/시가총액은 항상 원래
    /// 인덱스로 조회하므로 다른 행의 대응은 유지됩니다.
    pub fn from_value(raw: &Value, locale: Locale) -> Self {
        let Some(prices) = raw.get("prices").and_then(Value::as_array) else {
            tracing::debug!("historical payload has no prices");
            return Self::default();
        };

        let volumes = pair_values(raw.get("total_volumes"));
        let market_caps = pair_values(raw.get("market_caps"));

        let rows: Vec<HistoricalRow> = prices
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                let (timestamp, price) = parse_pair(entry)?;
                let timestamp = timestamp as i64;
                Some(HistoricalRow {
                    timestamp,
                    date: locale.date_label(timestamp),
                    price,
                    volume: SeriesAligner::value_at_or_zero(&volumes, index),
                    market_cap: SeriesAligner::value_at_or_zero(&market_caps, index),
                })
            })
            .collect();

        if rows.len() < prices.len() {
            tracing::warn!(
                skipped = prices.len() - rows.len(),
                "malformed price entries skipped"
            );
        }

        Self { rows }
    }

    /// 모든 행.
    pub fn rows(&self) -> &[HistoricalRow] {
        &self.rows
    }

    /// 행 수.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 행이 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 가격 시퀀스.
    pub fn prices(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.price).collect()
    }

    /// 가격 범위 요약 (비어 있으면 모두 0).
    pub fn price_summary(&self) -> RangeSummary {
        RangeSummarizer::summarize_or_default(&self.prices())
    }

    /// 마지막 행.
    pub fn latest(&self) -> Option<&HistoricalRow> {
        self.rows.last()
    }
}

/// `[timestamp, value]` 항목에서 두 값을 읽습니다.
fn parse_pair(entry: &Value) -> Option<(f64, f64)> {
    let pair = entry.as_array()?;
    let timestamp = as_f64(pair.first()?)?;
    let value = as_f64(pair.get(1)?)?;
    Some((timestamp, value))
}

/// 쌍 배열의 두 번째 값들을 인덱스를 유지한 채 읽습니다.
fn pair_values(raw: Option<&Value>) -> Vec<Option<f64>> {
    raw.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .map(|entry| entry.as_array().and_then(|pair| pair.get(1)).and_then(as_f64))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_by_index() {
        let raw = json!({
            "prices": [[1709640000000i64, 100.0], [1709726400000i64, 110.0]],
            "total_volumes": [[1709640000000i64, 5.0e9], [1709726400000i64, 6.0e9]],
            "market_caps": [[1709640000000i64, 1.0e12]]
        });

        let chart = HistoricalChart::from_value(&raw, Locale::PtBr);
        assert_eq!(chart.len(), 2);

        let first = &chart.rows()[0];
        assert_eq!(first.date, "05/03/2024");
        assert_eq!(first.volume, 5.0e9);
        assert_eq!(first.market_cap, 1.0e12);

        let second = &chart.rows()[1];
        assert_eq!(second.volume, 6.0e9);
        assert_eq!(second.market_cap, 0.0);
    }

    #[test]
    fn test_malformed_price_keeps_volume_correspondence() {
        let raw = json!({
            "prices": [[1, 10.0], "bad", [3, 30.0]],
            "total_volumes": [[1, 100.0], [2, 200.0], [3, 300.0]]
        });

        let chart = HistoricalChart::from_value(&raw, Locale::EnUs);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.rows()[1].price, 30.0);
        assert_eq!(chart.rows()[1].volume, 300.0);
    }

    #[test]
    fn test_missing_prices_is_empty() {
        let chart = HistoricalChart::from_value(&json!({"error": "x"}), Locale::PtBr);
        assert!(chart.is_empty());
        assert_eq!(chart.price_summary(), RangeSummary::default());
        assert!(chart.latest().is_none());
    }

    #[test]
    fn test_price_summary() {
        let raw = json!({"prices": [[1, 5.0], [2, 1.0], [3, 9.0], [4, 3.0]]});
        let summary = HistoricalChart::from_value(&raw, Locale::PtBr).price_summary();
        assert_eq!((summary.first, summary.last, summary.min, summary.max), (5.0, 3.0, 1.0, 9.0));
    }
}
