//! 시장 전체 지표: 글로벌 개요, 트렌딩 코인, 공포·탐욕 지수.
//!
//! 세 응답 모두 외부 API를 그대로 전달한 것이라 키가 빠질 수 있습니다.
//! 해석은 실패하지 않고, 표시 단계에서 없는 값은 `N/A`로 바뀝니다.

use crate::format::{format_count, format_percentage};
use crate::json::{as_f64, field_str, field_text, opt_f64};
use crate::types::{to_fixed, Locale};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;

/// 트렌딩 목록에 표시하는 최대 코인 수.
pub const TRENDING_DISPLAY_LIMIT: usize = 6;

/// 글로벌 시장 개요 (`/global` 응답의 `data`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalOverview {
    /// 전체 시가총액 (USD)
    pub total_market_cap_usd: Option<f64>,
    /// 전체 24시간 거래량 (USD)
    pub total_volume_usd: Option<f64>,
    /// 24시간 시가총액 변화율(%)
    pub market_cap_change_24h: Option<f64>,
    /// BTC 점유율(%)
    pub btc_dominance: Option<f64>,
    /// ETH 점유율(%)
    pub eth_dominance: Option<f64>,
    /// 활성 암호화폐 수
    pub active_cryptocurrencies: Option<u64>,
}

impl GlobalOverview {
    /// 응답에서 개요를 추출합니다. `data` 객체가 없으면 `None`.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let data = raw.get("data").filter(|data| data.is_object())?;
        let usd = |key: &str| data.get(key).and_then(|inner| opt_f64(inner, "usd"));
        let share = |symbol: &str| {
            data.get("market_cap_percentage")
                .and_then(|inner| opt_f64(inner, symbol))
        };

        Some(Self {
            total_market_cap_usd: usd("total_market_cap"),
            total_volume_usd: usd("total_volume"),
            market_cap_change_24h: opt_f64(data, "market_cap_change_percentage_24h_usd"),
            btc_dominance: share("btc"),
            eth_dominance: share("eth"),
            active_cryptocurrencies: opt_f64(data, "active_cryptocurrencies")
                .filter(|count| *count >= 0.0)
                .map(|count| count as u64),
        })
    }

    /// 전체 시가총액 (`$X.XXT`).
    pub fn market_cap_text(&self) -> String {
        self.total_market_cap_usd
            .map(|value| format!("${}T", to_fixed(value / TRILLION, 2)))
            .unwrap_or_else(na)
    }

    /// 24시간 거래량 (`$X.XXB`).
    pub fn volume_text(&self) -> String {
        self.total_volume_usd
            .map(|value| format!("${}B", to_fixed(value / BILLION, 2)))
            .unwrap_or_else(na)
    }

    /// 24시간 시가총액 변화율 (`+1.23%`).
    pub fn change_text(&self) -> String {
        format_percentage(self.market_cap_change_24h)
    }

    /// BTC 점유율 (`X.X%`).
    pub fn btc_dominance_text(&self) -> String {
        dominance_text(self.btc_dominance)
    }

    /// ETH 점유율 (`X.X%`).
    pub fn eth_dominance_text(&self) -> String {
        dominance_text(self.eth_dominance)
    }

    /// 활성 암호화폐 수 (로케일 천 단위 구분).
    pub fn active_text(&self, locale: Locale) -> String {
        self.active_cryptocurrencies
            .map(|count| format_count(count, locale))
            .unwrap_or_else(na)
    }
}

fn dominance_text(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}%", to_fixed(v, 1)))
        .unwrap_or_else(na)
}

fn na() -> String {
    "N/A".to_string()
}

/// 트렌딩 코인 (`coins[].item`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendingCoin {
    /// 코인 ID
    pub id: String,
    /// 이름
    pub name: String,
    /// 심볼
    pub symbol: String,
    /// 시가총액 순위
    pub market_cap_rank: Option<u64>,
    /// 큰 아이콘 URL
    pub image: String,
}

impl TrendingCoin {
    /// 항목을 해석합니다. `item` 객체가 없으면 `None`.
    pub fn from_value(entry: &Value) -> Option<Self> {
        let item = entry.get("item").filter(|item| item.is_object())?;

        Some(Self {
            id: field_str(item, "id"),
            name: field_str(item, "name"),
            symbol: field_str(item, "symbol"),
            market_cap_rank: item
                .get("market_cap_rank")
                .and_then(as_f64)
                .filter(|rank| *rank >= 1.0)
                .map(|rank| rank as u64),
            image: field_str(item, "large"),
        })
    }

    /// 트렌딩 응답을 해석합니다. `coins`가 없으면 빈 목록입니다.
    pub fn interpret(raw: &Value) -> Vec<Self> {
        let Some(items) = raw.get("coins").and_then(Value::as_array) else {
            tracing::warn!("trending payload has no coins array");
            return Vec::new();
        };

        items.iter().filter_map(Self::from_value).collect()
    }

    /// 순위 표시 (`#3`, 순위가 없거나 0이면 `N/A`).
    pub fn rank_text(&self) -> String {
        self.market_cap_rank
            .map(|rank| format!("#{}", rank))
            .unwrap_or_else(na)
    }
}

/// 공포·탐욕 지수의 최신 값 (`data[0]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FearGreed {
    /// 지수 값. 응답 표기 그대로 보관합니다.
    pub value: String,
    /// 분류 (예: `Greed`)
    pub classification: String,
}

impl FearGreed {
    /// 최신 값을 추출합니다. `data[0]`이 객체가 아니면 `None`.
    pub fn from_value(raw: &Value) -> Option<Self> {
        let latest = raw
            .get("data")
            .and_then(|data| data.get(0))
            .filter(|latest| latest.is_object())?;

        Some(Self {
            value: field_text(latest, "value"),
            classification: field_text(latest, "value_classification"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_overview_cards() {
        let raw = json!({
            "data": {
                "active_cryptocurrencies": 17321,
                "total_market_cap": {"usd": 2.456e12, "brl": 1.2e13},
                "total_volume": {"usd": 8.75e10},
                "market_cap_percentage": {"btc": 52.345, "eth": 17.04},
                "market_cap_change_percentage_24h_usd": -1.234
            }
        });
        let overview = GlobalOverview::from_value(&raw).unwrap();

        assert_eq!(overview.market_cap_text(), "$2.46T");
        assert_eq!(overview.volume_text(), "$87.50B");
        assert_eq!(overview.btc_dominance_text(), "52.3%");
        assert_eq!(overview.eth_dominance_text(), "17.0%");
        assert_eq!(overview.change_text(), "-1.23%");
        assert_eq!(overview.active_text(Locale::PtBr), "17.321");
        assert_eq!(overview.active_text(Locale::EnUs), "17,321");
    }

    #[test]
    fn test_global_overview_missing_keys() {
        assert!(GlobalOverview::from_value(&json!({"error": "x"})).is_none());
        assert!(GlobalOverview::from_value(&json!({"data": null})).is_none());

        let overview = GlobalOverview::from_value(&json!({
            "data": {"total_market_cap": {}, "market_cap_percentage": {"btc": 50}}
        }))
        .unwrap();
        assert_eq!(overview.market_cap_text(), "N/A");
        assert_eq!(overview.volume_text(), "N/A");
        assert_eq!(overview.change_text(), "N/A");
        assert_eq!(overview.btc_dominance_text(), "50.0%");
        assert_eq!(overview.eth_dominance_text(), "N/A");
        assert_eq!(overview.active_text(Locale::PtBr), "N/A");
    }

    #[test]
    fn test_trending_interpret() {
        let raw = json!({
            "coins": [
                {"item": {"id": "pepe", "name": "Pepe", "symbol": "PEPE",
                          "market_cap_rank": 24, "large": "https://img/pepe.png"}},
                {"item": {"id": "new", "name": "New", "symbol": "NEW", "market_cap_rank": null}},
                {"item": {"id": "zero", "name": "Zero", "symbol": "Z", "market_cap_rank": 0}},
                {"no_item": true}
            ]
        });
        let coins = TrendingCoin::interpret(&raw);

        assert_eq!(coins.len(), 3);
        assert_eq!(coins[0].rank_text(), "#24");
        assert_eq!(coins[0].image, "https://img/pepe.png");
        assert_eq!(coins[1].rank_text(), "N/A");
        assert_eq!(coins[2].rank_text(), "N/A");
    }

    #[test]
    fn test_trending_missing_coins() {
        assert!(TrendingCoin::interpret(&json!({})).is_empty());
        assert!(TrendingCoin::interpret(&json!({"coins": null})).is_empty());
    }

    #[test]
    fn test_fear_greed_latest() {
        let raw = json!({
            "name": "Fear and Greed Index",
            "data": [
                {"value": "72", "value_classification": "Greed", "timestamp": "1709769600"},
                {"value": "40", "value_classification": "Fear"}
            ]
        });
        let index = FearGreed::from_value(&raw).unwrap();

        assert_eq!(index.value, "72");
        assert_eq!(index.classification, "Greed");
    }

    #[test]
    fn test_fear_greed_missing_keys() {
        assert!(FearGreed::from_value(&json!({})).is_none());
        assert!(FearGreed::from_value(&json!({"data": []})).is_none());
        assert!(FearGreed::from_value(&json!({"data": ["72"]})).is_none());

        let partial = FearGreed::from_value(&json!({"data": [{"value": 15}]})).unwrap();
        assert_eq!(partial.value, "15");
        assert_eq!(partial.classification, "");
    }
}
