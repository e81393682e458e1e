//! 시장 개요: 코인 목록 검색과 시가총액 점유율.

use crate::json::{field_f64, field_str, opt_f64};
use crate::types::to_fixed;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 점유율 계산에 사용하는 상위 코인 수.
pub const DOMINANCE_TOP_N: usize = 5;

/// 시장 목록의 코인.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarketCoin {
    /// 코인 ID
    pub id: String,
    /// 이름
    pub name: String,
    /// 심볼
    pub symbol: String,
    /// 현재 가격
    pub current_price: f64,
    /// 시가총액
    pub market_cap: f64,
    /// 24시간 변화율(%), 없으면 `None`
    pub price_change_percentage_24h: Option<f64>,
}

impl MarketCoin {
    /// JSON 객체에서 코인을 추출합니다. 객체가 아니면 `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        Some(Self {
            id: field_str(value, "id"),
            name: field_str(value, "name"),
            symbol: field_str(value, "symbol"),
            current_price: field_f64(value, "current_price"),
            market_cap: field_f64(value, "market_cap"),
            price_change_percentage_24h: opt_f64(value, "price_change_percentage_24h"),
        })
    }

    /// 이름 또는 심볼에 검색어가 포함되는지 확인합니다 (대소문자 무관).
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

/// 시가총액 점유율 조각.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominanceSlice {
    /// 대문자 심볼
    pub name: String,
    /// 시가총액
    pub value: f64,
    /// 점유율(%) 소수 1자리 문자열
    pub percentage: String,
}

/// 시장 목록 유틸리티.
pub struct MarketOverview;

impl MarketOverview {
    /// 시장 응답 배열을 해석합니다. 배열이 아니면 빈 목록입니다.
    pub fn interpret(raw: &Value) -> Vec<MarketCoin> {
        match raw.as_array() {
            Some(items) => items.iter().filter_map(MarketCoin::from_value).collect(),
            None => {
                tracing::warn!("markets payload is not an array");
                Vec::new()
            }
        }
    }

    /// 검색어로 목록을 필터링합니다. 빈 검색어는 전체를 반환합니다.
    pub fn filter_by_search<'a>(coins: &'a [MarketCoin], term: &str) -> Vec<&'a MarketCoin> {
        coins.iter().filter(|coin| coin.matches(term)).collect()
    }

    /// 목록 순서상 상위 5개 코인의 시가총액 점유율.
    ///
    /// 합계가 0 이하이면 모든 점유율은 `0.0`입니다.
    pub fn dominance(coins: &[MarketCoin]) -> Vec<DominanceSlice> {
        let top = &coins[..coins.len().min(DOMINANCE_TOP_N)];
        let total: f64 = top.iter().map(|coin| coin.market_cap).sum();

        top.iter()
            .map(|coin| {
                let percentage = if total > 0.0 {
                    to_fixed(coin.market_cap / total * 100.0, 1)
                } else {
                    "0.0".to_string()
                };
                DominanceSlice {
                    name: coin.symbol.to_uppercase(),
                    value: coin.market_cap,
                    percentage,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coin(name: &str, symbol: &str, market_cap: f64) -> MarketCoin {
        MarketCoin {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            market_cap,
            ..MarketCoin::default()
        }
    }

    #[test]
    fn test_filter_by_search() {
        let coins = vec![coin("Bitcoin", "btc", 1.0), coin("Ethereum", "eth", 1.0)];

        assert_eq!(MarketOverview::filter_by_search(&coins, "BIT").len(), 1);
        assert_eq!(MarketOverview::filter_by_search(&coins, "eth")[0].name, "Ethereum");
        assert_eq!(MarketOverview::filter_by_search(&coins, "").len(), 2);
        assert!(MarketOverview::filter_by_search(&coins, "sol").is_empty());
    }

    #[test]
    fn test_dominance_top_five() {
        let coins: Vec<MarketCoin> = (1..=7)
            .map(|i| coin(&format!("Coin{}", i), &format!("c{}", i), 100.0))
            .collect();

        let slices = MarketOverview::dominance(&coins);
        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].name, "C1");
        assert_eq!(slices[0].percentage, "20.0");
    }

    #[test]
    fn test_dominance_zero_total() {
        let slices = MarketOverview::dominance(&[coin("A", "a", 0.0)]);
        assert_eq!(slices[0].percentage, "0.0");
        assert!(MarketOverview::dominance(&[]).is_empty());
    }

    #[test]
    fn test_interpret_markets() {
        let raw = json!([
            {"id": "bitcoin", "name": "Bitcoin", "symbol": "btc", "current_price": 1.5,
             "market_cap": 300, "price_change_percentage_24h": null},
            42
        ]);
        let coins = MarketOverview::interpret(&raw);
        assert_eq!(coins.len(), 1);
        assert_eq!(coins[0].market_cap, 300.0);
        assert_eq!(coins[0].price_change_percentage_24h, None);

        assert!(MarketOverview::interpret(&json!({"error": "x"})).is_empty());
    }
}
