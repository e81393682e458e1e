//! 가격/지표 시계열의 위치 기반 정렬.
//!
//! 외부 분석 서비스는 지표 값을 가격 시퀀스와 **인덱스로** 대응시켜 반환합니다.
//! `indicator[i]`는 `price[i]`에 대응하며, 타임스탬프 매칭은 사용하지 않습니다.
//! 어느 한쪽을 독립적으로 정렬하거나 필터링하면 대응 관계가 깨지므로,
//! 정렬은 항상 [`PairedSeries`]를 통해서만 계산합니다.
//!
//! # 사용 예시
//!
//! ```
//! use coinscope_core::{AlignedPoint, SeriesAligner};
//!
//! let prices = [10.0, 20.0, 30.0];
//! let indicator = [None, Some(5.0), None];
//!
//! let points = SeriesAligner::align(&prices, &indicator);
//! assert_eq!(points, vec![AlignedPoint { index: 1, price: 20.0, indicator: 5.0 }]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 가격 포인트.
///
/// 타임스탬프 오름차순으로 전달되지만 중복 타임스탬프가 있을 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 타임스탬프 (밀리초)
    pub timestamp: i64,
    /// 가격
    pub price: f64,
}

impl PricePoint {
    /// 새 가격 포인트를 생성합니다.
    pub fn new(timestamp: i64, price: f64) -> Self {
        Self { timestamp, price }
    }
}

/// 정렬된 차트 포인트.
///
/// 지표 값이 존재하는 위치에서만 생성됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignedPoint {
    /// 원본 시퀀스에서의 위치
    pub index: usize,
    /// 해당 위치의 가격
    pub price: f64,
    /// 해당 위치의 지표 값
    pub indicator: f64,
}

/// 지표 이름(점 경로)별 값 시퀀스.
///
/// 중첩된 지표 객체는 `"macd.histogram"`, `"bollinger_bands.middle"`처럼
/// 점으로 구분된 경로로 평탄화되어 저장됩니다. 각 시퀀스의 `None`은
/// 워밍업 구간 등 값이 없는 위치입니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    values: BTreeMap<String, Vec<Option<f64>>>,
}

impl IndicatorSeries {
    /// 빈 지표 집합을 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 경로에 시퀀스를 추가합니다. 같은 경로가 있으면 교체합니다.
    pub fn insert(&mut self, path: impl Into<String>, values: Vec<Option<f64>>) {
        self.values.insert(path.into(), values);
    }

    /// 빌더 형태로 시퀀스를 추가합니다.
    pub fn with(mut self, path: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        self.insert(path, values);
        self
    }

    /// 경로의 leaf 시퀀스를 반환합니다.
    pub fn get(&self, path: &str) -> Option<&[Option<f64>]> {
        self.values.get(path).map(Vec::as_slice)
    }

    /// 경로가 존재하는지 확인합니다.
    pub fn contains(&self, path: &str) -> bool {
        self.values.contains_key(path)
    }

    /// 모든 경로 (사전순).
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// 지표 수.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 지표가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 인덱스 대응 계약을 가진 가격/지표 시퀀스 쌍.
///
/// 두 시퀀스의 길이는 달라도 되며, 짧은 쪽 길이까지만 대응합니다.
#[derive(Debug, Clone, Copy)]
pub struct PairedSeries<'a> {
    prices: &'a [f64],
    indicator: &'a [Option<f64>],
}

impl<'a> PairedSeries<'a> {
    /// 새 시퀀스 쌍을 생성합니다.
    pub fn new(prices: &'a [f64], indicator: &'a [Option<f64>]) -> Self {
        Self { prices, indicator }
    }

    /// 대응하는 위치의 수 (`min(len(prices), len(indicator))`).
    pub fn len(&self) -> usize {
        self.prices.len().min(self.indicator.len())
    }

    /// 대응하는 위치가 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 위치 `index`의 (가격, 지표) 쌍.
    pub fn get(&self, index: usize) -> Option<(f64, Option<f64>)> {
        if index >= self.len() {
            return None;
        }
        Some((self.prices[index], self.indicator[index]))
    }

    /// 지표 값이 있는 위치만 순서대로 순회합니다.
    pub fn iter(&self) -> impl Iterator<Item = AlignedPoint> + 'a {
        self.prices
            .iter()
            .zip(self.indicator.iter())
            .enumerate()
            .filter_map(|(index, (&price, value))| {
                value.map(|indicator| AlignedPoint {
                    index,
                    price,
                    indicator,
                })
            })
    }

    /// 정렬된 포인트 벡터.
    pub fn aligned(&self) -> Vec<AlignedPoint> {
        self.iter().collect()
    }
}

/// 시계열 정렬 유틸리티.
pub struct SeriesAligner;

impl SeriesAligner {
    /// 가격과 지표 leaf 시퀀스를 위치 기준으로 정렬합니다.
    ///
    /// 지표 값이 없는 위치는 자리표시자 없이 건너뜁니다. `Some(NaN)`은
    /// 값이 있는 것으로 취급되어 그대로 전달됩니다.
    pub fn align(prices: &[f64], indicator: &[Option<f64>]) -> Vec<AlignedPoint> {
        PairedSeries::new(prices, indicator).aligned()
    }

    /// 점 경로(`"macd.histogram"` 등)로 지표를 찾아 정렬합니다.
    ///
    /// 경로가 없으면 빈 결과를 반환합니다 (패널은 비어 있는 상태로 표시).
    pub fn align_path(prices: &[f64], series: &IndicatorSeries, path: &str) -> Vec<AlignedPoint> {
        match series.get(path) {
            Some(indicator) => Self::align(prices, indicator),
            None => {
                tracing::debug!(path = path, "indicator path not found");
                Vec::new()
            }
        }
    }

    /// 하나의 가격 시퀀스에 여러 지표를 각각 정렬합니다.
    pub fn align_many(
        prices: &[f64],
        series: &IndicatorSeries,
        paths: &[&str],
    ) -> BTreeMap<String, Vec<AlignedPoint>> {
        paths
            .iter()
            .map(|&path| (path.to_string(), Self::align_path(prices, series, path)))
            .collect()
    }

    /// 마지막 위치의 지표 값.
    ///
    /// 마지막으로 *존재하는* 값이 아니라 마지막 위치 그 자체를 읽습니다.
    pub fn latest(indicator: &[Option<f64>]) -> Option<f64> {
        indicator.last().copied().flatten()
    }

    /// 위치 `index`의 보조 값, 없거나 유한하지 않으면 0.
    pub fn value_at_or_zero(values: &[Option<f64>], index: usize) -> f64 {
        values
            .get(index)
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}
