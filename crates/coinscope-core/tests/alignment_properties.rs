//! 시계열 정렬/요약 속성 테스트
//!
//! 임의의 가격/지표 시퀀스에 대해 정렬 결과가 인덱스 대응을 유지하는지 확인

use coinscope_core::{PairedSeries, RangeSummarizer, SeriesAligner};
use proptest::prelude::*;

fn indicator_strategy() -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::of(-1e6f64..1e6f64), 0..64)
}

fn price_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1e6f64, 0..64)
}

proptest! {
    #[test]
    fn aligned_length_never_exceeds_shorter_input(
        prices in price_strategy(),
        indicator in indicator_strategy(),
    ) {
        let points = SeriesAligner::align(&prices, &indicator);
        prop_assert!(points.len() <= prices.len().min(indicator.len()));
    }

    #[test]
    fn aligned_indices_strictly_increase(
        prices in price_strategy(),
        indicator in indicator_strategy(),
    ) {
        let points = SeriesAligner::align(&prices, &indicator);
        for pair in points.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
    }

    #[test]
    fn aligned_points_match_source_positions(
        prices in price_strategy(),
        indicator in indicator_strategy(),
    ) {
        for point in SeriesAligner::align(&prices, &indicator) {
            prop_assert_eq!(point.price, prices[point.index]);
            prop_assert_eq!(Some(point.indicator), indicator[point.index]);
        }
    }

    #[test]
    fn aligned_count_equals_present_positions(
        prices in price_strategy(),
        indicator in indicator_strategy(),
    ) {
        let paired = PairedSeries::new(&prices, &indicator);
        let present = (0..paired.len())
            .filter(|&i| indicator[i].is_some())
            .count();
        prop_assert_eq!(paired.aligned().len(), present);
    }

    #[test]
    fn summary_extremes_bound_every_element(
        values in prop::collection::vec(-1e9f64..1e9f64, 1..64),
    ) {
        let summary = RangeSummarizer::summarize(&values).unwrap();
        prop_assert_eq!(summary.first, values[0]);
        prop_assert_eq!(summary.last, values[values.len() - 1]);
        for v in &values {
            prop_assert!(summary.min <= *v && *v <= summary.max);
        }
    }
}
