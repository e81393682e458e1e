//! 수치 시퀀스의 범위 요약 (처음/마지막/최소/최대).

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// 범위 요약.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RangeSummary {
    /// 첫 번째 값
    pub first: f64,
    /// 마지막 값
    pub last: f64,
    /// 최솟값
    pub min: f64,
    /// 최댓값
    pub max: f64,
}

impl RangeSummary {
    /// 처음 → 마지막 변화율(%).
    ///
    /// `first`가 0이면 정의되지 않으므로 `None`입니다.
    pub fn change_pct(&self) -> Option<f64> {
        if self.first == 0.0 {
            return None;
        }
        Some((self.last - self.first) / self.first * 100.0)
    }

    /// 최댓값과 최솟값의 차이.
    pub fn spread(&self) -> f64 {
        self.max - self.min
    }
}

/// 범위 요약 계산기.
///
/// # NaN 처리
///
/// `min`/`max`는 NaN 원소를 건너뛰고 계산합니다. 모든 원소가 NaN일 때만
/// 결과가 NaN입니다. `first`/`last`는 해당 위치의 값을 그대로 사용합니다.
pub struct RangeSummarizer;

impl RangeSummarizer {
    /// 시퀀스를 요약합니다.
    ///
    /// # Errors
    ///
    /// 빈 시퀀스는 호출자 계약 위반이며 [`CoreError::EmptySequence`]를 반환합니다.
    pub fn summarize(values: &[f64]) -> CoreResult<RangeSummary> {
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return Err(CoreError::EmptySequence(
                "요약할 값이 없습니다".to_string(),
            ));
        };

        let nan_count = values.iter().filter(|v| v.is_nan()).count();
        if nan_count > 0 {
            tracing::warn!(
                nan_count = nan_count,
                total = values.len(),
                "NaN values ignored in range summary"
            );
        }

        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((f64::NAN, f64::NAN));

        Ok(RangeSummary {
            first,
            last,
            min,
            max,
        })
    }

    /// 빈 시퀀스에서는 모든 필드가 0인 요약을 반환합니다.
    pub fn summarize_or_default(values: &[f64]) -> RangeSummary {
        Self::summarize(values).unwrap_or_default()
    }
}
