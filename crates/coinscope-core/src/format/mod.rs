//! 표시용 숫자 포맷팅.
//!
//! - `currency` - 로케일별 통화 포맷 (ICU 출력과 동일)
//! - `number` - 거래량/퍼센트/고정 소수 포맷

mod currency;
mod number;

pub use currency::*;
pub use number::*;
