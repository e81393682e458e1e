//! 대시보드 코어의 도메인 모델.

mod classify;
mod global;
mod market;
mod screener;
mod series;
mod signal;
mod summary;

pub use classify::*;
pub use global::*;
pub use market::*;
pub use screener::*;
pub use series::*;
pub use signal::*;
pub use summary::*;
