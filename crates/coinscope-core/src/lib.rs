//! # Coinscope Core
//!
//! 암호화폐 대시보드의 시계열 정렬/요약 파이프라인을 제공합니다.
//!
//! 외부 분석 서비스가 반환한 희소하고 길이가 어긋난 수치 시퀀스를
//! 차트용 시리즈와 요약 값으로 변환합니다:
//! - 가격/지표 시퀀스의 위치 기반 정렬
//! - 범위 요약 (처음/마지막/최소/최대)
//! - 추세, RSI, 신호 분류
//! - 스크리너 쿼리 생성 및 결과 해석
//! - 로케일별 통화/거래량 포맷
//! - 설정 관리
//! - 로깅 인프라
//!
//! 모든 연산은 동기 순수 함수이며 공유 가변 상태가 없습니다.

pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod json;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use format::*;
pub use logging::*;
pub use types::*;
