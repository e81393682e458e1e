//! 대시보드 코어의 에러 타입.
//!
//! 코어 연산은 대부분 잘못된 입력에도 기본값으로 성능 저하(degrade)하며,
//! 여기 정의된 에러는 호출자 계약 위반에만 사용됩니다.

use thiserror::Error;

/// 코어 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 빈 시퀀스에 대한 요약 요청
    #[error("빈 시퀀스: {0}")]
    EmptySequence(String),

    /// 스크리너 필터 범위 위반
    #[error("잘못된 스크리너 필터: {0}")]
    InvalidFilter(String),

    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),
}

/// 코어 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// 호출자 계약 위반(개발 중 즉시 드러나야 하는 에러)인지 확인합니다.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CoreError::EmptySequence(_))
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
