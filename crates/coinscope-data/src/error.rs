//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 네트워크 전송 실패 (연결, 타임아웃 등)
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx가 아닌 HTTP 응답
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP 상태 코드
        status: u16,
        /// 응답 본문
        body: String,
    },

    /// 응답 본문 파싱 실패
    #[error("Parse error: {0}")]
    Parse(String),

    /// 잘못된 요청 인자
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// 클라이언트 설정 오류
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DataError {
    /// 일시적 오류(재시도하면 성공할 수 있는 오류)인지 확인합니다.
    pub fn is_transient(&self) -> bool {
        match self {
            DataError::Network(_) => true,
            DataError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DataError::Parse(err.to_string())
        } else if err.is_builder() {
            DataError::Config(err.to_string())
        } else {
            DataError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
