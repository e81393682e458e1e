//! 설정 관리.
//!
//! 설정은 기본값 → TOML 파일 → 환경 변수(`COINSCOPE__SECTION__KEY`) 순으로
//! 덮어씁니다. 모든 섹션과 필드는 기본값을 가지므로 파일이 비어 있어도 됩니다.

use crate::error::CoreResult;
use crate::logging::LogFormat;
use crate::types::{HistoryPeriod, Locale};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 환경 변수 접두사.
pub const ENV_PREFIX: &str = "COINSCOPE";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 외부 시장 데이터 API 설정
    pub api: ApiConfig,
    /// 표시 설정
    pub display: DisplayConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
}

/// 외부 시장 데이터 API 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// 서비스 기본 URL (경로 제외)
    pub base_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_secs: 30,
        }
    }
}

/// 표시 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 숫자/날짜 로케일
    pub locale: Locale,
    /// 기준 통화 코드
    pub currency: String,
    /// 과거 데이터 기본 기간
    pub history_days: HistoryPeriod,
    /// 기술적 분석 기본 기간 (일)
    pub analysis_days: u32,
    /// 시장 목록 페이지 크기
    pub market_page_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr,
            currency: "usd".to_string(),
            history_days: HistoryPeriod::Days30,
            analysis_days: 90,
            market_page_size: 50,
        }
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 필터 지시자
    pub level: String,
    /// 출력 형식 (pretty, json, compact)
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        Self::load_with(Some(path.as_ref()))
    }

    /// 기본 경로에서 설정을 로드합니다. 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load_default() -> CoreResult<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        Self::load_with(path.exists().then_some(path))
    }

    /// 선택적 파일과 환경 변수에서 설정을 로드합니다.
    pub fn load_with(path: Option<&Path>) -> CoreResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
