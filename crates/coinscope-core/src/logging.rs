//! tracing 기반 로깅 초기화.
//!
//! 출력 형식:
//! - **pretty**: 개발용 여러 줄 형식
//! - **json**: 로그 수집기용 JSON 형식
//! - **compact**: CLI 기본값인 한 줄 형식

use crate::config::LoggingConfig;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// 로그 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 여러 줄 형식 (개발용)
    Pretty,
    /// JSON 형식
    Json,
    /// 한 줄 형식
    #[default]
    Compact,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

/// 로깅 초기화 옵션.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// 필터 지시자 (예: "info", "coinscope_data=debug")
    pub level: String,
    /// 출력 형식
    pub format: LogFormat,
    /// span 진입/종료 이벤트 출력 여부
    pub with_span_events: bool,
    /// 파일명과 줄 번호 출력 여부
    pub with_file: bool,
    /// 대상 모듈 경로 출력 여부
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Compact,
            with_span_events: false,
            with_file: false,
            with_target: true,
        }
    }
}

impl LogConfig {
    /// 필터 지시자로 설정을 생성합니다.
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    /// 출력 형식을 지정합니다.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// span 이벤트 출력을 켜거나 끕니다.
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.with_span_events = enabled;
        self
    }

    /// `RUST_LOG`, `LOG_FORMAT` 환경 변수에서 설정을 생성합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let level = std::env::var("RUST_LOG").unwrap_or(defaults.level);
        let format = std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.format);

        Self {
            level,
            format,
            ..Default::default()
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self::new(config.level.clone()).with_format(config.format)
    }
}

/// 로깅을 초기화합니다.
///
/// `RUST_LOG`가 설정되어 있으면 `config.level`보다 우선합니다.
/// 로그는 표준 에러로 출력되어 CLI의 표준 출력과 섞이지 않습니다.
///
/// # 예제
///
/// ```no_run
/// use coinscope_core::logging::{init_logging, LogConfig, LogFormat};
///
/// init_logging(LogConfig::new("debug").with_format(LogFormat::Json)).unwrap();
/// ```
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let span_events = if config.with_span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(config.with_file)
        .with_line_number(config.with_file)
        .with_target(config.with_target)
        .with_span_events(span_events);

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.format {
        LogFormat::Pretty => registry.with(base.pretty()).try_init()?,
        LogFormat::Json => registry.with(base.json()).try_init()?,
        LogFormat::Compact => registry.with(base.compact()).try_init()?,
    }

    tracing::debug!(
        format = ?config.format,
        level = %config.level,
        "Logging initialized"
    );

    Ok(())
}

/// 환경 변수로 로깅을 초기화합니다.
pub fn init_logging_from_env() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LogConfig::from_env())
}

/// 코인 컨텍스트 필드가 포함된 span을 생성합니다.
#[macro_export]
macro_rules! coin_span {
    ($name:expr, $coin:expr) => {
        tracing::info_span!($name, coin = %$coin)
    };
    ($name:expr, $coin:expr, $days:expr) => {
        tracing::info_span!($name, coin = %$coin, days = %$days)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert!("verbose".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_config_builder() {
        let config = LogConfig::new("debug")
            .with_format(LogFormat::Json)
            .with_span_events(true);

        assert_eq!(config.level, "debug");
        assert_eq!(config.format, LogFormat::Json);
        assert!(config.with_span_events);
    }

    #[test]
    fn test_from_logging_config() {
        let logging = LoggingConfig {
            level: "coinscope_data=debug".to_string(),
            format: LogFormat::Pretty,
        };
        let config = LogConfig::from(&logging);

        assert_eq!(config.level, "coinscope_data=debug");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
