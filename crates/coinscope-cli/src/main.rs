//! 암호화폐 분석 대시보드 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 조건을 만족하는 코인 검색
//! coinscope screener --min-volume 5000000 --min-rsi 20 --max-rsi 80 --trend bullish
//!
//! # 비트코인 30일 가격 요약
//! coinscope history bitcoin --days 30 --currency usd
//!
//! # 이더리움 기술적 분석
//! coinscope analyze ethereum --days 90
//!
//! # 시장 목록 검색
//! coinscope markets --search sol
//!
//! # 글로벌 지표, 공포·탐욕 지수, 트렌딩
//! coinscope overview
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use coinscope_cli::commands::{
    analyze::run_analyze, history::run_history, markets::run_markets, overview::run_overview,
    screener::run_screener, OutputFormat,
};
use coinscope_core::{
    init_logging, AppConfig, HistoryPeriod, LogConfig, ScreenerFilter, TrendFilter,
};
use coinscope_data::{DataError, MarketApiClient};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "coinscope")]
#[command(about = "Crypto analytics dashboard CLI - 시장 분석 서비스 조회", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (기본: config/default.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// 출력 형식 (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 거래량/RSI/추세 조건으로 코인 검색
    Screener {
        /// 최소 거래량
        #[arg(long, default_value_t = 1_000_000.0)]
        min_volume: f64,

        /// 최소 RSI
        #[arg(long, default_value_t = 30.0)]
        min_rsi: f64,

        /// 최대 RSI
        #[arg(long, default_value_t = 70.0)]
        max_rsi: f64,

        /// 추세 (all, bullish, bearish, sideways)
        #[arg(long, default_value = "all")]
        trend: TrendFilter,
    },

    /// 과거 가격 요약 (초기/최종/최고/최저)
    History {
        /// 코인 ID (예: bitcoin)
        coin: String,

        /// 기간 (1, 7, 30, 90, 365, max). 생략하면 설정값
        #[arg(short, long)]
        days: Option<HistoryPeriod>,

        /// 기준 통화 (예: usd, brl). 생략하면 설정값
        #[arg(long)]
        currency: Option<String>,
    },

    /// 기술적 분석 요약과 지표 패널
    Analyze {
        /// 코인 ID (예: ethereum)
        coin: String,

        /// 분석 기간 (일). 생략하면 설정값
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// 시가총액 순 시장 목록과 점유율
    Markets {
        /// 이름/심볼 검색어
        #[arg(short, long)]
        search: Option<String>,

        /// 조회할 코인 수. 생략하면 설정값
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// 글로벌 시장 지표, 공포·탐욕 지수, 트렌딩 코인
    Overview,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path),
        None => AppConfig::load_default(),
    }
    .context("설정 로드 실패")?;

    init_logging(LogConfig::from(&config.logging))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    let format = OutputFormat::parse(&cli.output)?;
    let client = MarketApiClient::from_config(&config.api)?;
    let display = &config.display;

    info!(base_url = client.base_url(), locale = %config.display.locale, "CLI started");

    let result = match cli.command {
        Commands::Screener {
            min_volume,
            min_rsi,
            max_rsi,
            trend,
        } => {
            let filter = ScreenerFilter {
                min_volume,
                min_rsi,
                max_rsi,
                trend,
            };
            run_screener(&client, &filter, display.locale, format).await
        }

        Commands::History {
            coin,
            days,
            currency,
        } => {
            let period = days.unwrap_or(display.history_days);
            let currency = currency.unwrap_or_else(|| display.currency.clone());
            run_history(&client, &coin, period, &currency, display.locale, format).await
        }

        Commands::Analyze { coin, days } => {
            let days = days.unwrap_or(display.analysis_days);
            run_analyze(&client, &coin, days, format).await
        }

        Commands::Markets { search, limit } => {
            let per_page = limit.unwrap_or(display.market_page_size);
            run_markets(
                &client,
                search.as_deref(),
                per_page,
                display.locale,
                format,
            )
            .await
        }

        Commands::Overview => run_overview(&client, display.locale, format).await,
    };

    match result {
        Ok(count) => {
            info!(count, "Command completed");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Command failed");
            if is_transient(&e) {
                warn!("일시적인 서비스 오류입니다. 잠시 후 다시 시도하세요");
            }
            Err(e)
        }
    }
}

/// 오류 체인에 재시도 가능한 데이터 오류가 있는지 확인합니다.
fn is_transient(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<DataError>())
        .any(DataError::is_transient)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_transient_through_context() {
        let unavailable = anyhow::Error::new(DataError::Status {
            status: 503,
            body: String::new(),
        })
        .context("시장 목록 조회 실패");
        assert!(is_transient(&unavailable));

        let rejected = anyhow::Error::new(DataError::InvalidData("../etc".into()))
            .context("과거 데이터 조회 실패");
        assert!(!is_transient(&rejected));

        assert!(!is_transient(&anyhow::anyhow!("Invalid format: csv")));
    }

    #[test]
    fn test_cli_parses_overview() {
        let cli = Cli::try_parse_from(["coinscope", "--output", "json", "overview"]).unwrap();
        assert!(matches!(cli.command, Commands::Overview));
        assert_eq!(cli.output, "json");
    }
}
