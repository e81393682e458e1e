//! 시장 분석 대시보드 CLI.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 스크리너, 과거 가격, 기술적 분석, 시장 목록, 시장 개요 명령
//! - 표/JSON 출력

pub mod commands;

pub use commands::*;
