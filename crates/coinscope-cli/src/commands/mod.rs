//! CLI 명령어 구현 모듈.
//!
//! 각 명령은 `run_*`(조회 후 출력)과 `render_*`(출력 줄 생성)로 나뉩니다.
//! `render_*`는 순수 함수이므로 네트워크 없이 테스트할 수 있습니다.

pub mod analyze;
pub mod history;
pub mod markets;
pub mod overview;
pub mod screener;

use anyhow::Result;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 사람이 읽는 표 형식
    #[default]
    Table,
    /// JSON
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 출력 줄을 표준 출력에 씁니다.
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("csv").is_err());
    }
}
