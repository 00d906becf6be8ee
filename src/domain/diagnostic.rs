//! 타입 체커 진단 결과 엔티티/값 객체.

use serde::Deserialize;

/// 0 기반 소스 좌표.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn is_empty(&self) -> bool {
        self.line == 0 && self.character == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// 시작/끝이 모두 비어 있으면 표시할 위치가 없는 범위다.
    pub fn is_empty(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Information,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Diagnostic {
    pub file: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub rule: Option<String>,
    #[serde(default)]
    pub range: Option<Range>,
}

impl Diagnostic {
    /// 표시 가능한 위치(비어 있지 않은 범위)만 반환한다.
    pub fn display_range(&self) -> Option<&Range> {
        self.range.as_ref().filter(|r| !r.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    #[serde(default)]
    pub error_count: u64,
    #[serde(default)]
    pub warning_count: u64,
    #[serde(default)]
    pub information_count: u64,
    #[serde(default)]
    pub files_analyzed: u64,
}

/// 타입 체커 1회 실행 결과.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Report {
    #[serde(rename = "generalDiagnostics", default)]
    pub diagnostics: Vec<Diagnostic>,
    pub summary: ReportSummary,
}

impl Report {
    /// 체커를 실행하지 않은 경우의 빈 리포트.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn issue_count(&self) -> u64 {
        self.summary.error_count + self.summary.warning_count
    }
}

/// base 대비 head 증감(head - base).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportDiff {
    pub file_diff: i64,
    pub warning_diff: i64,
    pub error_diff: i64,
}

impl ReportDiff {
    pub fn has_issue_increase(&self) -> bool {
        self.warning_diff > 0 || self.error_diff > 0
    }
}
