//! PR 코멘트용 Markdown 렌더링 모듈.
//!
//! 같은 입력에는 항상 같은 본문을 만든다(재실행 시 불필요한 수정 방지).

use crate::domain::aggregate::{FileGroup, diff_reports};
use crate::domain::diagnostic::{Diagnostic, Report, Severity};
use crate::domain::run::PullRefs;

/// 파일 하나의 진단 목록 코멘트 본문을 생성한다.
pub fn render_file_group_markdown(group: &FileGroup) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "### Type check results for `{}`\n\n",
        group.path.replace('`', "'")
    ));
    for diagnostic in &group.diagnostics {
        out.push_str(&format_diagnostic_line(diagnostic));
        out.push('\n');
    }
    out
}

/// 진단 1건을 한 줄 목록 항목으로 만든다.
/// 위치가 없는 진단도 위치 부분만 생략하고 그대로 출력한다.
pub fn format_diagnostic_line(diagnostic: &Diagnostic) -> String {
    let mut line = String::from("- ");
    if let Some(glyph) = severity_glyph(diagnostic.severity) {
        line.push_str(glyph);
        line.push(' ');
    }
    if let Some(range) = diagnostic.display_range() {
        line.push_str(&format!(
            "Line {}:{}: ",
            u64::from(range.start.line) + 1,
            u64::from(range.start.character) + 1
        ));
    }
    line.push_str(&normalize_message(&diagnostic.message));
    if let Some(rule) = diagnostic.rule.as_deref().filter(|r| !r.is_empty()) {
        line.push_str(&format!(" ({rule})"));
    }
    line
}

/// 전체 요약 코멘트 본문을 생성한다.
pub fn render_summary_markdown(report: &Report) -> String {
    let summary = &report.summary;
    let mut out = String::new();
    out.push_str("## Type check summary\n\n");
    out.push_str(&format!("- Files analyzed: {}\n", summary.files_analyzed));

    if summary.error_count == 0 && summary.warning_count == 0 {
        out.push_str("\n:white_check_mark: No issues found.\n");
        return out;
    }

    if summary.error_count > 0 {
        out.push_str(&format!("- :x: Errors: {}\n", summary.error_count));
    }
    if summary.warning_count > 0 {
        out.push_str(&format!("- :warning: Warnings: {}\n", summary.warning_count));
    }
    out
}

/// base/head 비교 표 코멘트 본문을 생성한다.
pub fn render_comparison_markdown(base: &Report, head: &Report, refs: &PullRefs) -> String {
    let diff = diff_reports(base, head);
    let mut out = String::new();
    out.push_str("## Base comparison\n\n");
    out.push_str("| Run | Files analyzed | Warnings | Errors |\n");
    out.push_str("|---|---:|---:|---:|\n");
    out.push_str(&format!(
        "| Base (`{}`) | {} | {} | {} |\n",
        refs.short_base(),
        base.summary.files_analyzed,
        base.summary.warning_count,
        base.summary.error_count
    ));
    out.push_str(&format!(
        "| Head (`{}`) | {} | {} | {} |\n",
        refs.short_head(),
        head.summary.files_analyzed,
        head.summary.warning_count,
        head.summary.error_count
    ));
    out.push_str(&format!(
        "| Diff | {} | {} | {} |\n",
        diff_cell(diff.file_diff),
        diff_cell(diff.warning_diff),
        diff_cell(diff.error_diff)
    ));
    out
}

fn severity_glyph(severity: Severity) -> Option<&'static str> {
    match severity {
        Severity::Error => Some(":x:"),
        Severity::Warning => Some(":warning:"),
        Severity::Information => None,
    }
}

/// 여러 줄 메시지를 한 줄로 합치고 `"`를 backtick으로 바꾼다.
fn normalize_message(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('"', "`")
}

fn diff_cell(value: i64) -> String {
    match value.signum() {
        1 => format!(":arrow_up: {value:+}"),
        -1 => format!(":arrow_down: {value}"),
        _ => ":heavy_minus_sign: 0".to_string(),
    }
}
