//! 실행 결과 판정 정책(이슈 증가 시 실패 처리).

use crate::domain::aggregate::diff_reports;
use crate::domain::diagnostic::Report;

/// 이슈 증가 판정 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueVerdict {
    Pass,
    Increased { reason: String },
}

/// base 비교 리포트가 있으면 그것만 기준으로 판정한다.
/// 없으면 빈 리포트를 기준선으로 보고 head에 error/warning이 하나라도 있으면 증가로 본다.
pub fn issue_increase_verdict(head: &Report, comparison: Option<(&Report, &Report)>) -> IssueVerdict {
    match comparison {
        Some((base, compared_head)) => {
            let diff = diff_reports(base, compared_head);
            if diff.has_issue_increase() {
                IssueVerdict::Increased {
                    reason: format!(
                        "issues increased against base (errors {:+}, warnings {:+})",
                        diff.error_diff, diff.warning_diff
                    ),
                }
            } else {
                IssueVerdict::Pass
            }
        }
        None if head.issue_count() > 0 => IssueVerdict::Increased {
            reason: format!(
                "type check reported {} error(s) and {} warning(s)",
                head.summary.error_count, head.summary.warning_count
            ),
        },
        None => IssueVerdict::Pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::ReportSummary;

    fn report(errors: u64, warnings: u64) -> Report {
        Report {
            diagnostics: Vec::new(),
            summary: ReportSummary {
                error_count: errors,
                warning_count: warnings,
                information_count: 0,
                files_analyzed: 1,
            },
        }
    }

    #[test]
    fn comparison_takes_precedence_over_plain_summary() {
        // head에 error가 있어도 base보다 줄었으면 통과한다.
        let changed_files = report(3, 0);
        let base = report(5, 1);
        let head = report(3, 1);
        assert_eq!(
            issue_increase_verdict(&changed_files, Some((&base, &head))),
            IssueVerdict::Pass
        );
    }

    #[test]
    fn comparison_detects_increase() {
        let base = report(0, 2);
        let head = report(1, 0);
        let verdict = issue_increase_verdict(&head, Some((&base, &head)));
        assert!(matches!(verdict, IssueVerdict::Increased { reason } if reason.contains("errors +1")));
    }

    #[test]
    fn plain_summary_uses_empty_baseline() {
        assert_eq!(issue_increase_verdict(&report(0, 0), None), IssueVerdict::Pass);
        assert!(matches!(
            issue_increase_verdict(&report(0, 1), None),
            IssueVerdict::Increased { .. }
        ));
    }
}
