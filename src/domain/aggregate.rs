//! 진단 리포트 집계 규칙(파일별 그룹화, base/head 비교).

use std::collections::HashMap;

use crate::domain::diagnostic::{Diagnostic, Report, ReportDiff};

/// 한 파일(저장소 기준 상대 경로)에 속한 진단 묶음.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub path: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// 진단을 상대 경로별로 묶는다.
/// 그룹 순서는 파일이 처음 등장한 순서, 그룹 내부는 입력 순서를 유지한다.
pub fn group_by_file<F>(diagnostics: &[Diagnostic], relative_path: F) -> Vec<FileGroup>
where
    F: Fn(&str) -> String,
{
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for diagnostic in diagnostics {
        let path = relative_path(&diagnostic.file);
        match index.get(&path) {
            Some(&idx) => groups[idx].diagnostics.push(diagnostic.clone()),
            None => {
                index.insert(path.clone(), groups.len());
                groups.push(FileGroup {
                    path,
                    diagnostics: vec![diagnostic.clone()],
                });
            }
        }
    }

    groups
}

pub fn diff_reports(base: &Report, head: &Report) -> ReportDiff {
    ReportDiff {
        file_diff: signed_diff(base.summary.files_analyzed, head.summary.files_analyzed),
        warning_diff: signed_diff(base.summary.warning_count, head.summary.warning_count),
        error_diff: signed_diff(base.summary.error_count, head.summary.error_count),
    }
}

fn signed_diff(base: u64, head: u64) -> i64 {
    i64::try_from(head)
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(base).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostic::{ReportSummary, Severity};

    fn diag(file: &str, message: &str) -> Diagnostic {
        Diagnostic {
            file: file.to_string(),
            severity: Severity::Error,
            message: message.to_string(),
            rule: None,
            range: None,
        }
    }

    fn strip(path: &str) -> String {
        path.trim_start_matches("/repo/").to_string()
    }

    #[test]
    fn groups_keep_first_seen_file_order_and_emission_order() {
        let diagnostics = vec![
            diag("/repo/b.py", "b1"),
            diag("/repo/a.py", "a1"),
            diag("/repo/b.py", "b2"),
            diag("/repo/a.py", "a2"),
            diag("/repo/b.py", "b3"),
        ];

        let groups = group_by_file(&diagnostics, strip);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].path, "b.py");
        assert_eq!(groups[1].path, "a.py");
        let messages: Vec<_> = groups[0]
            .diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, ["b1", "b2", "b3"]);
    }

    #[test]
    fn unresolved_paths_are_grouped_not_dropped() {
        let diagnostics = vec![diag("/elsewhere/x.py", "x"), diag("/repo/a.py", "a")];
        let groups = group_by_file(&diagnostics, strip);
        assert_eq!(groups[0].path, "/elsewhere/x.py");
        assert_eq!(groups[1].path, "a.py");
    }

    #[test]
    fn diff_is_head_minus_base() {
        let base = Report {
            diagnostics: Vec::new(),
            summary: ReportSummary {
                files_analyzed: 2,
                warning_count: 2,
                error_count: 0,
                information_count: 0,
            },
        };
        let head = Report {
            diagnostics: Vec::new(),
            summary: ReportSummary {
                files_analyzed: 2,
                warning_count: 0,
                error_count: 1,
                information_count: 3,
            },
        };

        let diff = diff_reports(&base, &head);
        assert_eq!(diff.file_diff, 0);
        assert_eq!(diff.warning_diff, -2);
        assert_eq!(diff.error_diff, 1);
        assert!(diff.has_issue_increase());
    }
}
