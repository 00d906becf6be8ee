//! 체커가 보고한 절대 경로를 저장소 기준 상대 경로로 바꾸는 어댑터.

use crate::application::ports::PathResolver;

/// 경로 세그먼트에서 저장소 이름을 찾아 그 뒤만 남긴다.
///
/// Actions 러너는 `<work>/<repo>/<repo>/...` 형태로 체크아웃하므로
/// 저장소 이름이 연달아 두 번 나오는 위치를 먼저 찾는다.
/// 어디에도 없으면 입력을 그대로 돌려준다.
pub struct RepoPathResolver;

impl PathResolver for RepoPathResolver {
    fn relative_path(&self, absolute_path: &str, repo_name: &str) -> String {
        relative_to_repo(absolute_path, repo_name)
    }
}

pub fn relative_to_repo(absolute_path: &str, repo_name: &str) -> String {
    if repo_name.is_empty() {
        return absolute_path.to_string();
    }

    let normalized = absolute_path.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').collect();

    let doubled = segments
        .windows(2)
        .position(|pair| pair[0] == repo_name && pair[1] == repo_name)
        .map(|idx| idx + 2);
    let first = || segments.iter().position(|s| *s == repo_name).map(|idx| idx + 1);

    match doubled.or_else(first) {
        Some(start) if start < segments.len() => segments[start..].join("/"),
        _ => absolute_path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_actions_doubled_checkout_layout() {
        assert_eq!(
            relative_to_repo("/home/runner/work/proj/proj/main.py", "proj"),
            "main.py"
        );
        assert_eq!(
            relative_to_repo("/home/runner/work/proj/proj/pkg/proj/mod.py", "proj"),
            "pkg/proj/mod.py"
        );
    }

    #[test]
    fn falls_back_to_first_occurrence() {
        assert_eq!(relative_to_repo("/src/proj/pkg/a.py", "proj"), "pkg/a.py");
    }

    #[test]
    fn unknown_layout_is_returned_unchanged() {
        assert_eq!(relative_to_repo("/tmp/other/a.py", "proj"), "/tmp/other/a.py");
        assert_eq!(relative_to_repo("/tmp/proj", "proj"), "/tmp/proj");
        assert_eq!(relative_to_repo("pkg/a.py", ""), "pkg/a.py");
    }

    #[test]
    fn segment_must_match_exactly() {
        assert_eq!(
            relative_to_repo("/work/proj-old/proj-old/a.py", "proj"),
            "/work/proj-old/proj-old/a.py"
        );
    }
}
