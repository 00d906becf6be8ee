//! 한 번의 PR 이벤트 실행 단위 값 객체.

/// CLI에서 넘어오는 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// PR URL(없으면 GitHub Actions 이벤트 파일에서 찾는다)
    pub pr_url: Option<String>,
    /// 코멘트를 게시하지 않고 계획/본문만 출력
    pub dry_run: bool,
    pub include_file_comments: Option<bool>,
    pub include_base_comparison: Option<bool>,
    pub fail_on_issue_increase: Option<bool>,
}

/// PR의 base/head 커밋.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRefs {
    pub head_sha: String,
    pub base_sha: String,
}

impl PullRefs {
    pub fn short_base(&self) -> &str {
        short_sha(&self.base_sha)
    }

    pub fn short_head(&self) -> &str {
        short_sha(&self.head_sha)
    }
}

fn short_sha(sha: &str) -> &str {
    sha.get(..7).unwrap_or(sha)
}
