//! 기존 코멘트 스냅샷과 변경 파일 목록을 동시에 가져오는 단계.

use anyhow::{Context, Result};
use tracing::warn;

use crate::application::usecases::check_pr::{CheckPrUseCase, context::ExecutionContext};
use crate::domain::comment::RemoteComment;

/// 이번 실행의 유일한 일관성 기준. 적용 도중 다시 조회하지 않는다.
pub(super) struct Snapshot {
    pub issue_comments: Vec<RemoteComment>,
    pub review_comments: Vec<RemoteComment>,
    pub changed_files: Vec<String>,
}

pub(super) async fn take_snapshot(
    use_case: &CheckPrUseCase<'_>,
    ctx: &ExecutionContext,
) -> Result<Snapshot> {
    use_case.reporter.section("Snapshot");

    let comments = async {
        futures::try_join!(
            ctx.vcs.list_issue_comments(),
            ctx.vcs.list_review_comments()
        )
    };
    let changed = use_case.workspace.changed_files(
        &ctx.refs.base_sha,
        &ctx.refs.head_sha,
        &ctx.run.file_extensions,
    );
    let (comments, changed) = futures::join!(comments, changed);

    let changed_files = changed.context("failed to list changed files")?;
    let (issue_comments, review_comments) = match comments {
        Ok(lists) => lists,
        Err(err) if ctx.run.dry_run => {
            // dry-run은 읽기 권한이 없어도 본문 미리보기를 보여준다.
            warn!(error = %format!("{err:#}"), "snapshot: listing comments failed in dry-run");
            use_case
                .reporter
                .status("GitHub", "could not list comments; planning against an empty snapshot");
            (Vec::new(), Vec::new())
        }
        Err(err) => return Err(err.context("failed to list existing comments")),
    };

    use_case
        .reporter
        .kv("Changed files", &changed_files.len().to_string());
    use_case
        .reporter
        .kv("Issue comments", &issue_comments.len().to_string());
    use_case
        .reporter
        .kv("Review comments", &review_comments.len().to_string());

    Ok(Snapshot {
        issue_comments,
        review_comments,
        changed_files,
    })
}
