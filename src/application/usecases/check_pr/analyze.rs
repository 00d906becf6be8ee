//! 타입 체커 실행 단계(변경 파일 검사 + 선택적 base 비교).

use anyhow::{Context, Result};
use tracing::info;

use crate::application::usecases::check_pr::{CheckPrUseCase, context::ExecutionContext};
use crate::domain::diagnostic::Report;

pub(super) struct Comparison {
    pub base: Report,
    pub head: Report,
}

pub(super) struct Analysis {
    /// 변경 파일만 검사한 결과(파일 코멘트/요약 기준)
    pub head: Report,
    pub comparison: Option<Comparison>,
}

pub(super) async fn analyze(
    use_case: &CheckPrUseCase<'_>,
    ctx: &ExecutionContext,
    changed_files: &[String],
) -> Result<Analysis> {
    use_case.reporter.section("Type Check");

    let head = if changed_files.is_empty() {
        use_case
            .reporter
            .status("Checker", "no matching files changed; skipping");
        Report::empty()
    } else {
        use_case.reporter.status(
            "Checker",
            &format!("checking {} changed file(s)", changed_files.len()),
        );
        use_case
            .checker
            .run(&ctx.run.checker, Some(changed_files))
            .await
            .context("type check of changed files failed")?
    };
    use_case.reporter.kv("Errors", &head.summary.error_count.to_string());
    use_case
        .reporter
        .kv("Warnings", &head.summary.warning_count.to_string());

    let comparison = if ctx.run.include_base_comparison {
        Some(compare_with_base(use_case, ctx).await?)
    } else {
        None
    };

    Ok(Analysis { head, comparison })
}

/// base 커밋에서 전체 검사 후 원래 체크아웃으로 반드시 되돌리고 head 전체 검사를 수행한다.
async fn compare_with_base(
    use_case: &CheckPrUseCase<'_>,
    ctx: &ExecutionContext,
) -> Result<Comparison> {
    let original = use_case
        .workspace
        .current_revision()
        .await
        .context("failed to read current checkout")?;

    use_case.reporter.status(
        "Compare",
        &format!("checking base {}", ctx.refs.short_base()),
    );
    info!(base = %ctx.refs.base_sha, %original, "compare: checking out base");
    use_case
        .workspace
        .checkout(&ctx.refs.base_sha)
        .await
        .context("failed to check out base commit")?;

    let base = use_case.checker.run(&ctx.run.checker, None).await;
    let restored = use_case.workspace.checkout(&original).await;

    restored.with_context(|| format!("failed to restore checkout {original}"))?;
    let base = base.context("type check of base commit failed")?;

    use_case.reporter.status("Compare", "checking head");
    let head = use_case
        .checker
        .run(&ctx.run.checker, None)
        .await
        .context("type check of head commit failed")?;

    Ok(Comparison { base, head })
}
