//! 원하는 코멘트 집합 구성과 dry-run 출력 단계.

use crate::application::usecases::check_pr::{
    CheckPrUseCase, analyze::Analysis, context::ExecutionContext, reconcile::delete_subject,
};
use crate::domain::aggregate::group_by_file;
use crate::domain::comment::{CommentTarget, LogicalComment};
use crate::domain::keyer::{
    comparison_discriminant, derive_key, file_discriminant, summary_discriminant,
};
use crate::domain::marker;
use crate::domain::reconcile::ReconcilePlan;

/// 이번 실행의 원하는 코멘트 집합(파일 → 요약 → 비교 순).
pub(super) fn build_desired_comments(
    use_case: &CheckPrUseCase<'_>,
    ctx: &ExecutionContext,
    analysis: &Analysis,
) -> Vec<LogicalComment> {
    let prefix = ctx.run.marker_prefix.as_str();
    let number = ctx.target.number;
    let mut desired = Vec::new();

    if ctx.run.include_file_comments {
        let repo_name = ctx.repo_name();
        let groups = group_by_file(&analysis.head.diagnostics, |file| {
            use_case.path_resolver.relative_path(file, repo_name)
        });
        for group in groups {
            let key = derive_key(prefix, &file_discriminant(number, &group.path));
            let content = use_case.renderer.render_file_group(&group);
            desired.push(LogicalComment {
                body: marker::embed(&content, prefix, &key),
                subject_key: key,
                subject: format!("file {}", group.path),
                target: CommentTarget::File { path: group.path },
            });
        }
    }

    let key = derive_key(prefix, &summary_discriminant(number));
    let content = use_case.renderer.render_summary(&analysis.head);
    desired.push(LogicalComment {
        body: marker::embed(&content, prefix, &key),
        subject_key: key,
        subject: "summary".to_string(),
        target: CommentTarget::Issue,
    });

    if let Some(comparison) = &analysis.comparison {
        let key = derive_key(prefix, &comparison_discriminant(number));
        let content =
            use_case
                .renderer
                .render_comparison(&comparison.base, &comparison.head, &ctx.refs);
        desired.push(LogicalComment {
            body: marker::embed(&content, prefix, &key),
            subject_key: key,
            subject: "base comparison".to_string(),
            target: CommentTarget::Issue,
        });
    }

    desired
}

/// 계획과 본문을 출력만 한다(쓰기 호출 없음).
pub(super) fn print_dry_run(use_case: &CheckPrUseCase<'_>, plan: &ReconcilePlan) {
    use_case.reporter.section("Dry Run: Plan");
    for update in &plan.updates {
        let verb = if update.unchanged { "keep" } else { "update" };
        use_case.reporter.raw(&format!(
            "{verb:<7} {} (#{})",
            update.desired.subject, update.comment_id
        ));
    }
    for create in &plan.creates {
        use_case.reporter.raw(&format!("{:<7} {}", "create", create.subject));
    }
    for delete in &plan.deletes {
        use_case
            .reporter
            .raw(&format!("{:<7} {}", "delete", delete_subject(delete)));
    }

    use_case.reporter.section("Dry Run: Comment Bodies");
    let bodies = plan
        .updates
        .iter()
        .filter(|u| !u.unchanged)
        .map(|u| &u.desired)
        .chain(plan.creates.iter());
    for comment in bodies {
        use_case.reporter.raw(&format!("--- {} ---", comment.subject));
        use_case.reporter.raw(&comment.body);
    }
}
