//! PR 타입 검사 실행의 전체 오케스트레이션 유스케이스.

mod analyze;
mod context;
mod publish;
pub mod reconcile;
mod snapshot;

use anyhow::{Result, bail};

use crate::application::ports::{
    CommentRenderer, ConfigRepository, PathResolver, Reporter, TargetResolver, TokenResolver,
    TypeChecker, VcsFactory, Workspace,
};
use crate::domain::policy::{IssueVerdict, issue_increase_verdict};
use crate::domain::reconcile::{PlanRules, plan_reconciliation};
use crate::domain::run::RunOptions;

use analyze::analyze;
use context::load_execution_context;
use publish::{build_desired_comments, print_dry_run};
use reconcile::{ActionOutcome, ReconcileReport, apply_plan};
use snapshot::take_snapshot;

/// 설정 확정부터 타입 검사, 코멘트 조정, 최종 판정까지 전체 흐름을 조율한다.
pub struct CheckPrUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub token_resolver: &'a dyn TokenResolver,
    pub target_resolver: &'a dyn TargetResolver,
    pub vcs_factory: &'a dyn VcsFactory,
    pub checker: &'a dyn TypeChecker,
    pub workspace: &'a dyn Workspace,
    pub path_resolver: &'a dyn PathResolver,
    pub renderer: &'a dyn CommentRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> CheckPrUseCase<'a> {
    /// 본 실행 진입점.
    /// 코멘트 적용 실패와 이슈 증가 판정을 모두 모아 마지막에 한 번만 실패시킨다.
    pub async fn execute(&self, options: RunOptions) -> Result<()> {
        self.reporter.section("Session");
        self.reporter.kv(
            "Target",
            options.pr_url.as_deref().unwrap_or("(GitHub Actions event)"),
        );
        self.reporter.kv(
            "Mode",
            if options.dry_run {
                "dry-run"
            } else {
                "post-comment"
            },
        );

        let ctx = load_execution_context(self, &options).await?;
        let snapshot = take_snapshot(self, &ctx).await?;
        let analysis = analyze(self, &ctx, &snapshot.changed_files).await?;
        let desired = build_desired_comments(self, &ctx, &analysis);

        let rules = PlanRules {
            marker_prefix: &ctx.run.marker_prefix,
            bot_login: &ctx.run.bot_login,
            migrate_legacy_markers: ctx.run.migrate_legacy_markers,
        };
        let plan = plan_reconciliation(
            &rules,
            &desired,
            &snapshot.issue_comments,
            &snapshot.review_comments,
        );

        self.reporter.section("Reconcile");
        self.reporter.kv(
            "Plan",
            &format!(
                "{} create, {} update, {} delete",
                plan.creates.len(),
                plan.updates.iter().filter(|u| !u.unchanged).count(),
                plan.deletes.len()
            ),
        );

        let report = if ctx.run.dry_run {
            print_dry_run(self, &plan);
            ReconcileReport::default()
        } else {
            apply_plan(&*ctx.vcs, &plan, &ctx.refs.head_sha, self.reporter).await
        };

        let verdict = if ctx.run.fail_on_issue_increase {
            issue_increase_verdict(
                &analysis.head,
                analysis.comparison.as_ref().map(|c| (&c.base, &c.head)),
            )
        } else {
            IssueVerdict::Pass
        };

        self.finish(&report, verdict)
    }

    fn finish(&self, report: &ReconcileReport, verdict: IssueVerdict) -> Result<()> {
        let mut problems: Vec<String> = report
            .failures()
            .into_iter()
            .filter_map(|outcome| match outcome {
                ActionOutcome::Failed { subject, reason } => Some(format!("{subject}: {reason}")),
                _ => None,
            })
            .collect();
        if let IssueVerdict::Increased { reason } = verdict {
            problems.push(reason);
        }

        self.reporter.section("Done");
        if problems.is_empty() {
            self.reporter.status("Result", "ok");
            return Ok(());
        }

        for problem in &problems {
            self.reporter.status("Result", problem);
        }
        bail!(
            "pr-typecheck failed ({} problem(s)):\n- {}",
            problems.len(),
            problems.join("\n- ")
        )
    }
}
