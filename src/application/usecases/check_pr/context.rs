//! 실행 컨텍스트(설정/대상/VCS/커밋) 준비 단계.

use anyhow::{Context, Result};

use crate::application::config::RunConfig;
use crate::application::ports::VcsGateway;
use crate::application::usecases::check_pr::CheckPrUseCase;
use crate::domain::run::{PullRefs, RunOptions};
use crate::domain::target::PullRequestTarget;

/// 실행 한 번 동안 모든 단계에 인자로 전달되는 상태.
pub(super) struct ExecutionContext {
    pub run: RunConfig,
    pub target: PullRequestTarget,
    pub vcs: Box<dyn VcsGateway>,
    pub refs: PullRefs,
}

impl ExecutionContext {
    /// 상대 경로 계산 기준 저장소 이름(설정이 없으면 대상 저장소 이름).
    pub fn repo_name(&self) -> &str {
        self.run.repo_name.as_deref().unwrap_or(&self.target.repo)
    }
}

/// 설정 확정(토큰 검증 포함)을 네트워크 호출보다 먼저 수행한다.
pub(super) async fn load_execution_context(
    use_case: &CheckPrUseCase<'_>,
    options: &RunOptions,
) -> Result<ExecutionContext> {
    use_case.reporter.section("Load Config");
    let config = use_case
        .config_repo
        .load()
        .context("failed to load pr-typecheck config")?;
    let token = use_case.token_resolver.resolve(&config)?;
    if let Some(source) = &token.source {
        use_case.reporter.kv("Token", source);
    }
    let run = config.resolve(options, token)?;

    let target = use_case
        .target_resolver
        .resolve(options.pr_url.as_deref())
        .context("failed to resolve pull request target")?;

    let vcs = use_case.vcs_factory.build(&target, &run);

    use_case.reporter.section("Fetch Target");
    use_case.reporter.kv("Pull request", &target.display());
    use_case.reporter.status("GitHub", "fetching pull request refs");
    let refs = vcs.fetch_pull_refs().await?;
    use_case.reporter.kv("Base SHA", &refs.base_sha);
    use_case.reporter.kv("Head SHA", &refs.head_sha);

    Ok(ExecutionContext {
        run,
        target,
        vcs,
        refs,
    })
}
