//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::check_pr::CheckPrUseCase;
use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::infrastructure::adapters::{
    ActionsTargetResolver, ConsoleReporter, EnvTokenResolver, GitWorkspace, JsonConfigRepository,
    MarkdownRendererAdapter, PyrightChecker, RepoPathResolver, VcsFactoryAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    token_resolver: EnvTokenResolver,
    target_resolver: ActionsTargetResolver,
    vcs_factory: VcsFactoryAdapter,
    checker: PyrightChecker,
    workspace: GitWorkspace,
    path_resolver: RepoPathResolver,
    renderer: MarkdownRendererAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            token_resolver: EnvTokenResolver,
            target_resolver: ActionsTargetResolver,
            vcs_factory: VcsFactoryAdapter,
            checker: PyrightChecker,
            workspace: GitWorkspace,
            path_resolver: RepoPathResolver,
            renderer: MarkdownRendererAdapter,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// PR 타입 검사 유스케이스를 생성한다.
    pub fn check_usecase(&self) -> CheckPrUseCase<'_> {
        CheckPrUseCase {
            config_repo: &self.config_repo,
            token_resolver: &self.token_resolver,
            target_resolver: &self.target_resolver,
            vcs_factory: &self.vcs_factory,
            checker: &self.checker,
            workspace: &self.workspace,
            path_resolver: &self.path_resolver,
            renderer: &self.renderer,
            reporter: &self.reporter,
        }
    }
}
