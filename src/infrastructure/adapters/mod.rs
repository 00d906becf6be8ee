//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod config_repository;
mod markdown_renderer;
mod path_resolver;
mod reporter;
mod target_resolver;
mod token_resolver;
mod type_checker;
mod vcs_factory;
mod workspace;

pub use config_repository::JsonConfigRepository;
pub use markdown_renderer::MarkdownRendererAdapter;
pub use path_resolver::{RepoPathResolver, relative_to_repo};
pub use reporter::ConsoleReporter;
pub use target_resolver::{ActionsTargetResolver, target_from_event};
pub use token_resolver::EnvTokenResolver;
pub use type_checker::PyrightChecker;
pub use vcs_factory::VcsFactoryAdapter;
pub use workspace::GitWorkspace;
