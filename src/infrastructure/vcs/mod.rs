//! VCS 연동 계층.
//! PR 대상 정보로 GitHub 구현체를 생성한다.

pub mod github;

use crate::application::config::RunConfig;
use crate::application::ports::VcsGateway;
use crate::domain::target::PullRequestTarget;

pub fn build_vcs_client(target: &PullRequestTarget, config: &RunConfig) -> Box<dyn VcsGateway> {
    Box::new(github::GitHubClient::new(
        target.host.clone(),
        target.owner.clone(),
        target.repo.clone(),
        target.number,
        config.token.clone(),
        config.api_base.clone(),
    ))
}
