//! VCS 게이트웨이 팩토리 포트 구현 어댑터.

use crate::application::config::RunConfig;
use crate::application::ports::{VcsFactory, VcsGateway};
use crate::domain::target::PullRequestTarget;
use crate::infrastructure::vcs;

/// VCS 게이트웨이 팩토리 어댑터.
pub struct VcsFactoryAdapter;

impl VcsFactory for VcsFactoryAdapter {
    fn build(&self, target: &PullRequestTarget, config: &RunConfig) -> Box<dyn VcsGateway> {
        vcs::build_vcs_client(target, config)
    }
}
