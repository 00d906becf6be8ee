//! 병합된 설정(토큰 값 제외)을 확인하는 `config` 서브커맨드 유스케이스.

use anyhow::{Context, Result};

use crate::application::ports::ConfigRepository;

pub struct InspectConfigUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
}

impl<'a> InspectConfigUseCase<'a> {
    /// 탐색 경로, 적용된 값, 토큰 출처를 담은 JSON 문자열.
    pub fn execute(&self) -> Result<String> {
        self.config_repo
            .inspect_pretty_json()
            .context("failed to inspect pr-typecheck config")
    }
}
