//! GitHub 토큰 해석 포트 구현.

use anyhow::Result;

use crate::application::config::{Config, TokenResolution};
use crate::application::ports::TokenResolver;
use crate::infrastructure::config::resolve_github_token;

/// 설정(token/env)에 기반해 런타임 토큰을 해석한다.
pub struct EnvTokenResolver;

impl TokenResolver for EnvTokenResolver {
    fn resolve(&self, config: &Config) -> Result<TokenResolution> {
        Ok(resolve_github_token(config))
    }
}
