//! 설정 값(token/env)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::{Config, TokenResolution};

/// GitHub 토큰을 해석한다. `github.token` 우선, 없으면 `token_env`(기본 GITHUB_TOKEN).
pub fn resolve_github_token(config: &Config) -> TokenResolution {
    if let Some(token) = config
        .github
        .token
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return TokenResolution {
            token: Some(token.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let env_name = config.token_env();
    match env::var(&env_name).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => TokenResolution {
            token: Some(v),
            source: Some(format!("env:{env_name}")),
        },
        _ => TokenResolution {
            token: None,
            source: Some(format!("env:{env_name} (missing)")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_token_wins() {
        let mut config = Config::default();
        config.github.token = Some("  abc ".to_string());
        config.github.token_env = Some("PR_TYPECHECK_TEST_UNSET_TOKEN".to_string());
        let resolved = resolve_github_token(&config);
        assert_eq!(resolved.token.as_deref(), Some("abc"));
        assert_eq!(resolved.source.as_deref(), Some("inline"));
    }

    #[test]
    fn missing_env_is_reported_with_its_name() {
        let mut config = Config::default();
        config.github.token_env = Some("PR_TYPECHECK_TEST_UNSET_TOKEN".to_string());
        let resolved = resolve_github_token(&config);
        assert!(resolved.token.is_none());
        assert_eq!(
            resolved.source.as_deref(),
            Some("env:PR_TYPECHECK_TEST_UNSET_TOKEN (missing)")
        );
    }
}
