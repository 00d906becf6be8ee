//! 대상 PR 해석 포트 구현 어댑터.
//!
//! `--pr` URL이 있으면 그것을, 없으면 GitHub Actions 이벤트 파일을 읽는다.

use std::env;
use std::fs;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use url::Url;

use crate::application::ports::TargetResolver;
use crate::domain::target::PullRequestTarget;

const DEFAULT_SERVER_URL: &str = "https://github.com";

/// URL 또는 Actions 환경(GITHUB_EVENT_PATH 등)으로 대상을 찾는 어댑터.
pub struct ActionsTargetResolver;

impl TargetResolver for ActionsTargetResolver {
    fn resolve(&self, pr_url: Option<&str>) -> Result<PullRequestTarget> {
        if let Some(url) = pr_url {
            return PullRequestTarget::parse_url(url);
        }

        let event_path = env::var("GITHUB_EVENT_PATH")
            .map_err(|_| anyhow!("no --pr given and GITHUB_EVENT_PATH is not set"))?;
        let raw = fs::read_to_string(&event_path)
            .with_context(|| format!("failed to read event payload at {event_path}"))?;
        let event: Value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse event payload at {event_path}"))?;

        let server_url =
            env::var("GITHUB_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        target_from_event(&event, &server_url, env::var("GITHUB_REPOSITORY").ok().as_deref())
    }
}

/// pull_request 이벤트 payload에서 대상을 구성한다.
pub fn target_from_event(
    event: &Value,
    server_url: &str,
    repository_fallback: Option<&str>,
) -> Result<PullRequestTarget> {
    let number = event
        .pointer("/pull_request/number")
        .and_then(Value::as_u64)
        .ok_or_else(|| anyhow!("event payload has no pull_request.number; is this a pull_request event?"))?;

    let full_name = event
        .pointer("/repository/full_name")
        .and_then(Value::as_str)
        .or(repository_fallback)
        .ok_or_else(|| anyhow!("event payload has no repository.full_name and GITHUB_REPOSITORY is not set"))?;

    let host = Url::parse(server_url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
        .ok_or_else(|| anyhow!("invalid GITHUB_SERVER_URL: {server_url}"))?;

    PullRequestTarget::from_full_name(&host, full_name, number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reads_pull_request_event() {
        let event = json!({
            "action": "synchronize",
            "pull_request": {"number": 7},
            "repository": {"full_name": "acme/proj"}
        });
        let target = target_from_event(&event, "https://github.com", None).unwrap();
        assert_eq!(target.display(), "acme/proj#7");
        assert_eq!(target.host, "github.com");
    }

    #[test]
    fn enterprise_host_and_repository_fallback() {
        let event = json!({"pull_request": {"number": 3}});
        let target =
            target_from_event(&event, "https://ghe.example.com", Some("team/svc")).unwrap();
        assert_eq!(target.host, "ghe.example.com");
        assert_eq!(target.owner, "team");
        assert_eq!(target.repo, "svc");
    }

    #[test]
    fn non_pull_request_event_is_rejected() {
        let event = json!({"ref": "refs/heads/main", "repository": {"full_name": "a/b"}});
        let err = target_from_event(&event, "https://github.com", None).unwrap_err();
        assert!(err.to_string().contains("pull_request.number"));
    }

    #[test]
    fn explicit_url_wins() {
        let target = ActionsTargetResolver
            .resolve(Some("https://github.com/acme/proj/pull/9"))
            .unwrap();
        assert_eq!(target.number, 9);
    }
}
