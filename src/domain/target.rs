//! 입력 URL/저장소 식별자를 GitHub PR 대상으로 해석하는 모듈.

use anyhow::{Context, Result, bail};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestTarget {
    pub host: String,
    pub owner: String,
    pub repo: String,
    pub number: u64,
}

impl PullRequestTarget {
    /// `https://<host>/<owner>/<repo>/pull/<number>` 형식을 해석한다.
    pub fn parse_url(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        let host = url
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("URL host is missing"))?
            .to_string();

        let segments: Vec<String> = url
            .path_segments()
            .map(|s| s.filter(|p| !p.is_empty()).map(ToString::to_string).collect())
            .unwrap_or_default();

        // /owner/repo/pull/<number>
        if segments.len() < 4 || segments[2] != "pull" {
            bail!("unsupported pull request URL: {input}");
        }
        let number = segments[3]
            .parse()
            .with_context(|| format!("invalid pull request number in {input}"))?;

        Ok(Self {
            host,
            owner: segments[0].clone(),
            repo: segments[1].clone(),
            number,
        })
    }

    /// `owner/repo` 형식(GITHUB_REPOSITORY)과 PR 번호로 대상을 구성한다.
    pub fn from_full_name(host: &str, full_name: &str, number: u64) -> Result<Self> {
        let Some((owner, repo)) = full_name.split_once('/') else {
            bail!("repository must be in owner/repo form: {full_name}");
        };
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            bail!("repository must be in owner/repo form: {full_name}");
        }

        Ok(Self {
            host: host.to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            number,
        })
    }

    pub fn display(&self) -> String {
        format!("{}/{}#{}", self.owner, self.repo, self.number)
    }
}
